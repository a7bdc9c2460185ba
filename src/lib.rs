//! Trainer Calc - business-model calculator for personal-training studios
//!
//! This library provides:
//! - Per-offering revenue, hours and hourly rate (1:1, classes, pods, online)
//! - Target-capacity aggregates with free-host pod pricing
//! - Acquisition funnel (CAC) and retention (LTV) metrics
//! - A 24-month client growth and profit projection with time-to-goal
//!
//! All calculations are pure functions of a [`BusinessParams`] value.

pub mod error;
pub mod numeric;
pub mod offering;
pub mod params;
pub mod aggregate;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use offering::{Offering, OfferingKind, OfferingStats};
pub use params::{AcquisitionFunnel, BusinessParams, Retention};
pub use aggregate::{aggregate, AggregateTargetState};
pub use projection::{project, GrowthProjector, ProjectionConfig, ProjectionPoint, ProjectionResult};
pub use scenario::{CalculatorReport, ScenarioRunner};
