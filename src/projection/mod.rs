//! Growth projection from an empty client book

mod state;
mod engine;
mod points;
mod goal;
mod export;

pub use state::GrowthState;
pub use engine::{GrowthProjector, ProjectionConfig, DEFAULT_HORIZON_MONTHS};
pub use points::{ProjectionPoint, ProjectionResult, ProjectionSummary, MILESTONE_MONTHS};
pub use goal::GoalOutcome;
pub use export::{write_projection_csv, write_projection_csv_file};

use crate::aggregate::AggregateTargetState;
use crate::params::{AcquisitionFunnel, Retention};

/// Project with display rounding over `horizon_months`
pub fn project(
    aggregate: &AggregateTargetState,
    funnel: &AcquisitionFunnel,
    retention: &Retention,
    income_goal: f64,
    horizon_months: u32,
) -> ProjectionResult {
    let config = ProjectionConfig {
        horizon_months,
        ..Default::default()
    };
    GrowthProjector::new(config).project(aggregate, funnel, retention, income_goal)
}
