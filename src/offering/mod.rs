//! Offering definitions and per-offering statistics

mod data;
mod stats;

pub use data::{Offering, OfferingKind};
pub use stats::{OfferingStats, hourly_rate};
