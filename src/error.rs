//! Error types for the calculator boundary

use thiserror::Error;

/// Failures surfaced before or around a calculation.
///
/// The calculation itself never fails: zero denominators fall back to 0.
/// These errors only come from malformed input or I/O.
#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("parameter `{field}` is not a finite number ({value})")]
    NonFinite { field: String, value: f64 },
    #[error("unknown preset `{0}` (expected `generic` or `host-pods`)")]
    UnknownPreset(String),
    #[error("invalid ad spend sweep: {0}")]
    InvalidSweep(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
