// Typed errors for line parsing and chart layout

use thiserror::Error;

/// Why a qualifying line was rejected. Reported alongside the parsed series, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineFault {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid time of day {value:?}: {reason}")]
    InvalidTime { value: String, reason: String },

    #[error("invalid number in field {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown benchmark name {0:?}")]
    UnknownComponent(String),
}

/// A configuration or device identifier the chart layout has no slot for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("unknown benchmark configuration {0:?}")]
    UnknownBenchmark(String),

    #[error("unknown device {0:?}")]
    UnknownDevice(String),
}
