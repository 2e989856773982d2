//! Error taxonomy (§7). Only the conditions that are genuinely fatal to a calculation at the
//! point they're detected are `EngineError` variants; everything recoverable is a [`Warning`]
//! attached to a result instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("calculator error: {0}")]
    CalculatorError(String),

    #[error("aggregation error: {0}")]
    AggregationError(String),
}

/// A non-fatal condition recorded on a result rather than raised.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Geometry fell outside tabulated coverage; nearest-endpoint saturation was applied.
    OutOfRange(String),
    /// A per-band formula produced NaN/∞; the offending band was zeroed.
    NumericGuard(String),
}

impl Warning {
    pub fn message(&self) -> &str {
        match self {
            Warning::OutOfRange(m) => m,
            Warning::NumericGuard(m) => m,
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
