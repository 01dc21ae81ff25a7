use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable domain errors raised by the calculator kernel.
///
/// Kernel functions never print or abort. They hand one of these back and
/// the caller decides how to report it; the demo driver prints the
/// `Display` text and carries on with [`KernelError::SENTINEL`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelError {
    /// `divide` was called with a zero divisor.
    #[error("Error: Division by zero!")]
    DivisionByZero,

    /// `sqrt_approx` was called with a negative number.
    #[error("Error: Cannot calculate square root of negative number!")]
    NegativeSqrtInput,
}

impl KernelError {
    /// Value substituted for a failed computation under report-and-continue.
    pub const SENTINEL: f64 = 0.0;
}

/// Errors raised while loading or validating [`Config`](crate::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid Newton precision {0}: must be finite and positive")]
    InvalidPrecision(f64),

    #[error("Invalid Newton iteration limit: must be at least 1")]
    ZeroIterations,
}
