//! Square-root approximation by Newton's method.
//!
//! Starting from `x₀ = n / 2`, each step computes
//! `x_{k+1} = (x_k + n / x_k) / 2`. Iteration stops as soon as two
//! successive guesses differ by less than the configured precision, or
//! after the iteration limit, whichever comes first.
//!
//! For `n >= 1` every guess after the first lies at or above `√n`, so the
//! sequence approaches the root from above.

use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// Tuning for the Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonParams {
    /// Convergence threshold on `|x_{k+1} - x_k|`.
    pub precision: f64,
    /// Maximum number of Newton steps.
    pub max_iterations: u32,
}

impl NewtonParams {
    pub const DEFAULT: Self = Self {
        precision: 0.001,
        max_iterations: 20,
    };
}

impl Default for NewtonParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Approximate `√number` with the default parameters (precision `0.001`,
/// at most 20 iterations).
///
/// Returns [`KernelError::NegativeSqrtInput`] for negative input and
/// exactly `0.0` for zero.
///
/// # Example
///
/// ```
/// use reckon::{sqrt_approx, KernelError};
///
/// let r = sqrt_approx(16).unwrap();
/// assert!((r - 4.0).abs() < 1e-3);
///
/// assert_eq!(sqrt_approx(0), Ok(0.0));
/// assert_eq!(sqrt_approx(-4), Err(KernelError::NegativeSqrtInput));
/// ```
#[inline]
pub fn sqrt_approx(number: i32) -> Result<f64, KernelError> {
    sqrt_approx_with(number, &NewtonParams::DEFAULT)
}

/// Approximate `√number` with explicit Newton parameters.
pub fn sqrt_approx_with(number: i32, params: &NewtonParams) -> Result<f64, KernelError> {
    if number < 0 {
        return Err(KernelError::NegativeSqrtInput);
    }
    if number == 0 {
        return Ok(0.0);
    }

    let n = f64::from(number);
    let mut guess = n / 2.0;

    for iteration in 0..params.max_iterations {
        let next = (guess + n / guess) / 2.0;
        if (next - guess).abs() < params.precision {
            tracing::trace!(number, iteration, root = next, "newton converged");
            return Ok(next);
        }
        guess = next;
    }

    tracing::trace!(
        number,
        iterations = params.max_iterations,
        root = guess,
        "newton hit iteration limit"
    );
    Ok(guess)
}
