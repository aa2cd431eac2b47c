#[cfg(feature = "certora")]
mod certora;
mod error;
mod numeric;

pub use error::{Error, Result};
pub use numeric::Numeric;

/// Adds two numbers together.
/// Returns the sum of a and b using the operand type's `+`, so integer
/// overflow behaves as standard Rust arithmetic.
pub fn add<T: Numeric>(a: T, b: T) -> T {
    a + b
}

/// Divides `dividend` by `divisor` using floating-point division.
///
/// # Errors
/// Returns [`Error::DivisionByZero`] when `divisor` is zero (`-0.0` included).
pub fn divide<T: Numeric>(dividend: T, divisor: T) -> Result<f64> {
    if divisor.is_zero() {
        tracing::debug!(dividend = dividend.to_f64(), "rejected zero divisor");
        return Err(Error::DivisionByZero);
    }
    Ok(dividend.to_f64() / divisor.to_f64())
}
