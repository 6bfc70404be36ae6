use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, scanner::Coordinate},
};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Converts a number to a matrix index, truncating toward zero.
///
/// ## Errors
/// - `NegativeIndex` if the truncated value is below zero.
/// - `Overflow` if the value is not finite or too large to be an index.
///
/// ## Parameters
/// - `value`: The number to convert.
/// - `coord`: Source location for error reporting.
///
/// ## Returns
/// - `Ok(usize)`: The truncated index.
///
/// ## Example
/// ```
/// use texcalc::{
///     error::EvalError,
///     interpreter::scanner::Coordinate,
///     util::num::f64_to_index,
/// };
///
/// let at = Coordinate::new(3, 7);
/// assert_eq!(f64_to_index(2.9, at).unwrap(), 2);
/// assert_eq!(f64_to_index(-0.5, at).unwrap(), 0);
/// assert!(matches!(f64_to_index(-1.0, at), Err(EvalError::NegativeIndex { .. })));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_index(value: f64, coord: Coordinate) -> EvalResult<usize> {
    if !value.is_finite() || value.trunc() > MAX_SAFE_INT {
        return Err(EvalError::Overflow { coord });
    }
    let value = value.trunc();
    if value < 0.0 {
        return Err(EvalError::NegativeIndex { coord });
    }
    Ok(value as usize)
}

/// Converts an `f64` holding an integral value to `i32`.
///
/// ## Returns
/// - `Some(i32)`: If `value` has no fractional part and fits.
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use texcalc::util::num::f64_to_i32_exact;
///
/// assert_eq!(f64_to_i32_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i32_exact(0.5), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_exact(value: f64) -> Option<i32> {
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}
