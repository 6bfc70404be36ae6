/// Numeric conversion helpers.
///
/// Converts `f64` values to the integer types the evaluator needs (matrix
/// indices and integer exponents) without silent data loss.
///
/// Every conversion either succeeds exactly or reports why it cannot.
pub mod num;
