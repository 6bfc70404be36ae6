use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        scanner::Coordinate,
        value::{core::Value, dimension::Dimension},
    },
};

/// Returns the single argument of a one-argument builtin.
fn single<'a>(word: &str, args: &'a [Value], coord: Coordinate) -> EvalResult<&'a Value> {
    match args {
        [arg] => Ok(arg),
        _ => Err(arity_error(word, 1, args.len(), coord)),
    }
}

/// Returns both scalar arguments of a two-argument builtin, after checking
/// that they share a dimension.
fn pair(word: &str, args: &[Value], coord: Coordinate) -> EvalResult<(f64, f64, Dimension)> {
    let [a, b] = args else {
        return Err(arity_error(word, 2, args.len(), coord));
    };
    let (a, da) = a.as_scalar(coord)?;
    let (b, db) = b.as_scalar(coord)?;
    if da != db {
        return Err(EvalError::DimensionMismatch { left: da,
                                                  right: db,
                                                  coord });
    }
    Ok((a, b, da))
}

fn arity_error(word: &str, expected: usize, found: usize, coord: Coordinate) -> EvalError {
    EvalError::ArgumentCountMismatch { name: format!("\\{word}"),
                                       expected,
                                       found,
                                       coord }
}

/// Rejects a non-finite result computed from finite inputs.
fn finite(word: &str, inputs_finite: bool, result: f64, coord: Coordinate) -> EvalResult<f64> {
    if inputs_finite && !result.is_finite() {
        return Err(EvalError::Domain { name: format!("\\{word}"),
                                       coord });
    }
    Ok(result)
}

/// Defines a one-argument builtin that only accepts pure numbers.
///
/// The generated function takes exactly one dimensionless scalar and
/// returns a dimensionless scalar. A dimensioned argument produces a
/// `DimensionedArgument` error.
///
/// # Example
/// ```
/// use texcalc::interpreter::{
///     evaluator::function::builtin::sin,
///     scanner::Coordinate,
///     value::{core::Value, dimension::Dimension},
/// };
///
/// let x = Value::number(std::f64::consts::PI / 2.0);
/// assert_eq!(sin(&[x], Coordinate::default()).unwrap(), Value::number(1.0));
///
/// let angle = Value::Scalar(1.0, Dimension::LENGTH);
/// assert!(sin(&[angle], Coordinate::default()).is_err());
/// ```
macro_rules! dimensionless_builtin {
    ($fname:ident, $word:literal, $f:expr) => {
        pub fn $fname(args: &[Value], coord: Coordinate) -> EvalResult<Value> {
            let (x, dim) = single($word, args, coord)?.as_scalar(coord)?;
            if !dim.is_dimensionless() {
                return Err(EvalError::DimensionedArgument { name: concat!("\\", $word).to_string(),
                                                            coord });
            }
            let f: fn(f64) -> f64 = $f;
            finite($word, x.is_finite(), f(x), coord).map(Value::number)
        }
    };
}

/// Defines a one-argument builtin whose result keeps the argument's
/// dimension, like `\abs{-3\meter}`.
macro_rules! propagating_builtin {
    ($fname:ident, $word:literal, $f:expr) => {
        pub fn $fname(args: &[Value], coord: Coordinate) -> EvalResult<Value> {
            let (x, dim) = single($word, args, coord)?.as_scalar(coord)?;
            let f: fn(f64) -> f64 = $f;
            Ok(Value::Scalar(finite($word, x.is_finite(), f(x), coord)?, dim))
        }
    };
}

/// Defines a two-argument builtin over scalars of equal dimension.
///
/// With `propagate` the result carries the common dimension; with `strip`
/// it is a pure number.
macro_rules! binary_builtin {
    ($fname:ident, $word:literal, $f:expr, propagate) => {
        pub fn $fname(args: &[Value], coord: Coordinate) -> EvalResult<Value> {
            let (a, b, dim) = pair($word, args, coord)?;
            let f: fn(f64, f64) -> f64 = $f;
            Ok(Value::Scalar(finite($word, a.is_finite() && b.is_finite(), f(a, b), coord)?, dim))
        }
    };
    ($fname:ident, $word:literal, $f:expr, strip) => {
        pub fn $fname(args: &[Value], coord: Coordinate) -> EvalResult<Value> {
            let (a, b, _) = pair($word, args, coord)?;
            let f: fn(f64, f64) -> f64 = $f;
            finite($word, a.is_finite() && b.is_finite(), f(a, b), coord).map(Value::number)
        }
    };
}

dimensionless_builtin!(sin, "sin", f64::sin);
dimensionless_builtin!(cos, "cos", f64::cos);
dimensionless_builtin!(tan, "tan", f64::tan);
dimensionless_builtin!(arcsin, "arcsin", f64::asin);
dimensionless_builtin!(arccos, "arccos", f64::acos);
dimensionless_builtin!(arctan, "arctan", f64::atan);
dimensionless_builtin!(sinh, "sinh", f64::sinh);
dimensionless_builtin!(cosh, "cosh", f64::cosh);
dimensionless_builtin!(tanh, "tanh", f64::tanh);
dimensionless_builtin!(exp, "exp", f64::exp);
dimensionless_builtin!(ln, "ln", f64::ln);
dimensionless_builtin!(lg, "lg", f64::log10);

propagating_builtin!(abs, "abs", f64::abs);
propagating_builtin!(floor, "floor", f64::floor);
propagating_builtin!(ceil, "ceil", f64::ceil);
propagating_builtin!(round, "round", f64::round);

binary_builtin!(max, "max", f64::max, propagate);
binary_builtin!(min, "min", f64::min, propagate);
binary_builtin!(hypot, "hypot", f64::hypot, propagate);
binary_builtin!(modulo, "mod", |a, b| a % b, propagate);
binary_builtin!(atan, "atan", f64::atan2, strip);

/// Returns the sign of a scalar as a pure number: `-1`, `0` or `1`.
///
/// The argument may carry any dimension.
///
/// # Example
/// ```
/// use texcalc::interpreter::{
///     evaluator::function::builtin::sign,
///     scanner::Coordinate,
///     value::{core::Value, dimension::Dimension},
/// };
///
/// let v = sign(&[Value::Scalar(-4.0, Dimension::TIME)], Coordinate::default()).unwrap();
/// assert_eq!(v, Value::number(-1.0));
/// ```
pub fn sign(args: &[Value], coord: Coordinate) -> EvalResult<Value> {
    let (x, _) = single("sign", args, coord)?.as_scalar(coord)?;
    let s = if x == 0.0 { 0.0 } else { x.signum() };
    Ok(Value::number(s))
}

/// Returns the magnitude of a scalar in SI base units, dropping its
/// dimension.
pub fn val(args: &[Value], coord: Coordinate) -> EvalResult<Value> {
    let (x, _) = single("val", args, coord)?.as_scalar(coord)?;
    Ok(Value::number(x))
}

/// Square root. Every exponent of the argument's dimension must be even and
/// is halved.
///
/// # Errors
/// - `FractionalPowerOfDimensioned` for a dimension like `\meter`.
/// - `Domain` for negative arguments.
///
/// # Example
/// ```
/// use texcalc::interpreter::{
///     evaluator::function::builtin::sqrt,
///     scanner::Coordinate,
///     value::{core::Value, dimension::Dimension},
/// };
///
/// let area = Value::Scalar(16.0, Dimension::new([2, 0, 0, 0, 0, 0, 0]));
/// let side = sqrt(&[area], Coordinate::default()).unwrap();
/// assert_eq!(side, Value::Scalar(4.0, Dimension::LENGTH));
/// ```
pub fn sqrt(args: &[Value], coord: Coordinate) -> EvalResult<Value> {
    let (x, dim) = single("sqrt", args, coord)?.as_scalar(coord)?;
    let dim = dim.sqrt().ok_or(EvalError::FractionalPowerOfDimensioned { coord })?;
    Ok(Value::Scalar(finite("sqrt", x.is_finite(), x.sqrt(), coord)?, dim))
}
