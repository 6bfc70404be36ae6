use std::f64::consts;

use crate::interpreter::value::{core::Value, dimension::Dimension};

const FORCE: Dimension = Dimension::new([1, 1, -2, 0, 0, 0, 0]);
const ENERGY: Dimension = Dimension::new([2, 1, -2, 0, 0, 0, 0]);
const POWER: Dimension = Dimension::new([2, 1, -3, 0, 0, 0, 0]);
const FREQUENCY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0]);
const PRESSURE: Dimension = Dimension::new([-1, 1, -2, 0, 0, 0, 0]);

/// Control words usable as zero-argument values, with their magnitude in SI
/// base units.
static CONSTANTS: &[(&str, f64, Dimension)] = &[("pi", consts::PI, Dimension::NONE),
                                                ("e", consts::E, Dimension::NONE),
                                                ("meter", 1.0, Dimension::LENGTH),
                                                ("kilogram", 1.0, Dimension::MASS),
                                                ("gram", 1e-3, Dimension::MASS),
                                                ("second", 1.0, Dimension::TIME),
                                                ("minute", 60.0, Dimension::TIME),
                                                ("hour", 3600.0, Dimension::TIME),
                                                ("ampere", 1.0, Dimension::CURRENT),
                                                ("kelvin", 1.0, Dimension::TEMPERATURE),
                                                ("mole", 1.0, Dimension::AMOUNT),
                                                ("candela", 1.0, Dimension::LUMINOSITY),
                                                ("newton", 1.0, FORCE),
                                                ("joule", 1.0, ENERGY),
                                                ("watt", 1.0, POWER),
                                                ("hertz", 1.0, FREQUENCY),
                                                ("pascal", 1.0, PRESSURE)];

/// Looks up a constant by its control word without the backslash.
///
/// # Example
/// ```
/// use texcalc::interpreter::{
///     evaluator::function::constant::constant,
///     value::{core::Value, dimension::Dimension},
/// };
///
/// assert_eq!(constant("minute"), Some(Value::Scalar(60.0, Dimension::TIME)));
/// assert_eq!(constant("sin"), None);
/// ```
#[must_use]
pub fn constant(word: &str) -> Option<Value> {
    CONSTANTS.iter()
             .find(|(name, ..)| *name == word)
             .map(|&(_, v, dim)| Value::Scalar(v, dim))
}
