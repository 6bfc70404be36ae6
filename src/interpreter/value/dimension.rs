use std::fmt;

/// Symbols of the seven SI base quantities, in exponent-vector order.
pub const BASE_SYMBOLS: [&str; 7] = ["m", "kg", "s", "A", "K", "mol", "cd"];

/// Physical dimension of a scalar: one integer exponent per SI base quantity
/// (length, mass, time, current, temperature, amount, luminous intensity).
///
/// Multiplying quantities adds exponent vectors and dividing subtracts them.
///
/// # Example
/// ```
/// use texcalc::interpreter::value::dimension::Dimension;
///
/// let speed = Dimension::LENGTH.checked_div(Dimension::TIME).unwrap();
/// assert_eq!(speed, Dimension::new([1, 0, -1, 0, 0, 0, 0]));
/// assert_eq!(speed.unit_suffix(), r"\,\mathrm{\frac{m}{s}}");
///
/// let huge = Dimension::new([i32::MAX, 0, 0, 0, 0, 0, 0]);
/// assert!(huge.checked_mul(Dimension::LENGTH).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension(pub [i32; 7]);

impl Dimension {
    /// A pure number.
    pub const NONE: Self = Self([0; 7]);
    /// Metre.
    pub const LENGTH: Self = Self([1, 0, 0, 0, 0, 0, 0]);
    /// Kilogram.
    pub const MASS: Self = Self([0, 1, 0, 0, 0, 0, 0]);
    /// Second.
    pub const TIME: Self = Self([0, 0, 1, 0, 0, 0, 0]);
    /// Ampere.
    pub const CURRENT: Self = Self([0, 0, 0, 1, 0, 0, 0]);
    /// Kelvin.
    pub const TEMPERATURE: Self = Self([0, 0, 0, 0, 1, 0, 0]);
    /// Mole.
    pub const AMOUNT: Self = Self([0, 0, 0, 0, 0, 1, 0]);
    /// Candela.
    pub const LUMINOSITY: Self = Self([0, 0, 0, 0, 0, 0, 1]);

    /// Creates a dimension from its exponent vector.
    #[must_use]
    pub const fn new(exponents: [i32; 7]) -> Self {
        Self(exponents)
    }

    /// Returns `true` if every exponent is zero.
    #[must_use]
    pub fn is_dimensionless(self) -> bool {
        self == Self::NONE
    }

    /// Dimension of a product: exponents add.
    ///
    /// Returns `None` if an exponent overflows.
    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o = o.checked_add(r)?;
        }
        Some(Self(out))
    }

    /// Dimension of a quotient: exponents subtract.
    ///
    /// Returns `None` if an exponent overflows.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o = o.checked_sub(r)?;
        }
        Some(Self(out))
    }

    /// Raises the dimension to an integer power.
    ///
    /// Returns `None` if an exponent overflows.
    #[must_use]
    pub fn powi(self, n: i32) -> Option<Self> {
        let mut out = [0; 7];
        for (o, e) in out.iter_mut().zip(self.0) {
            *o = e.checked_mul(n)?;
        }
        Some(Self(out))
    }

    /// Takes the square root of the dimension.
    ///
    /// Returns `None` unless every exponent is even.
    #[must_use]
    pub fn sqrt(self) -> Option<Self> {
        if self.0.iter().any(|e| e % 2 != 0) {
            return None;
        }
        Some(Self(self.0.map(|e| e / 2)))
    }

    /// Renders the dimension as a LaTeX unit suffix to append to a number.
    ///
    /// Positive exponents form the numerator and negative ones the
    /// denominator; a dimensionless value yields an empty string.
    #[must_use]
    pub fn unit_suffix(self) -> String {
        if self.is_dimensionless() {
            return String::new();
        }
        let numerator = units(self.0.iter().copied());
        let denominator = units(self.0.iter().map(|e| -e));

        if denominator.is_empty() {
            format!(r"\,\mathrm{{{numerator}}}")
        } else {
            let numerator = if numerator.is_empty() { "1".to_string() } else { numerator };
            format!(r"\,\mathrm{{\frac{{{numerator}}}{{{denominator}}}}}")
        }
    }
}

/// Joins the base symbols with positive exponents as `m^{2}\cdot s`.
fn units(exponents: impl Iterator<Item = i32>) -> String {
    BASE_SYMBOLS.iter()
                .zip(exponents)
                .filter(|(_, e)| *e > 0)
                .map(|(symbol, e)| {
                    if e > 1 {
                        format!("{symbol}^{{{e}}}")
                    } else {
                        (*symbol).to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(r"\cdot ")
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let parts: Vec<String> = BASE_SYMBOLS.iter()
                                             .zip(self.0)
                                             .filter(|(_, e)| *e != 0)
                                             .map(|(symbol, e)| {
                                                 if e == 1 {
                                                     (*symbol).to_string()
                                                 } else {
                                                     format!("{symbol}^{e}")
                                                 }
                                             })
                                             .collect();
        f.write_str(&parts.join(" "))
    }
}
