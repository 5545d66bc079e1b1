//! Common formatting for numbers in reports and summaries
//!
//! These are left public for convenience.
//!
//! Benchmark reports are read by people and occasionally scraped by scripts,
//! so the scientific formats here reproduce the printf `%E` conventions
//! exactly.

// standard library
use std::fmt::{Display, LowerExp, UpperExp};

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait NumFormat {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition.
    ///
    /// ```rust
    /// # use phasebench_format::NumFormat;
    /// let number = -1.0;
    /// assert_eq!(number.sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((1.0).sci(5, 2), "1.00000e+00".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;

    /// printf-style `%.NE` formatting
    ///
    /// Uppercase `E` with a signed exponent of at least two digits.
    ///
    /// ```rust
    /// # use phasebench_format::NumFormat;
    /// assert_eq!((0.01).sci_upper(2), "1.00E-02".to_string());
    /// assert_eq!((1e-12).sci_upper(4), "1.0000E-12".to_string());
    /// assert_eq!((0.0).sci_upper(4), "0.0000E+00".to_string());
    /// ```
    fn sci_upper(&self, precision: usize) -> String;

    /// printf-style `% .NE` formatting
    ///
    /// Same as [NumFormat::sci_upper()] but with a blank in place of the sign
    /// for non-negative values, so columns of mixed signs line up.
    ///
    /// ```rust
    /// # use phasebench_format::NumFormat;
    /// assert_eq!((100.0).sci_aligned(4), " 1.0000E+02".to_string());
    /// assert_eq!((-99.0).sci_aligned(4), "-9.9000E+01".to_string());
    /// assert_eq!(f64::NAN.sci_aligned(4), " NAN".to_string());
    /// ```
    fn sci_aligned(&self, precision: usize) -> String;
}

impl<T: LowerExp + UpperExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        // Safe to `unwrap` as `num` is guaranteed to contain `'e'`
        let exp = num.split_off(num.find('e').unwrap());
        // Make sure the exponent is signed
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        // Pad the exponent with zeros if needed and put it back on the number
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }

    fn sci_upper(&self, precision: usize) -> String {
        let mut num = f!("{:.precision$E}", &self, precision = precision);

        // non-finite values have no exponent, printf shouts these
        let Some(split) = num.find('E') else {
            return num.to_uppercase();
        };

        let exp = num.split_off(split);
        let (sign, exp) = match exp.strip_prefix("E-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        num.push_str(&f!("E{}{:0>2}", sign, exp));
        num
    }

    fn sci_aligned(&self, precision: usize) -> String {
        let num = self.sci_upper(precision);
        match num.starts_with('-') {
            true => num,
            false => f!(" {num}"),
        }
    }
}

/// Extends Option for easy display formatting
pub trait OptionFormat {
    /// Better option outputs
    ///
    /// Generic over anything that implements `Display`, this will either be the
    /// value contained within `Some()` or "none" for the `None` variant.
    ///
    /// ```rust
    /// # use phasebench_format::OptionFormat;
    /// let x: Option<f64> = Some(2.5);
    /// assert_eq!(x.display(), "2.5");
    ///
    /// let x: Option<f64> = None;
    /// assert_eq!(x.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionFormat for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_exponent_is_padded() {
        assert_eq!((1.5e123).sci_upper(1), "1.5E+123");
        assert_eq!((2.0e-7).sci_upper(3), "2.000E-07");
        assert_eq!((99.0).sci_upper(4), "9.9000E+01");
    }

    #[test]
    fn aligned_keeps_negative_sign() {
        assert_eq!((-0.5).sci_aligned(2), "-5.00E-01");
        assert_eq!((0.5).sci_aligned(2), " 5.00E-01");
        assert_eq!(f64::NEG_INFINITY.sci_aligned(2), "-INF");
        assert_eq!(f64::INFINITY.sci_aligned(2), " INF");
    }
}
