// external crates
use serde::Serialize;

/// Absolute and relative tolerance for approximate equality
///
/// Two values are close if `|value - reference| <= atol + rtol * |reference|`.
/// Note that this is not symmetric, the relative part scales with the second
/// argument only.
///
/// ```rust
/// # use phasebench_validate::Tolerance;
/// let tol = Tolerance::relative(0.02);
/// assert!(tol.is_close(100.0, 99.0));
/// assert!(!Tolerance::relative(0.005).is_close(100.0, 99.0));
///
/// // a zero reference leaves only the absolute part
/// assert!(!tol.is_close(1e-9, 0.0));
/// assert!(Tolerance::new(1e-6, 0.02).is_close(1e-9, 0.0));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Tolerance {
    /// Absolute tolerance
    pub atol: f64,
    /// Relative tolerance
    pub rtol: f64,
}

impl Tolerance {
    /// Tolerance from both parts
    pub fn new(atol: f64, rtol: f64) -> Self {
        Self { atol, rtol }
    }

    /// Purely absolute tolerance
    pub fn absolute(atol: f64) -> Self {
        Self { atol, rtol: 0.0 }
    }

    /// Purely relative tolerance
    pub fn relative(rtol: f64) -> Self {
        Self { atol: 0.0, rtol }
    }

    /// Exact equality
    pub fn exact() -> Self {
        Self::default()
    }

    /// Approximate equality of `value` to `reference`
    ///
    /// Identical values are always close, including infinities of the same
    /// sign. Otherwise a non-finite value is never close to anything.
    pub fn is_close(&self, value: f64, reference: f64) -> bool {
        if value == reference {
            return true;
        }
        if !value.is_finite() || !reference.is_finite() {
            return false;
        }
        (value - reference).abs() <= self.atol + self.rtol * reference.abs()
    }
}
