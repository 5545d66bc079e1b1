/// Extends slices of floats with range queries
pub(crate) trait SliceExt {
    /// Smallest finite value, `None` if there are none
    fn finite_min(&self) -> Option<f64>;

    /// Largest finite value, `None` if there are none
    fn finite_max(&self) -> Option<f64>;
}

// `total_cmp` always gives an ordering, NAN and INFINITY are filtered first
impl SliceExt for [f64] {
    fn finite_min(&self) -> Option<f64> {
        self.iter()
            .filter(|v| v.is_finite())
            .min_by(|a, b| a.total_cmp(b))
            .copied()
    }

    fn finite_max(&self) -> Option<f64> {
        self.iter()
            .filter(|v| v.is_finite())
            .max_by(|a, b| a.total_cmp(b))
            .copied()
    }
}
