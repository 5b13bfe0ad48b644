/// Read-only view of an empirical distribution.
///
/// An empirical distribution is defined by a finite sample. Its CDF is a step
/// function that jumps by `1 / n` at each sample point.
pub trait EmpiricalCdf {
    /// Returns the sample, sorted in ascending order.
    fn sample(&self) -> &[f64];

    /// Returns the smallest sample value.
    fn min_coordinate(&self) -> f64;

    /// Returns the largest sample value.
    fn max_coordinate(&self) -> f64;

    /// Returns the cumulative distribution function at `x`.
    fn cdf(&self, x: f64) -> f64;
}
