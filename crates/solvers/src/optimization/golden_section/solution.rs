/// Indicates how the golden section search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// The middle point of the bracket was worse than an end point.
    ///
    /// No search is performed and the best of the three points is reported.
    NotBracketed,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the optimum x.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the search converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
