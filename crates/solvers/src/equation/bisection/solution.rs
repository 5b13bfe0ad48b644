use crate::equation::Evaluation;

/// How the bisection solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// The residual signs at the endpoints agree, so the bracket holds no root.
    NotBracketed,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Reported root estimate.
    ///
    /// For `Converged` this is the last midpoint, which locates a root, a
    /// jump discontinuity, or a singularity. For every other status it is the
    /// evaluated point with the smallest residual.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn from_eval(eval: Evaluation, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            value: eval.value,
            residual: eval.residual,
            iters,
        }
    }
}
