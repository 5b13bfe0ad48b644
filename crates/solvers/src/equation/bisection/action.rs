use super::bracket::Sign;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best point found so far.
    StopEarly,

    /// Treat the evaluation as having the given residual sign.
    ///
    /// This is mainly used to recover from a failed evaluation, for example
    /// when the function cannot be evaluated on one side of a discontinuity.
    /// An evaluation with an assumed sign never becomes the best point.
    AssumeResidualSign(Sign),
}

impl Action {
    /// Assumes a positive residual sign.
    #[must_use]
    pub fn assume_positive() -> Self {
        Self::AssumeResidualSign(Sign::Positive)
    }

    /// Assumes a negative residual sign.
    #[must_use]
    pub fn assume_negative() -> Self {
        Self::AssumeResidualSign(Sign::Negative)
    }
}
