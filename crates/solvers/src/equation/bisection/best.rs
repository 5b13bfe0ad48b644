use crate::equation::Evaluation;

use super::{Error, Solution, Status};

/// Tracks the evaluation with the smallest residual magnitude.
pub(super) struct Best {
    eval: Option<Evaluation>,
}

impl Best {
    pub(super) fn empty() -> Self {
        Self { eval: None }
    }

    /// Keeps `eval` if its residual magnitude improves on the current best.
    ///
    /// NaN residuals are never kept.
    pub(super) fn update(&mut self, eval: Evaluation) {
        if eval.residual.is_nan() {
            return;
        }
        if let Some(best) = self.eval.as_ref()
            && eval.residual.abs() >= best.residual.abs()
        {
            return;
        }
        self.eval = Some(eval);
    }

    /// Returns true if the best residual meets the tolerance.
    pub(super) fn is_residual_converged(&self, residual_tol: f64) -> bool {
        self.eval
            .as_ref()
            .is_some_and(|eval| eval.residual.abs() <= residual_tol)
    }

    /// Finalizes the solver using the best available evaluation.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuccessfulEvaluation` if nothing was recorded.
    pub(super) fn finish<E>(self, status: Status, iters: usize) -> Result<Solution, Error<E>> {
        let eval = self.eval.ok_or(Error::NoSuccessfulEvaluation)?;
        Ok(Solution::from_eval(eval, status, iters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn eval(x: f64, residual: f64) -> Evaluation {
        Evaluation {
            x,
            value: residual,
            residual,
        }
    }

    #[test]
    fn update_keeps_smallest_residual() {
        let mut best = Best::empty();
        best.update(eval(1.0, 2.0));
        best.update(eval(2.0, -1.5));
        best.update(eval(3.0, 1.0));
        best.update(eval(4.0, -1.0));

        let solution = best
            .finish::<Infallible>(Status::StoppedByObserver, 0)
            .expect("best eval");

        assert_relative_eq!(solution.x, 3.0);
        assert_relative_eq!(solution.residual, 1.0);
    }

    #[test]
    fn update_ignores_nan_residual() {
        let mut best = Best::empty();
        best.update(eval(1.0, 0.5));
        best.update(eval(2.0, f64::NAN));

        let solution = best
            .finish::<Infallible>(Status::MaxIters, 3)
            .expect("best eval");
        assert_relative_eq!(solution.x, 1.0);
        assert_eq!(solution.iters, 3);
    }

    #[test]
    fn residual_converged_checks_tolerance() {
        let mut best = Best::empty();
        assert!(!best.is_residual_converged(1e-3));

        best.update(eval(1.0, 1e-2));
        assert!(!best.is_residual_converged(1e-3));
        assert!(best.is_residual_converged(1e-1));
    }

    #[test]
    fn finish_errors_without_eval() {
        let best = Best::empty();
        let result = best.finish::<Infallible>(Status::StoppedByObserver, 0);
        assert!(matches!(result, Err(Error::NoSuccessfulEvaluation)));
    }
}
