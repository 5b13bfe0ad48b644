use crate::equation::Evaluation;

use super::Bracket;

/// Event emitted by the bisection solver for each evaluation.
///
/// `E` is the error type of the scalar function being solved.
pub enum Event<'a, E> {
    /// Left bracket endpoint evaluation.
    Left {
        /// The x value that was evaluated.
        x: f64,
        /// The result of the evaluation.
        result: &'a Result<Evaluation, E>,
    },

    /// Right bracket endpoint evaluation.
    Right {
        /// The x value that was evaluated.
        x: f64,
        /// The result of the evaluation.
        result: &'a Result<Evaluation, E>,
    },

    /// Midpoint evaluation within a validated bracket.
    Midpoint {
        /// The x value that was evaluated.
        x: f64,
        /// Current search bracket.
        bracket: &'a Bracket,
        /// The result of the evaluation.
        result: &'a Result<Evaluation, E>,
    },
}

impl<'a, E> Event<'a, E> {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Left { x, .. } | Event::Right { x, .. } | Event::Midpoint { x, .. } => *x,
        }
    }

    /// Returns the evaluation result.
    #[must_use]
    pub fn result(&self) -> &'a Result<Evaluation, E> {
        match self {
            Event::Left { result, .. }
            | Event::Right { result, .. }
            | Event::Midpoint { result, .. } => result,
        }
    }
}
