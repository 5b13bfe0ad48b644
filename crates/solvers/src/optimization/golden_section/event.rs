use strand_core::Observer;

use super::{Action, Point};

/// Events emitted by the golden section solver.
///
/// Each event provides the current evaluation (or failure) and the `other`
/// interior point. In golden section search, `other` is always the point the
/// solver would keep if it had to choose now. Observers can compare against
/// `other` to decide whether to stop early or steer the search with
/// [`Action::AssumeWorse`].
#[derive(Debug)]
pub enum Event<'a, E> {
    /// Successful evaluation of an interior point.
    Evaluated {
        /// The evaluated point (x and objective).
        point: Point,

        /// The other interior point.
        other: Point,
    },

    /// The function returned an error.
    FunctionFailed {
        /// The x value where evaluation failed.
        x: f64,

        /// The other interior point.
        other: Point,

        /// The function error.
        error: &'a E,
    },
}

impl<E> Event<'_, E> {
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::FunctionFailed { x, .. } => *x,
        }
    }

    /// Returns the other interior point.
    #[must_use]
    pub fn other(&self) -> Point {
        match self {
            Self::Evaluated { other, .. } | Self::FunctionFailed { other, .. } => *other,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        x: f64,
        other: Point,
        error: &E,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, E>, Action>,
    {
        observer.observe(&Event::FunctionFailed { x, other, error })
    }
}
