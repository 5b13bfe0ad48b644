use strand_core::{Observer, ScalarFn};

use crate::optimization::Goal;

use super::{
    Action, Error, Event, Point, Solution, Status, bracket::GoldenBracket, state::State,
};

pub(super) enum InitResult {
    Continue(State),
    StopEarly(Solution),
}

/// Initializes the state by evaluating both interior points.
///
/// `seed` is the already evaluated middle point of the bracketing triple and
/// starts out as the best point.
///
/// Only the second point (or failure) triggers an observer event, since the
/// first has no `other` yet. If both evaluations fail the observer is
/// notified and the first error is returned.
pub(super) fn init<F, Obs>(
    f: &F,
    bracket: &GoldenBracket,
    seed: Point,
    goal: Goal,
    observer: &mut Obs,
) -> Result<InitResult, Error<F::Error>>
where
    F: ScalarFn,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    let left = f.eval(bracket.inner_left);
    let right = f.eval(bracket.inner_right);

    match (left, right) {
        (Err(left_err), Err(_)) => {
            Event::emit_failure(bracket.inner_left, seed, &left_err, observer);
            Err(Error::Function(left_err))
        }

        (Ok(left), Ok(right)) => {
            let left = Point::new(bracket.inner_left, left);
            let right = Point::new(bracket.inner_right, right);
            let event = Event::Evaluated {
                point: right,
                other: left,
            };
            let action = observer.observe(&event);

            let assumed_right = match action {
                Some(Action::AssumeWorse) => Point::new(right.x, goal.worst()),
                _ => right,
            };
            let mut state = State::new(*bracket, left, assumed_right, seed, goal);
            state.maybe_update_best(left);

            match action {
                Some(Action::StopEarly) => Ok(InitResult::StopEarly(
                    state.into_solution(Status::StoppedByObserver, 0),
                )),
                Some(Action::AssumeWorse) => Ok(InitResult::Continue(state)),
                None => {
                    state.maybe_update_best(right);
                    Ok(InitResult::Continue(state))
                }
            }
        }

        (Ok(value), Err(err)) => {
            let ok = Point::new(bracket.inner_left, value);
            recover(bracket, seed, goal, ok, bracket.inner_right, err, observer)
        }

        (Err(err), Ok(value)) => {
            let ok = Point::new(bracket.inner_right, value);
            recover(bracket, seed, goal, ok, bracket.inner_left, err, observer)
        }
    }
}

/// Handles a single failed interior evaluation.
fn recover<E, Obs>(
    bracket: &GoldenBracket,
    seed: Point,
    goal: Goal,
    ok: Point,
    failed_x: f64,
    err: E,
    observer: &mut Obs,
) -> Result<InitResult, Error<E>>
where
    Obs: for<'a> Observer<Event<'a, E>, Action>,
{
    let action = Event::emit_failure(failed_x, ok, &err, observer);

    let worse = Point::new(failed_x, goal.worst());
    let (left, right) = if ok.x < worse.x {
        (ok, worse)
    } else {
        (worse, ok)
    };
    let mut state = State::new(*bracket, left, right, seed, goal);
    state.maybe_update_best(ok);

    match action {
        Some(Action::StopEarly) => Ok(InitResult::StopEarly(
            state.into_solution(Status::StoppedByObserver, 0),
        )),
        Some(Action::AssumeWorse) => Ok(InitResult::Continue(state)),
        None => Err(Error::Function(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    use crate::optimization::golden_section::bracket::Triple;

    fn bracket() -> GoldenBracket {
        GoldenBracket::new(&Triple::new([0.0, 5.0, 10.0]).unwrap())
    }

    fn identity(x: f64) -> f64 {
        x
    }

    /// The middle of the `[0, 10]` triple evaluated with `identity`.
    const SEED: Point = Point {
        x: 5.0,
        objective: 5.0,
    };

    fn continued(result: InitResult) -> State {
        match result {
            InitResult::Continue(state) => state,
            InitResult::StopEarly(_) => panic!("unexpected stop"),
        }
    }

    #[test]
    fn both_ok_places_interior_points() {
        let bracket = bracket();

        let result =
            init(&identity, &bracket, SEED, Goal::Minimize, &mut ()).expect("should succeed");
        let state = continued(result);

        assert_relative_eq!(state.left().x, bracket.inner_left, epsilon = 1e-10);
        assert_relative_eq!(state.right().x, bracket.inner_right, epsilon = 1e-10);

        // Left interior point (~3.82) beats the seed.
        let solution = state.into_solution(Status::Converged, 0);
        assert_relative_eq!(solution.x, bracket.inner_left, epsilon = 1e-10);
    }

    #[test]
    fn both_ok_observer_can_stop() {
        let mut observer = |_: &Event<'_, _>| Some(Action::StopEarly);

        let result = init(&identity, &bracket(), SEED, Goal::Minimize, &mut observer)
            .expect("should succeed");

        let InitResult::StopEarly(solution) = result else {
            panic!("expected early stop");
        };
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn both_ok_observer_can_assume_worse() {
        let bracket = bracket();
        let mut observer = |_: &Event<'_, _>| Some(Action::AssumeWorse);

        let result = init(&identity, &bracket, SEED, Goal::Maximize, &mut observer)
            .expect("should succeed");
        let state = continued(result);

        // Right was assumed worse, so for maximization it scores negative infinity.
        assert_eq!(state.right().objective, f64::NEG_INFINITY);

        // The seed stays best: the only real competitor (~3.82) is smaller.
        let solution = state.into_solution(Status::Converged, 0);
        assert_relative_eq!(solution.x, 5.0);
    }

    #[derive(Debug, Error)]
    #[error("fails above {0}")]
    struct Above(f64);

    fn fails_above(threshold: f64) -> impl Fn(f64) -> Result<f64, Above> {
        move |x| if x > threshold { Err(Above(threshold)) } else { Ok(x) }
    }

    struct Fallible<G>(G);

    impl<G: Fn(f64) -> Result<f64, Above>> ScalarFn for Fallible<G> {
        type Error = Above;

        fn eval(&self, x: f64) -> Result<f64, Above> {
            (self.0)(x)
        }
    }

    #[test]
    fn one_failed_errors_without_observer_action() {
        // Right point (~6.18) fails, left (~3.82) succeeds.
        let f = Fallible(fails_above(6.0));

        let result = init(&f, &bracket(), SEED, Goal::Minimize, &mut ());

        assert!(matches!(result, Err(Error::Function(Above(_)))));
    }

    #[test]
    fn one_failed_recovers_with_assume_worse() {
        let bracket = bracket();
        let f = Fallible(fails_above(6.0));
        let mut observer = |event: &Event<'_, _>| {
            matches!(event, Event::FunctionFailed { .. }).then_some(Action::AssumeWorse)
        };

        let result =
            init(&f, &bracket, SEED, Goal::Minimize, &mut observer).expect("should recover");
        let state = continued(result);

        assert!(state.right().objective.is_infinite());
        assert_relative_eq!(state.left().x, bracket.inner_left, epsilon = 1e-10);
    }

    #[test]
    fn both_failed_returns_error_after_notifying() {
        let f = Fallible(fails_above(-1.0));

        let mut notified = false;
        let mut observer = |event: &Event<'_, _>| {
            if matches!(event, Event::FunctionFailed { .. }) {
                notified = true;
            }
            Some(Action::AssumeWorse)
        };

        let result = init(&f, &bracket(), SEED, Goal::Minimize, &mut observer);

        assert!(result.is_err());
        assert!(notified, "observer should be notified when both fail");
    }
}
