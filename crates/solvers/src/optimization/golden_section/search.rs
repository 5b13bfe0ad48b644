use strand_core::{Observer, ScalarFn};

use crate::optimization::Goal;

use super::{
    Action, Config, Error, Event, Point, Solution, Status,
    bracket::{GoldenBracket, Triple},
    init::{InitResult, init},
    state::ShrinkDirection,
};

/// Core golden section search implementation.
///
/// The `goal` is applied to objective values before comparison, so the same
/// algorithm handles both minimization and maximization.
pub(super) fn search<F, Obs>(
    f: &F,
    bracket: [f64; 3],
    goal: Goal,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: ScalarFn,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    let triple = Triple::new(bracket)?;

    let eval = |x: f64| {
        f.eval(x)
            .map(|objective| Point::new(x, objective))
            .map_err(Error::Function)
    };
    let left = eval(triple.left)?;
    let middle = eval(triple.middle)?;
    let right = eval(triple.right)?;

    let score = |point: Point| goal.transform(point.objective);
    let is_bracketed = score(middle) <= score(left) && score(middle) <= score(right);
    if !is_bracketed {
        let best = [left, right].into_iter().fold(middle, |best, point| {
            if best.objective.is_nan() || goal.is_better(point.objective, best.objective) {
                point
            } else {
                best
            }
        });
        return Ok(Solution {
            status: Status::NotBracketed,
            x: best.x,
            objective: best.objective,
            iters: 0,
        });
    }

    let bracket = GoldenBracket::new(&triple);

    let mut state = match init(f, &bracket, middle, goal, &mut observer)? {
        InitResult::Continue(state) => state,
        InitResult::StopEarly(solution) => return Ok(solution),
    };

    for iter in 1..=config.max_iters() {
        if state.is_converged(config) {
            return Ok(state.into_solution(Status::Converged, iter - 1));
        }

        let direction = state.next_action();
        let (eval_x, other) = match direction {
            ShrinkDirection::ShrinkLeft(x) => (x, state.right()),
            ShrinkDirection::ShrinkRight(x) => (x, state.left()),
        };

        let point = match eval_and_observe(f, eval_x, other, &mut observer)? {
            EvalOutcome::Continue(point) => point,
            EvalOutcome::AssumeWorse => {
                state.apply(direction, Point::new(eval_x, goal.worst()));
                continue;
            }
            EvalOutcome::StopEarly => {
                return Ok(state.into_solution(Status::StoppedByObserver, iter));
            }
        };

        state.apply(direction, point);
        state.maybe_update_best(point);
    }

    let status = if state.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(state.into_solution(status, config.max_iters()))
}

enum EvalOutcome {
    Continue(Point),
    AssumeWorse,
    StopEarly,
}

/// Evaluates at `x`, emits the event, and handles the observer action.
fn eval_and_observe<F, Obs>(
    f: &F,
    x: f64,
    other: Point,
    observer: &mut Obs,
) -> Result<EvalOutcome, Error<F::Error>>
where
    F: ScalarFn,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    match f.eval(x) {
        Ok(objective) => {
            let point = Point::new(x, objective);
            match observer.observe(&Event::Evaluated { point, other }) {
                Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
                None => Ok(EvalOutcome::Continue(point)),
            }
        }
        Err(error) => match Event::emit_failure(x, other, &error, observer) {
            Some(Action::StopEarly) => Ok(EvalOutcome::StopEarly),
            Some(Action::AssumeWorse) => Ok(EvalOutcome::AssumeWorse),
            None => Err(Error::Function(error)),
        },
    }
}
