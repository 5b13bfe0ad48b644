//! Bisection for scalar equations `f(x) = target`.
//!
//! # Algorithm
//!
//! Starting from a bracket whose endpoint residuals have opposite signs, the
//! solver evaluates the midpoint and keeps the half whose endpoints still
//! disagree in sign. Convergence is reached when the bracket width satisfies
//! `width <= x_abs_tol + x_rel_tol * |mid|` or a residual meets
//! `residual_tol`.
//!
//! Because only signs are used, bisection also converges onto jump
//! discontinuities and singularities where the residual changes sign. The
//! reported point is then the location of the sign change.
//!
//! # Outcomes
//!
//! A bracket whose endpoints agree in sign is not an error: the solver
//! returns [`Status::NotBracketed`] with the endpoint closest to the target.
//! Function errors and NaN residuals abort the solve unless an observer
//! assumes a residual sign.
//!
//! # Observer Events
//!
//! Every evaluation emits an [`Event`]: [`Event::Left`] and [`Event::Right`]
//! for the endpoints, then [`Event::Midpoint`] for each iteration.

mod action;
mod best;
mod bracket;
mod config;
mod decision;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use strand_core::{Observer, ScalarFn};

use crate::equation::{Evaluation, evaluate};

use best::Best;
use bracket::Bounds;
use decision::Decision;

/// Finds `x` in the bracket with `f(x) = target`.
///
/// Observers see each evaluation and may stop the solver or assume a residual
/// sign. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, or if the function
/// fails or yields a NaN residual and the observer does not recover.
pub fn solve<F, Obs>(
    f: &F,
    target: f64,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: ScalarFn,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    config.validate()?;
    let bounds = Bounds::new(bracket)?;

    let mut best = Best::empty();

    let (eval, decision) = observe(f, target, bounds.lo, Site::Left, &mut observer);
    let left_sign = match decision {
        Decision::Continue(sign) => sign,
        Decision::StopEarly => return best.finish(Status::StoppedByObserver, 0),
        Decision::Error(error) => return Err(error),
    };
    if let Some(eval) = eval {
        best.update(eval);
    }
    if best.is_residual_converged(config.residual_tol) {
        return best.finish(Status::Converged, 0);
    }

    let (eval, decision) = observe(f, target, bounds.hi, Site::Right, &mut observer);
    let right_sign = match decision {
        Decision::Continue(sign) => sign,
        Decision::StopEarly => return best.finish(Status::StoppedByObserver, 0),
        Decision::Error(error) => return Err(error),
    };
    if let Some(eval) = eval {
        best.update(eval);
    }
    if best.is_residual_converged(config.residual_tol) {
        return best.finish(Status::Converged, 0);
    }

    let Some(mut bracket) = Bracket::new(bounds, left_sign, right_sign) else {
        return best.finish(Status::NotBracketed, 0);
    };

    for iter in 1..=config.max_iters {
        let mid = bracket.midpoint();
        let (eval, decision) = observe(f, target, mid, Site::Midpoint(bracket), &mut observer);
        let sign = match decision {
            Decision::Continue(sign) => sign,
            Decision::StopEarly => return best.finish(Status::StoppedByObserver, iter),
            Decision::Error(error) => return Err(error),
        };

        let x_converged = bracket.is_x_converged(config.x_abs_tol, config.x_rel_tol);
        match eval {
            Some(eval) => {
                if x_converged || eval.residual.abs() <= config.residual_tol {
                    return Ok(Solution::from_eval(eval, Status::Converged, iter));
                }
                best.update(eval);
            }
            None if x_converged => return best.finish(Status::Converged, iter),
            None => {}
        }

        bracket.shrink(mid, sign);
    }

    best.finish(Status::MaxIters, config.max_iters)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, or if the function
/// fails or yields a NaN residual.
pub fn solve_unobserved<F: ScalarFn>(
    f: &F,
    target: f64,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error<F::Error>> {
    solve(f, target, bracket, config, ())
}

/// Where an evaluation happens, used to build the matching event.
enum Site {
    Left,
    Right,
    Midpoint(Bracket),
}

/// Evaluates at `x`, emits the event, and combines the observer action with
/// the evaluation outcome.
///
/// The evaluation is dropped when the observer assumes a residual sign so it
/// never becomes the best point.
fn observe<F, Obs>(
    f: &F,
    target: f64,
    x: f64,
    site: Site,
    observer: &mut Obs,
) -> (Option<Evaluation>, Decision<F::Error>)
where
    F: ScalarFn,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    let result = evaluate(f, target, x);
    let action = match &site {
        Site::Left => observer.observe(&Event::Left { x, result: &result }),
        Site::Right => observer.observe(&Event::Right { x, result: &result }),
        Site::Midpoint(bracket) => observer.observe(&Event::Midpoint {
            x,
            bracket,
            result: &result,
        }),
    };

    let (eval, residual) = match result {
        Ok(eval) => (Some(eval), Ok(eval.residual)),
        Err(error) => (None, Err(error)),
    };
    let eval = eval.filter(|_| !matches!(action, Some(Action::AssumeResidualSign(_))));
    (eval, Decision::new(action, x, residual))
}
