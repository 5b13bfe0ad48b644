//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval. It maintains two interior points positioned by the
//! golden ratio, compares their objectives, and shrinks the bracket toward the
//! better point.
//!
//! # Bracketing
//!
//! The search starts from a triple `left < middle < right` whose middle point
//! is at least as good as both end points under the [`Goal`]. Triples in
//! descending order are reversed. When the middle point is worse than an end
//! point the search is not run and [`Status::NotBracketed`] is returned with
//! the best of the three points.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation after initialization:
//!
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::FunctionFailed`] — the function returned an error
//!
//! Each event includes `other`, the other interior point. During
//! initialization the solver evaluates two interior points but emits only one
//! event (for the second point), since the first has no `other` yet. The three
//! bracket points are evaluated before the search starts and emit no events;
//! a failure there is returned as [`Error::Function`].
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as worse than `other`.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod point;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use bracket::{BracketError, Triple};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use strand_core::{Observer, ScalarFn};

use crate::optimization::Goal;

/// Searches the bracket for the optimum selected by `goal`.
///
/// See the [module docs](self) for bracketing rules and observer events.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if the function fails and
/// the observer does not return [`Action::AssumeWorse`] to recover.
pub fn search<F, Obs>(
    f: &F,
    bracket: [f64; 3],
    goal: Goal,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: ScalarFn,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    search::search(f, bracket, goal, config, observer)
}

/// Finds the minimum of `f` using golden section search.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if the function fails and
/// the observer does not return [`Action::AssumeWorse`] to recover.
pub fn minimize<F, Obs>(
    f: &F,
    bracket: [f64; 3],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: ScalarFn,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    search(f, bracket, Goal::Minimize, config, observer)
}

/// Finds the minimum of `f` without observer support.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the function fails.
pub fn minimize_unobserved<F: ScalarFn>(
    f: &F,
    bracket: [f64; 3],
    config: &Config,
) -> Result<Solution, Error<F::Error>> {
    minimize(f, bracket, config, ())
}

/// Finds the maximum of `f` using golden section search.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if the function fails and
/// the observer does not return [`Action::AssumeWorse`] to recover.
pub fn maximize<F, Obs>(
    f: &F,
    bracket: [f64; 3],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: ScalarFn,
    Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
{
    search(f, bracket, Goal::Maximize, config, observer)
}

/// Finds the maximum of `f` without observer support.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the function fails.
pub fn maximize_unobserved<F: ScalarFn>(
    f: &F,
    bracket: [f64; 3],
    config: &Config,
) -> Result<Solution, Error<F::Error>> {
    maximize(f, bracket, config, ())
}
