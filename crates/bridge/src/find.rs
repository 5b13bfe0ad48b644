use strand_core::ScalarFn;
use strand_solvers::{
    equation::bisection,
    optimization::{Goal, golden_section},
};
use tracing::debug;

use crate::{Error, ValidationError};

/// Default tolerance of [`find_root`]: twice the double precision epsilon.
pub const DEFAULT_ROOT_TOL: f64 = 2.0 * f64::EPSILON;

/// Default tolerance of [`find_minimum`] and [`find_maximum`].
///
/// This is the square root of the double precision epsilon, `2⁻²⁶`. A
/// derivative-free extremum search cannot locate the optimum more precisely
/// than that.
pub const DEFAULT_EXTREMUM_TOL: f64 = 1.490_116_119_384_765_6e-8;

/// Outcome of a bracketed search.
///
/// `found` is false when the bracket does not satisfy the search's
/// precondition or the search does not converge. `value` is then the best
/// location the search considered and should not be trusted as a solution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FindResult {
    pub found: bool,
    pub value: f64,
}

impl FindResult {
    fn found(value: f64) -> Self {
        Self { found: true, value }
    }

    fn not_found(value: f64) -> Self {
        Self {
            found: false,
            value,
        }
    }
}

/// Finds `x` in `[xmin, xmax]` with `f(x) = rhs` by bisection.
///
/// The interval may be given in either order. The search converges once the
/// bracket width is within `tol * (|mid| + sqrt(tol))`, with `tol` defaulting
/// to [`DEFAULT_ROOT_TOL`]. Because only the sign of `f(x) - rhs` is used, the
/// reported location can also be a jump discontinuity or a singularity.
///
/// When the interval does not bracket `rhs`, the result is not found and
/// `value` is the endpoint whose value is closest to `rhs`.
///
/// # Errors
///
/// Returns a [`ValidationError`] for a tolerance that is not above machine epsilon or a degenerate
/// interval, and propagates any error from `f`.
pub fn find_root<F>(
    f: &F,
    rhs: f64,
    xmin: f64,
    xmax: f64,
    tol: Option<f64>,
) -> Result<FindResult, Error>
where
    F: ScalarFn,
    F::Error: Into<Error>,
{
    let tol = checked_tolerance(tol.unwrap_or(DEFAULT_ROOT_TOL))?;
    let config =
        bisection::Config::from_tolerance(tol).map_err(|_| ValidationError::Tolerance(tol))?;

    let result = match bisection::solve_unobserved(f, rhs, [xmin, xmax], &config) {
        Ok(solution) if solution.status == bisection::Status::Converged => {
            FindResult::found(solution.x)
        }
        Ok(solution) => FindResult::not_found(solution.x),
        Err(bisection::Error::NanResidual { x }) => FindResult::not_found(x),
        Err(bisection::Error::InvalidBracket(error)) => {
            return Err(ValidationError::RootBracket(error).into());
        }
        Err(bisection::Error::InvalidConfig(_)) => {
            return Err(ValidationError::Tolerance(tol).into());
        }
        Err(bisection::Error::NoSuccessfulEvaluation) => FindResult::not_found(f64::NAN),
        Err(bisection::Error::Function(error)) => return Err(error.into()),
    };

    debug!(rhs, xmin, xmax, tol, found = result.found, value = result.value, "find_root");
    Ok(result)
}

/// Finds the minimum of `f` bracketed by `xleft < xmiddle < xright`.
///
/// The triple may also be given in descending order. `f(xmiddle)` must not be
/// greater than `f` at either end; otherwise the result is not found and
/// `value` is the best of the three points. `tol` defaults to
/// [`DEFAULT_EXTREMUM_TOL`].
///
/// # Errors
///
/// Returns a [`ValidationError`] for a tolerance that is not above machine epsilon or a malformed
/// triple, and propagates any error from `f`.
pub fn find_minimum<F>(
    f: &F,
    xleft: f64,
    xmiddle: f64,
    xright: f64,
    tol: Option<f64>,
) -> Result<FindResult, Error>
where
    F: ScalarFn,
    F::Error: Into<Error>,
{
    find_extremum(f, [xleft, xmiddle, xright], Goal::Minimize, tol)
}

/// Finds the maximum of `f` bracketed by `xleft < xmiddle < xright`.
///
/// The same search as [`find_minimum`], run with the maximize goal rather than
/// on a negated function.
///
/// # Errors
///
/// Returns a [`ValidationError`] for a tolerance that is not above machine epsilon or a malformed
/// triple, and propagates any error from `f`.
pub fn find_maximum<F>(
    f: &F,
    xleft: f64,
    xmiddle: f64,
    xright: f64,
    tol: Option<f64>,
) -> Result<FindResult, Error>
where
    F: ScalarFn,
    F::Error: Into<Error>,
{
    find_extremum(f, [xleft, xmiddle, xright], Goal::Maximize, tol)
}

fn find_extremum<F>(
    f: &F,
    triple: [f64; 3],
    goal: Goal,
    tol: Option<f64>,
) -> Result<FindResult, Error>
where
    F: ScalarFn,
    F::Error: Into<Error>,
{
    let tol = checked_tolerance(tol.unwrap_or(DEFAULT_EXTREMUM_TOL))?;
    let config = golden_section::Config::from_tolerance(tol)
        .map_err(|_| ValidationError::Tolerance(tol))?;

    let solution =
        golden_section::search(f, triple, goal, &config, ()).map_err(|error| -> Error {
            match error {
                golden_section::Error::InvalidBracket(error) => {
                    ValidationError::ExtremumBracket(error).into()
                }
                golden_section::Error::Function(error) => error.into(),
            }
        })?;

    let result = if solution.is_converged() {
        FindResult::found(solution.x)
    } else {
        FindResult::not_found(solution.x)
    };

    debug!(?goal, ?triple, tol, found = result.found, value = result.value, "find_extremum");
    Ok(result)
}

/// Accepts finite tolerances above machine epsilon.
///
/// At or below epsilon the width test cannot pass once the bracket collapses
/// to adjacent doubles.
fn checked_tolerance(tol: f64) -> Result<f64, ValidationError> {
    if tol.is_finite() && tol > f64::EPSILON {
        Ok(tol)
    } else {
        Err(ValidationError::Tolerance(tol))
    }
}
