//! Native numerical algorithms over host-language callables.
//!
//! A scripting host hands over a function object; this crate wraps it in a
//! [`Callback`] that native algorithms can evaluate many times in a tight
//! loop, and provides those algorithms:
//!
//! - [`find_root`], [`find_minimum`], [`find_maximum`] — bracketed searches
//!   that report a [`FindResult`]
//! - [`scan`] and [`scan_at`] — evaluate a function on a uniform grid or at
//!   explicit coordinates
//! - [`empirical_cdf_outline`] — the polyline outline of an empirical CDF
//!
//! The search and sampling functions accept any [`ScalarFn`], so they work
//! equally with native closures and host callbacks. The [`callable`] module
//! offers the same operations directly on host objects, building and
//! releasing the [`Callback`] for the duration of the call.
//!
//! # Errors
//!
//! Every failure is an [`Error`]: a [`ValidationError`] for malformed input,
//! an [`InvocationError`] when the callable fails or the host already has an
//! error pending, and a [`ConversionError`] when the callable returns a value
//! that is not a number. Output buffers that cannot be allocated give
//! [`Error::Allocation`] instead of aborting the process. A search that does
//! not converge is not an error; it is reported as
//! `FindResult { found: false, .. }`.
//!
//! [`ScalarFn`]: strand_core::ScalarFn

pub mod callable;

mod callback;
mod empirical;
mod error;
mod find;
mod outline;
mod scan;

pub use callback::Callback;
pub use empirical::EmpiricalDistribution;
pub use error::{ConversionError, Error, InvocationError, ValidationError};
pub use find::{
    DEFAULT_EXTREMUM_TOL, DEFAULT_ROOT_TOL, FindResult, find_maximum, find_minimum, find_root,
};
pub use outline::empirical_cdf_outline;
pub use scan::{SampleBuffer, scan, scan_at};
