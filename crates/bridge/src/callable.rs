//! Operations on host callables.
//!
//! Each function wraps the host object in a [`Callback`] for the duration of
//! the call and releases it before returning, whether the operation succeeds
//! or fails.

use strand_core::host::{Host, ObjectRef};

use crate::{Callback, Error, FindResult, SampleBuffer};

/// Finds `x` with `func(x) = rhs` in `[xmin, xmax]`.
///
/// See [`crate::find_root`].
///
/// # Errors
///
/// Returns an error if `func` is null or not callable, if the arguments are
/// invalid, or if any call into the host fails.
pub fn find_root<H: Host + ?Sized>(
    host: &H,
    func: Option<&ObjectRef>,
    rhs: f64,
    xmin: f64,
    xmax: f64,
    tol: Option<f64>,
) -> Result<FindResult, Error> {
    let callback = Callback::new(host, func)?;
    crate::find_root(&callback, rhs, xmin, xmax, tol)
}

/// Finds the minimum of `func` bracketed by `xleft < xmiddle < xright`.
///
/// See [`crate::find_minimum`].
///
/// # Errors
///
/// Returns an error if `func` is null or not callable, if the arguments are
/// invalid, or if any call into the host fails.
pub fn find_minimum<H: Host + ?Sized>(
    host: &H,
    func: Option<&ObjectRef>,
    xleft: f64,
    xmiddle: f64,
    xright: f64,
    tol: Option<f64>,
) -> Result<FindResult, Error> {
    let callback = Callback::new(host, func)?;
    crate::find_minimum(&callback, xleft, xmiddle, xright, tol)
}

/// Finds the maximum of `func` bracketed by `xleft < xmiddle < xright`.
///
/// See [`crate::find_maximum`].
///
/// # Errors
///
/// Returns an error if `func` is null or not callable, if the arguments are
/// invalid, or if any call into the host fails.
pub fn find_maximum<H: Host + ?Sized>(
    host: &H,
    func: Option<&ObjectRef>,
    xleft: f64,
    xmiddle: f64,
    xright: f64,
    tol: Option<f64>,
) -> Result<FindResult, Error> {
    let callback = Callback::new(host, func)?;
    crate::find_maximum(&callback, xleft, xmiddle, xright, tol)
}

/// Evaluates `func` on a uniform grid of `npoints` from `xmin` to `xmax`.
///
/// See [`crate::scan`].
///
/// # Errors
///
/// Returns an error if `func` is null or not callable, if the buffers cannot
/// be allocated, or if any call into the host fails.
pub fn scan<H: Host + ?Sized>(
    host: &H,
    func: Option<&ObjectRef>,
    xmin: f64,
    xmax: f64,
    npoints: usize,
) -> Result<SampleBuffer, Error> {
    let callback = Callback::new(host, func)?;
    crate::scan(&callback, xmin, xmax, npoints)
}

/// Evaluates `func` at each coordinate, in order.
///
/// See [`crate::scan_at`].
///
/// # Errors
///
/// Returns an error if `func` is null or not callable, or if any call into
/// the host fails.
pub fn scan_at<H: Host + ?Sized>(
    host: &H,
    func: Option<&ObjectRef>,
    coords: &[f64],
) -> Result<Vec<f64>, Error> {
    let callback = Callback::new(host, func)?;
    crate::scan_at(&callback, coords)
}
