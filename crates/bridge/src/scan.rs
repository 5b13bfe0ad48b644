use strand_core::ScalarFn;
use tracing::debug;

use crate::Error;

/// Paired coordinates and values produced by a sampling routine.
///
/// Both sequences always have the same length. The buffer is immutable once
/// built; use [`SampleBuffer::into_parts`] to take ownership of the vectors.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleBuffer {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleBuffer {
    pub(crate) fn from_parts(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    /// Allocates empty coordinate and value vectors for exactly `npoints`.
    ///
    /// A size the allocator refuses is an error rather than an abort.
    pub(crate) fn allocate(npoints: usize) -> Result<(Vec<f64>, Vec<f64>), Error> {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        xs.try_reserve_exact(npoints)
            .and_then(|()| ys.try_reserve_exact(npoints))
            .map_err(|_| Error::Allocation { npoints })?;
        Ok((xs, ys))
    }

    /// Returns the coordinates.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the values.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterates over `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Splits the buffer into its coordinate and value vectors.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }
}

/// Evaluates `f` at `npoints` evenly spaced points from `xmin` to `xmax`.
///
/// The first coordinate is exactly `xmin` and the last is exactly `xmax`. A
/// single point is placed at `xmin` and zero points give an empty buffer.
/// `xmin > xmax` yields a descending grid. Finite endpoints whose difference
/// overflows still give a finite grid.
///
/// # Errors
///
/// Returns [`Error::Allocation`] if the buffers cannot be allocated, and the
/// first error from `f` otherwise. No partial buffer is returned.
#[allow(clippy::cast_precision_loss)]
pub fn scan<F>(f: &F, xmin: f64, xmax: f64, npoints: usize) -> Result<SampleBuffer, Error>
where
    F: ScalarFn,
    F::Error: Into<Error>,
{
    let (mut xs, mut ys) = SampleBuffer::allocate(npoints)?;

    let intervals = npoints.saturating_sub(1).max(1) as f64;
    let step = (xmax - xmin) / intervals;
    let span_overflows = step.is_infinite() && xmin.is_finite() && xmax.is_finite();

    for i in 0..npoints {
        let x = if i == 0 {
            xmin
        } else if i + 1 == npoints {
            xmax
        } else if span_overflows {
            let t = i as f64 / intervals;
            xmin * (1.0 - t) + xmax * t
        } else {
            xmin + i as f64 * step
        };
        ys.push(f.eval(x).map_err(Into::<Error>::into)?);
        xs.push(x);
    }

    debug!(xmin, xmax, npoints, "scan");
    Ok(SampleBuffer::from_parts(xs, ys))
}

/// Evaluates `f` at each coordinate, in order.
///
/// # Errors
///
/// Returns the first error from `f`. No partial result is returned.
pub fn scan_at<F: ScalarFn>(f: &F, coords: &[f64]) -> Result<Vec<f64>, F::Error> {
    let values = coords.iter().map(|&x| f.eval(x)).collect::<Result<Vec<_>, _>>()?;
    debug!(npoints = coords.len(), "scan_at");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use approx::assert_relative_eq;
    use strand_core::host::HostError;

    use crate::InvocationError;

    #[test]
    fn grid_hits_both_ends_exactly() {
        let f = |x: f64| x.sin();
        let buffer = scan(&f, 0.1, 0.7, 7).unwrap();

        assert_eq!(buffer.len(), 7);
        assert_eq!(buffer.xs()[0], 0.1);
        assert_eq!(buffer.xs()[6], 0.7);
        assert!(buffer.xs().windows(2).all(|w| w[0] <= w[1]));
        for (x, y) in buffer.iter() {
            assert_eq!(y, x.sin());
        }
    }

    #[test]
    fn last_point_is_not_accumulated() {
        // xmin + (n - 1) * step can round away from xmax.
        for npoints in 2..50 {
            let buffer = scan(&|x: f64| x, 0.1, 1.0 / 3.0, npoints).unwrap();
            assert_eq!(buffer.xs()[npoints - 1], 1.0 / 3.0);
        }
    }

    #[test]
    fn single_point_uses_xmin() {
        let buffer = scan(&|x: f64| 2.0 * x, 3.0, 5.0, 1).unwrap();
        assert_eq!(buffer.xs(), &[3.0]);
        assert_eq!(buffer.ys(), &[6.0]);
    }

    #[test]
    fn zero_points_give_empty_buffer() {
        let buffer = scan(&|x: f64| x, 0.0, 1.0, 0).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer, SampleBuffer::default());
    }

    #[test]
    fn descending_grid() {
        let buffer = scan(&|x: f64| x, 1.0, 0.0, 5).unwrap();
        assert_eq!(buffer.xs(), &[1.0, 0.75, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn scan_at_keeps_caller_order() {
        let coords = [2.0, -1.0, 2.0, 0.5];
        let values = scan_at(&|x: f64| x * x, &coords).unwrap();
        assert_eq!(values.len(), coords.len());
        assert_relative_eq!(values[0], 4.0);
        assert_relative_eq!(values[1], 1.0);
        assert_relative_eq!(values[2], 4.0);
        assert_relative_eq!(values[3], 0.25);
    }

    fn negative(x: f64) -> Error {
        InvocationError::Raised(HostError::new("ValueError", format!("negative input {x}")))
            .into()
    }

    /// Records each call and fails for negative inputs.
    struct Recording {
        calls: RefCell<Vec<f64>>,
    }

    impl ScalarFn for Recording {
        type Error = Error;

        fn eval(&self, x: f64) -> Result<f64, Error> {
            self.calls.borrow_mut().push(x);
            if x < 0.0 { Err(negative(x)) } else { Ok(x) }
        }
    }

    #[test]
    fn failure_aborts_without_partial_output() {
        let f = Recording {
            calls: RefCell::new(Vec::new()),
        };

        let result = scan(&f, 1.0, -1.0, 5);
        assert_eq!(result, Err(negative(-0.5)));
        assert_eq!(*f.calls.borrow(), vec![1.0, 0.5, 0.0, -0.5]);

        let result = scan_at(&f, &[3.0, -2.0, 1.0]);
        assert_eq!(result, Err(negative(-2.0)));
    }

    #[test]
    fn overflowing_span_keeps_grid_finite() {
        let buffer = scan(&|x: f64| x, -1e308, 1e308, 3).unwrap();
        assert_eq!(buffer.xs(), &[-1e308, 0.0, 1e308]);

        let buffer = scan(&|x: f64| x, f64::MAX, -f64::MAX, 5).unwrap();
        assert_eq!(buffer.xs()[0], f64::MAX);
        assert_eq!(buffer.xs()[4], -f64::MAX);
        assert!(buffer.xs().iter().all(|x| x.is_finite()));
        assert!(buffer.xs().windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn oversized_request_is_an_allocation_error() {
        let f = Recording {
            calls: RefCell::new(Vec::new()),
        };

        let result = scan(&f, 0.0, 1.0, usize::MAX);
        assert_eq!(result, Err(Error::Allocation { npoints: usize::MAX }));
        assert!(f.calls.borrow().is_empty());
    }

    #[test]
    fn into_parts_returns_both_vectors() {
        let (xs, ys) = scan(&|x: f64| x + 1.0, 0.0, 1.0, 3).unwrap().into_parts();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
        assert_eq!(ys, vec![1.0, 1.5, 2.0]);
    }
}
