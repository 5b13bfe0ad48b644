use std::cmp::Ordering;

use strand_core::EmpiricalCdf;
use tracing::debug;

use crate::{Error, SampleBuffer, ValidationError};

/// Builds the polyline outline of an empirical CDF over `[xmin, xmax]`.
///
/// The outline traces the step function exactly with the fewest points: a
/// flat point at `xmin`, a vertical segment `(x, before) -> (x, after)` at
/// every sample value inside the interval, and a flat point at `xmax`. When
/// no sample value falls inside, the outline is the two points
/// `(xmin, cdf(xmin))` and `(xmax, cdf(xmax))`.
///
/// The number of points is computed before anything is written, and the
/// buffers are allocated once at that size.
///
/// # Errors
///
/// Returns [`ValidationError::Interval`] unless `xmin < xmax`, and
/// [`Error::Allocation`] if the buffers cannot be allocated.
#[allow(clippy::cast_precision_loss)]
pub fn empirical_cdf_outline<D>(
    dist: &D,
    xmin: f64,
    xmax: f64,
) -> Result<SampleBuffer, Error>
where
    D: EmpiricalCdf + ?Sized,
{
    if xmin.partial_cmp(&xmax) != Some(Ordering::Less) {
        return Err(ValidationError::Interval { xmin, xmax }.into());
    }

    let sample = dist.sample();
    let size = sample.len() as f64;
    let in_range = |x: f64| x >= xmin && x <= xmax;

    let draw_count = if xmin <= dist.min_coordinate() && xmax >= dist.max_coordinate() {
        2 + 2 * sample.len()
    } else {
        2 + 2 * sample.iter().filter(|&&x| in_range(x)).count()
    };

    let (mut xs, mut ys) = SampleBuffer::allocate(draw_count)?;

    if draw_count == 2 {
        xs.extend([xmin, xmax]);
        ys.extend([dist.cdf(xmin), dist.cdf(xmax)]);
    } else {
        let mut prev_cdf = None;
        for (rank, &x) in sample.iter().enumerate() {
            if !in_range(x) {
                continue;
            }
            let before = *prev_cdf.get_or_insert_with(|| {
                let cdf = rank as f64 / size;
                xs.push(xmin);
                ys.push(cdf);
                cdf
            });
            let after = (rank + 1) as f64 / size;
            xs.extend([x, x]);
            ys.extend([before, after]);
            prev_cdf = Some(after);
        }
        xs.push(xmax);
        ys.push(prev_cdf.unwrap_or_default());
    }

    debug_assert_eq!(xs.len(), draw_count);
    debug!(xmin, xmax, npoints = draw_count, "empirical_cdf_outline");
    Ok(SampleBuffer::from_parts(xs, ys))
}
