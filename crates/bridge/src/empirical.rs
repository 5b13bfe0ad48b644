use strand_core::EmpiricalCdf;

use crate::ValidationError;

/// A distribution defined by a finite sample.
///
/// The sample is stored sorted. The CDF at `x` is the fraction of sample
/// values less than or equal to `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalDistribution {
    sample: Vec<f64>,
}

impl EmpiricalDistribution {
    /// Creates a distribution from sample values in any order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the sample is empty or contains a
    /// non-finite value.
    pub fn new(mut sample: Vec<f64>) -> Result<Self, ValidationError> {
        if sample.is_empty() {
            return Err(ValidationError::EmptySample);
        }
        if let Some(index) = sample.iter().position(|x| !x.is_finite()) {
            return Err(ValidationError::NonFiniteSample { index });
        }
        sample.sort_by(f64::total_cmp);
        Ok(Self { sample })
    }

    /// Returns the sample size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    /// Always false: a distribution holds at least one sample value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }
}

impl EmpiricalCdf for EmpiricalDistribution {
    fn sample(&self) -> &[f64] {
        &self.sample
    }

    fn min_coordinate(&self) -> f64 {
        self.sample[0]
    }

    fn max_coordinate(&self) -> f64 {
        self.sample[self.sample.len() - 1]
    }

    #[allow(clippy::cast_precision_loss)]
    fn cdf(&self, x: f64) -> f64 {
        let count = self.sample.partition_point(|&s| s <= x);
        count as f64 / self.sample.len() as f64
    }
}
