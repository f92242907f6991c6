//! Summary statistics printed under a sparkline with `--stats`.

use std::fmt;

use crate::core::{
    constants::MIN_STATS_SAMPLES,
    data::{ensure_finite, extrema},
    error::InputError,
};

/// Min, max, mean and *sample* standard deviation (n - 1 denominator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    #[allow(clippy::cast_precision_loss)]
    pub fn from_samples(samples: &[f64]) -> Result<Self, InputError> {
        if samples.len() < MIN_STATS_SAMPLES {
            return Err(InputError::TooFewSamples {
                need: MIN_STATS_SAMPLES,
                got: samples.len(),
            });
        }
        ensure_finite(samples)?;

        let (min, max) = extrema(samples).ok_or(InputError::Empty)?;
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let sum_sq: f64 = samples.iter().map(|v| (v - mean) * (v - mean)).sum();
        let std_dev = (sum_sq / (n - 1.0)).sqrt();

        log::trace!("stats over {} samples: mean {mean}, sd {std_dev}", samples.len());
        Ok(Self {
            min,
            max,
            mean,
            std_dev,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Minimum: {}\nMaximum: {}\nMean: {}\nStandard Deviation: {}",
            self.min, self.max, self.mean, self.std_dev
        )
    }
}

/// One-shot helper: validate, summarise, format.
pub fn format_stats(samples: &[f64]) -> Result<String, InputError> {
    Summary::from_samples(samples).map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_one_to_eight() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(
            format_stats(&data).unwrap(),
            "Minimum: 1\nMaximum: 8\nMean: 4.5\nStandard Deviation: 2.449489742783178"
        );
    }

    #[test]
    fn uses_the_sample_denominator() {
        // population sd would be 1.0
        let s = Summary::from_samples(&[1.0, 3.0]).unwrap();
        assert!((s.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((s.mean - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn needs_two_samples() {
        assert_eq!(
            format_stats(&[5.0]),
            Err(InputError::TooFewSamples { need: 2, got: 1 })
        );
        assert_eq!(
            format_stats(&[]),
            Err(InputError::TooFewSamples { need: 2, got: 0 })
        );
    }

    #[test]
    fn non_numeric_sample_is_rejected() {
        assert_eq!(
            format_stats(&[1.0, 2.0, f64::NAN]),
            Err(InputError::NonFinite { index: 2 })
        );
    }
}
