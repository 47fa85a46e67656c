//! Unnormalised short-time autocorrelation

use super::FrameAnalyzer;
use crate::error::{FeatureError, Result};

/// Autocorrelation of a frame for lags `0..max_lag`
///
/// `r[0]` is the sum of squares and `r[i]` the dot product of
/// `frame[..len - i]` with `frame[i..]`. No normalisation is applied.
/// Lags at or beyond the frame length have no overlapping samples and
/// yield 0.
///
/// # Arguments
/// * `frame` - Frame samples
/// * `max_lag` - Number of lags to compute (must be > 0)
///
/// # Returns
/// Vector of length `max_lag` in increasing-lag order
pub fn autocorrelation(frame: &[f64], max_lag: usize) -> Result<Vec<f64>> {
    if max_lag == 0 {
        return Err(FeatureError::invalid_parameter(
            "max_lag",
            "must request at least one lag",
        ));
    }

    Ok((0..max_lag).map(|lag| lagged_dot(frame, lag)).collect())
}

fn lagged_dot(frame: &[f64], lag: usize) -> f64 {
    if lag >= frame.len() {
        return 0.0;
    }
    frame[..frame.len() - lag]
        .iter()
        .zip(&frame[lag..])
        .map(|(a, b)| a * b)
        .sum()
}

/// Autocorrelation analyzer with a bound lag count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autocorrelation {
    max_lag: usize,
}

impl Autocorrelation {
    pub fn new(max_lag: usize) -> Result<Self> {
        if max_lag == 0 {
            return Err(FeatureError::invalid_parameter(
                "max_lag",
                "must request at least one lag",
            ));
        }
        Ok(Self { max_lag })
    }

    pub fn max_lag(&self) -> usize {
        self.max_lag
    }
}

impl FrameAnalyzer for Autocorrelation {
    type Output = Vec<f64>;

    fn analyze(&self, frame: &[f64]) -> Result<Vec<f64>> {
        autocorrelation(frame, self.max_lag)
    }

    fn output_len(&self) -> Option<usize> {
        Some(self.max_lag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_sequence() {
        let r = autocorrelation(&[1.0, 2.0, 3.0], 3).unwrap();
        // 1+4+9, 1*2+2*3, 1*3
        assert_eq!(r, vec![14.0, 8.0, 3.0]);
    }

    #[test]
    fn test_lags_past_frame_are_zero() {
        let r = autocorrelation(&[1.0, -1.0], 4).unwrap();
        assert_eq!(r, vec![2.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_zero_lags_rejected() {
        assert!(matches!(
            autocorrelation(&[1.0], 0),
            Err(FeatureError::InvalidParameter { name: "max_lag", .. })
        ));
        assert!(Autocorrelation::new(0).is_err());
    }

    #[test]
    fn test_periodic_frame_peaks_at_period() {
        let frame: Vec<f64> = (0..64).map(|n| [1.0, 0.0, -1.0, 0.0][n % 4]).collect();
        let r = Autocorrelation::new(8).unwrap().analyze(&frame).unwrap();

        assert!(r[4] > r[1]);
        assert!(r[4] > r[3]);
        assert!(r[2] < 0.0);
    }

    proptest! {
        #[test]
        fn prop_lag_zero_is_sum_of_squares(
            frame in prop::collection::vec(-10.0..10.0_f64, 1..128),
            max_lag in 1usize..64,
        ) {
            let r = autocorrelation(&frame, max_lag).unwrap();
            let sum_sq: f64 = frame.iter().map(|x| x * x).sum();

            prop_assert_eq!(r.len(), max_lag);
            prop_assert!((r[0] - sum_sq).abs() <= 1e-9 * sum_sq.max(1.0));
        }
    }
}
