//! Direct-summation DFT magnitude
//!
//! Evaluates the positive-frequency half of an `n_fft`-point DFT at the
//! frame's own sample indices. Deliberately O(N·K): no FFT, no window, no
//! zero-padding and no normalisation, so every bin is the plain sum
//! |Σ x[t]·exp(-2πi·t·k/n_fft)|.

use crate::analyzers::FrameAnalyzer;
use crate::error::{FeatureError, Result};
use num_complex::Complex;
use std::f64::consts::PI;

/// Default DFT size
pub const DEFAULT_N_FFT: usize = 1024;

/// Compute the DFT magnitude of a frame
///
/// # Arguments
/// * `frame` - Frame samples (any length, independent of `n_fft`)
/// * `n_fft` - DFT size; only `n_fft / 2` bins are produced
///
/// # Returns
/// Magnitudes |X[k]| for k = 0..n_fft/2 (floor division), increasing frequency
pub fn dft_magnitude(frame: &[f64], n_fft: usize) -> Result<Vec<f64>> {
    if n_fft == 0 {
        return Err(FeatureError::invalid_parameter("n_fft", "must be positive"));
    }

    let size = n_fft as f64;
    Ok((0..n_fft / 2)
        .map(|k| {
            let ratio = k as f64 / size;
            frame
                .iter()
                .enumerate()
                .map(|(t, &x)| Complex::from_polar(x, -2.0 * PI * t as f64 * ratio))
                .sum::<Complex<f64>>()
                .norm()
        })
        .collect())
}

/// DFT magnitude analyzer with a bound transform size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DftMagnitude {
    n_fft: usize,
}

impl DftMagnitude {
    pub fn new(n_fft: usize) -> Result<Self> {
        if n_fft == 0 {
            return Err(FeatureError::invalid_parameter("n_fft", "must be positive"));
        }
        Ok(Self { n_fft })
    }

    pub fn n_fft(&self) -> usize {
        self.n_fft
    }

    /// Number of output bins (`n_fft / 2`, odd sizes round down)
    pub fn num_bins(&self) -> usize {
        self.n_fft / 2
    }

    /// Centre frequency in Hz of every output bin
    pub fn bin_frequencies(&self, sample_rate: f64) -> Vec<f64> {
        (0..self.num_bins())
            .map(|k| k as f64 * sample_rate / self.n_fft as f64)
            .collect()
    }
}

impl Default for DftMagnitude {
    fn default() -> Self {
        Self {
            n_fft: DEFAULT_N_FFT,
        }
    }
}

impl FrameAnalyzer for DftMagnitude {
    type Output = Vec<f64>;

    fn analyze(&self, frame: &[f64]) -> Result<Vec<f64>> {
        dft_magnitude(frame, self.n_fft)
    }

    fn output_len(&self) -> Option<usize> {
        Some(self.num_bins())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realfft::RealFftPlanner;

    #[test]
    fn test_bin_count() {
        let frame = vec![0.1; 40];

        assert_eq!(dft_magnitude(&frame, 1024).unwrap().len(), 512);
        assert_eq!(dft_magnitude(&frame, 9).unwrap().len(), 4);
        assert!(dft_magnitude(&frame, 1).unwrap().is_empty());
    }

    #[test]
    fn test_dc_bin_is_abs_sum() {
        let frame = [0.5, -2.0, 0.25, -0.75, 1.0];
        let spectrum = dft_magnitude(&frame, 16).unwrap();

        assert!((spectrum[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sine_peaks_at_its_bin() {
        let n_fft = 256;
        let bin = 20;
        let frame: Vec<f64> = (0..n_fft)
            .map(|t| (2.0 * PI * bin as f64 * t as f64 / n_fft as f64).sin())
            .collect();

        let spectrum = DftMagnitude::new(n_fft).unwrap().analyze(&frame).unwrap();
        let (peak_bin, &peak_mag) = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert_eq!(peak_bin, bin);
        assert!((peak_mag - n_fft as f64 / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_matches_real_fft_when_frame_fills_transform() {
        let n_fft = 64;
        let frame: Vec<f64> = (0..n_fft)
            .map(|t| (0.3 * t as f64).cos() + 0.1 * t as f64)
            .collect();

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(n_fft);
        let mut input = frame.clone();
        let mut output = r2c.make_output_vec();
        r2c.process(&mut input, &mut output).unwrap();

        let direct = dft_magnitude(&frame, n_fft).unwrap();
        for (k, mag) in direct.iter().enumerate() {
            assert!((mag - output[k].norm()).abs() < 1e-9, "bin {k}");
        }
    }

    #[test]
    fn test_short_frame_not_padded() {
        // Frame shorter than n_fft is summed over its own length only
        let spectrum = dft_magnitude(&[1.0, 1.0], 8).unwrap();
        let expected = (2.0 + 2.0 * (2.0 * PI / 8.0).cos()).sqrt();

        assert!((spectrum[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_bin_frequencies() {
        let dft = DftMagnitude::default();
        let freqs = dft.bin_frequencies(16000.0);

        assert_eq!(freqs.len(), 512);
        assert_eq!(freqs[0], 0.0);
        assert!((freqs[1] - 15.625).abs() < 1e-12);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(dft_magnitude(&[1.0], 0).is_err());
        assert!(DftMagnitude::new(0).is_err());
    }
}
