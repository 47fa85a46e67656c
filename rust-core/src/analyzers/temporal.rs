//! Time-domain scalar analyzers: energy, magnitude and zero-crossing count

use super::FrameAnalyzer;
use crate::error::{FeatureError, Result};

/// Mean power of the frame: mean(x²)
///
/// # Errors
/// `InvalidInput` for an empty frame (mean of nothing is undefined)
pub fn energy(frame: &[f64]) -> Result<f64> {
    mean_of(frame, |x| x * x)
}

/// Mean absolute amplitude of the frame: mean(|x|)
///
/// # Errors
/// `InvalidInput` for an empty frame
pub fn magnitude(frame: &[f64]) -> Result<f64> {
    mean_of(frame, f64::abs)
}

/// Count of sign changes between consecutive samples
///
/// Each sample maps to -1, 0 or +1 and every non-zero step of that sign
/// sequence counts. An exact zero therefore splits a crossing in two:
/// `[1, 0, -1]` counts 2. A NaN sample has no sign, so every pair that
/// contains one counts as a change.
///
/// # Returns
/// Count in `[0, frame.len() - 1]`, 0 for frames shorter than two samples
pub fn zero_crossings(frame: &[f64]) -> usize {
    frame
        .windows(2)
        .filter(|pair| sign_changes(pair[0], pair[1]))
        .count()
}

fn sign_changes(a: f64, b: f64) -> bool {
    a.is_nan() || b.is_nan() || sign(a) != sign(b)
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

fn mean_of(frame: &[f64], f: impl Fn(f64) -> f64) -> Result<f64> {
    if frame.is_empty() {
        return Err(FeatureError::InvalidInput(
            "cannot average an empty frame".to_string(),
        ));
    }
    let sum: f64 = frame.iter().map(|&x| f(x)).sum();
    Ok(sum / frame.len() as f64)
}

/// Frame energy analyzer, see [`energy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Energy;

impl FrameAnalyzer for Energy {
    type Output = f64;

    fn analyze(&self, frame: &[f64]) -> Result<f64> {
        energy(frame)
    }
}

/// Frame magnitude analyzer, see [`magnitude`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Magnitude;

impl FrameAnalyzer for Magnitude {
    type Output = f64;

    fn analyze(&self, frame: &[f64]) -> Result<f64> {
        magnitude(frame)
    }
}

/// Zero-crossing count analyzer, see [`zero_crossings`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroCrossing;

impl FrameAnalyzer for ZeroCrossing {
    type Output = f64;

    fn analyze(&self, frame: &[f64]) -> Result<f64> {
        Ok(zero_crossings(frame) as f64)
    }
}
