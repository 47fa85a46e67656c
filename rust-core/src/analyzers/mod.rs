//! Per-frame analysis functions
//!
//! An analyzer maps one frame of samples to either a scalar or a
//! fixed-length vector. Parameterised analyzers bind their extra
//! arguments up-front (`Autocorrelation::new(max_lag)`), and plain closures
//! `Fn(&[f64]) -> Result<O>` are analyzers too.

pub mod temporal;
pub mod autocorrelation;

pub use temporal::{energy, magnitude, zero_crossings, Energy, Magnitude, ZeroCrossing};
pub use autocorrelation::{autocorrelation, Autocorrelation};

use crate::error::Result;

/// Value produced by an analyzer for a single frame
pub trait FrameOutput {
    /// Output length known without running the analyzer (1 for scalars)
    const FIXED_LEN: Option<usize>;

    /// Number of feature values in this output
    fn dimension(&self) -> usize;

    /// Append the feature values to `out` in component order
    fn write_into(&self, out: &mut Vec<f64>);
}

impl FrameOutput for f64 {
    const FIXED_LEN: Option<usize> = Some(1);

    fn dimension(&self) -> usize {
        1
    }

    fn write_into(&self, out: &mut Vec<f64>) {
        out.push(*self);
    }
}

impl FrameOutput for Vec<f64> {
    const FIXED_LEN: Option<usize> = None;

    fn dimension(&self) -> usize {
        self.len()
    }

    fn write_into(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(self);
    }
}

/// Pure function from one frame to a frame output
pub trait FrameAnalyzer {
    type Output: FrameOutput;

    /// Analyze a single frame
    fn analyze(&self, frame: &[f64]) -> Result<Self::Output>;

    /// Number of feature rows this analyzer produces, if known up-front
    ///
    /// Used to shape the feature matrix when the signal is too short to
    /// yield any frame.
    fn output_len(&self) -> Option<usize> {
        <Self::Output as FrameOutput>::FIXED_LEN
    }
}

impl<F, O> FrameAnalyzer for F
where
    F: Fn(&[f64]) -> Result<O>,
    O: FrameOutput,
{
    type Output = O;

    fn analyze(&self, frame: &[f64]) -> Result<O> {
        self(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(frame: &[f64]) -> Result<f64> {
        Ok(frame.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs())))
    }

    #[test]
    fn test_fn_item_is_analyzer() {
        assert_eq!(peak.analyze(&[0.5, -2.0, 1.0]).unwrap(), 2.0);
        assert_eq!(peak.output_len(), Some(1));
    }

    #[test]
    fn test_vector_closure_has_unknown_len() {
        let first_two = |frame: &[f64]| -> Result<Vec<f64>> { Ok(frame[..2].to_vec()) };

        assert_eq!(first_two.analyze(&[1.0, 2.0, 3.0]).unwrap(), vec![1.0, 2.0]);
        assert_eq!(first_two.output_len(), None);
    }

    #[test]
    fn test_output_write_order() {
        let mut out = Vec::new();
        3.0_f64.write_into(&mut out);
        vec![1.0, 2.0].write_into(&mut out);

        assert_eq!(out, vec![3.0, 1.0, 2.0]);
    }
}
