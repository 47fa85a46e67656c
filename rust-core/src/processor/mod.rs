//! Short-time processor
//!
//! Slides a fixed-length frame across a signal at a fixed hop, runs an
//! analyzer on every frame and collects the outputs into a
//! [`FeatureMatrix`].

pub mod config;
pub mod framing;
pub mod matrix;

pub use config::FramingConfig;
pub use framing::{duration_to_samples, num_frames, Frames};
pub use matrix::FeatureMatrix;

use crate::analyzers::FrameAnalyzer;
use crate::error::Result;
use log::{debug, trace};

/// Framewise analysis engine for a fixed framing configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortTimeProcessor {
    config: FramingConfig,
    frame_length: usize,
    hop_length: usize,
}

impl ShortTimeProcessor {
    /// Create a processor, resolving durations to sample counts
    ///
    /// # Errors
    /// `InvalidParameter` for non-positive rate or durations, or durations
    /// shorter than one sample
    pub fn new(config: FramingConfig) -> Result<Self> {
        config.validate()?;
        let frame_length =
            duration_to_samples("frame_duration", config.sample_rate, config.frame_duration)?;
        let hop_length =
            duration_to_samples("hop_duration", config.sample_rate, config.hop_duration)?;

        Ok(Self {
            config,
            frame_length,
            hop_length,
        })
    }

    pub fn config(&self) -> &FramingConfig {
        &self.config
    }

    /// Frame length in samples
    pub fn frame_length(&self) -> usize {
        self.frame_length
    }

    /// Hop length in samples
    pub fn hop_length(&self) -> usize {
        self.hop_length
    }

    /// Number of frames analysed for a signal of `len` samples
    pub fn num_frames(&self, len: usize) -> usize {
        num_frames(len, self.frame_length, self.hop_length)
    }

    /// Iterate over the frames of `signal` in temporal order
    pub fn frames<'a>(&self, signal: &'a [f64]) -> Frames<'a> {
        Frames::new(signal, self.frame_length, self.hop_length)
    }

    /// Start time in seconds of frame `index`
    pub fn frame_time(&self, index: usize) -> f64 {
        index as f64 * self.hop_length as f64 / self.config.sample_rate
    }

    /// Start time in seconds of each of `n_frames` frames
    pub fn frame_times(&self, n_frames: usize) -> Vec<f64> {
        (0..n_frames).map(|i| self.frame_time(i)).collect()
    }

    /// Run `analyzer` on every frame of `signal`
    ///
    /// Frames are analysed in index order and processing stops at the
    /// first analyzer error, which is returned unchanged.
    ///
    /// # Returns
    /// Matrix with one row per analyzer output component and one column
    /// per frame. A signal shorter than one frame gives zero columns and
    /// `analyzer.output_len()` rows (0 if unknown).
    pub fn process<A>(&self, signal: &[f64], analyzer: &A) -> Result<FeatureMatrix>
    where
        A: FrameAnalyzer + ?Sized,
    {
        let n_frames = self.num_frames(signal.len());
        debug!(
            "Short-time analysis: {} samples, frame_length={}, hop_length={}, {} frames",
            signal.len(),
            self.frame_length,
            self.hop_length,
            n_frames
        );

        let outputs = self
            .frames(signal)
            .enumerate()
            .map(|(index, frame)| {
                trace!("Analyzing frame {index}");
                analyzer.analyze(frame)
            })
            .collect::<Result<Vec<_>>>()?;

        FeatureMatrix::from_frame_outputs(&outputs, analyzer.output_len().unwrap_or(0))
    }

    /// Run `analyzer` on all frames concurrently
    ///
    /// Columns keep frame-index order regardless of completion order. If
    /// several frames fail, which error is returned is unspecified.
    #[cfg(feature = "parallel")]
    pub fn process_parallel<A>(&self, signal: &[f64], analyzer: &A) -> Result<FeatureMatrix>
    where
        A: FrameAnalyzer + Sync + ?Sized,
        A::Output: Send,
    {
        use rayon::prelude::*;

        let n_frames = self.num_frames(signal.len());
        debug!(
            "Parallel short-time analysis: {} samples, {} frames",
            signal.len(),
            n_frames
        );

        let outputs = (0..n_frames)
            .into_par_iter()
            .map(|index| {
                let start = index * self.hop_length;
                analyzer.analyze(&signal[start..start + self.frame_length])
            })
            .collect::<Result<Vec<_>>>()?;

        FeatureMatrix::from_frame_outputs(&outputs, analyzer.output_len().unwrap_or(0))
    }
}

/// One-shot short-time analysis
///
/// # Arguments
/// * `signal` - Input samples
/// * `analyzer` - Per-frame analyzer (extra parameters bound beforehand)
/// * `sample_rate` - Sample rate in Hz
/// * `frame_duration` - Frame length in seconds
/// * `hop_duration` - Hop in seconds
pub fn short_time_process<A>(
    signal: &[f64],
    analyzer: &A,
    sample_rate: f64,
    frame_duration: f64,
    hop_duration: f64,
) -> Result<FeatureMatrix>
where
    A: FrameAnalyzer + ?Sized,
{
    ShortTimeProcessor::new(FramingConfig::new(sample_rate, frame_duration, hop_duration))?
        .process(signal, analyzer)
}
