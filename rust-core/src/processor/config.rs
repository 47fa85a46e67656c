//! Framing configuration

use crate::error::{FeatureError, Result};
use serde::{Deserialize, Serialize};

/// Framing parameters for short-time analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Frame length in seconds
    pub frame_duration: f64,

    /// Hop between consecutive frame starts in seconds
    pub hop_duration: f64,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16000.0,
            frame_duration: 0.04,
            hop_duration: 0.02,
        }
    }
}

impl FramingConfig {
    pub fn new(sample_rate: f64, frame_duration: f64, hop_duration: f64) -> Self {
        Self {
            sample_rate,
            frame_duration,
            hop_duration,
        }
    }

    /// Reject non-positive or non-finite rate and durations
    pub fn validate(&self) -> Result<()> {
        require_positive("sample_rate", self.sample_rate)?;
        require_positive("frame_duration", self.frame_duration)?;
        require_positive("hop_duration", self.hop_duration)
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FeatureError::invalid_parameter(
            name,
            format!("must be a positive finite number, got {value}"),
        ))
    }
}
