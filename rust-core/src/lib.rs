//! Framewise - Short-Time Audio Feature Analysis
//! 
//! Slides a fixed-length frame across a signal, applies a per-frame
//! analyzer (energy, magnitude, zero crossings, autocorrelation, DFT
//! magnitude or any closure) and returns a feature-by-time matrix.
//! Optional Python bindings behind the `python` feature.
//!
//! ```
//! use framewise::{analyzers::Energy, FramingConfig, ShortTimeProcessor};
//!
//! let processor = ShortTimeProcessor::new(FramingConfig::default()).unwrap();
//! let features = processor.process(&vec![2.0; 16000], &Energy).unwrap();
//! assert_eq!(features.shape(), (1, 48));
//! ```

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod analyzers;
pub mod error;
pub mod processor;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use analyzers::{FrameAnalyzer, FrameOutput};
pub use error::{FeatureError, Result};
pub use processor::{short_time_process, FeatureMatrix, FramingConfig, ShortTimeProcessor};
pub use spectrum::DftMagnitude;
