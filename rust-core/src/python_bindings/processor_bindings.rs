//! Python bindings for the short-time processor

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use crate::analyzers::{Autocorrelation, Energy, FrameAnalyzer, Magnitude, ZeroCrossing};
use crate::processor::{FramingConfig, ShortTimeProcessor};
use crate::spectrum::{DftMagnitude, DEFAULT_N_FFT};
use super::analyzer_bindings::PyCallableAnalyzer;

/// Apply func to every frame of full_utterance and return a 2-D array
///
/// Args:
///     full_utterance: Signal as numpy array
///     func: Callable taking a frame (plus *args, **kwargs)
///     sr: Sample rate in Hz (default: 16000)
///     frame_dur: Frame length in seconds (default: 0.04)
///     hop_dur: Hop in seconds (default: 0.02)
///
/// Returns:
///     Array of shape (features, frames)
#[pyfunction]
#[pyo3(signature = (full_utterance, func, sr=16000.0, frame_dur=0.04, hop_dur=0.02, *args, **kwargs))]
#[allow(clippy::too_many_arguments)]
pub fn short_time_processor<'py>(
    py: Python<'py>,
    full_utterance: PyReadonlyArray1<f64>,
    func: &'py PyAny,
    sr: f64,
    frame_dur: f64,
    hop_dur: f64,
    args: &'py PyTuple,
    kwargs: Option<&'py PyDict>,
) -> PyResult<&'py PyArray2<f64>> {
    let processor = ShortTimeProcessor::new(FramingConfig::new(sr, frame_dur, hop_dur))?;
    let analyzer = PyCallableAnalyzer::new(py, func, args, kwargs)?;
    run(py, &processor, full_utterance, &analyzer)
}

fn run<'py, A: FrameAnalyzer>(
    py: Python<'py>,
    processor: &ShortTimeProcessor,
    signal: PyReadonlyArray1<f64>,
    analyzer: &A,
) -> PyResult<&'py PyArray2<f64>> {
    let matrix = processor.process(signal.as_slice()?, analyzer)?;
    Ok(matrix.into_array().into_pyarray(py))
}

/// Short-time processor exposed to Python
#[pyclass(name = "ShortTimeProcessor")]
pub struct PyShortTimeProcessor {
    processor: ShortTimeProcessor,
}

#[pymethods]
impl PyShortTimeProcessor {
    /// Create a new processor
    ///
    /// Args:
    ///     sample_rate: Sample rate in Hz
    ///     frame_duration: Frame length in seconds
    ///     hop_duration: Hop in seconds
    #[new]
    #[pyo3(signature = (sample_rate=16000.0, frame_duration=0.04, hop_duration=0.02))]
    fn new(sample_rate: f64, frame_duration: f64, hop_duration: f64) -> PyResult<Self> {
        let config = FramingConfig::new(sample_rate, frame_duration, hop_duration);
        Ok(Self {
            processor: ShortTimeProcessor::new(config)?,
        })
    }

    #[getter]
    fn frame_length(&self) -> usize {
        self.processor.frame_length()
    }

    #[getter]
    fn hop_length(&self) -> usize {
        self.processor.hop_length()
    }

    #[getter]
    fn sample_rate(&self) -> f64 {
        self.processor.config().sample_rate
    }

    /// Number of frames analysed for a signal of the given length
    fn num_frames(&self, length: usize) -> usize {
        self.processor.num_frames(length)
    }

    /// Start time in seconds of each frame
    fn frame_times<'py>(&self, py: Python<'py>, n_frames: usize) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.processor.frame_times(n_frames))
    }

    /// Per-frame energy, shape (1, frames)
    fn energy<'py>(&self, py: Python<'py>, signal: PyReadonlyArray1<f64>) -> PyResult<&'py PyArray2<f64>> {
        run(py, &self.processor, signal, &Energy)
    }

    /// Per-frame magnitude, shape (1, frames)
    fn magnitude<'py>(&self, py: Python<'py>, signal: PyReadonlyArray1<f64>) -> PyResult<&'py PyArray2<f64>> {
        run(py, &self.processor, signal, &Magnitude)
    }

    /// Per-frame zero-crossing count, shape (1, frames)
    fn zero_crossing<'py>(&self, py: Python<'py>, signal: PyReadonlyArray1<f64>) -> PyResult<&'py PyArray2<f64>> {
        run(py, &self.processor, signal, &ZeroCrossing)
    }

    /// Per-frame autocorrelation, shape (max_lag, frames)
    fn autocorrelation<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        max_lag: usize,
    ) -> PyResult<&'py PyArray2<f64>> {
        run(py, &self.processor, signal, &Autocorrelation::new(max_lag)?)
    }

    /// Per-frame DFT magnitude, shape (n_fft // 2, frames)
    #[pyo3(signature = (signal, n_fft=DEFAULT_N_FFT))]
    fn dft<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        n_fft: usize,
    ) -> PyResult<&'py PyArray2<f64>> {
        run(py, &self.processor, signal, &DftMagnitude::new(n_fft)?)
    }

    /// Apply an arbitrary Python callable to every frame
    #[pyo3(signature = (signal, func, *args, **kwargs))]
    fn process<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        func: &'py PyAny,
        args: &'py PyTuple,
        kwargs: Option<&'py PyDict>,
    ) -> PyResult<&'py PyArray2<f64>> {
        let analyzer = PyCallableAnalyzer::new(py, func, args, kwargs)?;
        run(py, &self.processor, signal, &analyzer)
    }
}
