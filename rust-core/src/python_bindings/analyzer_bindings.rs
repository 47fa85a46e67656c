//! Python bindings for the per-frame analyzers

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};
use numpy::{PyArray1, PyReadonlyArray1};
use crate::analyzers::{self, FrameAnalyzer};
use crate::error::{FeatureError, Result};
use crate::spectrum::{self, DEFAULT_N_FFT};

/// Mean power of a frame
///
/// Args:
///     frame: Frame samples as numpy array
#[pyfunction]
pub fn frame_energy(frame: PyReadonlyArray1<f64>) -> PyResult<f64> {
    Ok(analyzers::energy(frame.as_slice()?)?)
}

/// Mean absolute amplitude of a frame
#[pyfunction]
pub fn frame_magnitude(frame: PyReadonlyArray1<f64>) -> PyResult<f64> {
    Ok(analyzers::magnitude(frame.as_slice()?)?)
}

/// Number of sign changes between consecutive samples
#[pyfunction]
pub fn frame_zero_crossing(frame: PyReadonlyArray1<f64>) -> PyResult<usize> {
    Ok(analyzers::zero_crossings(frame.as_slice()?))
}

/// Unnormalised autocorrelation for lags 0..k
///
/// Args:
///     frame: Frame samples as numpy array
///     k: Number of lags
///
/// Returns:
///     Autocorrelation values as numpy array of length k
#[pyfunction]
pub fn frame_autocorrelation<'py>(
    py: Python<'py>,
    frame: PyReadonlyArray1<f64>,
    k: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let values = analyzers::autocorrelation(frame.as_slice()?, k)?;
    Ok(PyArray1::from_vec(py, values))
}

/// Direct DFT magnitude, n_fft // 2 bins
///
/// Args:
///     frame: Frame samples as numpy array
///     n_fft: DFT size (default: 1024)
#[pyfunction]
#[pyo3(signature = (frame, n_fft=DEFAULT_N_FFT))]
pub fn frame_dft<'py>(
    py: Python<'py>,
    frame: PyReadonlyArray1<f64>,
    n_fft: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let values = spectrum::dft_magnitude(frame.as_slice()?, n_fft)?;
    Ok(PyArray1::from_vec(py, values))
}

/// Python callable used as a frame analyzer
///
/// Each frame is passed as a numpy array followed by the bound positional
/// and keyword arguments. The callable may return a number or anything
/// `numpy.asarray(..., dtype=float64)` turns into a 1-D array: lists,
/// tuples, integer or float32 arrays.
pub struct PyCallableAnalyzer<'py> {
    py: Python<'py>,
    func: &'py PyAny,
    args: &'py PyTuple,
    kwargs: Option<&'py PyDict>,
    asarray: &'py PyAny,
}

impl<'py> PyCallableAnalyzer<'py> {
    pub fn new(
        py: Python<'py>,
        func: &'py PyAny,
        args: &'py PyTuple,
        kwargs: Option<&'py PyDict>,
    ) -> PyResult<Self> {
        if !func.is_callable() {
            return Err(pyo3::exceptions::PyTypeError::new_err(
                "analyzer must be callable",
            ));
        }
        let asarray = py.import("numpy")?.getattr("asarray")?;
        Ok(Self { py, func, args, kwargs, asarray })
    }

    fn call(&self, frame: &[f64]) -> PyResult<Vec<f64>> {
        let frame_array: &PyAny = PyArray1::from_slice(self.py, frame);

        let mut call_args: Vec<&PyAny> = Vec::with_capacity(self.args.len() + 1);
        call_args.push(frame_array);
        call_args.extend(self.args.iter());

        let output = self.func.call(PyTuple::new(self.py, call_args), self.kwargs)?;

        // Arrays first: a size-1 array would otherwise coerce to a float
        if let Ok(array) = output.extract::<PyReadonlyArray1<f64>>() {
            return Ok(array.as_array().to_vec());
        }
        let converted = self.asarray.call1((output, "float64"))?;
        if let Ok(array) = converted.extract::<PyReadonlyArray1<f64>>() {
            return Ok(array.as_array().to_vec());
        }
        // 0-d array from a plain number
        Ok(vec![converted.extract::<f64>()?])
    }
}

impl FrameAnalyzer for PyCallableAnalyzer<'_> {
    type Output = Vec<f64>;

    fn analyze(&self, frame: &[f64]) -> Result<Vec<f64>> {
        self.call(frame).map_err(FeatureError::analyzer)
    }
}
