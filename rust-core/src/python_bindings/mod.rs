//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use crate::error::FeatureError;

mod analyzer_bindings;
mod processor_bindings;

impl From<FeatureError> for PyErr {
    fn from(err: FeatureError) -> Self {
        match err {
            // Exceptions raised by Python analyzers surface unchanged
            FeatureError::Analyzer(source) => match source.downcast::<PyErr>() {
                Ok(py_err) => *py_err,
                Err(other) => PyRuntimeError::new_err(other.to_string()),
            },
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Python module definition
#[pymodule]
fn framewise(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(processor_bindings::short_time_processor, m)?)?;
    m.add_function(wrap_pyfunction!(analyzer_bindings::frame_energy, m)?)?;
    m.add_function(wrap_pyfunction!(analyzer_bindings::frame_magnitude, m)?)?;
    m.add_function(wrap_pyfunction!(analyzer_bindings::frame_zero_crossing, m)?)?;
    m.add_function(wrap_pyfunction!(analyzer_bindings::frame_autocorrelation, m)?)?;
    m.add_function(wrap_pyfunction!(analyzer_bindings::frame_dft, m)?)?;

    m.add_class::<processor_bindings::PyShortTimeProcessor>()?;

    Ok(())
}
