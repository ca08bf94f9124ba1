// Python-binding (pyo3). Alt inn/ut går som JSON-strenger.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::json_api::{
    call_read_package_from_json, call_report_packages_from_json, call_training_info_from_json,
};

#[pyfunction]
fn read_package_json(code: &str, data_json: &str) -> PyResult<String> {
    call_read_package_from_json(code, data_json).map_err(PyValueError::new_err)
}

#[pyfunction]
fn training_info_json(code: &str, data_json: &str) -> PyResult<String> {
    call_training_info_from_json(code, data_json).map_err(PyValueError::new_err)
}

#[pyfunction]
fn report_packages_json(packages_json: &str) -> PyResult<Vec<String>> {
    call_report_packages_from_json(packages_json).map_err(PyValueError::new_err)
}

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_package_json, m)?)?;
    m.add_function(wrap_pyfunction!(training_info_json, m)?)?;
    m.add_function(wrap_pyfunction!(report_packages_json, m)?)?;
    Ok(())
}
