#[macro_use]
mod macros;

mod errors;
mod poly10;
mod zernike;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// Annular Zernike and poly10 surface kernels.
#[pymodule]
pub fn _rust(py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // Exceptions
    errors::register(py, m)?;
    // Annular Zernike surface, Jacobian and gradients
    zernike::register(m)?;
    // Off-axis distortion polynomial
    poly10::register(m)?;
    Ok(())
}
