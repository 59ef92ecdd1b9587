use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::KernelError;

create_exception!(
    _rust,
    ShapeError,
    PyValueError,
    "An input array is not one-dimensional, or x and y differ in length."
);
create_exception!(
    _rust,
    ArgumentError,
    PyValueError,
    "An order or axis token was not recognized."
);
create_exception!(
    _rust,
    DomainError,
    PyValueError,
    "A value lies outside the domain the kernels are defined on."
);

impl From<KernelError> for PyErr {
    fn from(err: KernelError) -> PyErr {
        match err {
            KernelError::Shape(msg) => ShapeError::new_err(msg),
            KernelError::Argument(msg) => ArgumentError::new_err(msg),
            KernelError::Domain(msg) => DomainError::new_err(msg),
        }
    }
}

pub fn register(py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add("ShapeError", py.get_type::<ShapeError>())?;
    m.add("ArgumentError", py.get_type::<ArgumentError>())?;
    m.add("DomainError", py.get_type::<DomainError>())?;
    Ok(())
}
