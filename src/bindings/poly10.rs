use pyo3::prelude::*;

use crate::poly10::{poly10_2d, poly10_grad, Poly10Axis, Poly10Coefficients};

create_binding!(poly10_2D, Poly10Coefficients, poly10_2d, [c, x, y]);
create_binding!(
    poly10Grad,
    Poly10Coefficients,
    poly10_grad,
    [c, x, y, axis: Poly10Axis]
);

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(poly10_2D, m)?)?;
    m.add_function(wrap_pyfunction!(poly10Grad, m)?)?;
    Ok(())
}
