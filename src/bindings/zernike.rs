use pyo3::prelude::*;

use crate::zernike::{
    zernike_annular_eval, zernike_annular_grad, zernike_annular_jacobian, GradientAxis,
    JacobianOrder, ZernikeCoefficients,
};

create_binding!(
    zernikeAnnularEval,
    ZernikeCoefficients,
    zernike_annular_eval,
    [z, x, y, e]
);
create_binding!(
    zernikeAnnularJacobian,
    ZernikeCoefficients,
    zernike_annular_jacobian,
    [z, x, y, e, atype: JacobianOrder]
);
create_binding!(
    zernikeAnnularGrad,
    ZernikeCoefficients,
    zernike_annular_grad,
    [z, x, y, e, axis: GradientAxis]
);

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(zernikeAnnularEval, m)?)?;
    m.add_function(wrap_pyfunction!(zernikeAnnularJacobian, m)?)?;
    m.add_function(wrap_pyfunction!(zernikeAnnularGrad, m)?)?;
    Ok(())
}
