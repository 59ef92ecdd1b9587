//! Annular Zernike and degree-10 polynomial surface kernels.
//!
//! Closed-form 2-D surface models evaluated over arbitrary sample coordinates,
//! with their exact analytic derivatives:
//!
//! - [`zernike`]: 28 annular Zernike modes, first/second-order Jacobian terms
//!   and five directional gradients.
//! - [`poly10`]: the 66-term bivariate polynomial and its x/y gradients.
//!
//! Every evaluator borrows its inputs as [`ndarray`] views, makes one parallel
//! pass over the points and returns a freshly allocated array. With the
//! `python` feature the same kernels are exported as the `_rust` extension
//! module.

pub mod error;
pub mod ops;
pub mod poly10;
pub mod zernike;

#[cfg(feature = "python")]
mod bindings;

pub use error::{KernelError, Result};
pub use poly10::{
    poly10_2d, poly10_exponents, poly10_grad, poly10_index, Poly10Axis, Poly10Coefficients,
    POLY10_DEGREE, POLY10_TERMS,
};
pub use zernike::{
    basis_value, zernike_annular_eval, zernike_annular_grad, zernike_annular_jacobian,
    zernike_eval, zernike_grad, zernike_jacobian, GradientAxis, JacobianOrder, Obscuration,
    ZernikeCoefficients, ZernikeMode, ZERNIKE_TERMS,
};
