//! # Annular Zernike polynomials
//!
//! 28 annular Zernike modes (radial orders 0 to 6), orthonormal over the
//! annulus `e <= r <= 1`, together with their analytic gradients and the
//! first/second-order Jacobian terms used by the wavefront pipeline.
//!
//! Every evaluator builds one [`Normalization`] table per call and then makes a
//! single parallel pass over the sample points.

use std::fmt;
use std::str::FromStr;

use ndarray::ArrayView1;

use crate::error::{KernelError, Result};

pub mod gradient;
pub mod jacobian;
pub mod surface;

mod harmonic;
mod normalization;

#[cfg(test)]
mod tests;

pub use self::gradient::{zernike_annular_grad, zernike_grad};
pub use self::jacobian::{zernike_annular_jacobian, zernike_jacobian};
pub use self::normalization::Normalization;
pub use self::surface::{basis_value, zernike_annular_eval, zernike_eval};

/// Number of annular Zernike modes evaluated by this crate.
pub const ZERNIKE_TERMS: usize = 28;

/// Fixed-length coefficient vector, index `k` weighting mode `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZernikeCoefficients(pub [f64; ZERNIKE_TERMS]);

impl ZernikeCoefficients {
    pub fn zeros() -> Self {
        Self([0.0; ZERNIKE_TERMS])
    }

    /// Unit vector selecting a single mode.
    pub fn unit(k: usize) -> Result<Self> {
        if k >= ZERNIKE_TERMS {
            return Err(KernelError::domain(format!(
                "mode index {} is out of range 0..{}",
                k, ZERNIKE_TERMS
            )));
        }
        let mut z = Self::zeros();
        z.0[k] = 1.0;
        Ok(z)
    }

    /// Takes the first 28 entries of `coeffs`; anything beyond is ignored.
    pub fn from_slice(coeffs: &[f64]) -> Result<Self> {
        if coeffs.len() < ZERNIKE_TERMS {
            return Err(KernelError::domain(format!(
                "expected at least {} Zernike coefficients, got {}",
                ZERNIKE_TERMS,
                coeffs.len()
            )));
        }
        let mut z = Self::zeros();
        z.0.copy_from_slice(&coeffs[..ZERNIKE_TERMS]);
        Ok(z)
    }

    /// Same contract as [`from_slice`](Self::from_slice) for a (possibly strided) view.
    pub fn from_view(coeffs: &ArrayView1<f64>) -> Result<Self> {
        if coeffs.len() < ZERNIKE_TERMS {
            return Err(KernelError::domain(format!(
                "expected at least {} Zernike coefficients, got {}",
                ZERNIKE_TERMS,
                coeffs.len()
            )));
        }
        let mut z = Self::zeros();
        for (dst, &src) in z.0.iter_mut().zip(coeffs.iter()) {
            *dst = src;
        }
        Ok(z)
    }

    /// Zero-pads a short vector up to 28 terms. Longer vectors are rejected
    /// since the higher modes are not implemented.
    pub fn padded(coeffs: &[f64]) -> Result<Self> {
        if coeffs.len() > ZERNIKE_TERMS {
            return Err(KernelError::domain(format!(
                "Zernike functions are not implemented for more than {} terms, got {}",
                ZERNIKE_TERMS,
                coeffs.len()
            )));
        }
        let mut z = Self::zeros();
        z.0[..coeffs.len()].copy_from_slice(coeffs);
        Ok(z)
    }

    pub fn as_array(&self) -> &[f64; ZERNIKE_TERMS] {
        &self.0
    }
}

impl Default for ZernikeCoefficients {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f64; ZERNIKE_TERMS]> for ZernikeCoefficients {
    fn from(z: [f64; ZERNIKE_TERMS]) -> Self {
        Self(z)
    }
}

/// Central obscuration ratio, checked to lie in `[0, 1)`.
///
/// The evaluators themselves take a bare `f64` and do not check it; values
/// outside the range produce NaN/Inf. Build an `Obscuration` first when the
/// caller wants the check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Obscuration(f64);

impl Obscuration {
    pub fn new(e: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&e) {
            return Err(KernelError::domain(format!(
                "obscuration must lie in [0, 1), got {}",
                e
            )));
        }
        Ok(Self(e))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Selector for [`zernike_annular_jacobian`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JacobianOrder {
    First,
    Second,
}

impl FromStr for JacobianOrder {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1st" => Ok(JacobianOrder::First),
            "2nd" => Ok(JacobianOrder::Second),
            other => Err(KernelError::argument(format!(
                "unknown Jacobian order {:?}, expected \"1st\" or \"2nd\"",
                other
            ))),
        }
    }
}

impl fmt::Display for JacobianOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JacobianOrder::First => f.write_str("1st"),
            JacobianOrder::Second => f.write_str("2nd"),
        }
    }
}

/// Selector for [`zernike_annular_grad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientAxis {
    /// ∂/∂x
    Dx,
    /// ∂/∂y
    Dy,
    /// ∂²/∂x²
    Dxx,
    /// ∂²/∂y²
    Dyy,
    /// ∂²/∂x∂y
    Dxy,
}

impl FromStr for GradientAxis {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dx" => Ok(GradientAxis::Dx),
            "dy" => Ok(GradientAxis::Dy),
            "dx2" => Ok(GradientAxis::Dxx),
            "dy2" => Ok(GradientAxis::Dyy),
            "dxy" => Ok(GradientAxis::Dxy),
            other => Err(KernelError::argument(format!(
                "unknown gradient axis {:?}, expected one of \"dx\", \"dy\", \"dx2\", \"dy2\", \"dxy\"",
                other
            ))),
        }
    }
}

impl fmt::Display for GradientAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            GradientAxis::Dx => "dx",
            GradientAxis::Dy => "dy",
            GradientAxis::Dxx => "dx2",
            GradientAxis::Dyy => "dy2",
            GradientAxis::Dxy => "dxy",
        };
        f.write_str(token)
    }
}

/// Angular factor of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Angular {
    /// Rotationally symmetric (piston, defocus, sphericals).
    None,
    Cos,
    Sin,
}

/// Radial order `n`, azimuthal frequency `m` and angular factor of one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZernikeMode {
    pub index: usize,
    pub n: u32,
    pub m: u32,
    pub angular: Angular,
}

const fn mode(index: usize, n: u32, m: u32, angular: Angular) -> ZernikeMode {
    ZernikeMode {
        index,
        n,
        m,
        angular,
    }
}

/// Index → (n, m, angular) for all 28 modes.
///
/// Within each `(n, m)` pair the sin/cos order is not uniform (e.g. mode 4 is
/// `sin 2θ` but mode 11 is `cos 2θ`), so callers must go through this table
/// rather than assume a pattern.
pub const MODES: [ZernikeMode; ZERNIKE_TERMS] = [
    mode(0, 0, 0, Angular::None),
    mode(1, 1, 1, Angular::Cos),
    mode(2, 1, 1, Angular::Sin),
    mode(3, 2, 0, Angular::None),
    mode(4, 2, 2, Angular::Sin),
    mode(5, 2, 2, Angular::Cos),
    mode(6, 3, 1, Angular::Sin),
    mode(7, 3, 1, Angular::Cos),
    mode(8, 3, 3, Angular::Sin),
    mode(9, 3, 3, Angular::Cos),
    mode(10, 4, 0, Angular::None),
    mode(11, 4, 2, Angular::Cos),
    mode(12, 4, 2, Angular::Sin),
    mode(13, 4, 4, Angular::Cos),
    mode(14, 4, 4, Angular::Sin),
    mode(15, 5, 1, Angular::Cos),
    mode(16, 5, 1, Angular::Sin),
    mode(17, 5, 3, Angular::Cos),
    mode(18, 5, 3, Angular::Sin),
    mode(19, 5, 5, Angular::Cos),
    mode(20, 5, 5, Angular::Sin),
    mode(21, 6, 0, Angular::None),
    mode(22, 6, 2, Angular::Sin),
    mode(23, 6, 2, Angular::Cos),
    mode(24, 6, 4, Angular::Sin),
    mode(25, 6, 4, Angular::Cos),
    mode(26, 6, 6, Angular::Sin),
    mode(27, 6, 6, Angular::Cos),
];

impl ZernikeMode {
    pub fn from_index(k: usize) -> Result<Self> {
        MODES.get(k).copied().ok_or_else(|| {
            KernelError::domain(format!(
                "mode index {} is out of range 0..{}",
                k, ZERNIKE_TERMS
            ))
        })
    }
}
