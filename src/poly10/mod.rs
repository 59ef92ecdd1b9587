//! # Degree-10 bivariate polynomial
//!
//! The full monomial basis `x^i y^j`, `i + j <= 10`, used upstream to model
//! off-axis distortion. Terms are graded by total degree and, inside a degree,
//! ordered by descending power of `x`:
//!
//! ```text
//! 1, x, y, x², xy, y², x³, x²y, xy², y³, ...
//! ```

use std::fmt;
use std::str::FromStr;

use ndarray::ArrayView1;

use crate::error::{KernelError, Result};

pub mod evaluate;

#[cfg(test)]
mod tests;

pub use self::evaluate::{poly10_2d, poly10_grad};

/// Highest total degree.
pub const POLY10_DEGREE: usize = 10;

/// Number of monomials of total degree at most [`POLY10_DEGREE`].
pub const POLY10_TERMS: usize = (POLY10_DEGREE + 1) * (POLY10_DEGREE + 2) / 2;

/// `(i, j)` exponents of term `k`, i.e. the monomial `x^i y^j`.
pub(crate) const EXPONENTS: [(usize, usize); POLY10_TERMS] = exponent_table();

const fn exponent_table() -> [(usize, usize); POLY10_TERMS] {
    let mut table = [(0, 0); POLY10_TERMS];
    let mut k = 0;
    let mut d = 0;
    while d <= POLY10_DEGREE {
        let mut j = 0;
        while j <= d {
            table[k] = (d - j, j);
            k += 1;
            j += 1;
        }
        d += 1;
    }
    table
}

/// Position of the monomial `x^(d-j) y^j` in the coefficient vector.
pub fn poly10_index(d: usize, j: usize) -> Result<usize> {
    if d > POLY10_DEGREE || j > d {
        return Err(KernelError::domain(format!(
            "no poly10 term of degree {} with y-power {}",
            d, j
        )));
    }
    Ok(d * (d + 1) / 2 + j)
}

/// Inverse of [`poly10_index`]: the `(x, y)` exponents of term `k`.
pub fn poly10_exponents(k: usize) -> Result<(usize, usize)> {
    EXPONENTS.get(k).copied().ok_or_else(|| {
        KernelError::domain(format!(
            "poly10 term index {} is out of range 0..{}",
            k, POLY10_TERMS
        ))
    })
}

/// Exactly 66 coefficients in graded order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poly10Coefficients(pub [f64; POLY10_TERMS]);

impl Poly10Coefficients {
    pub fn zeros() -> Self {
        Self([0.0; POLY10_TERMS])
    }

    pub fn from_slice(coeffs: &[f64]) -> Result<Self> {
        check_len(coeffs.len())?;
        let mut c = Self::zeros();
        c.0.copy_from_slice(coeffs);
        Ok(c)
    }

    pub fn from_view(coeffs: &ArrayView1<f64>) -> Result<Self> {
        check_len(coeffs.len())?;
        let mut c = Self::zeros();
        for (dst, &src) in c.0.iter_mut().zip(coeffs.iter()) {
            *dst = src;
        }
        Ok(c)
    }

    pub fn as_array(&self) -> &[f64; POLY10_TERMS] {
        &self.0
    }
}

fn check_len(len: usize) -> Result<()> {
    if len != POLY10_TERMS {
        return Err(KernelError::domain(format!(
            "poly10 needs exactly {} coefficients, got {}",
            POLY10_TERMS, len
        )));
    }
    Ok(())
}

impl Default for Poly10Coefficients {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f64; POLY10_TERMS]> for Poly10Coefficients {
    fn from(c: [f64; POLY10_TERMS]) -> Self {
        Self(c)
    }
}

/// Selector for [`poly10_grad`]. Only first derivatives exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Poly10Axis {
    Dx,
    Dy,
}

impl FromStr for Poly10Axis {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dx" => Ok(Poly10Axis::Dx),
            "dy" => Ok(Poly10Axis::Dy),
            other => Err(KernelError::argument(format!(
                "unknown poly10 axis {:?}, expected \"dx\" or \"dy\"",
                other
            ))),
        }
    }
}

impl fmt::Display for Poly10Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Poly10Axis::Dx => f.write_str("dx"),
            Poly10Axis::Dy => f.write_str("dy"),
        }
    }
}
