use ndarray::{Array1, ArrayView1};

use super::{Poly10Axis, Poly10Coefficients, EXPONENTS, POLY10_DEGREE};
use crate::error::Result;
use crate::ops::view::map_points;

type Powers = [f64; POLY10_DEGREE + 1];

/// `[1, v, v², ..., v¹⁰]`
fn powers(v: f64) -> Powers {
    let mut p = [1.0; POLY10_DEGREE + 1];
    for i in 1..p.len() {
        p[i] = p[i - 1] * v;
    }
    p
}

/// `P = Σ_k c[k]·x^i·y^j` with `(i, j)` the exponents of term `k`.
pub fn poly10_2d(
    c: &Poly10Coefficients,
    x: &ArrayView1<f64>,
    y: &ArrayView1<f64>,
) -> Result<Array1<f64>> {
    log::trace!("poly10_2d: {} points", x.len());
    map_points(x, y, |xi, yi| value_at(&c.0, xi, yi))
}

/// Power-rule derivative of [`poly10_2d`] along `axis`.
pub fn poly10_grad(
    c: &Poly10Coefficients,
    x: &ArrayView1<f64>,
    y: &ArrayView1<f64>,
    axis: Poly10Axis,
) -> Result<Array1<f64>> {
    log::trace!("poly10_grad({}): {} points", axis, x.len());
    match axis {
        Poly10Axis::Dx => map_points(x, y, |xi, yi| dx_at(&c.0, xi, yi)),
        Poly10Axis::Dy => map_points(x, y, |xi, yi| dy_at(&c.0, xi, yi)),
    }
}

fn value_at(c: &[f64], x: f64, y: f64) -> f64 {
    let (px, py) = (powers(x), powers(y));
    EXPONENTS
        .iter()
        .zip(c)
        .map(|(&(i, j), &ck)| ck * px[i] * py[j])
        .sum()
}

fn dx_at(c: &[f64], x: f64, y: f64) -> f64 {
    let (px, py) = (powers(x), powers(y));
    EXPONENTS
        .iter()
        .zip(c)
        .filter(|&(&(i, _), _)| i > 0)
        .map(|(&(i, j), &ck)| ck * i as f64 * px[i - 1] * py[j])
        .sum()
}

fn dy_at(c: &[f64], x: f64, y: f64) -> f64 {
    let (px, py) = (powers(x), powers(y));
    EXPONENTS
        .iter()
        .zip(c)
        .filter(|&(&(_, j), _)| j > 0)
        .map(|(&(i, j), &ck)| ck * j as f64 * px[i] * py[j - 1])
        .sum()
}
