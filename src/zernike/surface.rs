use ndarray::{Array1, ArrayView1};

use super::{Normalization, ZernikeCoefficients, ZernikeMode};
use crate::error::Result;
use crate::ops::view::map_points;

/// Wavefront surface `S = Σ_k z[k]·Z_k(x, y; e)` over the annulus with
/// obscuration `e`.
///
/// `e` is not range-checked; see [`Obscuration`](super::Obscuration).
pub fn zernike_annular_eval(
    z: &ZernikeCoefficients,
    x: &ArrayView1<f64>,
    y: &ArrayView1<f64>,
    e: f64,
) -> Result<Array1<f64>> {
    log::trace!("zernike_annular_eval: {} points, e = {}", x.len(), e);
    let norm = Normalization::new(e);
    map_points(x, y, |xi, yi| surface_at(&z.0, &norm, xi, yi))
}

/// Standard (unobscured) Zernike surface.
pub fn zernike_eval(
    z: &ZernikeCoefficients,
    x: &ArrayView1<f64>,
    y: &ArrayView1<f64>,
) -> Result<Array1<f64>> {
    zernike_annular_eval(z, x, y, 0.0)
}

/// Value of a single mode at one point.
pub fn basis_value(mode: ZernikeMode, x: f64, y: f64, e: f64) -> f64 {
    let mut z = [0.0; super::ZERNIKE_TERMS];
    z[mode.index] = 1.0;
    surface_at(&z, &Normalization::new(e), x, y)
}

pub(crate) fn surface_at(z: &[f64; 28], n: &Normalization, x: f64, y: f64) -> f64 {
    let (e2, e4, e6, e8) = (n.e2, n.e4, n.e6, n.e8);

    let r2 = x * x + y * y;
    let r = r2.sqrt();
    let r3 = r2 * r;
    let r4 = r2 * r2;
    let r5 = r3 * r2;
    let r6 = r3 * r3;

    let t = y.atan2(x);
    let (s1, c1) = t.sin_cos();
    let (s2, c2) = (2.0 * t).sin_cos();
    let (s3, c3) = (3.0 * t).sin_cos();
    let (s4, c4) = (4.0 * t).sin_cos();
    let (s5, c5) = (5.0 * t).sin_cos();
    let (s6, c6) = (6.0 * t).sin_cos();

    let mut s = z[0];

    let rnl = 2.0 * r / n.tilt;
    s += z[1] * rnl * c1;
    s += z[2] * rnl * s1;

    s += z[3] * n.sqrt3 * (2.0 * r2 - 1.0 - e2) / n.defocus;

    let rnl = n.sqrt6 * r2 / n.astig;
    s += z[4] * rnl * s2;
    s += z[5] * rnl * c2;

    let rnl = n.sqrt8 * (3.0 * r3 - 2.0 * r - 2.0 * e4 * r + e2 * r * (3.0 * r2 - 2.0)) / n.coma;
    s += z[6] * rnl * s1;
    s += z[7] * rnl * c1;

    let rnl = n.sqrt8 * r3 / n.trefoil;
    s += z[8] * rnl * s3;
    s += z[9] * rnl * c3;

    s += z[10] * n.sqrt5 * (6.0 * r4 - 6.0 * r2 + 1.0 + e4 + e2 * (4.0 - 6.0 * r2))
        / n.spherical;

    let rnl = n.sqrt10
        * (4.0 * r4 - 3.0 * r2 - 3.0 * e6 * r2 - e2 * r2 * (3.0 - 4.0 * r2)
            - e4 * r2 * (3.0 - 4.0 * r2))
        * n.astig2_num
        / n.astig2_den;
    s += z[11] * rnl * c2;
    s += z[12] * rnl * s2;

    let rnl = n.sqrt10 * r4 / n.tetrafoil;
    s += z[13] * rnl * c4;
    s += z[14] * rnl * s4;

    let q = 10.0 * r5 - 12.0 * r3 + 3.0 * r + 3.0 * e8 * r - 12.0 * e6 * r * (r2 - 1.0)
        + 2.0 * e4 * r * (15.0 - 24.0 * r2 + 5.0 * r4)
        + 4.0 * e2 * r * (3.0 - 12.0 * r2 + 10.0 * r4);
    let rnl = n.sqrt12 * n.coma2_num * q / n.coma2_den;
    s += z[15] * rnl * c1;
    s += z[16] * rnl * s1;

    let q = r3
        * (5.0 * r2 - 4.0 - 4.0 * e8 - e2 * (4.0 - 5.0 * r2) - e4 * (4.0 - 5.0 * r2)
            - e6 * (4.0 - 5.0 * r2));
    let rnl = n.sqrt12 * n.trefoil2_num * q / n.trefoil2_den;
    s += z[17] * rnl * c3;
    s += z[18] * rnl * s3;

    let rnl = n.sqrt12 * r5 / n.pentafoil;
    s += z[19] * rnl * c5;
    s += z[20] * rnl * s5;

    s += z[21]
        * n.sqrt7
        * (20.0 * r6 - 30.0 * r4 + 12.0 * r2 - 1.0 - e6 + 3.0 * e4 * (-3.0 + 4.0 * r2)
            - 3.0 * e2 * (3.0 - 12.0 * r2 + 10.0 * r4))
        / n.spherical2;

    let rnl = n.sqrt14 * (n.astig3_a * r6 + n.astig3_b * r4 + n.astig3_c * r2) / n.astig3_den;
    s += z[22] * rnl * s2;
    s += z[23] * rnl * c2;

    let rnl = n.sqrt14 * (6.0 * r6 + n.tetrafoil2_q * r4) / n.tetrafoil2_den;
    s += z[24] * rnl * s4;
    s += z[25] * rnl * c4;

    let rnl = n.sqrt14 * n.hexafoil * r6;
    s += z[26] * rnl * s6;
    s += z[27] * rnl * c6;

    s
}
