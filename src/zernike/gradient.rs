use ndarray::{Array1, ArrayView1};

use super::harmonic::sixth_order_jets;
use super::{GradientAxis, Normalization, ZernikeCoefficients};
use crate::error::Result;
use crate::ops::view::map_points;

/// Analytic partial derivative of the annular Zernike surface along `axis`.
///
/// Uses the same normalization table as
/// [`zernike_annular_eval`](super::zernike_annular_eval), so `Dx` is exactly
/// the x-derivative of that surface, `Dxx` the x-derivative of `Dx`, and so on.
pub fn zernike_annular_grad(
    z: &ZernikeCoefficients,
    x: &ArrayView1<f64>,
    y: &ArrayView1<f64>,
    e: f64,
    axis: GradientAxis,
) -> Result<Array1<f64>> {
    log::trace!(
        "zernike_annular_grad({}): {} points, e = {}",
        axis,
        x.len(),
        e
    );
    let norm = Normalization::new(e);
    let low_order: fn(&[f64; 28], &Normalization, f64, f64) -> f64 = match axis {
        GradientAxis::Dx => dx_at,
        GradientAxis::Dy => dy_at,
        GradientAxis::Dxx => dxx_at,
        GradientAxis::Dyy => dyy_at,
        GradientAxis::Dxy => dxy_at,
    };
    map_points(x, y, |xi, yi| {
        low_order(&z.0, &norm, xi, yi) + sixth_order(&z.0, &norm, xi, yi, axis)
    })
}

/// Gradient of the standard (unobscured) Zernike surface.
pub fn zernike_grad(
    z: &ZernikeCoefficients,
    x: &ArrayView1<f64>,
    y: &ArrayView1<f64>,
    axis: GradientAxis,
) -> Result<Array1<f64>> {
    zernike_annular_grad(z, x, y, 0.0, axis)
}

fn sixth_order(z: &[f64; 28], n: &Normalization, x: f64, y: f64, axis: GradientAxis) -> f64 {
    sixth_order_jets(n, x, y)
        .iter()
        .zip(&z[22..])
        .map(|(jet, &zk)| zk * jet.component(axis))
        .sum()
}

// Modes 0 to 21. Piston and the terms that vanish on an axis are left out.

fn dx_at(z: &[f64; 28], n: &Normalization, x: f64, y: f64) -> f64 {
    let (e2, e4, e6, e8) = (n.e2, n.e4, n.e6, n.e8);
    let (x2, y2) = (x * x, y * y);
    let (x4, y4) = (x2 * x2, y2 * y2);
    let xy = x * y;
    let r2 = x2 + y2;

    let mut d = z[1] * 2.0 / n.tilt;

    d += z[3] * n.sqrt3 * 4.0 * x / n.defocus;

    d += z[4] * n.sqrt6 * 2.0 * y / n.astig;
    d += z[5] * n.sqrt6 * 2.0 * x / n.astig;

    d += z[6] * n.sqrt8 * 6.0 * xy * (1.0 + e2) / n.coma;
    d += z[7] * n.sqrt8 * ((9.0 * x2 + 3.0 * y2 - 2.0) * (1.0 + e2) - 2.0 * e4) / n.coma;

    d += z[8] * n.sqrt8 * 6.0 * xy / n.trefoil;
    d += z[9] * n.sqrt8 * (3.0 * x2 - 3.0 * y2) / n.trefoil;

    d += z[10] * n.sqrt5 * 12.0 * x * (2.0 * r2 - 1.0 - e2) / n.spherical;

    let a2 = n.sqrt10 * n.astig2_num / n.astig2_den;
    d += z[11] * a2 * (x * (16.0 * x2 - 6.0) * (1.0 + e2 + e4) - 6.0 * x * e6);
    d += z[12] * a2 * (y * (24.0 * x2 + 8.0 * y2 - 6.0) * (1.0 + e2 + e4) - 6.0 * y * e6);

    d += z[13] * n.sqrt10 * 4.0 * x * (x2 - 3.0 * y2) / n.tetrafoil;
    d += z[14] * n.sqrt10 * 4.0 * y * (3.0 * x2 - y2) / n.tetrafoil;

    let c2 = n.sqrt12 * n.coma2_num / n.coma2_den;
    d += z[15]
        * c2
        * (3.0 * e8 - 36.0 * e6 * x2 - 12.0 * e6 * y2 + 12.0 * e6 + 50.0 * e4 * x4
            + 60.0 * e4 * x2 * y2
            - 144.0 * e4 * x2
            + 10.0 * e4 * y4
            - 48.0 * e4 * y2
            + 30.0 * e4
            + 200.0 * e2 * x4
            + 240.0 * e2 * x2 * y2
            - 144.0 * e2 * x2
            + 40.0 * e2 * y4
            - 48.0 * e2 * y2
            + 12.0 * e2
            + 50.0 * x4
            + 60.0 * x2 * y2
            - 36.0 * x2
            + 10.0 * y4
            - 12.0 * y2
            + 3.0);
    d += z[16]
        * c2
        * (8.0
            * xy
            * (5.0 * r2 * (1.0 + 4.0 * e2 + e4) - (3.0 + 12.0 * e2 + 12.0 * e4 + 3.0 * e6)));

    let t2 = n.sqrt12 * n.trefoil2_num / n.trefoil2_den;
    let s3 = 1.0 + e2 + e4 + e6;
    d += z[17]
        * t2
        * (25.0 * s3 * x4
            + (-12.0 * e8 - 30.0 * s3 * y2 - 12.0 * s3) * x2
            + 12.0 * e8 * y2
            - 15.0 * s3 * y4
            + 12.0 * s3 * y2);
    d += z[18]
        * t2
        * (4.0 * xy * (15.0 * s3 * x2 - 6.0 * e8 + 5.0 * s3 * y2 - 6.0 * s3));

    d += z[19] * n.sqrt12 * 5.0 * (x2 * (x2 - 6.0 * y2) + y4) / n.pentafoil;
    d += z[20] * n.sqrt12 * 20.0 * xy * (x2 - y2) / n.pentafoil;

    d += z[21]
        * n.sqrt7
        * 24.0
        * x
        * (e4 - e2 * (5.0 * y2 - 3.0) + 5.0 * x4 - 5.0 * y2 + 5.0 * y4
            - x2 * (5.0 * e2 - 10.0 * y2 + 5.0)
            + 1.0)
        / n.spherical2;

    d
}

fn dy_at(z: &[f64; 28], n: &Normalization, x: f64, y: f64) -> f64 {
    let (e2, e4, e6, e8) = (n.e2, n.e4, n.e6, n.e8);
    let (x2, y2) = (x * x, y * y);
    let (x4, y4) = (x2 * x2, y2 * y2);
    let xy = x * y;
    let r2 = x2 + y2;

    let mut d = z[2] * 2.0 / n.tilt;

    d += z[3] * n.sqrt3 * 4.0 * y / n.defocus;

    d += z[4] * n.sqrt6 * 2.0 * x / n.astig;
    d += z[5] * n.sqrt6 * (-2.0) * y / n.astig;

    d += z[6] * n.sqrt8 * ((1.0 + e2) * (3.0 * x2 + 9.0 * y2 - 2.0) - 2.0 * e4) / n.coma;
    d += z[7] * n.sqrt8 * 6.0 * xy * (1.0 + e2) / n.coma;

    d += z[8] * n.sqrt8 * (3.0 * x2 - 3.0 * y2) / n.trefoil;
    d += z[9] * n.sqrt8 * (-6.0) * xy / n.trefoil;

    d += z[10] * n.sqrt5 * 12.0 * y * (2.0 * r2 - 1.0 - e2) / n.spherical;

    let a2 = n.sqrt10 * n.astig2_num / n.astig2_den;
    d += z[11] * a2 * (y * (6.0 - 16.0 * y2) * (1.0 + e2 + e4) + 6.0 * y * e6);
    d += z[12] * a2 * (x * (8.0 * x2 + 24.0 * y2 - 6.0) * (1.0 + e2 + e4) - 6.0 * x * e6);

    d += z[13] * n.sqrt10 * 4.0 * y * (y2 - 3.0 * x2) / n.tetrafoil;
    d += z[14] * n.sqrt10 * 4.0 * x * (x2 - 3.0 * y2) / n.tetrafoil;

    let c2 = n.sqrt12 * n.coma2_num / n.coma2_den;
    d += z[15]
        * c2
        * (-x
            * (24.0 * y
                + 4.0 * e2 * (24.0 * y - 40.0 * y * r2)
                + 2.0 * e4 * (48.0 * y - 20.0 * y * r2)
                + 24.0 * e6 * y
                - 40.0 * y * r2));
    d += z[16]
        * c2
        * (3.0 * e8 - 12.0 * e6 * x2 - 36.0 * e6 * y2 + 12.0 * e6 + 10.0 * e4 * x4
            + 60.0 * e4 * x2 * y2
            - 48.0 * e4 * x2
            + 50.0 * e4 * y4
            - 144.0 * e4 * y2
            + 30.0 * e4
            + 40.0 * e2 * x4
            + 240.0 * e2 * x2 * y2
            - 48.0 * e2 * x2
            + 200.0 * e2 * y4
            - 144.0 * e2 * y2
            + 12.0 * e2
            + 10.0 * x4
            + 60.0 * x2 * y2
            - 12.0 * x2
            + 50.0 * y4
            - 36.0 * y2
            + 3.0);

    let t2 = n.sqrt12 * n.trefoil2_num / n.trefoil2_den;
    let s3 = 1.0 + e2 + e4 + e6;
    d += z[17]
        * t2
        * (4.0 * xy * (-5.0 * s3 * x2 + 6.0 * e8 - 15.0 * s3 * y2 + 6.0 * s3));
    d += z[18]
        * t2
        * (-12.0 * e8 * x2 + 12.0 * e8 * y2 + 15.0 * s3 * x4 + 30.0 * s3 * x2 * y2
            - 12.0 * s3 * x2
            - 25.0 * s3 * y4
            + 12.0 * s3 * y2);

    d += z[19] * n.sqrt12 * 20.0 * xy * (y2 - x2) / n.pentafoil;
    d += z[20] * n.sqrt12 * 5.0 * (x2 * (x2 - 6.0 * y2) + y4) / n.pentafoil;

    d += z[21]
        * n.sqrt7
        * 24.0
        * y
        * (e4 - e2 * (5.0 * x2 - 3.0) - 5.0 * x2 + 5.0 * x4 + 5.0 * y4
            - y2 * (5.0 * e2 - 10.0 * x2 + 5.0)
            + 1.0)
        / n.spherical2;

    d
}

fn dxx_at(z: &[f64; 28], n: &Normalization, x: f64, y: f64) -> f64 {
    let (e2, e4, e6, e8) = (n.e2, n.e4, n.e6, n.e8);
    let (x2, y2) = (x * x, y * y);
    let xy = x * y;
    let r2 = x2 + y2;
    let r4 = r2 * r2;

    let mut d = z[3] * n.sqrt3 * 4.0 / n.defocus;

    d += z[5] * n.sqrt6 * 2.0 / n.astig;

    d += z[6] * n.sqrt8 * 6.0 * y * (1.0 + e2) / n.coma;
    d += z[7] * n.sqrt8 * 18.0 * x * (1.0 + e2) / n.coma;

    d += z[8] * n.sqrt8 * 6.0 * y / n.trefoil;
    d += z[9] * n.sqrt8 * 6.0 * x / n.trefoil;

    d += z[10] * n.sqrt5 * 12.0 * (6.0 * x2 + 2.0 * y2 - e2 - 1.0) / n.spherical;

    let a2 = n.sqrt10 * n.astig2_num / n.astig2_den;
    d += z[11] * a2 * ((48.0 * x2 - 6.0) * (1.0 + e2 + e4) - 6.0 * e6);
    d += z[12] * a2 * 48.0 * xy * (1.0 + e2 + e4);

    d += z[13] * n.sqrt10 * 12.0 * (x2 - y2) / n.tetrafoil;
    d += z[14] * n.sqrt10 * 24.0 * xy / n.tetrafoil;

    let c2 = n.sqrt12 * n.coma2_num / n.coma2_den;
    d += z[15]
        * c2
        * (-8.0
            * x
            * (9.0 * e6 - 25.0 * e4 * x2 - 15.0 * e4 * y2 + 36.0 * e4 - 100.0 * e2 * x2
                - 60.0 * e2 * y2
                + 36.0 * e2
                - 25.0 * x2
                - 15.0 * y2
                + 9.0));
    d += z[16]
        * c2
        * (-8.0
            * y
            * (3.0 * e6 - 15.0 * e4 * x2 - 5.0 * e4 * y2 + 12.0 * e4 - 60.0 * e2 * x2
                - 20.0 * e2 * y2
                + 12.0 * e2
                - 15.0 * x2
                - 5.0 * y2
                + 3.0));

    let t2 = n.sqrt12 * n.trefoil2_num / n.trefoil2_den;
    d += z[17]
        * t2
        * (-4.0
            * x
            * (6.0 * e8 - 25.0 * e6 * x2 + 15.0 * e6 * y2 + 6.0 * e6 - 25.0 * e4 * x2
                + 15.0 * e4 * y2
                + 6.0 * e4
                - 25.0 * e2 * x2
                + 15.0 * e2 * y2
                + 6.0 * e2
                - 25.0 * x2
                + 15.0 * y2
                + 6.0));
    d += z[18]
        * t2
        * (-4.0
            * y
            * (6.0 * e8 - 45.0 * e6 * x2 - 5.0 * e6 * y2 + 6.0 * e6 - 45.0 * e4 * x2
                - 5.0 * e4 * y2
                + 6.0 * e4
                - 45.0 * e2 * x2
                - 5.0 * e2 * y2
                + 6.0 * e2
                - 45.0 * x2
                - 5.0 * y2
                + 6.0));

    d += z[19] * n.sqrt12 * 20.0 * x * (x2 - 3.0 * y2) / n.pentafoil;
    d += z[20] * n.sqrt12 * 20.0 * y * (3.0 * x2 - y2) / n.pentafoil;

    d += z[21]
        * n.sqrt7
        * (480.0 * x2 * r2 + 120.0 * r4 + 24.0 * e4 - 360.0 * x2 - 120.0 * y2
            - 3.0 * e2 * (120.0 * x2 + 40.0 * y2 - 24.0)
            + 24.0)
        / n.spherical2;

    d
}

fn dyy_at(z: &[f64; 28], n: &Normalization, x: f64, y: f64) -> f64 {
    let (e2, e4, e6, e8) = (n.e2, n.e4, n.e6, n.e8);
    let (x2, y2) = (x * x, y * y);
    let xy = x * y;
    let r2 = x2 + y2;
    let r4 = r2 * r2;

    let mut d = z[3] * n.sqrt3 * 4.0 / n.defocus;

    d += z[5] * n.sqrt6 * (-2.0) / n.astig;

    d += z[6] * n.sqrt8 * (1.0 + e2) * 18.0 * y / n.coma;
    d += z[7] * n.sqrt8 * 6.0 * x * (1.0 + e2) / n.coma;

    d += z[8] * n.sqrt8 * (-6.0) * y / n.trefoil;
    d += z[9] * n.sqrt8 * (-6.0) * x / n.trefoil;

    d += z[10] * n.sqrt5 * 12.0 * (2.0 * x2 + 6.0 * y2 - e2 - 1.0) / n.spherical;

    let a2 = n.sqrt10 * n.astig2_num / n.astig2_den;
    d += z[11] * a2 * ((6.0 - 48.0 * y2) * (1.0 + e2 + e4) + 6.0 * e6);
    d += z[12] * a2 * 48.0 * xy * (1.0 + e2 + e4);

    d += z[13] * n.sqrt10 * 12.0 * (y2 - x2) / n.tetrafoil;
    d += z[14] * n.sqrt10 * (-24.0) * xy / n.tetrafoil;

    let c2 = n.sqrt12 * n.coma2_num / n.coma2_den;
    d += z[15]
        * c2
        * (-8.0
            * x
            * (3.0 * e6 - 5.0 * e4 * x2 - 15.0 * e4 * y2 + 12.0 * e4 - 20.0 * e2 * x2
                - 60.0 * e2 * y2
                + 12.0 * e2
                - 5.0 * x2
                - 15.0 * y2
                + 3.0));
    d += z[16]
        * c2
        * (-8.0
            * y
            * (9.0 * e6 - 15.0 * e4 * x2 - 25.0 * e4 * y2 + 36.0 * e4 - 60.0 * e2 * x2
                - 100.0 * e2 * y2
                + 36.0 * e2
                - 15.0 * x2
                - 25.0 * y2
                + 9.0));

    let t2 = n.sqrt12 * n.trefoil2_num / n.trefoil2_den;
    d += z[17]
        * t2
        * (4.0
            * x
            * (6.0 * e8 - 5.0 * e6 * x2 - 45.0 * e6 * y2 + 6.0 * e6 - 5.0 * e4 * x2
                - 45.0 * e4 * y2
                + 6.0 * e4
                - 5.0 * e2 * x2
                - 45.0 * e2 * y2
                + 6.0 * e2
                - 5.0 * x2
                - 45.0 * y2
                + 6.0));
    d += z[18]
        * t2
        * (4.0
            * y
            * (6.0 * e8 + 15.0 * e6 * x2 - 25.0 * e6 * y2 + 6.0 * e6 + 15.0 * e4 * x2
                - 25.0 * e4 * y2
                + 6.0 * e4
                + 15.0 * e2 * x2
                - 25.0 * e2 * y2
                + 6.0 * e2
                + 15.0 * x2
                - 25.0 * y2
                + 6.0));

    d += z[19] * n.sqrt12 * 20.0 * x * (3.0 * y2 - x2) / n.pentafoil;
    d += z[20] * n.sqrt12 * 20.0 * y * (y2 - 3.0 * x2) / n.pentafoil;

    d += z[21]
        * n.sqrt7
        * (480.0 * y2 * r2 + 120.0 * r4 + 24.0 * e4 - 120.0 * x2 - 360.0 * y2
            - 3.0 * e2 * (40.0 * x2 + 120.0 * y2 - 24.0)
            + 24.0)
        / n.spherical2;

    d
}

fn dxy_at(z: &[f64; 28], n: &Normalization, x: f64, y: f64) -> f64 {
    let (e2, e4, e6, e8) = (n.e2, n.e4, n.e6, n.e8);
    let (x2, y2) = (x * x, y * y);
    let xy = x * y;
    let r2 = x2 + y2;

    let mut d = z[4] * n.sqrt6 * 2.0 / n.astig;

    d += z[6] * n.sqrt8 * (1.0 + e2) * (6.0 * x) / n.coma;
    d += z[7] * n.sqrt8 * 6.0 * y * (1.0 + e2) / n.coma;

    d += z[8] * n.sqrt8 * 6.0 * x / n.trefoil;
    d += z[9] * n.sqrt8 * (-6.0) * y / n.trefoil;

    d += z[10] * n.sqrt5 * 48.0 * xy / n.spherical;

    let a2 = n.sqrt10 * n.astig2_num / n.astig2_den;
    d += z[12] * a2 * ((24.0 * x2 + 24.0 * y2 - 6.0) * (1.0 + e2 + e4) - 6.0 * e6);

    d += z[13] * n.sqrt10 * (-24.0) * xy / n.tetrafoil;
    d += z[14] * n.sqrt10 * 12.0 * (x2 - y2) / n.tetrafoil;

    let c2 = n.sqrt12 * n.coma2_num / n.coma2_den;
    d += z[15]
        * c2
        * (-8.0
            * y
            * (3.0 * e6 - 15.0 * e4 * x2 - 5.0 * e4 * y2 + 12.0 * e4 - 60.0 * e2 * x2
                - 20.0 * e2 * y2
                + 12.0 * e2
                - 15.0 * x2
                - 5.0 * y2
                + 3.0));
    d += z[16]
        * c2
        * (-8.0
            * x
            * (3.0 * e6 - 5.0 * e4 * x2 - 15.0 * e4 * y2 + 12.0 * e4 - 20.0 * e2 * x2
                - 60.0 * e2 * y2
                + 12.0 * e2
                - 5.0 * x2
                - 15.0 * y2
                + 3.0));

    let t2 = n.sqrt12 * n.trefoil2_num / n.trefoil2_den;
    let w = 2.0 * e8 - 5.0 * e6 * r2 + 2.0 * e6 - 5.0 * e4 * r2 + 2.0 * e4 - 5.0 * e2 * r2
        + 2.0 * e2
        - 5.0 * r2
        + 2.0;
    d += z[17] * t2 * (12.0 * y * w);
    d += z[18] * t2 * (-12.0 * x * w);

    d += z[19] * n.sqrt12 * 20.0 * y * (y2 - 3.0 * x2) / n.pentafoil;
    d += z[20] * n.sqrt12 * 20.0 * x * (x2 - 3.0 * y2) / n.pentafoil;

    d += z[21] * n.sqrt7 * 240.0 * xy * (2.0 * r2 - 1.0 - e2) / n.spherical2;

    d
}
