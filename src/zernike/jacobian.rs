use ndarray::{Array1, ArrayView1};

use super::harmonic::sixth_order_jets;
use super::{JacobianOrder, Normalization, ZernikeCoefficients};
use crate::error::Result;
use crate::ops::view::map_points;

/// First- or second-order Jacobian term of the annular Zernike surface.
///
/// `First` is linear in the coefficients and is the per-mode Laplacian of the
/// surface; modes 19, 20 and 22 to 27 do not contribute. `Second` is
/// `Σ_k z[k]²·T_k` with no cross terms between modes, where `T_k` is the
/// determinant of mode `k`'s Hessian (modes 6 and 7 carry one factor of
/// `1 + e²` less than the exact determinant).
pub fn zernike_annular_jacobian(
    z: &ZernikeCoefficients,
    x: &ArrayView1<f64>,
    y: &ArrayView1<f64>,
    e: f64,
    order: JacobianOrder,
) -> Result<Array1<f64>> {
    log::trace!(
        "zernike_annular_jacobian({}): {} points, e = {}",
        order,
        x.len(),
        e
    );
    let norm = Normalization::new(e);
    match order {
        JacobianOrder::First => map_points(x, y, |xi, yi| first_order_at(&z.0, &norm, xi, yi)),
        JacobianOrder::Second => map_points(x, y, |xi, yi| second_order_at(&z.0, &norm, xi, yi)),
    }
}

/// Jacobian term of the standard (unobscured) Zernike surface.
pub fn zernike_jacobian(
    z: &ZernikeCoefficients,
    x: &ArrayView1<f64>,
    y: &ArrayView1<f64>,
    order: JacobianOrder,
) -> Result<Array1<f64>> {
    zernike_annular_jacobian(z, x, y, 0.0, order)
}

fn first_order_at(z: &[f64; 28], n: &Normalization, x: f64, y: f64) -> f64 {
    let (e2, e4, e6) = (n.e2, n.e4, n.e6);
    let (x2, y2) = (x * x, y * y);
    let (x4, y4) = (x2 * x2, y2 * y2);
    let xy = x * y;
    let r2 = x2 + y2;

    let mut d = z[3] * n.sqrt3 * 8.0 / n.defocus;

    d += z[6] * n.sqrt8 * 24.0 * y * (1.0 + e2) / n.coma;
    d += z[7] * n.sqrt8 * 24.0 * x * (1.0 + e2) / n.coma;

    d += z[10] * n.sqrt5 * (96.0 * r2 - 24.0 * (1.0 + e2)) / n.spherical;

    let a2 = n.sqrt10 * (1.0 + e2 + e4) * n.astig2_num / n.astig2_den;
    d += z[11] * a2 * 48.0 * (x2 - y2);
    d += z[12] * a2 * 96.0 * xy;

    let c2 = n.sqrt12 * 48.0 * n.coma2_num / n.coma2_den;
    let w = 5.0 * r2 * (1.0 + 4.0 * e2 + e4) - 2.0 * (1.0 + 4.0 * e2 + 4.0 * e4 + e6);
    d += z[15] * c2 * x * w;
    d += z[16] * c2 * y * w;

    let t2 = n.sqrt12 * 80.0 * (1.0 + e2) * (1.0 + e4) * n.trefoil2_num / n.trefoil2_den;
    d += z[17] * t2 * x * (x2 - 3.0 * y2);
    d += z[18] * t2 * y * (3.0 * x2 - y2);

    d += z[21]
        * n.sqrt7
        * 48.0
        * (e4 - 10.0 * e2 * x2 - 10.0 * e2 * y2 + 3.0 * e2 + 15.0 * x4 + 30.0 * x2 * y2
            - 10.0 * x2
            + 15.0 * y4
            - 10.0 * y2
            + 1.0)
        / n.spherical2;

    d
}

fn second_order_at(z: &[f64; 28], n: &Normalization, x: f64, y: f64) -> f64 {
    let (e2, e4, e6, e8) = (n.e2, n.e4, n.e6, n.e8);
    let (e10, e12, e14, e16) = (n.e10, n.e12, n.e14, n.e16);
    let (x2, y2) = (x * x, y * y);
    let (x4, y4) = (x2 * x2, y2 * y2);
    let (x6, y6) = (x4 * x2, y4 * y2);
    let r2 = x2 + y2;
    let sq = |k: usize| z[k] * z[k];

    let mut d = sq(3) * 3.0 * 16.0 / n.defocus / n.defocus;

    d += sq(4) * 6.0 * (-4.0) / n.astig_sq;
    d += sq(5) * 6.0 * (-4.0) / n.astig_sq;

    d += sq(6) * 8.0 * (108.0 * y2 - 36.0 * x2) * (1.0 + e2) / n.coma_sq;
    d += sq(7) * 8.0 * (108.0 * x2 - 36.0 * y2) * (1.0 + e2) / n.coma_sq;

    d += sq(8) * 8.0 * (-36.0 * r2) / n.trefoil_sq;
    d += sq(9) * 8.0 * (-36.0 * r2) / n.trefoil_sq;

    d += sq(10) * 5.0 * 144.0 * (1.0 + e2 - 2.0 * r2) * (1.0 + e2 - 6.0 * r2) / n.spherical_sq;

    let s2 = 1.0 + e2 + e4;
    let s3 = s2 + e6;
    let a2 = n.astig2_num_sq / n.astig2_den_sq;
    d += sq(11)
        * 10.0
        * 36.0
        * (8.0 * s2 * x2 - s3)
        * (s3 - 8.0 * s2 * y2)
        * a2;
    d += sq(12)
        * 10.0
        * 36.0
        * (-4.0 * (x - y).powi(2) * s2 + s3)
        * (4.0 * (x + y).powi(2) * s2 - s3)
        * a2;

    d += sq(13) * 10.0 * (-144.0) * r2 * r2 / n.tetrafoil_sq;
    d += sq(14) * 10.0 * (-144.0) * r2 * r2 / n.tetrafoil_sq;

    let c2 = 12.0 * 64.0 * n.coma2_num_sq / n.coma2_den_sq;
    let w = 3.0 * e6 - 5.0 * e4 * r2 + 12.0 * e4 - 20.0 * e2 * r2 + 12.0 * e2 - 5.0 * r2 + 3.0;
    d += sq(15)
        * c2
        * w
        * (9.0 * e6 * x2 - 3.0 * e6 * y2 - 25.0 * e4 * x4 - 20.0 * e4 * x2 * y2
            + 36.0 * e4 * x2
            + 5.0 * e4 * y4
            - 12.0 * e4 * y2
            - 100.0 * e2 * x4
            - 80.0 * e2 * x2 * y2
            + 36.0 * e2 * x2
            + 20.0 * e2 * y4
            - 12.0 * e2 * y2
            - 25.0 * x4
            - 20.0 * x2 * y2
            + 9.0 * x2
            + 5.0 * y4
            - 3.0 * y2);
    d += sq(16)
        * c2
        * (-w)
        * (3.0 * e6 * x2 - 9.0 * e6 * y2 - 5.0 * e4 * x4
            + 20.0 * e4 * x2 * y2
            + 12.0 * e4 * x2
            + 25.0 * e4 * y4
            - 36.0 * e4 * y2
            - 20.0 * e2 * x4
            + 80.0 * e2 * x2 * y2
            + 12.0 * e2 * x2
            + 100.0 * e2 * y4
            - 36.0 * e2 * y2
            - 5.0 * x4
            + 20.0 * x2 * y2
            + 3.0 * x2
            + 25.0 * y4
            - 9.0 * y2);

    let t2 = 12.0 * 16.0 * n.trefoil2_num_sq / n.trefoil2_den_sq;
    d += sq(17)
        * t2
        * (-36.0 * e16 * x2 - 36.0 * e16 * y2 + 180.0 * e14 * x4 + 360.0 * e14 * x2 * y2
            - 72.0 * e14 * x2
            + 180.0 * e14 * y4
            - 72.0 * e14 * y2
            - 125.0 * e12 * x6
            - 1275.0 * e12 * x4 * y2
            + 360.0 * e12 * x4
            + 225.0 * e12 * x2 * y4
            + 720.0 * e12 * x2 * y2
            - 108.0 * e12 * x2
            - 225.0 * e12 * y6
            + 360.0 * e12 * y4
            - 108.0 * e12 * y2
            - 250.0 * e10 * x6
            - 2550.0 * e10 * x4 * y2
            + 540.0 * e10 * x4
            + 450.0 * e10 * x2 * y4
            + 1080.0 * e10 * x2 * y2
            - 144.0 * e10 * x2
            - 450.0 * e10 * y6
            + 540.0 * e10 * y4
            - 144.0 * e10 * y2
            - 375.0 * e8 * x6
            - 3825.0 * e8 * x4 * y2
            + 720.0 * e8 * x4
            + 675.0 * e8 * x2 * y4
            + 1440.0 * e8 * x2 * y2
            - 180.0 * e8 * x2
            - 675.0 * e8 * y6
            + 720.0 * e8 * y4
            - 180.0 * e8 * y2
            - 500.0 * e6 * x6
            - 5100.0 * e6 * x4 * y2
            + 720.0 * e6 * x4
            + 900.0 * e6 * x2 * y4
            + 1440.0 * e6 * x2 * y2
            - 144.0 * e6 * x2
            - 900.0 * e6 * y6
            + 720.0 * e6 * y4
            - 144.0 * e6 * y2
            - 375.0 * e4 * x6
            - 3825.0 * e4 * x4 * y2
            + 540.0 * e4 * x4
            + 675.0 * e4 * x2 * y4
            + 1080.0 * e4 * x2 * y2
            - 108.0 * e4 * x2
            - 675.0 * e4 * y6
            + 540.0 * e4 * y4
            - 108.0 * e4 * y2
            - 250.0 * e2 * x6
            - 2550.0 * e2 * x4 * y2
            + 360.0 * e2 * x4
            + 450.0 * e2 * x2 * y4
            + 720.0 * e2 * x2 * y2
            - 72.0 * e2 * x2
            - 450.0 * e2 * y6
            + 360.0 * e2 * y4
            - 72.0 * e2 * y2
            - 125.0 * x6
            - 1275.0 * x4 * y2
            + 180.0 * x4
            + 225.0 * x2 * y4
            + 360.0 * x2 * y2
            - 36.0 * x2
            - 225.0 * y6
            + 180.0 * y4
            - 36.0 * y2);
    d += sq(18)
        * t2
        * ((-225.0 * e12 - 450.0 * e10 - 675.0 * e8 - 900.0 * e6 - 675.0 * e4 - 450.0 * e2
            - 225.0)
            * x6
            + (180.0 * e14
                + 225.0 * e12 * y2
                + 360.0 * e12
                + 450.0 * e10 * y2
                + 540.0 * e10
                + 675.0 * e8 * y2
                + 720.0 * e8
                + 900.0 * e6 * y2
                + 720.0 * e6
                + 675.0 * e4 * y2
                + 540.0 * e4
                + 450.0 * e2 * y2
                + 360.0 * e2
                + 225.0 * y2
                + 180.0)
                * x4
            + (-36.0 * e16 + 360.0 * e14 * y2 - 72.0 * e14 - 1275.0 * e12 * y4
                + 720.0 * e12 * y2
                - 108.0 * e12
                - 2550.0 * e10 * y4
                + 1080.0 * e10 * y2
                - 144.0 * e10
                - 3825.0 * e8 * y4
                + 1440.0 * e8 * y2
                - 180.0 * e8
                - 5100.0 * e6 * y4
                + 1440.0 * e6 * y2
                - 144.0 * e6
                - 3825.0 * e4 * y4
                + 1080.0 * e4 * y2
                - 108.0 * e4
                - 2550.0 * e2 * y4
                + 720.0 * e2 * y2
                - 72.0 * e2
                - 1275.0 * y4
                + 360.0 * y2
                - 36.0)
                * x2
            - 36.0 * e16 * y2
            + 180.0 * e14 * y4
            - 72.0 * e14 * y2
            - 125.0 * e12 * y6
            + 360.0 * e12 * y4
            - 108.0 * e12 * y2
            - 250.0 * e10 * y6
            + 540.0 * e10 * y4
            - 144.0 * e10 * y2
            - 375.0 * e8 * y6
            + 720.0 * e8 * y4
            - 180.0 * e8 * y2
            - 500.0 * e6 * y6
            + 720.0 * e6 * y4
            - 144.0 * e6 * y2
            - 375.0 * e4 * y6
            + 540.0 * e4 * y4
            - 108.0 * e4 * y2
            - 250.0 * e2 * y6
            + 360.0 * e2 * y4
            - 72.0 * e2 * y2
            - 125.0 * y6
            + 180.0 * y4
            - 36.0 * y2);

    d += sq(19) * 12.0 * (-400.0) * r2 * r2 * r2 / n.pentafoil_sq;
    d += sq(20) * 12.0 * (-400.0) * r2 * r2 * r2 / n.pentafoil_sq;

    d += sq(21)
        * 7.0
        * 576.0
        * ((e4 - 5.0 * e2 * x2 - 5.0 * e2 * y2 + 3.0 * e2 + 5.0 * x4 + 10.0 * x2 * y2
            - 5.0 * x2
            + 5.0 * y4
            - 5.0 * y2
            + 1.0)
            * (e4 - 15.0 * e2 * x2 - 15.0 * e2 * y2 + 3.0 * e2 + 25.0 * x4 + 50.0 * x2 * y2
                - 15.0 * x2
                + 25.0 * y4
                - 15.0 * y2
                + 1.0))
        / n.spherical2_sq;

    for (k, jet) in (22..).zip(sixth_order_jets(n, x, y).iter()) {
        d += sq(k) * jet.hessian_det();
    }

    d
}
