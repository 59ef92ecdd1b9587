//! Second-order jets of the sixth-order modes (22 to 27).
//!
//! Each of these modes factors as `h(x, y)·g(ρ)` with `ρ = x² + y²`, where
//! `h = Re/Im (x + iy)^m` is a harmonic polynomial and `g` is a polynomial in
//! `ρ`. The partials then follow from the product and chain rules without any
//! trigonometry, which keeps them well defined at the origin.

use super::{GradientAxis, Normalization};

/// Value and partial derivatives up to second order at one point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Jet {
    pub v: f64,
    pub dx: f64,
    pub dy: f64,
    pub dxx: f64,
    pub dyy: f64,
    pub dxy: f64,
}

impl Jet {
    pub fn component(&self, axis: GradientAxis) -> f64 {
        match axis {
            GradientAxis::Dx => self.dx,
            GradientAxis::Dy => self.dy,
            GradientAxis::Dxx => self.dxx,
            GradientAxis::Dyy => self.dyy,
            GradientAxis::Dxy => self.dxy,
        }
    }

    /// Determinant of the Hessian.
    pub fn hessian_det(&self) -> f64 {
        self.dxx * self.dyy - self.dxy * self.dxy
    }

    /// Multiplies a harmonic jet by the radial factor `g(ρ)`, given `g`, `g'`
    /// and `g''` with respect to `ρ` at this point.
    fn with_radial(self, g: f64, g1: f64, g2: f64, x: f64, y: f64) -> Jet {
        let h = self;
        Jet {
            v: h.v * g,
            dx: h.dx * g + 2.0 * x * h.v * g1,
            dy: h.dy * g + 2.0 * y * h.v * g1,
            dxx: h.dxx * g + 4.0 * x * h.dx * g1 + h.v * (4.0 * x * x * g2 + 2.0 * g1),
            dyy: h.dyy * g + 4.0 * y * h.dy * g1 + h.v * (4.0 * y * y * g2 + 2.0 * g1),
            dxy: h.dxy * g + 2.0 * y * h.dx * g1 + 2.0 * x * h.dy * g1 + 4.0 * x * y * h.v * g2,
        }
    }
}

/// `r² sin 2θ = 2xy`
fn sin2(x: f64, y: f64) -> Jet {
    Jet {
        v: 2.0 * x * y,
        dx: 2.0 * y,
        dy: 2.0 * x,
        dxx: 0.0,
        dyy: 0.0,
        dxy: 2.0,
    }
}

/// `r² cos 2θ = x² - y²`
fn cos2(x: f64, y: f64) -> Jet {
    Jet {
        v: x * x - y * y,
        dx: 2.0 * x,
        dy: -2.0 * y,
        dxx: 2.0,
        dyy: -2.0,
        dxy: 0.0,
    }
}

/// `r⁴ sin 4θ = 4x³y - 4xy³`
fn sin4(x: f64, y: f64) -> Jet {
    let (x2, y2) = (x * x, y * y);
    Jet {
        v: 4.0 * x * y * (x2 - y2),
        dx: 12.0 * x2 * y - 4.0 * y2 * y,
        dy: 4.0 * x2 * x - 12.0 * x * y2,
        dxx: 24.0 * x * y,
        dyy: -24.0 * x * y,
        dxy: 12.0 * (x2 - y2),
    }
}

/// `r⁴ cos 4θ = x⁴ - 6x²y² + y⁴`
fn cos4(x: f64, y: f64) -> Jet {
    let (x2, y2) = (x * x, y * y);
    Jet {
        v: x2 * x2 - 6.0 * x2 * y2 + y2 * y2,
        dx: 4.0 * x * (x2 - 3.0 * y2),
        dy: 4.0 * y * (y2 - 3.0 * x2),
        dxx: 12.0 * (x2 - y2),
        dyy: 12.0 * (y2 - x2),
        dxy: -24.0 * x * y,
    }
}

/// `r⁶ sin 6θ = 6x⁵y - 20x³y³ + 6xy⁵`
fn sin6(x: f64, y: f64) -> Jet {
    let (x2, y2) = (x * x, y * y);
    let (x4, y4) = (x2 * x2, y2 * y2);
    Jet {
        v: x * y * (6.0 * x4 - 20.0 * x2 * y2 + 6.0 * y4),
        dx: y * (30.0 * x4 - 60.0 * x2 * y2 + 6.0 * y4),
        dy: x * (6.0 * x4 - 60.0 * x2 * y2 + 30.0 * y4),
        dxx: 120.0 * x * y * (x2 - y2),
        dyy: 120.0 * x * y * (y2 - x2),
        dxy: 30.0 * x4 - 180.0 * x2 * y2 + 30.0 * y4,
    }
}

/// `r⁶ cos 6θ = x⁶ - 15x⁴y² + 15x²y⁴ - y⁶`
fn cos6(x: f64, y: f64) -> Jet {
    let (x2, y2) = (x * x, y * y);
    let (x4, y4) = (x2 * x2, y2 * y2);
    Jet {
        v: x4 * x2 - 15.0 * x4 * y2 + 15.0 * x2 * y4 - y4 * y2,
        dx: x * (6.0 * x4 - 60.0 * x2 * y2 + 30.0 * y4),
        dy: y * (-30.0 * x4 + 60.0 * x2 * y2 - 6.0 * y4),
        dxx: 30.0 * x4 - 180.0 * x2 * y2 + 30.0 * y4,
        dyy: -30.0 * x4 + 180.0 * x2 * y2 - 30.0 * y4,
        dxy: -120.0 * x * y * (x2 - y2),
    }
}

/// Jets of modes 22 to 27, in mode order.
pub(crate) fn sixth_order_jets(n: &Normalization, x: f64, y: f64) -> [Jet; 6] {
    let rho = x * x + y * y;

    // modes 22/23: √14 (a r⁴ + b r² + c) · r² {sin, cos} 2θ / den
    let k = n.sqrt14 / n.astig3_den;
    let g = k * (n.astig3_a * rho * rho + n.astig3_b * rho + n.astig3_c);
    let g1 = k * (2.0 * n.astig3_a * rho + n.astig3_b);
    let g2 = k * 2.0 * n.astig3_a;
    let m22 = sin2(x, y).with_radial(g, g1, g2, x, y);
    let m23 = cos2(x, y).with_radial(g, g1, g2, x, y);

    // modes 24/25: √14 (6 r² + q) · r⁴ {sin, cos} 4θ / den
    let k = n.sqrt14 / n.tetrafoil2_den;
    let g = k * (6.0 * rho + n.tetrafoil2_q);
    let g1 = 6.0 * k;
    let m24 = sin4(x, y).with_radial(g, g1, 0.0, x, y);
    let m25 = cos4(x, y).with_radial(g, g1, 0.0, x, y);

    // modes 26/27: constant radial factor
    let k = n.sqrt14 * n.hexafoil;
    let m26 = sin6(x, y).with_radial(k, 0.0, 0.0, x, y);
    let m27 = cos6(x, y).with_radial(k, 0.0, 0.0, x, y);

    [m22, m23, m24, m25, m26, m27]
}
