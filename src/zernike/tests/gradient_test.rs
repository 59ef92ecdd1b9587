//! Gradient tests against finite differences

use approx::assert_relative_eq;
use ndarray::{arr1, Array1, Zip};

use super::{central, random_coefficients, random_points, seeded, OBSCURATIONS, STEP};
use crate::zernike::{
    zernike_annular_eval, zernike_annular_grad, zernike_grad, GradientAxis, ZernikeCoefficients,
};

fn assert_close(got: &Array1<f64>, expected: &Array1<f64>, what: &str, e: f64) {
    Zip::from(got).and(expected).for_each(|&g, &x| {
        assert!(
            (g - x).abs() <= 1e-6 * x.abs().max(1.0),
            "{} at e = {}: analytic {} vs difference {}",
            what,
            e,
            g,
            x
        );
    });
}

#[test_log::test]
fn test_first_derivatives_match_central_differences() {
    let mut rng = seeded(21);
    for &e in &OBSCURATIONS {
        let z = random_coefficients(&mut rng);
        let (x, y) = random_points(&mut rng, 100);
        let surface = |xs: &Array1<f64>, ys: &Array1<f64>| {
            zernike_annular_eval(&z, &xs.view(), &ys.view(), e).unwrap()
        };

        let dx = zernike_annular_grad(&z, &x.view(), &y.view(), e, GradientAxis::Dx).unwrap();
        let fd = central(&surface(&(&x + STEP), &y), &surface(&(&x - STEP), &y));
        assert_close(&dx, &fd, "dx", e);

        let dy = zernike_annular_grad(&z, &x.view(), &y.view(), e, GradientAxis::Dy).unwrap();
        let fd = central(&surface(&x, &(&y + STEP)), &surface(&x, &(&y - STEP)));
        assert_close(&dy, &fd, "dy", e);
    }
}

#[test_log::test]
fn test_second_derivatives_match_differences_of_first() {
    let mut rng = seeded(22);
    for &e in &OBSCURATIONS {
        let z = random_coefficients(&mut rng);
        let (x, y) = random_points(&mut rng, 100);
        let grad = |xs: &Array1<f64>, ys: &Array1<f64>, axis| {
            zernike_annular_grad(&z, &xs.view(), &ys.view(), e, axis).unwrap()
        };
        let (xp, xm) = (&x + STEP, &x - STEP);
        let (yp, ym) = (&y + STEP, &y - STEP);

        let dxx = grad(&x, &y, GradientAxis::Dxx);
        let fd = central(&grad(&xp, &y, GradientAxis::Dx), &grad(&xm, &y, GradientAxis::Dx));
        assert_close(&dxx, &fd, "dx2", e);

        let dyy = grad(&x, &y, GradientAxis::Dyy);
        let fd = central(&grad(&x, &yp, GradientAxis::Dy), &grad(&x, &ym, GradientAxis::Dy));
        assert_close(&dyy, &fd, "dy2", e);

        let dxy = grad(&x, &y, GradientAxis::Dxy);
        let fd = central(&grad(&x, &yp, GradientAxis::Dx), &grad(&x, &ym, GradientAxis::Dx));
        assert_close(&dxy, &fd, "dxy from dx", e);
        let fd = central(&grad(&xp, &y, GradientAxis::Dy), &grad(&xm, &y, GradientAxis::Dy));
        assert_close(&dxy, &fd, "dxy from dy", e);
    }
}

#[test]
fn test_every_mode_is_differentiated() {
    // A single mode at a time, so a dropped term cannot hide behind the others.
    let mut rng = seeded(23);
    let (x, y) = random_points(&mut rng, 16);
    let e = 0.61;
    for k in 0..28 {
        let z = ZernikeCoefficients::unit(k).unwrap();
        let surface = |xs: &Array1<f64>, ys: &Array1<f64>| {
            zernike_annular_eval(&z, &xs.view(), &ys.view(), e).unwrap()
        };
        let dx = zernike_annular_grad(&z, &x.view(), &y.view(), e, GradientAxis::Dx).unwrap();
        let fd = central(&surface(&(&x + STEP), &y), &surface(&(&x - STEP), &y));
        assert_close(&dx, &fd, &format!("dx of mode {}", k), e);
        let dy = zernike_annular_grad(&z, &x.view(), &y.view(), e, GradientAxis::Dy).unwrap();
        let fd = central(&surface(&x, &(&y + STEP)), &surface(&x, &(&y - STEP)));
        assert_close(&dy, &fd, &format!("dy of mode {}", k), e);
    }
}

#[test]
fn test_tilt_has_constant_slope() {
    let z = ZernikeCoefficients::unit(1).unwrap();
    let x = arr1(&[0.0, 0.3, -0.8]);
    let y = arr1(&[0.0, 0.5, 0.1]);
    let dx = zernike_grad(&z, &x.view(), &y.view(), GradientAxis::Dx).unwrap();
    let dy = zernike_grad(&z, &x.view(), &y.view(), GradientAxis::Dy).unwrap();
    for i in 0..3 {
        assert_relative_eq!(dx[i], 2.0, epsilon = 1e-14);
        assert_relative_eq!(dy[i], 0.0, epsilon = 1e-14);
    }
}

#[test]
fn test_gradients_are_finite_at_origin() {
    let mut rng = seeded(24);
    let z = random_coefficients(&mut rng);
    let origin = arr1(&[0.0]);
    for axis in [
        GradientAxis::Dx,
        GradientAxis::Dy,
        GradientAxis::Dxx,
        GradientAxis::Dyy,
        GradientAxis::Dxy,
    ] {
        let g = zernike_annular_grad(&z, &origin.view(), &origin.view(), 0.3, axis).unwrap();
        assert!(g[0].is_finite(), "{} at the origin", axis);
    }
}

#[test]
fn test_unobscured_gradient_matches_annular_at_zero() {
    let mut rng = seeded(25);
    let (x, y) = random_points(&mut rng, 32);
    let z = random_coefficients(&mut rng);
    let a = zernike_grad(&z, &x.view(), &y.view(), GradientAxis::Dxy).unwrap();
    let b = zernike_annular_grad(&z, &x.view(), &y.view(), 0.0, GradientAxis::Dxy).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_gradient_is_deterministic() {
    let mut rng = seeded(26);
    let (x, y) = random_points(&mut rng, 4096);
    let z = random_coefficients(&mut rng);
    let first = zernike_annular_grad(&z, &x.view(), &y.view(), 0.61, GradientAxis::Dx).unwrap();
    let second = zernike_annular_grad(&z, &x.view(), &y.view(), 0.61, GradientAxis::Dx).unwrap();
    assert_eq!(first, second);
}
