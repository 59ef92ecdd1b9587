//! Surface evaluator and coefficient container tests

use std::f64::consts::PI;

use approx::assert_relative_eq;
use ndarray::{arr1, Array1, Zip};
use rayon::prelude::*;

use super::{random_coefficients, random_points, seeded};
use crate::error::KernelError;
use crate::zernike::{
    basis_value, zernike_annular_eval, zernike_eval, Angular, GradientAxis, JacobianOrder,
    Obscuration, ZernikeCoefficients, ZernikeMode, MODES, ZERNIKE_TERMS,
};

fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// Classical (unobscured) Zernike polynomial, normalized to unit variance over
/// the disk.
fn classical(mode: ZernikeMode, x: f64, y: f64) -> f64 {
    let (n, m) = (mode.n, mode.m);
    let r = x.hypot(y);
    let theta = y.atan2(x);
    let radial: f64 = (0..=(n - m) / 2)
        .map(|s| {
            let sign = if s % 2 == 0 { 1.0 } else { -1.0 };
            sign * factorial(n - s)
                / (factorial(s) * factorial((n + m) / 2 - s) * factorial((n - m) / 2 - s))
                * r.powi((n - 2 * s) as i32)
        })
        .sum();
    let order = f64::from(n + 1);
    match mode.angular {
        Angular::None => order.sqrt() * radial,
        Angular::Cos => (2.0 * order).sqrt() * radial * (f64::from(m) * theta).cos(),
        Angular::Sin => (2.0 * order).sqrt() * radial * (f64::from(m) * theta).sin(),
    }
}

#[test]
fn test_defocus_at_half_radius() {
    let z = ZernikeCoefficients::unit(3).unwrap();
    let s = zernike_annular_eval(&z, &arr1(&[0.5]).view(), &arr1(&[0.0]).view(), 0.0).unwrap();
    assert_eq!(s.len(), 1);
    assert_relative_eq!(s[0], -(3f64.sqrt()) / 2.0, epsilon = 1e-12);
}

#[test]
fn test_unobscured_modes_are_classical_zernikes() {
    let points = [(0.5, 0.0), (0.3, -0.4), (-0.7, 0.2), (0.1, 0.9), (-0.25, -0.65)];
    for mode in MODES.iter() {
        for &(x, y) in &points {
            let expected = classical(*mode, x, y);
            let got = basis_value(*mode, x, y, 0.0);
            assert_relative_eq!(got, expected, epsilon = 1e-12, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_annular_symmetric_modes_closed_form() {
    let e: f64 = 0.61;
    let (e2, e4) = (e * e, e.powi(4));
    let one_m = 1.0 - e2;
    for &(x, y) in &[(0.62, 0.0), (0.3, -0.7), (-0.45, 0.5)] {
        let r2: f64 = x * x + y * y;
        let defocus = 3f64.sqrt() * (2.0 * r2 - 1.0 - e2) / one_m;
        let spherical = 5f64.sqrt()
            * (6.0 * r2 * r2 - 6.0 * r2 * (1.0 + e2) + 1.0 + 4.0 * e2 + e4)
            / (one_m * one_m);
        assert_relative_eq!(basis_value(MODES[0], x, y, e), 1.0);
        assert_relative_eq!(basis_value(MODES[3], x, y, e), defocus, epsilon = 1e-12);
        assert_relative_eq!(basis_value(MODES[10], x, y, e), spherical, epsilon = 1e-12);
    }
}

#[test]
fn test_annular_modes_are_orthonormal() {
    // Simpson in r over [e, 1], uniform rectangle rule in θ.
    let e = 0.61;
    let (nr, nt) = (400usize, 64usize);
    let hr = (1.0 - e) / nr as f64;
    let area = PI * (1.0 - e * e);

    let mut xs = Vec::with_capacity((nr + 1) * nt);
    let mut ys = Vec::with_capacity((nr + 1) * nt);
    let mut ws = Vec::with_capacity((nr + 1) * nt);
    for i in 0..=nr {
        let r = e + i as f64 * hr;
        let simpson = if i == 0 || i == nr {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        };
        let w = simpson * hr / 3.0 * r * (2.0 * PI / nt as f64) / area;
        for j in 0..nt {
            let t = 2.0 * PI * j as f64 / nt as f64;
            xs.push(r * t.cos());
            ys.push(r * t.sin());
            ws.push(w);
        }
    }
    let (x, y, w) = (Array1::from(xs), Array1::from(ys), Array1::from(ws));

    let basis: Vec<Array1<f64>> = (0..ZERNIKE_TERMS)
        .map(|k| {
            let z = ZernikeCoefficients::unit(k).unwrap();
            zernike_annular_eval(&z, &x.view(), &y.view(), e).unwrap()
        })
        .collect();

    let pairs: Vec<(usize, usize)> = (0..ZERNIKE_TERMS)
        .flat_map(|j| (j..ZERNIKE_TERMS).map(move |k| (j, k)))
        .collect();
    let gram: Vec<(usize, usize, f64)> = pairs
        .par_iter()
        .map(|&(j, k)| (j, k, (&basis[j] * &basis[k] * &w).sum()))
        .collect();

    for (j, k, inner) in gram {
        let expected = if j == k { 1.0 } else { 0.0 };
        assert!(
            (inner - expected).abs() < 1e-6,
            "<Z{}, Z{}> = {} over the annulus e = {}",
            j,
            k,
            inner,
            e
        );
    }
}

#[test]
fn test_surface_is_linear_in_coefficients() {
    let mut rng = seeded(11);
    let (x, y) = random_points(&mut rng, 64);
    let z = random_coefficients(&mut rng);
    for &e in &[0.0, 0.35] {
        let total = zernike_annular_eval(&z, &x.view(), &y.view(), e).unwrap();
        let mut sum = Array1::<f64>::zeros(x.len());
        for k in 0..ZERNIKE_TERMS {
            let unit = ZernikeCoefficients::unit(k).unwrap();
            let s = zernike_annular_eval(&unit, &x.view(), &y.view(), e).unwrap();
            sum.scaled_add(z.0[k], &s);
        }
        Zip::from(&total).and(&sum).for_each(|&a, &b| {
            assert_relative_eq!(a, b, epsilon = 1e-12, max_relative = 1e-12);
        });
    }
}

#[test]
fn test_unobscured_entry_point_matches_annular_at_zero() {
    let mut rng = seeded(12);
    let (x, y) = random_points(&mut rng, 32);
    let z = random_coefficients(&mut rng);
    let a = zernike_eval(&z, &x.view(), &y.view()).unwrap();
    let b = zernike_annular_eval(&z, &x.view(), &y.view(), 0.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_points_outside_disk_are_evaluated() {
    let z = ZernikeCoefficients::unit(10).unwrap();
    let x = arr1(&[1.5, -2.0]);
    let y = arr1(&[0.3, 0.0]);
    let s = zernike_annular_eval(&z, &x.view(), &y.view(), 0.2).unwrap();
    assert!(s.iter().all(|v| v.is_finite()));
    assert_relative_eq!(s[1], basis_value(MODES[10], -2.0, 0.0, 0.2), epsilon = 1e-12);
}

#[test]
fn test_evaluation_is_deterministic() {
    let mut rng = seeded(13);
    let (x, y) = random_points(&mut rng, 4096);
    let z = random_coefficients(&mut rng);
    let first = zernike_annular_eval(&z, &x.view(), &y.view(), 0.61).unwrap();
    let second = zernike_annular_eval(&z, &x.view(), &y.view(), 0.61).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_input_gives_empty_output() {
    let z = ZernikeCoefficients::unit(0).unwrap();
    let empty = Array1::<f64>::zeros(0);
    let s = zernike_annular_eval(&z, &empty.view(), &empty.view(), 0.3).unwrap();
    assert!(s.is_empty());
}

#[test]
fn test_unpaired_samples_are_rejected() {
    let z = ZernikeCoefficients::zeros();
    let x = arr1(&[1.0, 2.0, 3.0]);
    let y = arr1(&[1.0, 2.0]);
    let err = zernike_annular_eval(&z, &x.view(), &y.view(), 0.0).unwrap_err();
    assert!(matches!(err, KernelError::Shape(_)));
}

#[test]
fn test_coefficient_constructors() {
    let short = vec![1.0; ZERNIKE_TERMS - 1];
    assert!(matches!(
        ZernikeCoefficients::from_slice(&short),
        Err(KernelError::Domain(_))
    ));

    let long: Vec<f64> = (0..30).map(f64::from).collect();
    let z = ZernikeCoefficients::from_slice(&long).unwrap();
    assert_eq!(z.0[27], 27.0);

    let padded = ZernikeCoefficients::padded(&[0.0, 0.0, 0.0, 1.0]).unwrap();
    assert_eq!(padded, ZernikeCoefficients::unit(3).unwrap());
    assert!(matches!(
        ZernikeCoefficients::padded(&long),
        Err(KernelError::Domain(_))
    ));

    assert!(ZernikeCoefficients::unit(ZERNIKE_TERMS).is_err());
    assert_eq!(ZernikeCoefficients::default(), ZernikeCoefficients::zeros());
}

#[test]
fn test_obscuration_range() {
    assert_eq!(Obscuration::new(0.61).unwrap().value(), 0.61);
    assert!(Obscuration::new(0.0).is_ok());
    assert!(matches!(Obscuration::new(1.0), Err(KernelError::Domain(_))));
    assert!(matches!(Obscuration::new(-0.1), Err(KernelError::Domain(_))));
    assert!(Obscuration::new(f64::NAN).is_err());
}

#[test]
fn test_mode_table() {
    for (k, mode) in MODES.iter().enumerate() {
        assert_eq!(mode.index, k);
        assert_eq!(ZernikeMode::from_index(k).unwrap(), *mode);
        assert!(mode.m <= mode.n);
        assert_eq!((mode.n - mode.m) % 2, 0);
        assert_eq!(mode.m == 0, mode.angular == Angular::None);
    }
    assert!(ZernikeMode::from_index(ZERNIKE_TERMS).is_err());
}

#[test]
fn test_selector_tokens() {
    for token in ["1st", "2nd"] {
        let order: JacobianOrder = token.parse().unwrap();
        assert_eq!(order.to_string(), token);
    }
    for token in ["dx", "dy", "dx2", "dy2", "dxy"] {
        let axis: GradientAxis = token.parse().unwrap();
        assert_eq!(axis.to_string(), token);
    }
    assert!(matches!(
        "3rd".parse::<JacobianOrder>(),
        Err(KernelError::Argument(_))
    ));
    assert!(matches!(
        "dz".parse::<GradientAxis>(),
        Err(KernelError::Argument(_))
    ));
    assert!("DX".parse::<GradientAxis>().is_err());
}
