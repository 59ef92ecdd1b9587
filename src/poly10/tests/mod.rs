//! poly10 evaluator tests

use approx::assert_relative_eq;
use ndarray::{arr1, Array1, Zip};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{
    poly10_2d, poly10_exponents, poly10_grad, poly10_index, Poly10Axis, Poly10Coefficients,
    POLY10_DEGREE, POLY10_TERMS,
};
use crate::error::KernelError;

const STEP: f64 = 1e-6;

fn linear_x() -> Poly10Coefficients {
    let mut c = Poly10Coefficients::zeros();
    c.0[1] = 2.0;
    c
}

#[test]
fn test_linear_term_scenario() {
    let c = linear_x();
    let x = arr1(&[3.0]);
    let y = arr1(&[7.0]);
    assert_eq!(poly10_2d(&c, &x.view(), &y.view()).unwrap()[0], 6.0);

    let mut rng = StdRng::seed_from_u64(41);
    let xs = Array1::random_using(32, Uniform::new(-5.0, 5.0), &mut rng);
    let ys = Array1::random_using(32, Uniform::new(-5.0, 5.0), &mut rng);
    let dx = poly10_grad(&c, &xs.view(), &ys.view(), Poly10Axis::Dx).unwrap();
    let dy = poly10_grad(&c, &xs.view(), &ys.view(), Poly10Axis::Dy).unwrap();
    assert!(dx.iter().all(|&v| v == 2.0));
    assert!(dy.iter().all(|&v| v == 0.0));
}

#[test]
fn test_term_ordering() {
    // 1, x, y, x², xy, y², x³, ...
    let expected = [(0, 0), (1, 0), (0, 1), (2, 0), (1, 1), (0, 2), (3, 0), (2, 1)];
    for (k, &e) in expected.iter().enumerate() {
        assert_eq!(poly10_exponents(k).unwrap(), e);
    }
    assert_eq!(poly10_exponents(POLY10_TERMS - 1).unwrap(), (0, POLY10_DEGREE));

    for k in 0..POLY10_TERMS {
        let (i, j) = poly10_exponents(k).unwrap();
        assert_eq!(poly10_index(i + j, j).unwrap(), k);
    }
    assert!(poly10_exponents(POLY10_TERMS).is_err());
    assert!(poly10_index(3, 4).is_err());
    assert!(poly10_index(POLY10_DEGREE + 1, 0).is_err());
}

#[test]
fn test_each_monomial() {
    let (x, y) = (0.7, -1.3);
    let xs = arr1(&[x]);
    let ys = arr1(&[y]);
    for k in 0..POLY10_TERMS {
        let (i, j) = poly10_exponents(k).unwrap();
        let mut c = Poly10Coefficients::zeros();
        c.0[k] = 1.0;
        let p = poly10_2d(&c, &xs.view(), &ys.view()).unwrap()[0];
        assert_relative_eq!(
            p,
            x.powi(i as i32) * y.powi(j as i32),
            max_relative = 1e-13
        );
    }
}

#[test_log::test]
fn test_gradient_matches_central_differences() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let v = Array1::random_using(POLY10_TERMS, Uniform::new(-1.0, 1.0), &mut rng);
        let c = Poly10Coefficients::from_view(&v.view()).unwrap();
        let x = Array1::random_using(100, Uniform::new(-1.0, 1.0), &mut rng);
        let y = Array1::random_using(100, Uniform::new(-1.0, 1.0), &mut rng);
        let p = |xs: &Array1<f64>, ys: &Array1<f64>| poly10_2d(&c, &xs.view(), &ys.view()).unwrap();

        let dx = poly10_grad(&c, &x.view(), &y.view(), Poly10Axis::Dx).unwrap();
        let fd = (p(&(&x + STEP), &y) - p(&(&x - STEP), &y)) / (2.0 * STEP);
        Zip::from(&dx).and(&fd).for_each(|&a, &b| {
            assert_relative_eq!(a, b, epsilon = 1e-6, max_relative = 1e-6);
        });

        let dy = poly10_grad(&c, &x.view(), &y.view(), Poly10Axis::Dy).unwrap();
        let fd = (p(&x, &(&y + STEP)) - p(&x, &(&y - STEP))) / (2.0 * STEP);
        Zip::from(&dy).and(&fd).for_each(|&a, &b| {
            assert_relative_eq!(a, b, epsilon = 1e-6, max_relative = 1e-6);
        });
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(43);
    let v = Array1::random_using(POLY10_TERMS, Uniform::new(-1.0, 1.0), &mut rng);
    let c = Poly10Coefficients::from_view(&v.view()).unwrap();
    let x = Array1::random_using(4096, Uniform::new(-1.0, 1.0), &mut rng);
    let y = Array1::random_using(4096, Uniform::new(-1.0, 1.0), &mut rng);
    assert_eq!(
        poly10_2d(&c, &x.view(), &y.view()).unwrap(),
        poly10_2d(&c, &x.view(), &y.view()).unwrap()
    );
}

#[test]
fn test_coefficient_count_is_exact() {
    assert!(Poly10Coefficients::from_slice(&[0.0; POLY10_TERMS]).is_ok());
    assert!(matches!(
        Poly10Coefficients::from_slice(&[0.0; POLY10_TERMS - 1]),
        Err(KernelError::Domain(_))
    ));
    assert!(matches!(
        Poly10Coefficients::from_slice(&[0.0; POLY10_TERMS + 1]),
        Err(KernelError::Domain(_))
    ));
}

#[test]
fn test_unpaired_samples_are_rejected() {
    let c = linear_x();
    let x = arr1(&[1.0, 2.0, 3.0]);
    let y = arr1(&[1.0, 2.0]);
    assert!(matches!(
        poly10_2d(&c, &x.view(), &y.view()),
        Err(KernelError::Shape(_))
    ));
    assert!(matches!(
        poly10_grad(&c, &x.view(), &y.view(), Poly10Axis::Dy),
        Err(KernelError::Shape(_))
    ));
}

#[test]
fn test_axis_tokens() {
    assert_eq!("dx".parse::<Poly10Axis>().unwrap(), Poly10Axis::Dx);
    assert_eq!("dy".parse::<Poly10Axis>().unwrap(), Poly10Axis::Dy);
    for token in ["dz", "dx2", "dxy", ""] {
        assert!(matches!(
            token.parse::<Poly10Axis>(),
            Err(KernelError::Argument(_))
        ));
    }
}
