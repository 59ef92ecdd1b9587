//! Annular Zernike evaluator tests

use ndarray::Array1;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{ZernikeCoefficients, ZERNIKE_TERMS};

mod gradient_test;
mod surface_test;

/// Obscurations every derivative check is repeated for.
pub(super) const OBSCURATIONS: [f64; 3] = [0.0, 0.1, 0.61];

/// Central-difference step.
pub(super) const STEP: f64 = 1e-6;

pub(super) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n` points in the square `|x|, |y| < 0.7`, which keeps the samples off the
/// disk edge without excluding the obscured centre.
pub(super) fn random_points(rng: &mut StdRng, n: usize) -> (Array1<f64>, Array1<f64>) {
    let dist = Uniform::new(-0.7, 0.7);
    let x = Array1::random_using(n, dist, rng);
    let y = Array1::random_using(n, dist, rng);
    (x, y)
}

pub(super) fn random_coefficients(rng: &mut StdRng) -> ZernikeCoefficients {
    let v = Array1::random_using(ZERNIKE_TERMS, Uniform::new(-0.5, 0.5), rng);
    ZernikeCoefficients::from_view(&v.view()).unwrap()
}

/// Central difference `(f(+h) - f(-h)) / 2h` of two pre-evaluated arrays.
pub(super) fn central(plus: &Array1<f64>, minus: &Array1<f64>) -> Array1<f64> {
    (plus - minus) / (2.0 * STEP)
}
