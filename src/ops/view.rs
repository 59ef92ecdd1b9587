use ndarray::{Array1, ArrayView1, ArrayViewD, Ix1, Zip};

use crate::error::{KernelError, Result};

/// Reinterprets a borrowed n-d buffer as a vector.
///
/// Fails with [`KernelError::Shape`] unless the buffer has exactly one axis.
/// `name` only feeds the error message.
pub fn as_vector<'a>(name: &str, arr: ArrayViewD<'a, f64>) -> Result<ArrayView1<'a, f64>> {
    let ndim = arr.ndim();
    arr.into_dimensionality::<Ix1>().map_err(|_| {
        KernelError::shape(format!(
            "number of dimensions of `{}` must be one, got {}",
            name, ndim
        ))
    })
}

/// Returns the shared length of a pair of sample vectors.
pub fn paired_len(x: &ArrayView1<f64>, y: &ArrayView1<f64>) -> Result<usize> {
    if x.len() != y.len() {
        return Err(KernelError::shape(format!(
            "x and y must have the same length, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    Ok(x.len())
}

/// Fresh output buffer of `len` values. Never aliases an input.
pub fn allocate(len: usize) -> Array1<f64> {
    Array1::zeros(len)
}

/// Writes `f(x[i], y[i])` into slot `i` of a freshly allocated buffer.
///
/// Iterations only read `x`, `y` and whatever `f` captures, so the pass runs on
/// the rayon pool. Each slot depends on its own point alone, which keeps the
/// result bit-identical to a serial pass.
pub fn map_points<F>(x: &ArrayView1<f64>, y: &ArrayView1<f64>, f: F) -> Result<Array1<f64>>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    let n = paired_len(x, y)?;
    let mut out = allocate(n);
    Zip::from(&mut out)
        .and(x)
        .and(y)
        .par_for_each(|o, &xi, &yi| *o = f(xi, yi));
    Ok(out)
}
