// src/bindings/macros.rs

/// Generates a `#[pyfunction]` over NumPy buffers.
///
/// Every array argument is taken as a read-only n-d view and narrowed to a
/// vector; coefficient views go through the container's `from_view`, selector
/// tokens through `FromStr`. Kernel errors surface as the matching Python
/// exception. The output is a freshly allocated 1-D array.
///
/// Usage:
/// `create_binding!(pythonName, CoefficientType, rust_fn, [z, x, y, e]);`
/// `create_binding!(pythonName, CoefficientType, rust_fn, [z, x, y, e, token: SelectorType]);`
/// `create_binding!(pythonName, CoefficientType, rust_fn, [c, x, y]);`
/// `create_binding!(pythonName, CoefficientType, rust_fn, [c, x, y, token: SelectorType]);`
macro_rules! create_binding {
    // (z, x, y, e) -> Array1<f64>
    ($py_fn_name:ident, $coeffs:ty, $rust_fn:path, [z, x, y, e]) => {
        #[allow(non_snake_case)]
        #[pyo3::prelude::pyfunction]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            z: numpy::PyReadonlyArrayDyn<f64>,
            x: numpy::PyReadonlyArrayDyn<f64>,
            y: numpy::PyReadonlyArrayDyn<f64>,
            e: f64,
        ) -> pyo3::prelude::PyResult<&'py numpy::PyArray1<f64>> {
            let z = <$coeffs>::from_view(&$crate::ops::as_vector("z", z.as_array())?)?;
            let x_arr = $crate::ops::as_vector("x", x.as_array())?;
            let y_arr = $crate::ops::as_vector("y", y.as_array())?;
            let result = $rust_fn(&z, &x_arr, &y_arr, e)?;
            Ok(numpy::IntoPyArray::into_pyarray(result, py))
        }
    };

    // (z, x, y, e, token) -> Array1<f64>
    ($py_fn_name:ident, $coeffs:ty, $rust_fn:path, [z, x, y, e, $token:ident : $selector:ty]) => {
        #[allow(non_snake_case)]
        #[pyo3::prelude::pyfunction]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            z: numpy::PyReadonlyArrayDyn<f64>,
            x: numpy::PyReadonlyArrayDyn<f64>,
            y: numpy::PyReadonlyArrayDyn<f64>,
            e: f64,
            $token: &str,
        ) -> pyo3::prelude::PyResult<&'py numpy::PyArray1<f64>> {
            let selector: $selector = $token.parse()?;
            let z = <$coeffs>::from_view(&$crate::ops::as_vector("z", z.as_array())?)?;
            let x_arr = $crate::ops::as_vector("x", x.as_array())?;
            let y_arr = $crate::ops::as_vector("y", y.as_array())?;
            let result = $rust_fn(&z, &x_arr, &y_arr, e, selector)?;
            Ok(numpy::IntoPyArray::into_pyarray(result, py))
        }
    };

    // (c, x, y) -> Array1<f64>
    ($py_fn_name:ident, $coeffs:ty, $rust_fn:path, [c, x, y]) => {
        #[allow(non_snake_case)]
        #[pyo3::prelude::pyfunction]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            c: numpy::PyReadonlyArrayDyn<f64>,
            x: numpy::PyReadonlyArrayDyn<f64>,
            y: numpy::PyReadonlyArrayDyn<f64>,
        ) -> pyo3::prelude::PyResult<&'py numpy::PyArray1<f64>> {
            let c = <$coeffs>::from_view(&$crate::ops::as_vector("c", c.as_array())?)?;
            let x_arr = $crate::ops::as_vector("x", x.as_array())?;
            let y_arr = $crate::ops::as_vector("y", y.as_array())?;
            let result = $rust_fn(&c, &x_arr, &y_arr)?;
            Ok(numpy::IntoPyArray::into_pyarray(result, py))
        }
    };

    // (c, x, y, token) -> Array1<f64>
    ($py_fn_name:ident, $coeffs:ty, $rust_fn:path, [c, x, y, $token:ident : $selector:ty]) => {
        #[allow(non_snake_case)]
        #[pyo3::prelude::pyfunction]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            c: numpy::PyReadonlyArrayDyn<f64>,
            x: numpy::PyReadonlyArrayDyn<f64>,
            y: numpy::PyReadonlyArrayDyn<f64>,
            $token: &str,
        ) -> pyo3::prelude::PyResult<&'py numpy::PyArray1<f64>> {
            let selector: $selector = $token.parse()?;
            let c = <$coeffs>::from_view(&$crate::ops::as_vector("c", c.as_array())?)?;
            let x_arr = $crate::ops::as_vector("x", x.as_array())?;
            let y_arr = $crate::ops::as_vector("y", y.as_array())?;
            let result = $rust_fn(&c, &x_arr, &y_arr, selector)?;
            Ok(numpy::IntoPyArray::into_pyarray(result, py))
        }
    };
}
