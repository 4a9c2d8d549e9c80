use crate::{
    error::EvalError,
    interpreter::{
        array::core::{Array, ArrayData, Dtype},
        evaluator::core::EvalResult,
        lexer::Location,
    },
};

/// The `+.*` inner product: vector dot product or matrix multiplication.
///
/// Two equal-length vectors produce a scalar; an `m x p` table times a
/// `p x n` table produces an `m x n` table. Both operands integer keeps
/// the result integer, anything else promotes to floating point.
///
/// # Errors
/// - `ShapeMismatch` when the inner axes disagree.
/// - `RankError` for operands that are neither vectors nor tables.
///
/// # Example
/// ```
/// use jot::interpreter::{
///     array::core::{Array, ArrayData},
///     evaluator::dyadic::matmul::matrix_product,
///     lexer::Location,
/// };
///
/// let a = Array::from_flat(ArrayData::Int64(vec![1, 2, 3]), vec![3]);
/// let b = Array::from_flat(ArrayData::Int64(vec![4, 5, 6]), vec![3]);
///
/// let dot = matrix_product(&a, &b, Location::default()).unwrap();
/// assert_eq!(dot.to_string(), "32");
/// ```
pub fn matrix_product(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    match (x.rank(), y.rank()) {
        (1, 1) => {
            if x.shape() != y.shape() {
                return Err(mismatch(x, y, location));
            }
            if let (Some(a), Some(b)) = (x.ints(), y.ints()) {
                let dot = int_dot(a, b, 1, 1, location)?;
                return Ok(Array::scalar_int(dot));
            }
            let a = x.float_values(location)?;
            let b = y.float_values(location)?;
            Ok(Array::scalar_float(float_dot(&a, &b, 1, 1)))
        },

        (2, 2) => {
            let (m, p) = (x.shape()[0], x.shape()[1]);
            let (q, n) = (y.shape()[0], y.shape()[1]);
            if p != q {
                return Err(mismatch(x, y, location));
            }
            if p == 0 {
                let dtype = if x.dtype() == Dtype::Int64 && y.dtype() == Dtype::Int64 {
                    Dtype::Int64
                } else {
                    Dtype::Float64
                };
                return Ok(Array::zeros(vec![m, n], dtype));
            }

            if x.dtype() == Dtype::Int64 && y.dtype() == Dtype::Int64 {
                let a = x.ints().unwrap_or_default();
                let b = y.ints().unwrap_or_default();
                let mut out = Vec::with_capacity(m * n);
                for row in 0..m {
                    for col in 0..n {
                        out.push(int_dot(&a[row * p..(row + 1) * p], &b[col..], 1, n, location)?);
                    }
                }
                return Ok(Array::from_flat(ArrayData::Int64(out), vec![m, n]));
            }

            let a = x.float_values(location)?;
            let b = y.float_values(location)?;
            let mut out = Vec::with_capacity(m * n);
            for row in 0..m {
                for col in 0..n {
                    out.push(float_dot(&a[row * p..(row + 1) * p], &b[col..], 1, n));
                }
            }
            Ok(Array::from_flat(ArrayData::Float64(out), vec![m, n]))
        },

        _ => Err(EvalError::RankError { details: format!("inner product requires vectors or tables, found ranks {} and {}",
                                                         x.rank(),
                                                         y.rank()),
                                        location }),
    }
}

fn mismatch(x: &Array, y: &Array, location: Location) -> EvalError {
    EvalError::ShapeMismatch { left: x.shape().to_vec(),
                               right: y.shape().to_vec(),
                               location }
}

/// Dot product over strided slices: element `k` pairs `a[k * step_a]`
/// with `b[k * step_b]`, for as many terms as `a` can supply.
fn int_dot(a: &[i64],
           b: &[i64],
           step_a: usize,
           step_b: usize,
           location: Location)
           -> EvalResult<i64> {
    let terms = a.len().div_ceil(step_a);
    let mut acc = 0i64;
    for k in 0..terms {
        let product = a[k * step_a].checked_mul(b[k * step_b]);
        acc = product.and_then(|p| acc.checked_add(p)).ok_or_else(|| {
                  EvalError::TypeError { details: "integer overflow".to_string(),
                                         location }
              })?;
    }
    Ok(acc)
}

fn float_dot(a: &[f64], b: &[f64], step_a: usize, step_b: usize) -> f64 {
    let terms = a.len().div_ceil(step_a);
    (0..terms).map(|k| a[k * step_a] * b[k * step_b]).sum()
}
