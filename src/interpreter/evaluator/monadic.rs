use crate::{
    error::EvalError,
    interpreter::{
        array::core::{Array, ArrayData},
        evaluator::core::EvalResult,
        lexer::Location,
    },
    util::num::dim_to_i64,
};

/// Applies an element-wise operation to a numeric array, keeping its
/// shape and dtype. Integer overflow in the integer path surfaces as a
/// `TypeError`.
fn map_int_float<FI, FF>(y: &Array, location: Location, int_op: FI, float_op: FF)
                         -> EvalResult<Array>
    where FI: Fn(i64) -> Option<i64>,
          FF: Fn(f64) -> f64
{
    match y.data() {
        ArrayData::Int64(data) => {
            let mapped = data.iter()
                             .map(|&v| {
                                 int_op(v).ok_or_else(|| {
                                              EvalError::TypeError { details: "integer overflow".to_string(),
                                                                     location }
                                          })
                             })
                             .collect::<EvalResult<Vec<i64>>>()?;
            Ok(Array::from_flat(ArrayData::Int64(mapped), y.shape().to_vec()))
        },
        ArrayData::Float64(data) => {
            let mapped = data.iter().map(|&v| float_op(v)).collect();
            Ok(Array::from_flat(ArrayData::Float64(mapped), y.shape().to_vec()))
        },
        ArrayData::Chars(_) => Err(EvalError::TypeError { details: "expected a numeric array, found characters".to_string(),
                                                          location }),
    }
}

/// Applies an element-wise operation after promoting to floating point,
/// keeping the shape. The result is always `Float64`.
fn map_to_float<F>(y: &Array, location: Location, op: F) -> EvalResult<Array>
    where F: Fn(f64) -> EvalResult<f64>
{
    let mapped = y.float_values(location)?
                  .into_iter()
                  .map(op)
                  .collect::<EvalResult<Vec<f64>>>()?;
    Ok(Array::from_flat(ArrayData::Float64(mapped), y.shape().to_vec()))
}

/// Monadic `+`: the conjugate, which on real arrays is the identity.
pub fn conjugate(y: &Array, location: Location) -> EvalResult<Array> {
    if !y.is_numeric() {
        return Err(EvalError::TypeError { details: "expected a numeric array, found characters".to_string(),
                                          location });
    }
    Ok(y.clone())
}

/// Monadic `-`: element-wise arithmetic negation.
pub fn negate(y: &Array, location: Location) -> EvalResult<Array> {
    map_int_float(y, location, i64::checked_neg, |v| -v)
}

/// Monadic `*`: the signum, `_1`, `0` or `1` per element.
pub fn signum(y: &Array, location: Location) -> EvalResult<Array> {
    map_int_float(y, location, |v| Some(v.signum()), |v| {
        if v == 0.0 { 0.0 } else { v.signum() }
    })
}

/// Monadic `*:`: element-wise square.
pub fn square(y: &Array, location: Location) -> EvalResult<Array> {
    map_int_float(y, location, |v| v.checked_mul(v), |v| v * v)
}

/// Monadic `%`: element-wise reciprocal, always floating point.
///
/// # Errors
/// `DivisionByZero` when any element is zero.
pub fn reciprocal(y: &Array, location: Location) -> EvalResult<Array> {
    map_to_float(y, location, |v| {
        if v == 0.0 {
            return Err(EvalError::DivisionByZero { location });
        }
        Ok(1.0 / v)
    })
}

/// Monadic `^`: the exponential `e^y`.
pub fn exponential(y: &Array, location: Location) -> EvalResult<Array> {
    map_to_float(y, location, |v| Ok(v.exp()))
}

/// Monadic `^.`: the natural logarithm.
pub fn natural_log(y: &Array, location: Location) -> EvalResult<Array> {
    map_to_float(y, location, |v| Ok(v.ln()))
}

/// Monadic `<.`: element-wise floor, yielding integers.
pub fn floor(y: &Array, location: Location) -> EvalResult<Array> {
    round_toward(y, location, f64::floor)
}

/// Monadic `>.`: element-wise ceiling, yielding integers.
pub fn ceiling(y: &Array, location: Location) -> EvalResult<Array> {
    round_toward(y, location, f64::ceil)
}

#[allow(clippy::cast_possible_truncation)]
fn round_toward(y: &Array, location: Location, round: fn(f64) -> f64) -> EvalResult<Array> {
    match y.data() {
        ArrayData::Int64(_) => Ok(y.clone()),
        ArrayData::Float64(data) => {
            let mapped = data.iter().map(|&v| round(v) as i64).collect();
            Ok(Array::from_flat(ArrayData::Int64(mapped), y.shape().to_vec()))
        },
        ArrayData::Chars(_) => Err(EvalError::TypeError { details: "expected a numeric array, found characters".to_string(),
                                                          location }),
    }
}

/// Monadic `<:`: element-wise decrement.
pub fn decrement(y: &Array, location: Location) -> EvalResult<Array> {
    map_int_float(y, location, |v| v.checked_sub(1), |v| v - 1.0)
}

/// Monadic `>:`: element-wise increment.
pub fn increment(y: &Array, location: Location) -> EvalResult<Array> {
    map_int_float(y, location, |v| v.checked_add(1), |v| v + 1.0)
}

/// Monadic `-.`: element-wise `1 - y`.
pub fn not(y: &Array, location: Location) -> EvalResult<Array> {
    map_int_float(y, location, |v| 1i64.checked_sub(v), |v| 1.0 - v)
}

/// Monadic `-:`: element-wise halving, always floating point.
pub fn halve(y: &Array, location: Location) -> EvalResult<Array> {
    map_to_float(y, location, |v| Ok(v / 2.0))
}

/// Monadic `|`: element-wise magnitude.
pub fn magnitude(y: &Array, location: Location) -> EvalResult<Array> {
    map_int_float(y, location, i64::checked_abs, f64::abs)
}

/// Monadic `$`: the shape of the argument as a rank-1 integer vector,
/// empty for scalars.
///
/// # Example
/// ```
/// use jot::interpreter::{
///     array::core::Array,
///     evaluator::monadic::shape_of,
///     lexer::Location,
/// };
///
/// let shape = shape_of(&Array::iota(5), Location::default()).unwrap();
/// assert_eq!(shape.to_string(), "5");
///
/// let of_scalar = shape_of(&Array::scalar_int(7), Location::default()).unwrap();
/// assert_eq!(of_scalar.size(), 0);
/// ```
pub fn shape_of(y: &Array, _location: Location) -> EvalResult<Array> {
    let dims: Vec<i64> = y.shape().iter().map(|&d| dim_to_i64(d)).collect();
    let len = dims.len();
    Ok(Array::from_flat(ArrayData::Int64(dims), vec![len]))
}

/// Monadic `#`: the tally, a scalar count of items along the leading
/// axis (1 for scalars).
pub fn tally(y: &Array, _location: Location) -> EvalResult<Array> {
    Ok(Array::scalar_int(dim_to_i64(y.tally())))
}

/// Monadic `,`: the ravel, all elements as a rank-1 array.
pub fn ravel(y: &Array, _location: Location) -> EvalResult<Array> {
    Ok(Array::from_flat(y.data().clone(), vec![y.size()]))
}

/// Monadic `i.`: the integers `0 1 ... n-1` for a scalar argument `n`.
/// A negative argument counts down instead, J style.
///
/// # Errors
/// `RankError` for non-scalar arguments, `TypeError` for non-integers.
pub fn integers(y: &Array, location: Location) -> EvalResult<Array> {
    let n = y.scalar_int_value(location)?;
    let count = usize::try_from(n.unsigned_abs()).map_err(|_| {
                    EvalError::TypeError { details: format!("iota argument is too large: {n}"),
                                           location }
                })?;
    let ascending = Array::iota(count);
    if n < 0 { reverse(&ascending, location) } else { Ok(ascending) }
}

/// Monadic `|.`: reverses the order of items along the leading axis.
pub fn reverse(y: &Array, _location: Location) -> EvalResult<Array> {
    if y.is_scalar() {
        return Ok(y.clone());
    }

    let item_size: usize = y.shape()[1..].iter().product();
    let tally = y.tally();

    fn reversed<T: Clone>(data: &[T], tally: usize, item_size: usize) -> Vec<T> {
        let mut out = Vec::with_capacity(data.len());
        for i in (0..tally).rev() {
            out.extend_from_slice(&data[i * item_size..(i + 1) * item_size]);
        }
        out
    }

    let data = match y.data() {
        ArrayData::Int64(data) => ArrayData::Int64(reversed(data, tally, item_size)),
        ArrayData::Float64(data) => ArrayData::Float64(reversed(data, tally, item_size)),
        ArrayData::Chars(data) => ArrayData::Chars(reversed(data, tally, item_size)),
    };
    Ok(Array::from_flat(data, y.shape().to_vec()))
}
