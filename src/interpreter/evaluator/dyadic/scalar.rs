use crate::{
    error::EvalError,
    interpreter::{
        array::core::{Array, ArrayData},
        evaluator::{core::EvalResult, dyadic::agreement::Agreement},
        lexer::Location,
    },
};

fn char_operand(location: Location) -> EvalError {
    EvalError::TypeError { details: "expected numeric operands, found characters".to_string(),
                           location }
}

fn overflow(location: Location) -> EvalError {
    EvalError::TypeError { details: "integer overflow".to_string(),
                           location }
}

/// Applies an element-wise dyadic operation under scalar broadcasting.
///
/// Both operands integer runs the integer path and yields an integer
/// array; any floating-point operand promotes both sides to `f64`.
/// Character operands are rejected.
fn arith<FI, FF>(x: &Array, y: &Array, location: Location, int_op: FI, float_op: FF)
                 -> EvalResult<Array>
    where FI: Fn(i64, i64) -> EvalResult<i64>,
          FF: Fn(f64, f64) -> EvalResult<f64>
{
    let agreed = Agreement::of(x, y, location)?;

    if let (ArrayData::Int64(a), ArrayData::Int64(b)) = (x.data(), y.data()) {
        let mut out = Vec::with_capacity(agreed.size());
        for index in 0..agreed.size() {
            let (i, j) = agreed.pair(index);
            out.push(int_op(a[i], b[j])?);
        }
        return Ok(Array::from_flat(ArrayData::Int64(out), agreed.shape().to_vec()));
    }

    if !x.is_numeric() || !y.is_numeric() {
        return Err(char_operand(location));
    }

    let a = x.float_values(location)?;
    let b = y.float_values(location)?;
    let mut out = Vec::with_capacity(agreed.size());
    for index in 0..agreed.size() {
        let (i, j) = agreed.pair(index);
        out.push(float_op(a[i], b[j])?);
    }
    Ok(Array::from_flat(ArrayData::Float64(out), agreed.shape().to_vec()))
}

/// Applies an element-wise dyadic operation that always yields `Float64`,
/// such as division and power.
fn arith_float<F>(x: &Array, y: &Array, location: Location, op: F) -> EvalResult<Array>
    where F: Fn(f64, f64) -> EvalResult<f64>
{
    let agreed = Agreement::of(x, y, location)?;
    let a = x.float_values(location)?;
    let b = y.float_values(location)?;

    let mut out = Vec::with_capacity(agreed.size());
    for index in 0..agreed.size() {
        let (i, j) = agreed.pair(index);
        out.push(op(a[i], b[j])?);
    }
    Ok(Array::from_flat(ArrayData::Float64(out), agreed.shape().to_vec()))
}

/// Applies an element-wise comparison, yielding J booleans: an integer
/// array of 0s and 1s.
fn compare<FI, FF>(x: &Array, y: &Array, location: Location, int_cmp: FI, float_cmp: FF)
                   -> EvalResult<Array>
    where FI: Fn(i64, i64) -> bool,
          FF: Fn(f64, f64) -> bool
{
    let agreed = Agreement::of(x, y, location)?;

    let mut out = Vec::with_capacity(agreed.size());
    if let (ArrayData::Int64(a), ArrayData::Int64(b)) = (x.data(), y.data()) {
        for index in 0..agreed.size() {
            let (i, j) = agreed.pair(index);
            out.push(i64::from(int_cmp(a[i], b[j])));
        }
    } else {
        let a = x.float_values(location)?;
        let b = y.float_values(location)?;
        for index in 0..agreed.size() {
            let (i, j) = agreed.pair(index);
            out.push(i64::from(float_cmp(a[i], b[j])));
        }
    }
    Ok(Array::from_flat(ArrayData::Int64(out), agreed.shape().to_vec()))
}

/// Dyadic `+`: element-wise addition.
pub fn add(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith(x,
          y,
          location,
          |a, b| a.checked_add(b).ok_or_else(|| overflow(location)),
          |a, b| Ok(a + b))
}

/// Dyadic `-`: element-wise subtraction.
pub fn subtract(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith(x,
          y,
          location,
          |a, b| a.checked_sub(b).ok_or_else(|| overflow(location)),
          |a, b| Ok(a - b))
}

/// Dyadic `*`: element-wise multiplication.
pub fn multiply(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith(x,
          y,
          location,
          |a, b| a.checked_mul(b).ok_or_else(|| overflow(location)),
          |a, b| Ok(a * b))
}

/// Dyadic `%`: element-wise division, always floating point.
///
/// # Errors
/// `DivisionByZero` when any divisor element is zero.
pub fn divide(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith_float(x, y, location, |a, b| {
        if b == 0.0 {
            return Err(EvalError::DivisionByZero { location });
        }
        Ok(a / b)
    })
}

/// Dyadic `^`: element-wise power, always floating point.
pub fn power(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith_float(x, y, location, |a, b| Ok(a.powf(b)))
}

/// Dyadic `^.`: the base-x logarithm of y.
pub fn log_base(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith_float(x, y, location, |a, b| Ok(b.log(a)))
}

/// Dyadic `<.`: element-wise minimum.
pub fn minimum(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith(x, y, location, |a, b| Ok(a.min(b)), |a, b| Ok(a.min(b)))
}

/// Dyadic `>.`: element-wise maximum.
pub fn maximum(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith(x, y, location, |a, b| Ok(a.max(b)), |a, b| Ok(a.max(b)))
}

/// Dyadic `|`: the residue `x | y`, the remainder of y modulo x with the
/// sign following x (J's floored convention). `0 | y` is y itself.
pub fn residue(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith(x,
          y,
          location,
          |a, b| {
              if a == 0 {
                  return Ok(b);
              }
              let r = b.rem_euclid(a.abs());
              Ok(if a < 0 && r != 0 { r - a.abs() } else { r })
          },
          |a, b| {
              if a == 0.0 {
                  return Ok(b);
              }
              Ok(b - a * (b / a).floor())
          })
}

/// Dyadic `=`: element-wise equality as 0/1.
pub fn equal(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    compare(x, y, location, |a, b| a == b, |a, b| a == b)
}

/// Dyadic `<`: element-wise less-than as 0/1.
pub fn less_than(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    compare(x, y, location, |a, b| a < b, |a, b| a < b)
}

/// Dyadic `>`: element-wise greater-than as 0/1.
pub fn greater_than(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    compare(x, y, location, |a, b| a > b, |a, b| a > b)
}

/// Dyadic `<:`: element-wise less-or-equal as 0/1.
pub fn less_equal(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    compare(x, y, location, |a, b| a <= b, |a, b| a <= b)
}

/// Dyadic `>:`: element-wise greater-or-equal as 0/1.
pub fn greater_equal(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    compare(x, y, location, |a, b| a >= b, |a, b| a >= b)
}

/// Dyadic `+.`: the greatest common divisor (J's "or" on booleans).
///
/// # Errors
/// `TypeError` for floating-point operands; the tolerant extension is
/// out of scope.
pub fn gcd_or(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith(x,
          y,
          location,
          |a, b| Ok(gcd(a.unsigned_abs(), b.unsigned_abs())),
          |_, _| {
              Err(EvalError::TypeError { details: "gcd requires integer operands".to_string(),
                                         location })
          })
}

/// Dyadic `*.`: the least common multiple (J's "and" on booleans).
///
/// # Errors
/// `TypeError` for floating-point operands.
pub fn lcm_and(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    arith(x,
          y,
          location,
          |a, b| {
              let g = gcd(a.unsigned_abs(), b.unsigned_abs());
              if g == 0 {
                  return Ok(0);
              }
              let Ok(g) = i64::try_from(g) else {
                  return Err(overflow(location));
              };
              (a / g).checked_mul(b).ok_or_else(|| overflow(location))
          },
          |_, _| {
              Err(EvalError::TypeError { details: "lcm requires integer operands".to_string(),
                                         location })
          })
}

#[allow(clippy::cast_possible_wrap)]
fn gcd(mut a: u64, mut b: u64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}
