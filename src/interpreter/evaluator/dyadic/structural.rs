use crate::{
    error::EvalError,
    interpreter::{
        array::core::{Array, ArrayData, Dtype},
        evaluator::core::EvalResult,
        lexer::Location,
    },
    util::num::{dim_from_i64, dim_to_i64},
};

/// Dyadic `$`: reshape. The left operand gives the new shape (a scalar
/// or a rank-1 integer vector), the right operand the source data, whose
/// elements are cycled to fill the result.
///
/// # Errors
/// - `RankError` when the shape operand has rank 2 or higher.
/// - `TypeError` for non-integer or negative dimensions, and for
///   reshaping characters beyond rank 1.
/// - `ShapeMismatch` when a non-empty result is requested from an empty
///   source.
///
/// # Example
/// ```
/// use jot::interpreter::{
///     array::core::Array,
///     evaluator::dyadic::structural::reshape,
///     lexer::Location,
/// };
///
/// let shape = Array::scalar_int(5);
/// let out = reshape(&shape, &Array::iota(3), Location::default()).unwrap();
///
/// assert_eq!(out.to_string(), "0 1 2 0 1");
/// ```
pub fn reshape(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    let dims = shape_operand(x, location)?;

    let size = dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d)).ok_or_else(|| {
                     EvalError::TypeError { details: "requested shape is too large".to_string(),
                                            location }
                 })?;

    if size > 0 && y.size() == 0 {
        return Err(EvalError::ShapeMismatch { left: dims,
                                              right: y.shape().to_vec(),
                                              location });
    }
    if matches!(y.data(), ArrayData::Chars(_)) && dims.len() > 1 {
        return Err(EvalError::TypeError { details: "character arrays are limited to rank 1".to_string(),
                                          location });
    }

    let data = match y.data() {
        ArrayData::Int64(src) => ArrayData::Int64(cycled(src, size)),
        ArrayData::Float64(src) => ArrayData::Float64(cycled(src, size)),
        ArrayData::Chars(src) => ArrayData::Chars(cycled(src, size)),
    };
    Ok(Array::from_flat(data, dims))
}

/// Reads the left operand of `$` as a dimension list.
fn shape_operand(x: &Array, location: Location) -> EvalResult<Vec<usize>> {
    if x.rank() > 1 {
        return Err(EvalError::RankError { details: format!("the shape operand must be a scalar or vector, found rank {}",
                                                           x.rank()),
                                          location });
    }
    let Some(values) = x.ints() else {
        return Err(EvalError::TypeError { details: "the shape operand must be made of integers".to_string(),
                                          location });
    };
    values.iter().map(|&v| dim_from_i64(v, location)).collect()
}

fn cycled<T: Clone>(src: &[T], size: usize) -> Vec<T> {
    if size == 0 {
        return Vec::new();
    }
    src.iter().cycle().take(size).cloned().collect()
}

/// Dyadic `,`: append. Joins the items of both operands along the
/// leading axis; the result rank is the larger operand rank (at least 1),
/// scalars contribute a single item (replicated to an item of the other
/// operand's shape when that shape is bigger). Two character lists join
/// into one; characters never mix with numbers.
///
/// # Errors
/// `ShapeMismatch` when the item shapes disagree, `TypeError` when
/// mixing characters with numbers.
///
/// # Example
/// ```
/// use jot::interpreter::{
///     array::core::Array,
///     evaluator::dyadic::structural::append,
///     lexer::Location,
/// };
///
/// let out = append(&Array::iota(3), &Array::scalar_int(9), Location::default()).unwrap();
/// assert_eq!(out.to_string(), "0 1 2 9");
/// ```
pub fn append(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    match (x.data(), y.data()) {
        (ArrayData::Chars(a), ArrayData::Chars(b)) => {
            let mut data = a.clone();
            data.extend_from_slice(b);
            let len = data.len();
            return Ok(Array::from_flat(ArrayData::Chars(data), vec![len]));
        },
        (ArrayData::Chars(_), _) | (_, ArrayData::Chars(_)) => {
            return Err(EvalError::TypeError { details: "cannot append characters to numbers".to_string(),
                                              location });
        },
        _ => {},
    }

    let rank = x.rank().max(y.rank()).max(1);
    let item_shape: Vec<usize> = if x.rank() == rank {
        x.shape()[1..].to_vec()
    } else if y.rank() == rank {
        y.shape()[1..].to_vec()
    } else {
        Vec::new()
    };

    if x.dtype() == Dtype::Int64 && y.dtype() == Dtype::Int64 {
        let (x_items, a) =
            contribution(x, rank, &item_shape, x.ints().unwrap_or_default(), location)?;
        let (y_items, b) =
            contribution(y, rank, &item_shape, y.ints().unwrap_or_default(), location)?;

        let mut shape = vec![x_items + y_items];
        shape.extend_from_slice(&item_shape);
        let data: Vec<i64> = a.into_iter().chain(b).collect();
        return Ok(Array::from_flat(ArrayData::Int64(data), shape));
    }

    let (x_items, a) = contribution(x, rank, &item_shape, &x.float_values(location)?, location)?;
    let (y_items, b) = contribution(y, rank, &item_shape, &y.float_values(location)?, location)?;

    let mut shape = vec![x_items + y_items];
    shape.extend_from_slice(&item_shape);
    let data: Vec<f64> = a.into_iter().chain(b).collect();
    Ok(Array::from_flat(ArrayData::Float64(data), shape))
}

/// The items one operand contributes to an append: how many, and their
/// elements.
///
/// An operand of full rank contributes its items as-is; one of rank one
/// less is a single item; a scalar is replicated into a single item of
/// the common item shape.
fn contribution<T: Copy>(operand: &Array,
                         rank: usize,
                         item_shape: &[usize],
                         values: &[T],
                         location: Location)
                         -> EvalResult<(usize, Vec<T>)> {
    let values = values.to_vec();

    if operand.rank() == rank {
        if operand.shape()[1..] != *item_shape {
            return Err(EvalError::ShapeMismatch { left: operand.shape().to_vec(),
                                                  right: item_shape.to_vec(),
                                                  location });
        }
        return Ok((operand.tally(), values));
    }

    if operand.rank() + 1 == rank {
        if operand.shape() != item_shape {
            return Err(EvalError::ShapeMismatch { left: operand.shape().to_vec(),
                                                  right: item_shape.to_vec(),
                                                  location });
        }
        return Ok((1, values));
    }

    if operand.is_scalar() {
        let item_size: usize = item_shape.iter().product();
        return Ok((1, vec![values[0]; item_size]));
    }

    Err(EvalError::ShapeMismatch { left: operand.shape().to_vec(),
                                   right: item_shape.to_vec(),
                                   location })
}

/// Dyadic `i.`: index of. For each element of `y`, the position of its
/// first occurrence in the list `x`; elements not present map to the
/// tally of `x`. The result has the shape of `y`.
///
/// # Errors
/// `RankError` when `x` has rank 2 or higher.
///
/// # Example
/// ```
/// use jot::interpreter::{
///     array::core::Array,
///     evaluator::dyadic::structural::index_of,
///     lexer::Location,
/// };
///
/// let haystack = Array::from_string("park");
/// let hit = index_of(&haystack, &Array::from_string("k"), Location::default()).unwrap();
/// let miss = index_of(&haystack, &Array::from_string("j"), Location::default()).unwrap();
///
/// assert_eq!(hit.to_string(), "3");
/// assert_eq!(miss.to_string(), "4");
/// ```
pub fn index_of(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    if x.rank() > 1 {
        return Err(EvalError::RankError { details: format!("index-of requires a list left operand, found rank {}",
                                                           x.rank()),
                                          location });
    }

    let positions = match (x.data(), y.data()) {
        (ArrayData::Chars(xs), ArrayData::Chars(ys)) => find_positions(xs, ys),
        (ArrayData::Chars(_), _) | (_, ArrayData::Chars(_)) => {
            // Characters never match numbers; everything misses.
            vec![dim_to_i64(x.size()); y.size()]
        },
        _ => find_positions(&x.float_values(location)?, &y.float_values(location)?),
    };
    Ok(Array::from_flat(ArrayData::Int64(positions), y.shape().to_vec()))
}

fn find_positions<T: PartialEq>(xs: &[T], ys: &[T]) -> Vec<i64> {
    ys.iter()
      .map(|wanted| {
          xs.iter()
            .position(|candidate| candidate == wanted)
            .map_or(dim_to_i64(xs.len()), dim_to_i64)
      })
      .collect()
}

/// Dyadic `-:`: match. A scalar 1 when both operands have the same shape
/// and the same elements (numeric comparison ignores the int/float
/// distinction), otherwise 0.
pub fn match_arrays(x: &Array, y: &Array, location: Location) -> EvalResult<Array> {
    if x.shape() != y.shape() {
        return Ok(Array::scalar_int(0));
    }

    let same = if x.is_numeric() && y.is_numeric() {
        x.float_values(location)? == y.float_values(location)?
    } else {
        x == y
    };
    Ok(Array::scalar_int(i64::from(same)))
}
