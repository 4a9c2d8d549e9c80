use crate::{error::EvalError, interpreter::{evaluator::core::EvalResult, lexer::Location}};

/// Converts an `i64` dimension or count argument to `usize`.
///
/// ## Errors
/// Returns `EvalError::TypeError` if the value is negative.
///
/// ## Example
/// ```
/// use jot::{interpreter::lexer::Location, util::num::dim_from_i64};
///
/// let loc = Location { line: 1, column: 1 };
///
/// assert_eq!(dim_from_i64(3, loc).unwrap(), 3);
/// assert!(dim_from_i64(-1, loc).is_err());
/// ```
pub fn dim_from_i64(value: i64, location: Location) -> EvalResult<usize> {
    usize::try_from(value).map_err(|_| {
                              EvalError::TypeError { details: format!("dimension must be non-negative, found {value}"),
                                                     location }
                          })
}

/// Converts a `usize` length or dimension to the `i64` element type.
///
/// Shapes never approach `i64::MAX`, so the conversion is lossless in
/// practice; the signature keeps the cast in one audited place.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn dim_to_i64(value: usize) -> i64 {
    value as i64
}
