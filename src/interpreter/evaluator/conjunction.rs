use crate::{
    ast::Ast,
    error::EvalError,
    interpreter::{
        array::core::{Array, Dtype},
        evaluator::{
            adverb,
            core::{Context, EvalResult},
            dyadic::matmul,
        },
        lexer::Location,
    },
};

/// Applies a derived verb `u conjunction v` to a single right argument.
///
/// Only the power conjunction has a monadic case: `u ^: n` applies `u`
/// to `y` a scalar number of times (`n = 0` is the identity). The dot
/// conjunction is dyadic only.
pub fn apply_monad(context: &mut Context,
                   left: &Ast,
                   conjunction: &Ast,
                   right: &Ast,
                   y: &Array,
                   location: Location)
                   -> EvalResult<Array> {
    match conjunction_glyph(conjunction, location)? {
        "^:" => {
            let count = power_count(context, right, location)?;
            let mut value = y.clone();
            for _ in 0..count {
                value = context.apply_monad(left, &value)?;
            }
            Ok(value)
        },
        glyph => Err(EvalError::UnknownVerb { glyph:    glyph.to_string(),
                                              location, }),
    }
}

/// Applies a derived verb `u conjunction v` between two arguments.
///
/// - `u . v` is the inner product: apply `v` between aligned cells, then
///   reduce the inner axis with `u`. `+ . *` is the matrix product.
/// - `x u ^: n y` applies `x u` to `y` a scalar number of times.
pub fn apply_dyad(context: &mut Context,
                  left: &Ast,
                  conjunction: &Ast,
                  right: &Ast,
                  x: &Array,
                  y: &Array,
                  location: Location)
                  -> EvalResult<Array> {
    match conjunction_glyph(conjunction, location)? {
        "." => inner_product(context, left, right, x, y, location),
        "^:" => {
            let count = power_count(context, right, location)?;
            let mut value = y.clone();
            for _ in 0..count {
                value = context.apply_dyad(left, x, &value)?;
            }
            Ok(value)
        },
        glyph => Err(EvalError::UnknownVerb { glyph:    glyph.to_string(),
                                              location, }),
    }
}

/// The generalized inner product `x (u . v) y`.
///
/// Supports the two shapes this subset promises: equal-length vectors
/// (apply `v` element-wise, reduce with `u`) and table-times-table
/// (every row of `x` against every column of `y`). J spells the left
/// operand as an insertion (`+/ . *`); the bare-verb form `+ . *` means
/// the same thing, so a leading `u/` is stripped down to `u` before the
/// reduction (which supplies its own fold). The common `+ . *` pair
/// short-circuits into the dedicated matrix-product kernel; other verb
/// pairs run through the generic apply/reduce machinery.
///
/// # Errors
/// `ShapeMismatch` when the inner axes disagree, `RankError` for other
/// ranks, plus any error from `u` or `v`.
pub fn inner_product(context: &mut Context,
                     u: &Ast,
                     v: &Ast,
                     x: &Array,
                     y: &Array,
                     location: Location)
                     -> EvalResult<Array> {
    if !v.is_verb_like() {
        return Err(EvalError::TypeError { details:  "the dot conjunction requires verb operands".to_string(),
                                          location, });
    }

    let u = match u {
        Ast::AdverbApply { verb, adverb, .. }
            if matches!(&**adverb, Ast::Adverb { glyph, .. } if glyph == "/") => &**verb,
        _ => u,
    };
    if is_verb(u, "+") && is_verb(v, "*") {
        return matmul::matrix_product(x, y, location);
    }

    match (x.rank(), y.rank()) {
        (1, 1) => {
            if x.shape() != y.shape() {
                return Err(EvalError::ShapeMismatch { left: x.shape().to_vec(),
                                                      right: y.shape().to_vec(),
                                                      location });
            }
            let combined = context.apply_dyad(v, x, y)?;
            adverb::reduce(context, u, &combined, location)
        },

        (2, 2) => {
            let (m, p) = (x.shape()[0], x.shape()[1]);
            let (q, n) = (y.shape()[0], y.shape()[1]);
            if p != q {
                return Err(EvalError::ShapeMismatch { left: x.shape().to_vec(),
                                                      right: y.shape().to_vec(),
                                                      location });
            }

            let columns: Vec<Array> = (0..n).map(|col| column(y, col, location))
                                            .collect::<EvalResult<_>>()?;

            let mut cells = Vec::with_capacity(m * n);
            for row_index in 0..m {
                let row = x.item(row_index);
                for col in &columns {
                    let combined = context.apply_dyad(v, &row, col)?;
                    cells.push(adverb::reduce(context, u, &combined, location)?);
                }
            }

            if cells.is_empty() {
                let dtype = if x.dtype() == Dtype::Int64 && y.dtype() == Dtype::Int64 {
                    Dtype::Int64
                } else {
                    Dtype::Float64
                };
                return Ok(Array::zeros(vec![m, n], dtype));
            }

            let flat = Array::from_items(&cells, location)?;
            Ok(Array::from_flat(flat.data().clone(), vec![m, n]))
        },

        _ => Err(EvalError::RankError { details: format!("inner product requires vectors or tables, found ranks {} and {}",
                                                         x.rank(),
                                                         y.rank()),
                                        location }),
    }
}

/// One column of a table, as a vector.
fn column(table: &Array, index: usize, location: Location) -> EvalResult<Array> {
    let rows = table.shape()[0];
    let cells: Vec<Array> = (0..rows).map(|row| table.item(row).item(index)).collect();
    if cells.is_empty() {
        return Ok(Array::zeros(vec![0], table.dtype()));
    }
    Array::from_items(&cells, location)
}

/// Evaluates the right operand of `^:` to a repetition count.
///
/// # Errors
/// `TypeError` for verb operands or negative counts, `RankError` for
/// non-scalars.
fn power_count(context: &mut Context, right: &Ast, location: Location) -> EvalResult<usize> {
    if right.is_verb_like() {
        return Err(EvalError::TypeError { details:  "the power conjunction requires a numeric right operand".to_string(),
                                          location, });
    }
    let count = context.eval(right)?.scalar_int_value(location)?;
    usize::try_from(count).map_err(|_| {
                              EvalError::TypeError { details: format!("the power conjunction requires a non-negative count, found {count}"),
                                                     location }
                          })
}

fn is_verb(node: &Ast, glyph: &str) -> bool {
    matches!(node, Ast::Verb { glyph: g, .. } if g == glyph)
}

fn conjunction_glyph(conjunction: &Ast, location: Location) -> EvalResult<&str> {
    match conjunction {
        Ast::Conjunction { glyph, .. } => Ok(glyph),
        _ => Err(EvalError::TypeError { details:  "malformed conjunction application".to_string(),
                                        location, }),
    }
}
