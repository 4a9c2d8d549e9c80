use crate::{
    ast::Ast,
    error::EvalError,
    interpreter::{
        array::core::Array,
        evaluator::core::{Context, EvalResult, verb_name},
        lexer::Location,
    },
};

/// Applies a derived verb `u adverb` to a single right argument.
///
/// - `/` inserts the dyad of `u` between the items of `y` (a reduction).
/// - `\` applies `u /` to every prefix of `y` (a scan).
/// - `./` and `.\` do the same with the dot-suffixed dyad of `u`, which
///   is how `<./` means minimum-reduce.
/// - `~` is reflex: `u~ y` is `y u y`.
///
/// # Errors
/// `EmptyReduce` for an identity-less reduction of an empty array, plus
/// any error from the underlying dyad.
pub fn apply_monad(context: &mut Context,
                   verb: &Ast,
                   adverb: &Ast,
                   y: &Array,
                   location: Location)
                   -> EvalResult<Array> {
    match adverb_glyph(adverb, location)? {
        "/" => reduce(context, verb, y, location),
        "\\" => scan(context, verb, y, location),
        "./" => reduce(context, &dotted(verb, location)?, y, location),
        ".\\" => scan(context, &dotted(verb, location)?, y, location),
        "~" => context.apply_dyad(verb, y, y),
        glyph => Err(EvalError::UnknownVerb { glyph:    glyph.to_string(),
                                              location, }),
    }
}

/// Applies a derived verb `u adverb` between two arguments.
///
/// Only reflex has a dyadic case here: `x u~ y` is `y u x`.
pub fn apply_dyad(context: &mut Context,
                  verb: &Ast,
                  adverb: &Ast,
                  x: &Array,
                  y: &Array,
                  location: Location)
                  -> EvalResult<Array> {
    match adverb_glyph(adverb, location)? {
        "~" => context.apply_dyad(verb, y, x),
        glyph => Err(EvalError::UnknownVerb { glyph:    glyph.to_string(),
                                              location, }),
    }
}

/// Folds the dyad of `verb` between the items of `y` along the leading
/// axis, yielding a result of rank one less.
///
/// A scalar reduces to itself. An empty leading axis yields the verb's
/// identity element where one exists (`+` gives 0, `*` gives 1) and an
/// `EmptyReduce` error otherwise. All supported insertions are
/// associative, so the fold runs left to right.
pub fn reduce(context: &mut Context,
              verb: &Ast,
              y: &Array,
              location: Location)
              -> EvalResult<Array> {
    if y.is_scalar() {
        return Ok(y.clone());
    }

    let count = y.tally();
    if count == 0 {
        return identity(verb).ok_or_else(|| {
                                 EvalError::EmptyReduce { glyph: verb_name(verb),
                                                          location }
                             });
    }

    let mut accumulator = y.item(0);
    for index in 1..count {
        accumulator = context.apply_dyad(verb, &accumulator, &y.item(index))?;
    }
    Ok(accumulator)
}

/// The prefix scan: item `k` of the result is the reduction of the first
/// `k + 1` items of `y`, so `+\ 1 2 3` is `1 3 6`.
pub fn scan(context: &mut Context,
            verb: &Ast,
            y: &Array,
            location: Location)
            -> EvalResult<Array> {
    if y.is_scalar() || y.size() == 0 {
        return Ok(y.clone());
    }

    let count = y.tally();
    let mut running = y.item(0);
    let mut prefixes = Vec::with_capacity(count);
    prefixes.push(running.clone());

    for index in 1..count {
        running = context.apply_dyad(verb, &running, &y.item(index))?;
        prefixes.push(running.clone());
    }
    Array::from_items(&prefixes, location)
}

/// The identity element for an empty reduction, where the verb has one.
fn identity(verb: &Ast) -> Option<Array> {
    match verb {
        Ast::Verb { glyph, .. } if glyph == "+" => Some(Array::scalar_int(0)),
        Ast::Verb { glyph, .. } if glyph == "*" => Some(Array::scalar_int(1)),
        _ => None,
    }
}

/// Rewrites a simple verb to its dot-suffixed partner, turning `<` into
/// the minimum verb `<.` for the `./` adverb.
fn dotted(verb: &Ast, location: Location) -> EvalResult<Ast> {
    match verb {
        Ast::Verb { glyph,
                    location: verb_location, } => {
            Ok(Ast::Verb { glyph:    format!("{glyph}."),
                           location: *verb_location, })
        },
        _ => Err(EvalError::TypeError { details:  format!("the dot adverb requires a simple verb, found {}",
                                                          verb_name(verb)),
                                        location, }),
    }
}

fn adverb_glyph(adverb: &Ast, location: Location) -> EvalResult<&str> {
    match adverb {
        Ast::Adverb { glyph, .. } => Ok(glyph),
        _ => Err(EvalError::TypeError { details:  "malformed adverb application".to_string(),
                                        location, }),
    }
}
