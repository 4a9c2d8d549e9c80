use crate::{
    ast::Ast,
    error::EvalError,
    interpreter::{
        array::core::Array,
        evaluator::core::{Context, EvalResult},
        lexer::Location,
    },
};

/// Applies a train of verbs to one argument (`x` absent) or two.
///
/// A two-verb train `(g h)` is a hook:
///
/// ```text
///   (g h) y  ->  y g (h y)        x (g h) y  ->  x g (h y)
/// ```
///
/// A three-verb train `(f g h)` is a fork:
///
/// ```text
///   (f g h) y  ->  (f y) g (h y)  x (f g h) y  ->  (x f y) g (x h y)
/// ```
///
/// Longer trains resolve right-associatively: the tail of a train is
/// itself a train, so `(a b c d e)` is `(a b (c d e))`.
///
/// # Parameters
/// - `verbs`: The train's verb expressions, at least two (the parser
///   guarantees this).
/// - `x`: The left argument for dyadic application, if any.
/// - `y`: The right argument.
///
/// # Returns
/// The value of the train applied to the argument(s).
pub fn apply(context: &mut Context,
             verbs: &[Ast],
             x: Option<&Array>,
             y: &Array,
             location: Location)
             -> EvalResult<Array> {
    match verbs.len() {
        0 | 1 => Err(EvalError::TypeError { details:  "a train requires at least two verbs".to_string(),
                                            location, }),

        // Hook: the tail applies monadically to y alone.
        len if len % 2 == 0 => {
            let tail = apply_tail(context, &verbs[1..], None, y, location)?;
            let left = x.unwrap_or(y);
            context.apply_dyad(&verbs[0], left, &tail)
        },

        // Fork: the outer verbs see the original argument(s).
        _ => {
            let first = match x {
                Some(x) => context.apply_dyad(&verbs[0], x, y)?,
                None => context.apply_monad(&verbs[0], y)?,
            };
            let tail = apply_tail(context, &verbs[2..], x, y, location)?;
            context.apply_dyad(&verbs[1], &first, &tail)
        },
    }
}

/// Applies the tail of a train: a single verb directly, a longer slice
/// as a nested train.
fn apply_tail(context: &mut Context,
              verbs: &[Ast],
              x: Option<&Array>,
              y: &Array,
              location: Location)
              -> EvalResult<Array> {
    if let [verb] = verbs {
        return match x {
            Some(x) => context.apply_dyad(verb, x, y),
            None => context.apply_monad(verb, y),
        };
    }
    apply(context, verbs, x, y, location)
}
