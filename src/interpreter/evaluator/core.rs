use std::collections::HashMap;

use crate::{
    ast::{Ast, Literal},
    error::EvalError,
    interpreter::{
        array::core::{Array, ArrayData},
        evaluator::{adverb, conjunction, train, verbs},
        lexer::Location,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the runtime evaluation context.
///
/// Holds the name environment that assignments update and name references
/// read. A fresh context starts empty; nothing persists across contexts.
/// The `=.`/`=:` distinction is recorded in the AST but both bind here,
/// since this subset has a single scope.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating the statements of
/// one or more sources in order.
pub struct Context {
    /// Bindings from names to their current array values.
    pub names: HashMap<String, Array>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { names: HashMap::new() }
    }

    /// Evaluates an expression and returns the resulting array.
    ///
    /// This is the main entry point for evaluation. Nouns materialize
    /// directly; applications evaluate their arguments (right argument
    /// first, matching J's right-to-left order) and dispatch to the verb
    /// machinery; assignments bind and yield their value. A verb-like
    /// node in noun position is an error: verbs are not values in this
    /// subset.
    ///
    /// # Parameters
    /// - `ast`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed array value.
    ///
    /// # Errors
    /// Any [`EvalError`] raised by the expression.
    ///
    /// # Example
    /// ```
    /// use jot::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// let (tokens, _) = jot::tokenize("2 + 3");
    /// let statements = jot::parse(&tokens).unwrap();
    ///
    /// let value = context.eval(&statements[0]).unwrap();
    /// assert_eq!(value.to_string(), "5");
    /// ```
    pub fn eval(&mut self, ast: &Ast) -> EvalResult<Array> {
        match ast {
            Ast::NounLiteral { value, .. } => Ok(Self::eval_literal(value)),

            Ast::VectorLiteral { elements, location } => Self::eval_vector(elements, *location),

            Ast::Name { name, location } => {
                self.names.get(name).cloned().ok_or_else(|| {
                                                 EvalError::UnboundName { name: name.clone(),
                                                                          location: *location, }
                                             })
            },

            Ast::Assignment { name, value, .. } => {
                let bound = self.eval(value)?;
                self.names.insert(name.clone(), bound.clone());
                Ok(bound)
            },

            Ast::MonadicApply { verb, argument, .. } => {
                let y = self.eval(argument)?;
                self.apply_monad(verb, &y)
            },

            Ast::DyadicApply { left, verb, right, .. } => {
                let y = self.eval(right)?;
                let x = self.eval(left)?;
                self.apply_dyad(verb, &x, &y)
            },

            Ast::Verb { location, .. }
            | Ast::Adverb { location, .. }
            | Ast::Conjunction { location, .. }
            | Ast::AdverbApply { location, .. }
            | Ast::ConjunctionApply { location, .. }
            | Ast::Train { location, .. } => Err(EvalError::VerbNotNoun { location: *location }),
        }
    }

    /// Applies a verb expression to a single right argument.
    ///
    /// The verb expression may be a bare primitive, an adverb or
    /// conjunction application (a derived verb), or a train; each resolves
    /// to its own application machinery.
    ///
    /// # Errors
    /// `UnknownVerb` when the glyph has no monadic definition, plus any
    /// error from the kernel itself.
    pub fn apply_monad(&mut self, verb: &Ast, y: &Array) -> EvalResult<Array> {
        match verb {
            Ast::Verb { glyph, location } => {
                let kernel =
                    verbs::lookup(glyph).and_then(|def| def.monad)
                                        .ok_or_else(|| {
                                            EvalError::UnknownVerb { glyph:    glyph.clone(),
                                                                     location: *location, }
                                        })?;
                kernel(y, *location)
            },

            Ast::AdverbApply { verb,
                               adverb,
                               location, } => {
                adverb::apply_monad(self, verb, adverb, y, *location)
            },

            Ast::ConjunctionApply { left,
                                    conjunction,
                                    right,
                                    location, } => {
                conjunction::apply_monad(self, left, conjunction, right, y, *location)
            },

            Ast::Train { verbs, location } => train::apply(self, verbs, None, y, *location),

            other => Err(EvalError::TypeError { details:  "expected a verb expression".to_string(),
                                                location: other.location(), }),
        }
    }

    /// Applies a verb expression between two arguments.
    ///
    /// # Errors
    /// `UnknownVerb` when the glyph has no dyadic definition, plus any
    /// error from the kernel itself.
    pub fn apply_dyad(&mut self, verb: &Ast, x: &Array, y: &Array) -> EvalResult<Array> {
        match verb {
            Ast::Verb { glyph, location } => {
                let kernel =
                    verbs::lookup(glyph).and_then(|def| def.dyad)
                                        .ok_or_else(|| {
                                            EvalError::UnknownVerb { glyph:    glyph.clone(),
                                                                     location: *location, }
                                        })?;
                kernel(x, y, *location)
            },

            Ast::AdverbApply { verb,
                               adverb,
                               location, } => {
                adverb::apply_dyad(self, verb, adverb, x, y, *location)
            },

            Ast::ConjunctionApply { left,
                                    conjunction,
                                    right,
                                    location, } => {
                conjunction::apply_dyad(self, left, conjunction, right, x, y, *location)
            },

            Ast::Train { verbs, location } => train::apply(self, verbs, Some(x), y, *location),

            other => Err(EvalError::TypeError { details:  "expected a verb expression".to_string(),
                                                location: other.location(), }),
        }
    }

    /// Materializes a scalar literal as a rank-0 array (or a character
    /// list for strings).
    fn eval_literal(value: &Literal) -> Array {
        match value {
            Literal::Integer(n) => Array::scalar_int(*n),
            Literal::Float(r) => Array::scalar_float(*r),
            Literal::Str(s) => Array::from_string(s),
        }
    }

    /// Materializes a vector literal as a rank-1 array.
    ///
    /// The element type is the promoted type of all elements: integer if
    /// every element is an integer, floating point otherwise.
    fn eval_vector(elements: &[Literal], location: Location) -> EvalResult<Array> {
        let all_integers = elements.iter().all(|e| matches!(e, Literal::Integer(_)));

        if all_integers {
            let data: Vec<i64> = elements.iter()
                                         .map(|e| match e {
                                             Literal::Integer(n) => *n,
                                             _ => 0,
                                         })
                                         .collect();
            return Ok(Array::from_flat(ArrayData::Int64(data), vec![elements.len()]));
        }

        #[allow(clippy::cast_precision_loss)]
        let data = elements.iter()
                           .map(|e| match e {
                               Literal::Integer(n) => Ok(*n as f64),
                               Literal::Float(r) => Ok(*r),
                               Literal::Str(_) => Err(EvalError::TypeError { details: "strings cannot appear in a numeric vector".to_string(),
                                                                             location }),
                           })
                           .collect::<EvalResult<Vec<f64>>>()?;
        Ok(Array::from_flat(ArrayData::Float64(data), vec![elements.len()]))
    }
}

/// Renders a verb expression for error messages, e.g. `+/` or `+ . *`.
#[must_use]
pub fn verb_name(verb: &Ast) -> String {
    match verb {
        Ast::Verb { glyph, .. }
        | Ast::Adverb { glyph, .. }
        | Ast::Conjunction { glyph, .. } => glyph.clone(),
        Ast::AdverbApply { verb, adverb, .. } => format!("{}{}", verb_name(verb), verb_name(adverb)),
        Ast::ConjunctionApply { left,
                                conjunction,
                                right,
                                .. } => {
            format!("{} {} {}", verb_name(left), verb_name(conjunction), verb_name(right))
        },
        Ast::Train { .. } => "train".to_string(),
        _ => "noun".to_string(),
    }
}
