//! # jot
//!
//! jot is an interpreter for a subset of the J array programming
//! language. It lexes, parses, and evaluates one J sentence per line,
//! with J's right-to-left evaluation, parts-of-speech grammar, derived
//! verbs (adverbs and conjunctions), tacit trains (hooks and forks), and
//! multidimensional array arithmetic with scalar broadcasting.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Ast,
    error::{EvalError, LexError, ParseError},
    interpreter::{array::core::Array, evaluator::core::Context, lexer::Token},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Ast` enum and literal types that represent
/// the syntactic structure of J sentences as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for every construct: literals, names, verbs,
///   applications, derived verbs, trains and assignments.
/// - Attaches source locations to every node for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// sentence, one enum per pipeline stage. Every error carries the source
/// location of the offending token or node and renders a human-readable
/// message.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, parser, array runtime and
/// evaluator to provide a complete pipeline from source text to array
/// values. Each stage is independently usable; only the evaluator carries
/// state (the name environment).
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Checked conversions between the `i64` element type and the `usize`
/// values used for shapes, so negative dimensions become proper errors.
pub mod util;

/// Converts source text into tokens plus lexical diagnostics.
///
/// Always produces a token vector (ending in an end-of-input token);
/// lexical errors are reported in the diagnostics vector rather than
/// aborting the scan.
///
/// # Example
/// ```
/// use jot::tokenize;
///
/// let (tokens, diagnostics) = tokenize("1 + 2");
/// assert!(diagnostics.is_empty());
/// assert_eq!(tokens.len(), 4);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    interpreter::lexer::tokenize(source)
}

/// Parses a token stream into one AST root per statement.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
pub fn parse(tokens: &[Token]) -> Result<Vec<Ast>, ParseError> {
    interpreter::parser::statement::parse_program(tokens)
}

/// Evaluates a single statement against an evaluation context.
///
/// # Errors
/// Returns the [`EvalError`] the statement raised, if any.
pub fn evaluate(ast: &Ast, context: &mut Context) -> Result<Array, EvalError> {
    context.eval(ast)
}

/// Runs a whole source string through the pipeline and returns the value
/// of its last statement.
///
/// Lexical diagnostics abort the run before parsing: an expression with a
/// bad token never reaches the evaluator. An empty source yields
/// `Ok(None)`.
///
/// # Errors
/// Returns the first error from any stage, boxed for uniform reporting.
///
/// # Examples
/// ```
/// use jot::{interpreter::evaluator::core::Context, run_source};
///
/// let mut context = Context::new();
/// let value = run_source("+/ i. 5", &mut context).unwrap();
/// assert_eq!(value.unwrap().to_string(), "10");
///
/// // Names persist within a context.
/// run_source("x =. 2 + 3", &mut context).unwrap();
/// let value = run_source("x * x", &mut context).unwrap();
/// assert_eq!(value.unwrap().to_string(), "25");
/// ```
pub fn run_source(source: &str,
                  context: &mut Context)
                  -> Result<Option<Array>, Box<dyn std::error::Error>> {
    let (tokens, diagnostics) = tokenize(source);
    if let Some(diagnostic) = diagnostics.into_iter().next() {
        return Err(Box::new(diagnostic));
    }

    let statements = parse(&tokens)?;

    let mut result = None;
    for statement in &statements {
        result = Some(context.eval(statement)?);
    }
    Ok(result)
}
