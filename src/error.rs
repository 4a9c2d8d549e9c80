/// Lexical errors.
///
/// Defines the error types that can occur while scanning source text into
/// tokens. The lexer never aborts on these: it records them as diagnostics
/// alongside the token stream so the driver can decide how to proceed.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the error types that can occur while building the syntax tree
/// from a token stream: unexpected tokens, unbalanced parentheses, verbs
/// and conjunctions missing their operands, and invalid assignment targets.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while executing a syntax
/// tree: unbound names, shape and rank disagreements, division by zero,
/// empty reductions, and misuse of verbs as nouns.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
