/// The lexer module tokenizes J source code.
///
/// The lexer reads raw source text and produces a stream of tokens with
/// exact lexemes and source locations. J makes this unusually delicate:
/// primitives are multi-character glyphs built from overloaded punctuation
/// (`.`, `:`, `/`, `\`), and whitespace between characters decides whether
/// they fuse into a compound glyph or stand alone.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Resolves compound glyphs by longest match over raw source offsets.
/// - Records lexical errors as diagnostics without aborting the scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// J expressions evaluate right-to-left, verbs are monadic or dyadic
/// depending on what sits to their left, adverbs and conjunctions derive
/// new verbs from old ones, and parenthesized verb sequences form trains.
/// The parser resolves all of this into an unambiguous tree.
///
/// # Responsibilities
/// - Splits the token stream into statements at newline boundaries.
/// - Parses expressions right-to-left with parts-of-speech dispatch.
/// - Recognizes derived verbs (adverbs, conjunctions) and trains.
pub mod parser;
/// The array module defines the runtime value type.
///
/// Every noun in the language is an `Array`: a shape vector plus a flat,
/// row-major buffer of integers, floats or characters. The module also
/// renders arrays in J's canonical display form.
pub mod array;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree, applies primitive verbs with J's
/// scalar-broadcasting agreement, resolves derived verbs (reductions,
/// scans, inner products, power of verb) and trains (hooks and forks),
/// and maintains the name environment updated by assignments.
pub mod evaluator;
