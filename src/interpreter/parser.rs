/// Expression parsing.
///
/// Holds the right-to-left expression parser: a leading verb expression
/// applies monadically to everything on its right, while a noun followed
/// by a verb expression recurses right to build the dyadic case. Also
/// collapses adjacent numeric literals into vector literals and resolves
/// parenthesized groups.
pub mod core;
/// Statement parsing.
///
/// Splits the token stream into statements at newline boundaries and
/// recognizes assignments by the `Name =.` / `Name =:` lookahead.
pub mod statement;
/// Train recognition.
///
/// Probes the contents of a parenthesized group for a sequence of two or
/// more verb expressions with no nouns between them, producing a hook or
/// fork train node.
pub mod train;
/// Verb-expression parsing.
///
/// Parses a verb atom and binds trailing adverbs and conjunctions onto
/// it, producing derived-verb nodes such as `+/` and `+ . *`.
pub mod verb_expr;
