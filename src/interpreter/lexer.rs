use logos::Logos;

use crate::error::LexError;

/// A position in the source text, used only for diagnostics.
///
/// Both fields are 1-based, following editor conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number.
    pub line:   usize,
    /// The 1-based column number.
    pub column: usize,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The raw scanner. Its patterns are the primitive table: the derive
/// compiles them into a single longest-match automaton that runs over
/// raw source offsets, so a compound glyph like `<:` is only recognized
/// when its characters are adjacent in the source. `< :` scans as two
/// separate tokens because whitespace is a token separator, never part
/// of a glyph.
///
/// Classification into verbs, adverbs and conjunctions happens here, not
/// in the parser: each glyph pattern feeds the variant for its part of
/// speech. [`tokenize`] pairs every raw token with its lexeme and
/// location to build the public [`Token`].
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Floating-point literals such as `3.14` or `_0.5`; J writes
    /// negative numbers with a leading underscore.
    #[regex(r"_?[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literals such as `42` or `_5`.
    #[regex(r"_?[0-9]+", parse_integer)]
    Integer(i64),
    /// String literals, apostrophe-delimited; a doubled `''` inside is an
    /// escaped apostrophe and the payload carries the unescaped text.
    #[regex(r"'([^'\n]|'')*'", parse_string)]
    Str(String),

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("%")]
    #[token("#")]
    #[token("$")]
    #[token("<")]
    #[token(">")]
    #[token("=")]
    #[token(",")]
    #[token("^")]
    #[token("|")]
    #[token("!")]
    #[token("<.")]
    #[token("<:")]
    #[token(">.")]
    #[token(">:")]
    #[token("+.")]
    #[token("*.")]
    #[token("*:")]
    #[token("-.")]
    #[token("-:")]
    #[token("%.")]
    #[token("^.")]
    #[token("|.")]
    #[token("i.", priority = 10)]
    #[token("+.*")]
    Verb,

    #[token("/")]
    #[token("\\")]
    #[token("./")]
    #[token(".\\")]
    #[token("~")]
    Adverb,

    #[token("^:")]
    #[token(".")]
    Conjunction,

    /// Identifiers: variable names such as `x` or `total`. J allows a
    /// trailing `.` or `:` on a name.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*[.:]?")]
    Name,

    #[token("=.")]
    AssignLocal,
    #[token("=:")]
    AssignGlobal,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
    })]
    Newline,
    /// `NB.` comments run to the end of the line and never reach the
    /// parser.
    #[regex(r"NB\.[^\n]*", logos::skip, priority = 10)]
    Comment,
    /// Spaces and tabs separate tokens and are otherwise discarded.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,
}

/// Classifies a token of the public stream.
///
/// Literal variants carry their parsed value; part-of-speech variants
/// carry the glyph exactly as written. Comments and whitespace are
/// consumed during scanning and never appear here.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An integer literal and its value.
    Integer(i64),
    /// A floating-point literal and its value.
    Float(f64),
    /// A string literal and its unescaped content.
    Str(String),
    /// A primitive verb glyph such as `+` or `i.`.
    Verb(String),
    /// A primitive adverb glyph such as `/` or `./`.
    Adverb(String),
    /// A primitive conjunction glyph: `^:` or `.`.
    Conjunction(String),
    /// An identifier.
    Name(String),
    /// Local assignment, `=.`.
    AssignLocal,
    /// Global assignment, `=:`.
    AssignGlobal,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Statement separator.
    Newline,
    /// End of input. Always the last token of the stream.
    Eof,
    /// A character the lexer does not recognize. Produced alongside an
    /// [`LexError::UnknownCharacter`] diagnostic; the parser rejects it.
    Unknown,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line
/// starts, so each token's 1-based (line, column) location can be
/// computed from its span.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// A lexical token: its classification, the exact source text it covers,
/// and where that text sits in the source.
///
/// The lexeme always equals the source substring at `location`, which is
/// what diagnostics print and what the adjacency checks in [`tokenize`]
/// rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token's classification and literal payload.
    pub kind:     TokenKind,
    /// The exact source substring this token covers.
    pub lexeme:   String,
    /// Position of the first character of the lexeme.
    pub location: Location,
}

/// Converts source text into a vector of tokens plus lexical
/// diagnostics.
///
/// Lexing never aborts: an unterminated string or unrecognized character
/// is recorded as a diagnostic, a [`TokenKind::Unknown`] token stands in
/// for the bad text, and scanning continues. The returned vector always
/// ends with a [`TokenKind::Eof`] token.
///
/// Compound glyphs are recognized only when their characters are
/// adjacent in the source: `<.` is one floor verb, `< .` is a verb and a
/// separate conjunction. One case needs help beyond longest-match:
/// `<./` must scan as `<` followed by the adverb `./`, so a resplit pass
/// peels the suffix dot off a dot-suffixed verb that directly touches a
/// `/` or `\`.
///
/// # Parameters
/// - `source`: The source text to scan.
///
/// # Returns
/// The token vector and any diagnostics, in source order.
///
/// # Example
/// ```
/// use jot::interpreter::lexer::{TokenKind, tokenize};
///
/// let (tokens, diagnostics) = tokenize("2 + 2");
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(tokens.len(), 4); // 2, +, 2, end of input
/// assert_eq!(tokens[1].kind, TokenKind::Verb("+".to_string()));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line:       1,
                                                                     line_start: 0, });

    loop {
        let line = lexer.extras.line;
        let line_start = lexer.extras.line_start;
        let Some(scanned) = lexer.next() else { break };

        let span = lexer.span();
        let lexeme = source[span.clone()].to_string();
        let location = Location { line,
                                  column: span.start - line_start + 1 };

        let kind = match scanned {
            Ok(RawToken::Integer(value)) => TokenKind::Integer(value),
            Ok(RawToken::Float(value)) => TokenKind::Float(value),
            Ok(RawToken::Str(text)) => TokenKind::Str(text),
            Ok(RawToken::Verb) => TokenKind::Verb(lexeme.clone()),
            Ok(RawToken::Adverb) => TokenKind::Adverb(lexeme.clone()),
            Ok(RawToken::Conjunction) => TokenKind::Conjunction(lexeme.clone()),
            Ok(RawToken::Name) => TokenKind::Name(lexeme.clone()),
            Ok(RawToken::AssignLocal) => TokenKind::AssignLocal,
            Ok(RawToken::AssignGlobal) => TokenKind::AssignGlobal,
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::Newline) => TokenKind::Newline,
            // Skipped by the scanner, never yielded.
            Ok(RawToken::Comment | RawToken::Whitespace) => continue,
            Err(()) => {
                if lexeme.starts_with('\'') {
                    diagnostics.push(LexError::UnterminatedString { location });
                } else {
                    diagnostics.push(LexError::UnknownCharacter { lexeme: lexeme.clone(),
                                                                  location });
                }
                TokenKind::Unknown
            },
        };
        tokens.push(Token { kind,
                            lexeme,
                            location });
    }

    let mut tokens = resplit_dot_adverbs(tokens);

    let end = Location { line:   lexer.extras.line,
                         column: source.len() - lexer.extras.line_start + 1, };
    tokens.push(Token { kind:     TokenKind::Eof,
                        lexeme:   String::new(),
                        location: end, });

    (tokens, diagnostics)
}

/// Splits `Verb("X.") Adverb("/")` pairs into `Verb("X") Adverb("./")`.
///
/// Longest-match scanning turns `<./` into the floor verb followed by a
/// bare slash, but the dot belongs to the adverb: `<./` means `<`
/// modified by `./`. Only directly adjacent pairs on the same line are
/// resplit, so the spaced forms `<. /` and `< ./` keep their own
/// readings. Letter glyphs (`i.`) and the fused `+.*` never take part.
fn resplit_dot_adverbs(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];

        if is_dot_suffixed_punctuation(token)
           && let Some(next) = tokens.get(index + 1)
           && let TokenKind::Adverb(bar) = &next.kind
           && (bar == "/" || bar == "\\")
           && next.location.line == token.location.line
           && next.location.column == token.location.column + token.lexeme.len()
        {
            let base = token.lexeme[..1].to_string();
            let compound = format!(".{bar}");

            out.push(Token { kind:     TokenKind::Verb(base.clone()),
                             lexeme:   base,
                             location: token.location, });
            out.push(Token { kind:     TokenKind::Adverb(compound.clone()),
                             lexeme:   compound,
                             location: Location { line:   token.location.line,
                                                  column: token.location.column + 1, }, });
            index += 2;
        } else {
            out.push(token.clone());
            index += 1;
        }
    }

    out
}

/// Reports whether a token is a punctuation verb of the form `X.`.
fn is_dot_suffixed_punctuation(token: &Token) -> bool {
    matches!(&token.kind, TokenKind::Verb(glyph)
             if glyph.len() == 2
                && glyph.ends_with('.')
                && !glyph.starts_with(|c: char| c.is_ascii_alphabetic()))
}

/// Parses a floating-point literal from the current token slice,
/// translating J's leading `_` into a minus sign.
fn parse_float(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().replace('_', "-").parse().ok()
}
/// Parses an integer literal from the current token slice, translating
/// J's leading `_` into a minus sign.
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Option<i64> {
    lex.slice().replace('_', "-").parse().ok()
}
/// Strips the delimiting apostrophes and unescapes doubled `''`.
fn parse_string(lex: &logos::Lexer<RawToken>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].replace("''", "'")
}
