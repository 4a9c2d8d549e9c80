use crate::interpreter::lexer::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The location of the opening apostrophe.
        location: Location,
    },
    /// A character that starts no token was encountered.
    UnknownCharacter {
        /// The offending source text.
        lexeme:   String,
        /// The location of the character.
        location: Location,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { location } => {
                write!(f, "Lex error at {location}: Unterminated string literal.")
            },

            Self::UnknownCharacter { lexeme, location } => {
                write!(f, "Lex error at {location}: Unrecognized character '{lexeme}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
