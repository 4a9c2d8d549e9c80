use crate::interpreter::lexer::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot appear at the current position.
    UnexpectedToken {
        /// The offending source text.
        lexeme:   String,
        /// The location of the token.
        location: Location,
    },
    /// A `(` was opened but its `)` never arrived.
    UnclosedParen {
        /// The location of the opening parenthesis.
        location: Location,
    },
    /// A `)` appeared where an expression was expected.
    UnmatchedRightParen {
        /// The location of the parenthesis.
        location: Location,
    },
    /// A verb or conjunction is missing a required operand.
    MissingOperand {
        /// The location of the verb or conjunction.
        location: Location,
    },
    /// The left side of `=.` or `=:` is not a name.
    BadAssignmentTarget {
        /// The location of the assignment token.
        location: Location,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { lexeme, location } => {
                write!(f, "Parse error at {location}: Unexpected token '{lexeme}'.")
            },

            Self::UnclosedParen { location } => {
                write!(f, "Parse error at {location}: Missing closing parenthesis ')'.")
            },

            Self::UnmatchedRightParen { location } => {
                write!(f, "Parse error at {location}: Unmatched ')'.")
            },

            Self::MissingOperand { location } => {
                write!(f, "Parse error at {location}: Missing operand.")
            },

            Self::BadAssignmentTarget { location } => write!(f,
                                                             "Parse error at {location}: Left side of an assignment must be a name."),
        }
    }
}

impl std::error::Error for ParseError {}
