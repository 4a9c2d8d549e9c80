use crate::interpreter::lexer::Location;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to use a name that has not been assigned.
    UnboundName {
        /// The name that was looked up.
        name:     String,
        /// The source location of the reference.
        location: Location,
    },
    /// Two array operands disagree in shape and neither is a scalar.
    ShapeMismatch {
        /// Shape of the left operand.
        left:     Vec<usize>,
        /// Shape of the right operand.
        right:    Vec<usize>,
        /// The source location of the operation.
        location: Location,
    },
    /// An argument has the wrong rank for the verb, e.g. `i.` of a vector.
    RankError {
        /// Details about the rank requirement.
        details:  String,
        /// The source location of the operation.
        location: Location,
    },
    /// Attempted division by zero (including reciprocal of zero).
    DivisionByZero {
        /// The source location of the operation.
        location: Location,
    },
    /// Reduced an empty array with a verb that has no identity element.
    EmptyReduce {
        /// The glyph of the verb being inserted.
        glyph:    String,
        /// The source location of the reduction.
        location: Location,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// The source location of the operation.
        location: Location,
    },
    /// A glyph has no definition for the way it was applied.
    UnknownVerb {
        /// The glyph that was applied.
        glyph:    String,
        /// The source location of the application.
        location: Location,
    },
    /// A verb, adverb, conjunction or train appeared where a noun was
    /// required.
    VerbNotNoun {
        /// The source location of the offending expression.
        location: Location,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundName { name, location } => {
                write!(f, "Eval error at {location}: Unbound name '{name}'.")
            },

            Self::ShapeMismatch { left,
                                  right,
                                  location, } => write!(f,
                                                        "Eval error at {location}: Shapes {left:?} and {right:?} do not agree."),

            Self::RankError { details, location } => {
                write!(f, "Eval error at {location}: Rank error: {details}.")
            },

            Self::DivisionByZero { location } => {
                write!(f, "Eval error at {location}: Division by zero.")
            },

            Self::EmptyReduce { glyph, location } => write!(f,
                                                            "Eval error at {location}: Cannot reduce an empty array with '{glyph}'."),

            Self::TypeError { details, location } => {
                write!(f, "Eval error at {location}: Type error: {details}.")
            },

            Self::UnknownVerb { glyph, location } => write!(f,
                                                            "Eval error at {location}: Verb '{glyph}' has no applicable definition."),

            Self::VerbNotNoun { location } => write!(f,
                                                     "Eval error at {location}: Expected a noun, found a verb expression."),
        }
    }
}

impl std::error::Error for EvalError {}
