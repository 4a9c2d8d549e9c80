use crate::interpreter::lexer::Location;

/// Represents a literal value appearing directly in source code.
///
/// J literals are numbers (`5`, `_3.14`) and quoted strings (`'abc'`).
/// Negative numbers are written with a leading underscore, which the lexer
/// already folds into the stored value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A string literal (apostrophe-delimited, `''` unescaped to `'`).
    Str(String),
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An abstract syntax tree node for a J sentence.
///
/// J sentences are built from four parts of speech: nouns (values), verbs
/// (functions), adverbs (verb modifiers) and conjunctions (verb combiners).
/// The parser resolves each token's part of speech and records the result
/// here, so the evaluator never has to re-derive it. Applications come in
/// monadic (one right argument) and dyadic (left and right argument)
/// flavors, and parenthesized verb sequences form trains (hooks and forks).
///
/// Ownership is tree-shaped: a parent exclusively owns its children and the
/// whole tree is freed when the root is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// A single scalar literal, e.g. `42` or `'text'`.
    NounLiteral {
        /// The literal value.
        value:    Literal,
        /// Position in the source code.
        location: Location,
    },
    /// A vector formed by whitespace-separated numeric adjacency, `1 2 3`.
    /// Always holds at least two elements; a single number is a
    /// [`Ast::NounLiteral`].
    VectorLiteral {
        /// The numeric elements, in source order.
        elements: Vec<Literal>,
        /// Position in the source code.
        location: Location,
    },
    /// Reference to a variable by name.
    Name {
        /// Name of the variable.
        name:     String,
        /// Position in the source code.
        location: Location,
    },
    /// A primitive verb such as `+` or `i.`.
    Verb {
        /// The verb's glyph, exactly as written.
        glyph:    String,
        /// Position in the source code.
        location: Location,
    },
    /// A primitive adverb such as `/` or `./`.
    Adverb {
        /// The adverb's glyph.
        glyph:    String,
        /// Position in the source code.
        location: Location,
    },
    /// A primitive conjunction such as `^:` or `.`.
    Conjunction {
        /// The conjunction's glyph.
        glyph:    String,
        /// Position in the source code.
        location: Location,
    },
    /// Application of a verb to a single right argument, e.g. `- 5`.
    MonadicApply {
        /// The verb expression (bare verb, derived verb, or train).
        verb:     Box<Self>,
        /// The right argument.
        argument: Box<Self>,
        /// Position in the source code.
        location: Location,
    },
    /// Application of a verb between two arguments, e.g. `7 - 5`.
    DyadicApply {
        /// The left argument.
        left:     Box<Self>,
        /// The verb expression.
        verb:     Box<Self>,
        /// The right argument.
        right:    Box<Self>,
        /// Position in the source code.
        location: Location,
    },
    /// An adverb applied to a verb, forming a derived verb, e.g. `+/`.
    AdverbApply {
        /// The verb being modified.
        verb:     Box<Self>,
        /// The adverb (an [`Ast::Adverb`] node).
        adverb:   Box<Self>,
        /// Position in the source code.
        location: Location,
    },
    /// A conjunction applied to two operands, forming a derived verb,
    /// e.g. `+ . *` or `*: ^: 3`.
    ConjunctionApply {
        /// The left operand (a verb expression).
        left:        Box<Self>,
        /// The conjunction (an [`Ast::Conjunction`] node).
        conjunction: Box<Self>,
        /// The right operand (a verb expression, or a noun for `^:`).
        right:       Box<Self>,
        /// Position in the source code.
        location:    Location,
    },
    /// A parenthesized sequence of two or more verb expressions.
    /// Two verbs form a hook, three a fork; longer trains resolve
    /// right-associatively.
    Train {
        /// The verb expressions, in source order.
        verbs:    Vec<Self>,
        /// Position in the source code.
        location: Location,
    },
    /// Binding of a name to a value with `=.` (local) or `=:` (global).
    Assignment {
        /// The name being bound.
        name:     String,
        /// The expression whose value is bound.
        value:    Box<Self>,
        /// Whether the binding used `=:`.
        global:   bool,
        /// Position in the source code.
        location: Location,
    },
}

impl Ast {
    /// Gets the source location from `self`.
    ///
    /// ## Example
    /// ```
    /// use jot::{ast::Ast, interpreter::lexer::Location};
    ///
    /// let node = Ast::Name { name:     "x".to_string(),
    ///                        location: Location { line: 2, column: 7 }, };
    ///
    /// assert_eq!(node.location().line, 2);
    /// ```
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::NounLiteral { location, .. }
            | Self::VectorLiteral { location, .. }
            | Self::Name { location, .. }
            | Self::Verb { location, .. }
            | Self::Adverb { location, .. }
            | Self::Conjunction { location, .. }
            | Self::MonadicApply { location, .. }
            | Self::DyadicApply { location, .. }
            | Self::AdverbApply { location, .. }
            | Self::ConjunctionApply { location, .. }
            | Self::Train { location, .. }
            | Self::Assignment { location, .. } => *location,
        }
    }

    /// Reports whether this node denotes a verb rather than a noun.
    ///
    /// Verb-like nodes are bare verbs, adverb and conjunction applications
    /// (derived verbs) and trains. The parser uses this to decide between
    /// monadic and dyadic application, and the evaluator rejects verb-like
    /// nodes found in noun position.
    #[must_use]
    pub const fn is_verb_like(&self) -> bool {
        matches!(self,
                 Self::Verb { .. }
                 | Self::AdverbApply { .. }
                 | Self::ConjunctionApply { .. }
                 | Self::Train { .. })
    }
}
