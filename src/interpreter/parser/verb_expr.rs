use std::iter::Peekable;

use crate::{
    ast::{Ast, Literal},
    error::ParseError,
    interpreter::{
        lexer::{Location, Token, TokenKind},
        parser::core::{ParseResult, parse_primary},
    },
};

/// Parses a verb expression: a verb atom with any trailing modifiers.
///
/// A verb atom is a primitive verb token or a parenthesized group that
/// turns out verb-like (a train, or a grouped derived verb). Trailing
/// adverbs and conjunctions bind tighter than application, so `+/ i. 5`
/// reduces with `+/` rather than applying `+` to `/ i. 5`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the verb atom.
///
/// # Returns
/// The verb expression node, possibly wrapped in adverb or conjunction
/// applications.
pub fn parse_verb_expr<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = match tokens.peek().copied() {
        Some(token) => match &token.kind {
            TokenKind::Verb(glyph) => {
                tokens.next();
                Ast::Verb { glyph:    glyph.clone(),
                            location: token.location, }
            },
            TokenKind::LParen => {
                let group = parse_primary(tokens)?;
                if !group.is_verb_like() {
                    return Err(ParseError::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                                             location: token.location, });
                }
                group
            },
            _ => {
                return Err(ParseError::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                                         location: token.location, });
            },
        },
        None => return Err(ParseError::MissingOperand { location: Default::default() }),
    };

    bind_modifiers(tokens, base)
}

/// Binds trailing adverbs and conjunctions onto a verb expression.
///
/// Loops so that stacked modifiers chain from the left: `+/\` is `(+/)\`.
/// A conjunction must find a right operand; a missing one is a parse
/// error.
pub fn bind_modifiers<'a, I>(tokens: &mut Peekable<I>, mut base: Ast) -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    while let Some(token) = tokens.peek().copied() {
        match &token.kind {
            TokenKind::Adverb(glyph) => {
                tokens.next();
                base = Ast::AdverbApply { verb:     Box::new(base),
                                          adverb:   Box::new(Ast::Adverb { glyph:    glyph.clone(),
                                                                           location: token.location, }),
                                          location: token.location, };
            },

            TokenKind::Conjunction(glyph) => {
                tokens.next();
                let right = parse_conjunction_operand(tokens, token.location)?;
                base = Ast::ConjunctionApply { left:        Box::new(base),
                                               conjunction:
                                                   Box::new(Ast::Conjunction { glyph:    glyph.clone(),
                                                                               location:
                                                                                   token.location, }),
                                               right:       Box::new(right),
                                               location:    token.location, };
            },

            _ => break,
        }
    }

    Ok(base)
}

/// Parses the right operand of a conjunction.
///
/// For the dot conjunction this is a verb (`+ . *`); for `^:` it is a
/// noun (`*: ^: 3`). A single numeric literal or a parenthesized group
/// covers the noun case; anything else must be a verb atom.
fn parse_conjunction_operand<'a, I>(tokens: &mut Peekable<I>,
                                    conjunction: Location)
                                    -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(ParseError::MissingOperand { location: conjunction });
    };

    match &token.kind {
        TokenKind::Verb(glyph) => {
            tokens.next();
            Ok(Ast::Verb { glyph:    glyph.clone(),
                           location: token.location, })
        },

        TokenKind::Integer(value) => {
            tokens.next();
            Ok(Ast::NounLiteral { value:    Literal::Integer(*value),
                                  location: token.location, })
        },

        TokenKind::Float(value) => {
            tokens.next();
            Ok(Ast::NounLiteral { value:    Literal::Float(*value),
                                  location: token.location, })
        },

        TokenKind::LParen => parse_primary(tokens),

        _ => Err(ParseError::MissingOperand { location: conjunction }),
    }
}
