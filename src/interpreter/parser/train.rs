use std::iter::Peekable;

use crate::{
    ast::Ast,
    error::ParseError,
    interpreter::{
        lexer::{Location, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_primary},
            verb_expr,
        },
    },
};

/// Parses the body of a parenthesized train, including the closing `)`.
///
/// A train is a sequence of two or more verb expressions with no nouns
/// between them: `(f g)` is a hook, `(f g h)` a fork. The caller has
/// already consumed the `(` and probes this parser on a cloned iterator,
/// so failing on anything non-train is cheap and expected.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening parenthesis.
/// - `location`: Location of the opening parenthesis, recorded on the
///   train node.
///
/// # Returns
/// An [`Ast::Train`] holding the verb expressions in source order.
///
/// # Errors
/// Any token that cannot continue a train, or fewer than two verb
/// expressions before the closing parenthesis.
pub fn parse_train_body<'a, I>(tokens: &mut Peekable<I>, location: Location) -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut verbs = Vec::new();

    loop {
        let Some(token) = tokens.peek().copied() else {
            return Err(ParseError::UnclosedParen { location });
        };

        match &token.kind {
            TokenKind::Verb(_) => verbs.push(verb_expr::parse_verb_expr(tokens)?),

            TokenKind::LParen => {
                let group = parse_primary(tokens)?;
                if !group.is_verb_like() {
                    return Err(ParseError::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                                             location: token.location, });
                }
                verbs.push(verb_expr::bind_modifiers(tokens, group)?);
            },

            TokenKind::RParen => {
                tokens.next();
                break;
            },

            _ => {
                return Err(ParseError::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                                         location: token.location, });
            },
        }
    }

    if verbs.len() < 2 {
        return Err(ParseError::MissingOperand { location });
    }

    Ok(Ast::Train { verbs, location })
}
