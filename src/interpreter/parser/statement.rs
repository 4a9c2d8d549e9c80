use std::iter::Peekable;

use crate::{
    ast::Ast,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a whole token stream into its statements.
///
/// The stream is split at newline boundaries; empty lines produce no
/// statement. Comments never reach the parser (the lexer discards them),
/// so a statement is either an assignment or an expression. A stray `)`
/// after a statement is consumed and the statement ends there, which lets
/// the rest of the input keep parsing.
///
/// # Parameters
/// - `tokens`: The full token vector from the lexer, ending in `Eof`.
///
/// # Returns
/// One AST root per statement, in source order.
///
/// # Errors
/// Any parse error from the statements themselves, or `UnexpectedToken`
/// when leftover tokens follow a complete statement.
pub fn parse_program(tokens: &[Token]) -> ParseResult<Vec<Ast>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        while let Some(token) = iter.peek()
              && matches!(token.kind, TokenKind::Newline)
        {
            iter.next();
        }
        match iter.peek() {
            None => break,
            Some(token) if matches!(token.kind, TokenKind::Eof) => break,
            Some(_) => {},
        }

        statements.push(parse_statement(&mut iter)?);

        while let Some(token) = iter.peek()
              && matches!(token.kind, TokenKind::RParen)
        {
            iter.next();
        }
        match iter.peek() {
            None => break,
            Some(token) if matches!(token.kind, TokenKind::Newline | TokenKind::Eof) => {},
            Some(token) => {
                return Err(ParseError::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                                         location: token.location, });
            },
        }
    }

    Ok(statements)
}

/// Parses a single statement: an assignment or an expression.
///
/// Assignment is recognized by lookahead: a name directly followed by
/// `=.` or `=:`. Anything else is an expression statement. An assignment
/// token showing up anywhere else means its left side was not a plain
/// name, which is reported as `BadAssignmentTarget`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   statement.
///
/// # Returns
/// The parsed statement node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut probe = tokens.clone();
    if let Some(first) = probe.next()
       && let TokenKind::Name(name) = &first.kind
       && let Some(second) = probe.next()
       && matches!(second.kind, TokenKind::AssignLocal | TokenKind::AssignGlobal)
    {
        tokens.next();
        tokens.next();

        let value = parse_expression(tokens)?;
        return Ok(Ast::Assignment { name:     name.clone(),
                                    value:    Box::new(value),
                                    global:   matches!(second.kind, TokenKind::AssignGlobal),
                                    location: first.location, });
    }

    let expr = parse_expression(tokens)?;

    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::AssignLocal | TokenKind::AssignGlobal)
    {
        return Err(ParseError::BadAssignmentTarget { location: token.location });
    }

    Ok(expr)
}
