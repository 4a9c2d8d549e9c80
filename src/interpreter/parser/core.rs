use std::iter::Peekable;

use crate::{
    ast::{Ast, Literal},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{train, verb_expr},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression, right-to-left.
///
/// J has no operator precedence: everything to the right of a verb is its
/// right argument, so `1 + 2 * 3` means `1 + (2 * 3)`. The parser mirrors
/// that directly. A leading verb expression is applied monadically to the
/// rest of the line; a noun followed by a verb expression becomes the left
/// argument of a dyadic application whose right argument is parsed by
/// recursing on the remainder.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// `MissingOperand` when a verb has nothing to its right, plus any error
/// from the sub-parsers.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    let unit = parse_unit(tokens)?;

    if unit.is_verb_like() {
        if !starts_expression(tokens) {
            return Err(ParseError::MissingOperand { location: unit.location() });
        }
        let argument = parse_expression(tokens)?;
        return Ok(Ast::MonadicApply { location: unit.location(),
                                      verb:     Box::new(unit),
                                      argument: Box::new(argument), });
    }

    if verb_follows(tokens) {
        let verb = verb_expr::parse_verb_expr(tokens)?;
        if !starts_expression(tokens) {
            return Err(ParseError::MissingOperand { location: verb.location() });
        }
        let right = parse_expression(tokens)?;
        return Ok(Ast::DyadicApply { location: verb.location(),
                                     left:     Box::new(unit),
                                     verb:     Box::new(verb),
                                     right:    Box::new(right), });
    }

    Ok(unit)
}

/// Parses one unit: either a verb expression or a primary noun.
///
/// A parenthesized group can turn out to be either (a train is a verb, a
/// grouped sub-expression is a noun), so the group is parsed first and
/// classified afterwards; verb-like groups still accept trailing adverbs
/// and conjunctions.
fn parse_unit<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::Verb(_))
    {
        return verb_expr::parse_verb_expr(tokens);
    }

    let primary = parse_primary(tokens)?;
    if primary.is_verb_like() {
        return verb_expr::bind_modifiers(tokens, primary);
    }
    Ok(primary)
}

/// Parses a primary: a literal, a vector of adjacent numeric literals, a
/// name, or a parenthesized group.
///
/// A run of two or more adjacent numeric literals collapses into a single
/// [`Ast::VectorLiteral`]; a lone numeric literal stays a scalar noun.
///
/// # Errors
/// `UnmatchedRightParen` when a `)` sits where an expression should
/// start, `MissingOperand` at end of statement, `UnexpectedToken`
/// otherwise.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(ParseError::MissingOperand { location: Default::default() });
    };

    match &token.kind {
        TokenKind::Integer(_) | TokenKind::Float(_) => parse_numeric_run(tokens),

        TokenKind::Str(text) => {
            tokens.next();
            Ok(Ast::NounLiteral { value:    Literal::Str(text.clone()),
                                  location: token.location, })
        },

        TokenKind::Name(name) => {
            tokens.next();
            Ok(Ast::Name { name:     name.clone(),
                           location: token.location, })
        },

        TokenKind::LParen => parse_paren_group(tokens),

        TokenKind::RParen => Err(ParseError::UnmatchedRightParen { location: token.location }),

        TokenKind::Verb(_) => verb_expr::parse_verb_expr(tokens),

        TokenKind::Newline | TokenKind::Eof => {
            Err(ParseError::MissingOperand { location: token.location })
        },

        _ => Err(ParseError::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                               location: token.location, }),
    }
}

/// Collapses a run of adjacent numeric literals into a noun.
fn parse_numeric_run<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut elements = Vec::new();
    let mut location = None;

    while let Some(token) = tokens.peek() {
        let literal = match token.kind {
            TokenKind::Integer(value) => Literal::Integer(value),
            TokenKind::Float(value) => Literal::Float(value),
            _ => break,
        };
        location.get_or_insert(token.location);
        elements.push(literal);
        tokens.next();
    }

    let location = location.unwrap_or_default();
    if elements.len() == 1 {
        let value = elements.remove(0);
        return Ok(Ast::NounLiteral { value, location });
    }
    Ok(Ast::VectorLiteral { elements, location })
}

/// Parses a parenthesized group.
///
/// Three readings are tried in order, each on a clone of the iterator so
/// a failed probe leaves no trace:
/// 1. a train (two or more verb expressions, nothing else),
/// 2. a single verb expression (transparent, e.g. `(+ . *)`),
/// 3. an ordinary sub-expression (transparent).
fn parse_paren_group<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Ast>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(open) = tokens.next() else {
        return Err(ParseError::MissingOperand { location: Default::default() });
    };

    let mut probe = tokens.clone();
    if let Ok(parsed) = train::parse_train_body(&mut probe, open.location) {
        *tokens = probe;
        return Ok(parsed);
    }

    let mut probe = tokens.clone();
    if let Ok(verb) = verb_expr::parse_verb_expr(&mut probe)
       && let Some(next) = probe.peek()
       && matches!(next.kind, TokenKind::RParen)
    {
        probe.next();
        *tokens = probe;
        return Ok(verb);
    }

    let expr = parse_expression(tokens)?;
    match tokens.peek() {
        Some(token) if matches!(token.kind, TokenKind::RParen) => {
            tokens.next();
            Ok(expr)
        },
        _ => Err(ParseError::UnclosedParen { location: open.location }),
    }
}

/// Reports whether the next token can begin an expression.
pub fn starts_expression<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.peek().is_some_and(|token| {
                     matches!(token.kind,
                              TokenKind::Integer(_)
                              | TokenKind::Float(_)
                              | TokenKind::Str(_)
                              | TokenKind::Name(_)
                              | TokenKind::Verb(_)
                              | TokenKind::LParen)
                 })
}

/// Reports whether a verb expression follows: either a verb token, or a
/// parenthesized group that parses to something verb-like (a train such
/// as `(f g h)` in `x (f g h) y`).
fn verb_follows<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(token) if matches!(token.kind, TokenKind::Verb(_)) => true,
        Some(token) if matches!(token.kind, TokenKind::LParen) => {
            let mut probe = tokens.clone();
            parse_primary(&mut probe).is_ok_and(|parsed| parsed.is_verb_like())
        },
        _ => false,
    }
}
