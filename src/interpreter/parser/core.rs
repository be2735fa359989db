use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::{BinaryOperator, Expr, MAX_NAME_LEN},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one prefix-notation expression from source text.
///
/// This is the entry point for expression parsing. The source is tokenized,
/// then a single expression is read from a token cursor that is local to
/// this call, so repeated or concurrent parses never observe state left
/// over from a previous parse.
///
/// Tokens remaining after the expression are ignored: operator expressions
/// are closed by the skip step of the *next* descent rather than by
/// matching each `(` to a `)`, so a well-formed input may leave its final
/// `)` unconsumed.
///
/// Grammar:
/// ```text
///     expr   := number | variable | "(" op " " expr " " expr ")"
///     number := "-"? digit+
///     op     := "+" | "-" | "*" | "/"
/// ```
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The root node of the parsed expression tree. The tree mirrors the
/// nesting of the input; no evaluation is performed.
///
/// # Errors
/// Returns a `ParseError` if the input cannot be tokenized or does not
/// start with a complete expression.
///
/// # Example
/// ```
/// use prefixa::{ast::Expr, interpreter::parser::core::parse};
///
/// let expr = parse("-12").unwrap();
/// assert_eq!(expr, Expr::Literal { value: -12,
///                                  pos:   0, });
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     pos:   lexer.span().start, });
        }
    }

    let mut iter = tokens.iter().peekable();

    parse_expression(&mut iter)
}

/// Parses a full expression from the token cursor.
///
/// Each descent first consumes every leading `)` token. Closing parentheses
/// are never matched against their opening `(`; an operator expression ends
/// when the next descent skips past its `)`. A nested operand can sit
/// behind several consecutive `)` tokens, all of which are consumed here.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedToken` if the expression starts with a token that opens no
///   form.
/// - `ExpectedOperator` if `(` is not followed by an operator token.
/// - `NameTooLong` if a variable name exceeds [`MAX_NAME_LEN`] bytes.
/// - `UnexpectedEndOfInput` if the stream ends mid-expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
    }

    match tokens.next() {
        Some((Token::Integer(value), pos)) => Ok(Expr::Literal { value: *value,
                                                                 pos:   *pos, }),

        Some((Token::Identifier(name), pos)) => {
            if name.len() > MAX_NAME_LEN {
                return Err(ParseError::NameTooLong { name: name.clone(),
                                                     pos:  *pos, });
            }

            Ok(Expr::Variable { name: name.clone(),
                                pos:  *pos, })
        },

        Some((Token::LParen, pos)) => {
            let op = parse_operator(tokens)?;
            let left = parse_expression(tokens)?;
            let right = parse_expression(tokens)?;

            Ok(Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos: *pos, })
        },

        Some((tok, pos)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                              pos:   *pos, }),

        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the operator token that must follow `(`.
fn parse_operator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<BinaryOperator>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Plus, _)) => Ok(BinaryOperator::Add),
        Some((Token::Minus, _)) => Ok(BinaryOperator::Sub),
        Some((Token::Star, _)) => Ok(BinaryOperator::Mul),
        Some((Token::Slash, _)) => Ok(BinaryOperator::Div),
        Some((tok, pos)) => Err(ParseError::ExpectedOperator { token: format!("{tok:?}"),
                                                               pos:   *pos, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
