use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42` or `-17`.
    ///
    /// The scanner claims the whole delimiter-free run starting at a digit
    /// or leading `-`, so a malformed literal such as `5x` fails to lex
    /// instead of being silently truncated to `5`.
    #[regex(r"-?[0-9][^ \t\r\n\f()]*", parse_integer, priority = 3)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Variable name tokens: any run of non-space, non-parenthesis
    /// characters that is not an integer literal or a lone operator
    /// character, such as `x` or `+x`.
    #[regex(r"[^ \t\r\n\f()]+", |lex| lex.slice().to_string(), priority = 1)]
    Identifier(String),

    /// Spaces between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice is not a valid integer, which surfaces as a
///   lexical error for the slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
