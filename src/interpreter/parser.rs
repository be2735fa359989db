/// Core expression parsing.
///
/// Contains the parse entry point and the recursive-descent routine that
/// turns a token stream into an expression tree.
pub mod core;

/// Constant-definition statement parsing.
///
/// Splits `<keyword> <name> <expression>` statements into their name and
/// expression-text parts.
pub mod statement;
