use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Splits a constant-definition statement into its name and expression
/// parts.
///
/// The statement has the shape `<keyword> <name> <expression...>`: a
/// keyword token whose value is discarded, one space, the constant name as
/// a run of non-space characters, one space, and the remainder of the
/// string as expression text. The name carries no length limit at this
/// layer.
///
/// # Parameters
/// - `statement`: The full definition statement.
///
/// # Returns
/// A `(name, expression_text)` pair borrowing from `statement`.
///
/// # Errors
/// Returns `ParseError::MalformedDefinition` if the keyword, the name, or
/// the expression part is missing.
///
/// # Example
/// ```
/// use prefixa::interpreter::parser::statement::split_definition;
///
/// let (name, expr) = split_definition("const area (* 6 7)").unwrap();
/// assert_eq!(name, "area");
/// assert_eq!(expr, "(* 6 7)");
/// ```
pub fn split_definition(statement: &str) -> ParseResult<(&str, &str)> {
    let rest = match statement.find(' ') {
        Some(space) => &statement[space + 1..],
        None => {
            return Err(ParseError::MalformedDefinition { details:
                                                             "no name after the keyword".to_string(), });
        },
    };

    let (name, expression) = match rest.find(' ') {
        Some(space) => (&rest[..space], &rest[space + 1..]),
        None => {
            return Err(ParseError::MalformedDefinition { details:
                                                             "no expression after the name".to_string(), });
        },
    };

    if name.is_empty() {
        return Err(ParseError::MalformedDefinition { details: "empty constant name".to_string(), });
    }

    Ok((name, expression))
}
