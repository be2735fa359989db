#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The byte offset in the source where the error occurred.
        pos:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// An operator character was expected after `(` but not found.
    ExpectedOperator {
        /// The token encountered instead.
        token: String,
        /// The byte offset in the source where the error occurred.
        pos:   usize,
    },
    /// A variable name exceeded the maximum allowed length.
    NameTooLong {
        /// The offending name.
        name: String,
        /// The byte offset in the source where the name starts.
        pos:  usize,
    },
    /// A constant-definition statement was missing one of its parts.
    MalformedDefinition {
        /// Details about which part was missing.
        details: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at offset {pos}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedOperator { token, pos } => write!(f,
                                                            "Error at offset {pos}: Expected an operator (one of '+', '-', '*', '/') after '(', found {token}."),

            Self::NameTooLong { name, pos } => write!(f,
                                                      "Error at offset {pos}: Variable name '{name}' is too long."),

            Self::MalformedDefinition { details } => {
                write!(f, "Error: Malformed constant definition: {details}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
