#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable or constant.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The byte offset in the source where the reference occurred.
        pos:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the dividing expression.
        pos: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The byte offset of the overflowing expression.
        pos: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, pos } => {
                write!(f, "Error at offset {pos}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { pos } => write!(f, "Error at offset {pos}: Division by zero."),
            Self::Overflow { pos } => write!(f,
                                             "Error at offset {pos}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
