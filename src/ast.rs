/// The longest variable name the language accepts, in bytes.
///
/// Longer names are rejected by the parser with
/// [`ParseError::NameTooLong`](crate::error::ParseError::NameTooLong).
pub const MAX_NAME_LEN: usize = 20;

/// An abstract syntax tree (AST) node representing a prefix-notation
/// expression.
///
/// `Expr` covers the three forms the language knows: integer literals,
/// variable references, and binary operator applications. A `BinaryOp` node
/// owns both of its operands through `Box`, so the node returned by the
/// parser owns the entire tree beneath it and dropping it releases every
/// node exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A 64-bit signed integer literal.
    Literal {
        /// The constant value.
        value: i64,
        /// Byte offset of the literal in the source text.
        pos:   usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable, at most [`MAX_NAME_LEN`] bytes.
        name: String,
        /// Byte offset of the name in the source text.
        pos:  usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset of the opening parenthesis in the source text.
        pos:   usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    /// ## Example
    /// ```
    /// use prefixa::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             pos:  5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { pos, .. } | Self::Variable { pos, .. } | Self::BinaryOp { pos, .. } => {
                *pos
            },
        }
    }
}

/// Represents a binary operator.
///
/// The language supports the four integer arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    /// Renders the tree back to its canonical prefix-notation text form.
    ///
    /// This is a diagnostic aid: parsing well-formed input and printing the
    /// result reproduces the input.
    ///
    /// ## Example
    /// ```
    /// use prefixa::interpreter::parser::core::parse;
    ///
    /// let expr = parse("(+ (* 2 3) 4)").unwrap();
    /// assert_eq!(expr.to_string(), "(+ (* 2 3) 4)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}
