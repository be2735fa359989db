use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::parser::{core::parse, statement::split_definition},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the table of named constants that variable references
/// resolve against. It is the single piece of caller-owned state in the
/// pipeline: evaluation reads it, constant definition writes it.
///
/// ## Usage
///
/// `Context` is created once and reused across evaluations. Evaluation
/// itself takes the context by shared reference and never mutates it;
/// [`Context::define_constant`] is the only operation that inserts new
/// bindings.
pub struct Context {
    /// A mapping from constant names to their integer values. Populated by
    /// successive constant definitions; insertion overwrites an existing
    /// binding of the same name.
    pub constants: HashMap<String, i64>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no defined constants.
    #[must_use]
    pub fn new() -> Self {
        Self { constants: HashMap::new(), }
    }

    /// Evaluates an expression tree and returns the resulting integer.
    ///
    /// This is the main entry point for evaluation. The evaluator recurses
    /// over the tree: literals yield their stored value, variables are
    /// looked up in the constants table, and binary operations apply the
    /// operator to their recursively evaluated operands. The tree and the
    /// context are both read-only; a tree can be evaluated any number of
    /// times.
    ///
    /// # Parameters
    /// - `expr`: Root of the expression tree to evaluate.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// - `UnknownVariable` if a referenced name has no binding.
    /// - `DivisionByZero` if a `/` right operand evaluates to zero.
    /// - `Overflow` if an operation leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use prefixa::interpreter::{evaluator::core::Context, parser::core::parse};
    ///
    /// let mut context = Context::new();
    /// context.define("x", 5);
    ///
    /// let expr = parse("(+ x 3)").unwrap();
    /// assert_eq!(context.eval(&expr).unwrap(), 8);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, pos } => self.eval_variable(name, *pos),
            Expr::BinaryOp { left, op, right, pos } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;

                Self::eval_binary(*op, left, right, *pos)
            },
        }
    }

    /// Looks up a constant by name.
    ///
    /// # Parameters
    /// - `name`: Constant name.
    ///
    /// # Returns
    /// The bound value, or `None` if the name is not defined.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.constants.get(name).copied()
    }

    /// Binds a constant name to a value.
    ///
    /// An existing binding of the same name is overwritten.
    ///
    /// # Parameters
    /// - `name`: Constant name.
    /// - `value`: Value to store.
    pub fn define(&mut self, name: &str, value: i64) {
        self.constants.insert(name.to_string(), value);
    }

    /// Resolves a variable reference against the constants table.
    ///
    /// If the variable is not found, an `UnknownVariable` error is
    /// returned; lookup never falls back to a default value.
    fn eval_variable(&self, name: &str, pos: usize) -> EvalResult<i64> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_owned(),
                                                           pos })
    }

    /// Defines a named constant from a definition statement.
    ///
    /// The statement has the shape `<keyword> <name> <expression...>`. The
    /// keyword token is skipped, the expression text is parsed and
    /// evaluated against the constants defined so far, and the result is
    /// bound to the name. Constants may therefore be defined in terms of
    /// previously defined constants.
    ///
    /// # Parameters
    /// - `statement`: The full definition statement.
    ///
    /// # Returns
    /// The value that was bound.
    ///
    /// # Errors
    /// Returns an error if the statement is malformed, the expression fails
    /// to parse, or its evaluation fails.
    ///
    /// # Example
    /// ```
    /// use prefixa::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.define_constant("const a (+ 1 2)").unwrap();
    /// context.define_constant("const b (* a 10)").unwrap();
    ///
    /// assert_eq!(context.lookup("b"), Some(30));
    /// ```
    pub fn define_constant(&mut self, statement: &str) -> Result<i64, Box<dyn std::error::Error>> {
        let (name, expression) = split_definition(statement)?;

        let expr = parse(expression)?;
        let value = self.eval(&expr)?;

        self.define(name, value);

        Ok(value)
    }
}
