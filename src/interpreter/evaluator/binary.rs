use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary arithmetic operation on two integers.
    ///
    /// All four operators use checked 64-bit arithmetic. Division truncates
    /// toward zero and is checked explicitly for a zero divisor; any result
    /// outside the `i64` range (including `i64::MIN / -1`) is an overflow.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Source byte offset for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use prefixa::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, 9, 2, 0).unwrap();
    /// assert_eq!(result, 4);
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, pos: usize) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { pos });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(RuntimeError::Overflow { pos })
    }
}
