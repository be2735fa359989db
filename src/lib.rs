//! # prefixa
//!
//! prefixa is an interpreter for fully-parenthesized prefix-notation
//! (Polish) integer arithmetic. It parses expressions over integers, named
//! constants, and the operators `+ - * /` into a tree, evaluates the tree
//! against a constants table, and supports defining named constants whose
//! value is itself computed by evaluating such an expression.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Context, parser::core::parse};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of a prefix-notation expression as a tree. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression node and operator types.
/// - Attaches source offsets to AST nodes for error reporting.
/// - Renders trees back to prefix-notation text for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code. It standardizes error reporting and carries
/// detailed information about failures, including source offsets.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and error
/// handling to provide a complete runtime for expression evaluation and
/// constant definition. It exposes the public API for interpreting scripts.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The statement keyword that introduces a constant definition in a script.
const DEFINE_KEYWORD: &str = "const";

/// Runs a script and optionally prints the final result.
///
/// A script is processed line by line. Blank lines are skipped. A line
/// whose first token is `const` defines a constant
/// (`const <name> <expression>`); every other line is an expression
/// evaluated against the constants defined so far. With `auto_print` set,
/// the value of the last evaluated expression is printed.
///
/// # Errors
/// Returns an error as soon as any line fails to parse or evaluate; no
/// recovery is attempted.
///
/// # Examples
/// ```
/// use prefixa::run_script;
///
/// // Chained definitions: 'b' is computed from 'a'.
/// let source = "const a (+ 1 2)\nconst b (* a 10)\nb";
/// let res = run_script(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown constant).
/// let source = "(+ y 1)"; // 'y' is not defined
/// let res = run_script(source, false);
/// assert!(res.is_err());
/// ```
pub fn run_script(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::new();

    let mut result = None;

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.split_whitespace().next() == Some(DEFINE_KEYWORD) {
            context.define_constant(line)?;
        } else {
            let expr = parse(line)?;
            result = Some(context.eval(&expr)?);
        }
    }

    if auto_print && let Some(v) = result {
        println!("{v}");
    }

    Ok(())
}
