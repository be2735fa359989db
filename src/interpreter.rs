/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions against the table
/// of defined constants, performs the arithmetic operations, and produces
/// integer results. It also hosts the constant-definition step that feeds
/// evaluated values back into the table.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variable references against defined constants.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element: integer
/// literals, variable names, operator characters, and parentheses. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Handles integer literals, variable names, and operators.
/// - Reports lexical errors for malformed literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that mirrors the nesting of the prefix-notation input.
/// It also splits constant-definition statements into their name and
/// expression parts.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with source offsets.
/// - Performs no evaluation of its own.
pub mod parser;
