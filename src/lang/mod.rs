/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of Dartmouth BASIC.
Source text goes through [`lex`], then [`parse`] into a concrete tree that
still knows its columns, then [`materialize`] into the plain [`ast`].

*/

pub type LineNumber = u32;
pub type Column = std::ops::Range<usize>;

/// Largest line number accepted in a program.
pub const MAX_LINE_NUMBER: LineNumber = 99999;

#[macro_use]
mod error;
pub mod cst;
mod ident;
mod lex;
mod materialize;
mod parse;
pub mod token;

pub mod ast;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::{Function, Ident};
pub use lex::lex;
pub use materialize::materialize;
pub use parse::parse;

use ast::ProgramNode;

/// Lex, parse and materialize a whole program.
///
/// Lexical errors stop the pipeline before parsing; otherwise every syntax
/// error found is returned together.
pub fn parse_program(source: &str) -> Result<ProgramNode, Vec<Error>> {
    let tokens = lex(source)?;
    let tree = parse(&tokens)?;
    let program = materialize(&tree);
    tracing::debug!(lines = program.lines.len(), "parsed program");
    Ok(program)
}
