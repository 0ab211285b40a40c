//! Concrete parse tree.
//!
//! Mirrors the grammar closely: every node keeps the column range it was
//! parsed from, parentheses and the optional `LET` keyword survive, and
//! literals are still their source spelling. [`super::materialize`] turns
//! this into the plain [`super::ast`].

use super::ast::{BinaryOp, UnaryOp};
use super::token::Literal;
use super::{Column, Function, Ident, LineNumber};

#[derive(Debug, PartialEq, Default)]
pub struct Program {
    pub lines: Vec<Line>,
}

#[derive(Debug, PartialEq)]
pub struct Line {
    pub number: LineNumber,
    pub row: usize,
    pub column: Column,
    pub statement: Statement,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Separator {
    Comma,
    Semicolon,
}

#[derive(Debug, PartialEq)]
pub enum Statement {
    Data(Column, Vec<Datum>),
    Dim(Column, Vec<Declaration>),
    End(Column),
    For(Column, (Column, Ident), Expression, Expression, Option<Expression>),
    Gosub(Column, (Column, LineNumber)),
    Goto(Column, (Column, LineNumber)),
    If(Column, Expression, Then),
    Input(Column, Vec<Variable>),
    /// The optional column is where the `LET` keyword was, if written.
    Let(Column, Option<Column>, Variable, Expression),
    Next(Column, (Column, Ident)),
    Print(Column, Vec<PrintItem>),
    Read(Column, Vec<Variable>),
    Rem(Column, String),
    Restore(Column),
    Return(Column),
    Stop(Column),
}

#[derive(Debug, PartialEq)]
pub enum Then {
    Line(Column, LineNumber),
    Statement(Box<Statement>),
}

#[derive(Debug, PartialEq)]
pub enum PrintItem {
    Separator(Column, Separator),
    Expression(Expression),
}

#[derive(Debug, PartialEq)]
pub struct Declaration {
    pub column: Column,
    pub ident: Ident,
    pub sizes: Vec<Expression>,
}

/// A DATA item; the optional column is a leading minus sign.
#[derive(Debug, PartialEq)]
pub struct Datum {
    pub column: Column,
    pub minus: Option<Column>,
    pub literal: Literal,
}

#[derive(Debug, PartialEq)]
pub enum Variable {
    Unary(Column, Ident),
    Array(Column, Ident, Vec<Expression>),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Literal(Column, Literal),
    Var(Column, Variable),
    Function(Column, Function, Box<Expression>),
    Paren(Column, Box<Expression>),
    Unary(Column, UnaryOp, Box<Expression>),
    Binary(Column, BinaryOp, Box<Expression>, Box<Expression>),
}
