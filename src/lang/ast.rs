//! Abstract syntax tree.
//!
//! Plain data with no source positions, produced by
//! [`materialize`](super::materialize). A program is immutable once built;
//! the interpreter only reads it.

use super::{Function, Ident, LineNumber};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgramNode {
    pub lines: Vec<LineNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineNode {
    pub line_number: LineNumber,
    pub statement: StatementNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementNode {
    Let {
        target: Variable,
        value: ExpressionNode,
    },
    Print {
        items: Vec<PrintItem>,
    },
    Input {
        targets: Vec<Variable>,
    },
    For {
        variable: Ident,
        start: ExpressionNode,
        end: ExpressionNode,
        step: Option<ExpressionNode>,
    },
    Next {
        variable: Ident,
    },
    /// `IF ... THEN 100` arrives here as `then: Goto { line: 100 }`.
    If {
        condition: ExpressionNode,
        then: Box<StatementNode>,
    },
    Goto {
        line: LineNumber,
    },
    Gosub {
        line: LineNumber,
    },
    Return,
    Dim {
        arrays: Vec<ArrayDecl>,
    },
    Read {
        targets: Vec<Variable>,
    },
    Data {
        values: Vec<Literal>,
    },
    Restore,
    Rem {
        comment: String,
    },
    End,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrintItem {
    Expression(ExpressionNode),
    Comma,
    Semicolon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayDecl {
    pub name: Ident,
    pub dimensions: Vec<ExpressionNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Number(f64),
    String(String),
}

/// Assignment target of LET, INPUT and READ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variable {
    Scalar(Ident),
    Array(Ident, Vec<ExpressionNode>),
}

impl Variable {
    pub fn ident(&self) -> &Ident {
        match self {
            Variable::Scalar(ident) | Variable::Array(ident, _) => ident,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Negate,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionNode {
    Number(f64),
    String(String),
    Variable(Ident),
    Array(Ident, Vec<ExpressionNode>),
    Function(Function, Box<ExpressionNode>),
    Unary(UnaryOp, Box<ExpressionNode>),
    Binary(BinaryOp, Box<ExpressionNode>, Box<ExpressionNode>),
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &StatementNode) {}
    fn visit_variable(&mut self, _: &Variable) {}
    fn visit_expression(&mut self, _: &ExpressionNode) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for ProgramNode {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        for line in &self.lines {
            line.statement.accept(visitor);
        }
    }
}

impl AcceptVisitor for Variable {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if let Variable::Array(_, vec_expr) = self {
            for expr in vec_expr {
                expr.accept(visitor);
            }
        }
        visitor.visit_variable(self)
    }
}

impl AcceptVisitor for StatementNode {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use StatementNode::*;
        match self {
            Goto { .. } | Gosub { .. } | Return | Data { .. } | Restore | Rem { .. } | End
            | Stop | Next { .. } => {}
            Let { target, value } => {
                target.accept(visitor);
                value.accept(visitor);
            }
            Print { items } => {
                for item in items {
                    if let PrintItem::Expression(expr) = item {
                        expr.accept(visitor);
                    }
                }
            }
            Input { targets } | Read { targets } => {
                for var in targets {
                    var.accept(visitor);
                }
            }
            For {
                start, end, step, ..
            } => {
                start.accept(visitor);
                end.accept(visitor);
                if let Some(step) = step {
                    step.accept(visitor);
                }
            }
            If { condition, then } => {
                condition.accept(visitor);
                then.accept(visitor);
            }
            Dim { arrays } => {
                for decl in arrays {
                    for expr in &decl.dimensions {
                        expr.accept(visitor);
                    }
                }
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for ExpressionNode {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use ExpressionNode::*;
        match self {
            Number(_) | String(_) | Variable(_) => {}
            Array(_, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Function(_, expr) | Unary(_, expr) => expr.accept(visitor),
            Binary(_, expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}
