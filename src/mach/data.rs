use super::Val;
use crate::error;
use crate::lang::ast::{AcceptVisitor, Literal, ProgramNode, StatementNode, Visitor};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## DATA pool
///
/// Every DATA literal in the program, in line order, behind one cursor
/// shared by all READ statements.

#[derive(Debug, Default, Clone)]
pub struct DataPool {
    values: Vec<Val>,
    pointer: usize,
}

impl DataPool {
    pub fn new(program: &ProgramNode) -> DataPool {
        let mut collector = Collector::default();
        program.accept(&mut collector);
        DataPool {
            values: collector.values,
            pointer: 0,
        }
    }

    pub fn read(&mut self) -> Result<Val> {
        match self.values.get(self.pointer) {
            Some(val) => {
                self.pointer += 1;
                Ok(val.clone())
            }
            None => Err(error!(OutOfData)),
        }
    }

    pub fn restore(&mut self) {
        self.pointer = 0;
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn values(&self) -> &[Val] {
        &self.values
    }
}

#[derive(Default)]
struct Collector {
    values: Vec<Val>,
}

impl Visitor for Collector {
    fn visit_statement(&mut self, statement: &StatementNode) {
        if let StatementNode::Data { values } = statement {
            for literal in values {
                self.values.push(match literal {
                    Literal::Number(n) => Val::Number(*n),
                    Literal::String(s) => Val::String(s.clone()),
                });
            }
        }
    }
}
