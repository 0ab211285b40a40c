/*!
## Rust Machine Module

This Rust module executes a BASIC [`ProgramNode`](crate::lang::ast::ProgramNode)
one statement at a time and reports its state after every step.

*/

mod control;
mod data;
mod function;
mod operation;
mod runtime;
mod snapshot;
mod stack;
mod val;
mod var;

pub use control::Control;
pub use data::DataPool;
pub use function::Function;
pub use operation::Operation;
pub use runtime::{
    Event, ForLoop, InputCallback, InputRequest, Interpreter, Status, StepCallback, ZONE_WIDTH,
};
pub use snapshot::Snapshot;
pub use stack::Stack;
pub use val::Val;
pub use var::{Array, ArrayKey, Kind, Var, Variable};
