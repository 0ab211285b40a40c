use super::{Array, ForLoop, InputRequest, Val, Variable};
use crate::lang::LineNumber;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// ## Execution state snapshot
///
/// A detached copy of everything an observer may want to draw after a
/// step. Nothing in here points back into the interpreter.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub current_line: Option<LineNumber>,
    pub program_counter: usize,
    pub is_running: bool,
    pub is_paused: bool,
    pub is_finished: bool,
    pub awaiting_input: Option<InputRequest>,
    pub variables: BTreeMap<String, Variable>,
    pub arrays: BTreeMap<String, Array>,
    pub for_loops: BTreeMap<String, ForLoop>,
    pub call_stack: Vec<usize>,
    pub console: Vec<String>,
    /// The last console line ended in `;` or `,` and will be continued.
    pub console_open: bool,
    pub data_pointer: usize,
    pub data_values: Vec<Val>,
    /// Scalars and arrays written during the last step.
    pub recently_changed: BTreeSet<String>,
}

impl Snapshot {
    /// Value of a scalar, if it has ever been written.
    pub fn variable(&self, name: &str) -> Option<&Val> {
        self.variables.get(name).map(|var| &var.value)
    }

    /// Element of a dimensioned array; unset elements read as zero.
    pub fn element(&self, name: &str, indices: &[usize]) -> Option<Val> {
        self.arrays.get(name).map(|array| array.get(indices))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
