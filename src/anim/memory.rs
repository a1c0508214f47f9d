//! In-memory state machine
//!
//! Stands in for the animation runtime when running headless: inputs are
//! plain cells that remember their boolean value and how often they fired.

use std::cell::Cell;
use std::rc::Rc;

use super::{BoolInput, MachineInput, StateMachine, TriggerInput};

#[derive(Debug, Default)]
struct InputCell {
    value: Cell<bool>,
    fired: Cell<u32>,
}

impl BoolInput for InputCell {
    fn value(&self) -> bool {
        self.value.get()
    }

    fn set_value(&self, value: bool) {
        self.value.set(value);
    }
}

impl TriggerInput for InputCell {
    fn fire(&self) {
        self.fired.set(self.fired.get() + 1);
    }
}

#[derive(Debug, Clone)]
struct MemoryInput {
    name: String,
    cell: Rc<InputCell>,
}

impl MachineInput for MemoryInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_bool(&self) -> Rc<dyn BoolInput> {
        self.cell.clone()
    }

    fn as_trigger(&self) -> Rc<dyn TriggerInput> {
        self.cell.clone()
    }
}

/// A state machine whose inputs live in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryMachine {
    inputs: Vec<MemoryInput>,
}

impl MemoryMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a boolean input (starts false)
    ///
    /// Boolean and trigger inputs share one cell type here, so any input
    /// answers both `as_bool` and `as_trigger`; the name alone tells them apart.
    pub fn with_bool(self, name: &str) -> Self {
        self.with_input(name)
    }

    /// Add a trigger input (same cell as [`MemoryMachine::with_bool`])
    pub fn with_trigger(self, name: &str) -> Self {
        self.with_input(name)
    }

    fn with_input(mut self, name: &str) -> Self {
        self.inputs.push(MemoryInput {
            name: name.to_string(),
            cell: Rc::new(InputCell::default()),
        });
        self
    }

    fn find(&self, name: &str) -> Option<&InputCell> {
        self.inputs
            .iter()
            .find(|input| input.name == name)
            .map(|input| input.cell.as_ref())
    }

    pub fn bool_value(&self, name: &str) -> Option<bool> {
        self.find(name).map(|cell| cell.value.get())
    }

    /// How many times the named input has fired (0 if unknown)
    pub fn fired_count(&self, name: &str) -> u32 {
        self.find(name).map(|cell| cell.fired.get()).unwrap_or(0)
    }
}

impl StateMachine for MemoryMachine {
    fn input_count(&self) -> usize {
        self.inputs.len()
    }

    fn input(&self, index: usize) -> Option<Box<dyn MachineInput + '_>> {
        self.inputs
            .get(index)
            .map(|input| Box::new(input.clone()) as Box<dyn MachineInput>)
    }
}
