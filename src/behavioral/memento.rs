// Memento
// Save and restore the state of an object without exposing how that state
// is laid out. Only the originator can read a memento; the caretaker just
// stores them.
//
// Context: machines track the operations they apply to a component so the
// operations can be reversed.

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

pub trait Originator {
    type Memento;

    fn save(&self) -> Self::Memento;
    fn restore(&mut self, memento: Self::Memento);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Machine {
    // A single field for the sake of the example.
    state: String,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn print_state(&self, out: &mut Transcript) {
        out.line(self.state.clone());
    }
}

/// Snapshot of a [`Machine`]. Its contents are private to this module.
#[derive(Debug, Clone)]
pub struct MachineMemento {
    state: String,
}

impl Originator for Machine {
    type Memento = MachineMemento;

    fn save(&self) -> MachineMemento {
        MachineMemento {
            state: self.state.clone(),
        }
    }

    fn restore(&mut self, memento: MachineMemento) {
        self.state = memento.state;
    }
}

/// Unbounded history of mementos for one originator type.
pub struct Caretaker<O: Originator> {
    history: Vec<O::Memento>,
}

impl<O: Originator> Default for Caretaker<O> {
    fn default() -> Self {
        Self {
            history: Vec::new(),
        }
    }
}

impl<O: Originator> Caretaker<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backup(&mut self, memento: O::Memento) {
        self.history.push(memento);
        debug!(depth = self.history.len(), "memento stored");
    }

    pub fn undo(&mut self, originator: &mut O) -> Result<(), PatternError> {
        let memento = self.history.pop().ok_or(PatternError::EmptyHistory)?;
        originator.restore(memento);
        debug!(depth = self.history.len(), "memento restored");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut caretaker: Caretaker<Machine> = Caretaker::new();
    let mut machine = Machine::new();

    machine.set_state("State A");
    machine.print_state(out);
    caretaker.backup(machine.save());

    machine.set_state("State B");
    machine.print_state(out);
    caretaker.backup(machine.save());

    machine.set_state("State C");
    machine.print_state(out);

    caretaker.undo(&mut machine)?;
    machine.print_state(out);
    caretaker.undo(&mut machine)?;
    machine.print_state(out);

    Ok(())
}
