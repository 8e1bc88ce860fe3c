// State
// A machine can be in a finite number of modes, with fixed transitions
// between them. Each mode is its own type and decides what comes next.
//
// Context: a part-processing machine loads, works, then packages a part.

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

pub trait State {
    /// Run this mode and return the mode the machine moves to.
    fn process(self: Box<Self>, out: &mut Transcript) -> Box<dyn State>;

    fn name(&self) -> &'static str;
}

pub struct InitialState;
pub struct WorkingState;
pub struct CompletedState;

impl State for InitialState {
    fn process(self: Box<Self>, out: &mut Transcript) -> Box<dyn State> {
        out.line("{Initial} Loading part in the machine");
        Box::new(WorkingState)
    }

    fn name(&self) -> &'static str {
        "Initial"
    }
}

impl State for WorkingState {
    fn process(self: Box<Self>, out: &mut Transcript) -> Box<dyn State> {
        out.line("{Working} Processing the part!");
        Box::new(CompletedState)
    }

    fn name(&self) -> &'static str {
        "Working"
    }
}

impl State for CompletedState {
    // Terminal: stays completed.
    fn process(self: Box<Self>, out: &mut Transcript) -> Box<dyn State> {
        out.line("{Completed} Packaging the part - It is now ready for pickup!");
        out.line(
            "Machine has finished processing the part -- No further forward state transition",
        );
        self
    }

    fn name(&self) -> &'static str {
        "Completed"
    }
}

// The context
pub struct Machine {
    state: Option<Box<dyn State>>,
}

impl Machine {
    pub fn new(state: Box<dyn State>) -> Self {
        Self { state: Some(state) }
    }

    pub fn change_state(&mut self, state: Box<dyn State>) {
        self.state = Some(state);
    }

    pub fn process(&mut self, out: &mut Transcript) {
        if let Some(state) = self.state.take() {
            let from = state.name();
            let next = state.process(out);
            debug!(from, to = next.name(), "state transition");
            self.state = Some(next);
        }
    }

    pub fn state_name(&self) -> &'static str {
        self.state.as_ref().map_or("None", |state| state.name())
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut machine = Machine::new(Box::new(InitialState));
    machine.process(out);
    machine.process(out);
    machine.process(out);

    machine.change_state(Box::new(InitialState));
    machine.process(out);
    machine.process(out);

    Ok(())
}
