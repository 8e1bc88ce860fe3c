// Command
// A middle layer between an invoker and the business logic it triggers.
// Commands are self-contained and take no parameters at execution time,
// so they can be swapped at runtime, queued or deferred.
//
// Context: several assembly lines request the same components from a
// central storage, which then delivers them.

use std::collections::VecDeque;
use std::rc::Rc;

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarComponent {
    pub name: String,
    pub number: u32,
}

impl CarComponent {
    pub fn new(name: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

// The receiver
#[derive(Debug, Default)]
pub struct CarComponentsStorage {
    components: Vec<CarComponent>,
}

impl CarComponentsStorage {
    pub fn new(components: Vec<CarComponent>) -> Self {
        Self { components }
    }

    pub fn deliver(
        &self,
        component_name: &str,
        out: &mut Transcript,
    ) -> Result<&CarComponent, PatternError> {
        let component = self
            .components
            .iter()
            .find(|component| component.name == component_name)
            .ok_or_else(|| PatternError::component_not_found(component_name))?;

        out.line(format!("Component {} was delivered!", component.name));
        Ok(component)
    }
}

pub trait Command {
    fn execute(&self, out: &mut Transcript) -> Result<(), PatternError>;
}

// Simple commands may hold the business logic themselves; this one forwards
// to a receiver.
pub struct RequestComponentFromStorage {
    component_name: String,
    receiver: Rc<CarComponentsStorage>,
}

impl RequestComponentFromStorage {
    pub fn new(component_name: impl Into<String>, receiver: Rc<CarComponentsStorage>) -> Self {
        Self {
            component_name: component_name.into(),
            receiver,
        }
    }
}

impl Command for RequestComponentFromStorage {
    fn execute(&self, out: &mut Transcript) -> Result<(), PatternError> {
        debug!(component = %self.component_name, "requesting component from storage");
        self.receiver.deliver(&self.component_name, out).map(|_| ())
    }
}

// The invoker
#[derive(Default)]
pub struct AssemblyLine {
    parts_command: Option<Box<dyn Command>>,
    queue: VecDeque<Box<dyn Command>>,
}

impl AssemblyLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_parts_command(&mut self, command: Box<dyn Command>) {
        self.parts_command = Some(command);
    }

    pub fn request_car_component(&self, out: &mut Transcript) -> Result<(), PatternError> {
        self.parts_command
            .as_ref()
            .ok_or(PatternError::NoCommandConfigured)?
            .execute(out)
    }

    /// Defer a command until [`AssemblyLine::run_queue`].
    pub fn enqueue(&mut self, command: Box<dyn Command>) {
        self.queue.push_back(command);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Execute every queued command in FIFO order. A failing command does
    /// not prevent the ones behind it from running.
    pub fn run_queue(&mut self, out: &mut Transcript) -> Vec<Result<(), PatternError>> {
        let mut results = Vec::with_capacity(self.queue.len());
        while let Some(command) = self.queue.pop_front() {
            results.push(command.execute(out));
        }
        debug!(executed = results.len(), "queue drained");
        results
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let storage = Rc::new(CarComponentsStorage::new(vec![
        CarComponent::new("Door", 0),
        CarComponent::new("Wheel", 1),
    ]));

    let request_wheels = RequestComponentFromStorage::new("Wheel", Rc::clone(&storage));
    let request_doors = RequestComponentFromStorage::new("Door", Rc::clone(&storage));

    let mut assembly_line = AssemblyLine::new();

    assembly_line.set_parts_command(Box::new(request_wheels));
    assembly_line.request_car_component(out)?;

    // Runtime command swap to alter the line's behavior
    assembly_line.set_parts_command(Box::new(request_doors));
    assembly_line.request_car_component(out)?;

    out.line("Queueing requests for later delivery");
    assembly_line.enqueue(Box::new(RequestComponentFromStorage::new(
        "Wheel",
        Rc::clone(&storage),
    )));
    assembly_line.enqueue(Box::new(RequestComponentFromStorage::new(
        "Hood",
        Rc::clone(&storage),
    )));
    for result in assembly_line.run_queue(out) {
        if let Err(err) = result {
            out.line(format!("Request failed: {}", err));
        }
    }

    Ok(())
}
