// Mediator
// Machines never talk to each other directly. They report to a single
// mediator, which owns the cross-machine logic and re-dispatches requests.
//
// Context: machines producing parts need to coordinate with one another.
//
// The mediator owns the machines and each machine keeps a `Weak` handle
// back to it, so the cycle never leaks.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineEvent {
    WheelBuilt { wheel: String },
    RimsBuilt,
}

pub trait Mediator {
    fn notify(&self, event: MachineEvent, out: &mut Transcript) -> Result<(), PatternError>;
}

fn reach(
    mediator: &Weak<dyn Mediator>,
    machine: &'static str,
) -> Result<Rc<dyn Mediator>, PatternError> {
    mediator
        .upgrade()
        .ok_or(PatternError::MediatorDetached { machine })
}

pub struct WheelMachine {
    mediator: Weak<dyn Mediator>,
    wheel: RefCell<Option<String>>,
}

impl WheelMachine {
    pub fn new(mediator: Weak<dyn Mediator>) -> Self {
        Self {
            mediator,
            wheel: RefCell::new(None),
        }
    }

    pub fn build_wheel(&self, out: &mut Transcript) -> Result<(), PatternError> {
        let wheel = String::from("A Wheel!");
        *self.wheel.borrow_mut() = Some(wheel.clone());
        reach(&self.mediator, "wheel")?.notify(MachineEvent::WheelBuilt { wheel }, out)
    }

    pub fn wheel(&self) -> Option<String> {
        self.wheel.borrow().clone()
    }
}

pub struct RimsMachine {
    mediator: Weak<dyn Mediator>,
    rims_built: RefCell<u32>,
}

impl RimsMachine {
    pub fn new(mediator: Weak<dyn Mediator>) -> Self {
        Self {
            mediator,
            rims_built: RefCell::new(0),
        }
    }

    /// Rims can only be built around an actual wheel.
    pub fn build_rims(&self, wheel: &str, out: &mut Transcript) -> Result<(), PatternError> {
        if wheel.is_empty() {
            debug!("no wheel received, rims skipped");
            return Ok(());
        }
        *self.rims_built.borrow_mut() += 1;
        reach(&self.mediator, "rims")?.notify(MachineEvent::RimsBuilt, out)
    }

    pub fn rims_built(&self) -> u32 {
        *self.rims_built.borrow()
    }
}

pub struct MachineSpace {
    wheel_machine: WheelMachine,
    rims_machine: RimsMachine,
}

impl MachineSpace {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|space: &Weak<MachineSpace>| {
            let mediator: Weak<dyn Mediator> = space.clone();
            MachineSpace {
                wheel_machine: WheelMachine::new(mediator.clone()),
                rims_machine: RimsMachine::new(mediator),
            }
        })
    }

    pub fn wheel_machine(&self) -> &WheelMachine {
        &self.wheel_machine
    }

    pub fn rims_machine(&self) -> &RimsMachine {
        &self.rims_machine
    }
}

impl Mediator for MachineSpace {
    // All of the cross-machine logic lives here.
    fn notify(&self, event: MachineEvent, out: &mut Transcript) -> Result<(), PatternError> {
        debug!(?event, "mediator notified");
        match event {
            MachineEvent::WheelBuilt { wheel } => {
                out.line("{Wheel Machine} Finished Building Wheel --> Calling Mediator");
                self.rims_machine.build_rims(&wheel, out)
            }
            MachineEvent::RimsBuilt => {
                out.line(
                    "{Rims Machine} Finished Building Rims From Wheel received through Mediator",
                );
                Ok(())
            }
        }
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let space = MachineSpace::new();
    space.wheel_machine().build_wheel(out)?;
    Ok(())
}
