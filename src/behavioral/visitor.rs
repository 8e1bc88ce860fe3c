// Visitor
// Behaviour that does not belong to the business objects (here: packaging)
// lives in a visitor. Double dispatch picks the right visit method for each
// concrete machine without type checks.
//
// Context: finished parts are packaged for delivery by a dedicated
// packager rather than by each machine on the line.

use crate::console::Transcript;
use crate::error::PatternError;

pub trait Machine {
    fn accept(&mut self, visitor: &mut dyn Visitor, out: &mut Transcript);
}

pub trait Visitor {
    fn visit_wheel(&mut self, wheel: &mut WheelMachine, out: &mut Transcript);
    fn visit_door(&mut self, door: &mut DoorMachine, out: &mut Transcript);
}

#[derive(Debug, Default)]
pub struct WheelMachine;

impl Machine for WheelMachine {
    fn accept(&mut self, visitor: &mut dyn Visitor, out: &mut Transcript) {
        visitor.visit_wheel(self, out);
    }
}

#[derive(Debug)]
pub struct DoorMachine {
    has_handle: bool,
}

impl Default for DoorMachine {
    fn default() -> Self {
        Self { has_handle: true }
    }
}

impl DoorMachine {
    // Not part of the Machine trait, still reachable by visitors.
    pub fn remove_handle(&mut self, out: &mut Transcript) {
        self.has_handle = false;
        out.line("Removing handle");
    }

    pub fn has_handle(&self) -> bool {
        self.has_handle
    }
}

impl Machine for DoorMachine {
    fn accept(&mut self, visitor: &mut dyn Visitor, out: &mut Transcript) {
        visitor.visit_door(self, out);
    }
}

#[derive(Debug, Default)]
pub struct Packager {
    packaged: usize,
}

impl Packager {
    pub fn packaged(&self) -> usize {
        self.packaged
    }
}

impl Visitor for Packager {
    fn visit_wheel(&mut self, _wheel: &mut WheelMachine, out: &mut Transcript) {
        self.packaged += 1;
        out.line("Packaging Wheel!");
    }

    fn visit_door(&mut self, door: &mut DoorMachine, out: &mut Transcript) {
        door.remove_handle(out);
        self.packaged += 1;
        out.line("Packaging Door!");
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut machines: Vec<Box<dyn Machine>> = vec![
        Box::new(WheelMachine),
        Box::new(WheelMachine),
        Box::new(DoorMachine::default()),
        Box::new(WheelMachine),
    ];

    let mut packager = Packager::default();
    for machine in machines.iter_mut() {
        machine.accept(&mut packager, out);
    }
    out.line(format!("Packaged {} parts", packager.packaged()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_dispatch_reaches_door_specific_method() {
        let mut door = DoorMachine::default();
        let mut packager = Packager::default();
        let mut out = Transcript::new();

        door.accept(&mut packager, &mut out);

        assert!(!door.has_handle());
        assert_eq!(out.lines(), &["Removing handle", "Packaging Door!"]);
    }

    #[test]
    fn test_visitor_keeps_its_own_state() {
        let mut packager = Packager::default();
        let mut out = Transcript::new();
        WheelMachine.accept(&mut packager, &mut out);
        WheelMachine.accept(&mut packager, &mut out);
        assert_eq!(packager.packaged(), 2);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "Packaging Wheel!",
                "Packaging Wheel!",
                "Removing handle",
                "Packaging Door!",
                "Packaging Wheel!",
                "Packaged 4 parts",
            ]
        );
    }
}
