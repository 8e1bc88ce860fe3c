// Strategy
// Interchangeable algorithms aiming at the same goal live in their own
// types. The context holds one and can swap it at runtime without knowing
// which one it is.
//
// Context: a single machine processes steel for several vehicle types.

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

pub trait MachineStrategy {
    fn process_part(&self, out: &mut Transcript);
    fn name(&self) -> &str;
}

pub struct CarStrategy;
impl MachineStrategy for CarStrategy {
    fn process_part(&self, out: &mut Transcript) {
        out.line("{Car} Processing Part");
    }

    fn name(&self) -> &str {
        "Car"
    }
}

pub struct TrainStrategy;
impl MachineStrategy for TrainStrategy {
    fn process_part(&self, out: &mut Transcript) {
        out.line("{Train} Processing Part");
    }

    fn name(&self) -> &str {
        "Train"
    }
}

pub struct TruckStrategy;
impl MachineStrategy for TruckStrategy {
    fn process_part(&self, out: &mut Transcript) {
        out.line("{Truck} Processing Part");
    }

    fn name(&self) -> &str {
        "Truck"
    }
}

// The context
pub struct Machine {
    strategy: Box<dyn MachineStrategy>,
}

impl Machine {
    pub fn new(strategy: Box<dyn MachineStrategy>) -> Self {
        Self { strategy }
    }

    pub fn process_part(&self, out: &mut Transcript) {
        self.strategy.process_part(out);
    }

    pub fn change_part_type_mode(&mut self, strategy: Box<dyn MachineStrategy>) {
        debug!(from = self.strategy.name(), to = strategy.name(), "strategy swapped");
        self.strategy = strategy;
    }

    pub fn mode(&self) -> &str {
        self.strategy.name()
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut machine = Machine::new(Box::new(CarStrategy));
    machine.process_part(out);

    machine.change_part_type_mode(Box::new(TrainStrategy));
    machine.process_part(out);

    machine.change_part_type_mode(Box::new(TruckStrategy));
    machine.process_part(out);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_switch() {
        let mut machine = Machine::new(Box::new(CarStrategy));
        assert_eq!(machine.mode(), "Car");

        machine.change_part_type_mode(Box::new(TruckStrategy));
        assert_eq!(machine.mode(), "Truck");

        let mut out = Transcript::new();
        machine.process_part(&mut out);
        assert_eq!(out.lines(), &["{Truck} Processing Part"]);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "{Car} Processing Part",
                "{Train} Processing Part",
                "{Truck} Processing Part",
            ]
        );
    }
}
