// Template Method
// The skeleton of an algorithm lives in a provided trait method; the steps
// that vary between implementors are required methods, and optional hooks
// come with empty defaults.
//
// Context: machines process parts for several car models that differ only
// in a few steps.

use crate::console::Transcript;
use crate::error::PatternError;

pub trait PartMachine {
    /// The template method. Implementors should not override it.
    fn machine_part(&self, part: &str, out: &mut Transcript) {
        self.load_part(part, out);
        self.pre_processing_hook(part, out);
        self.process_part(part, out);
        self.unload_part(part, out);
    }

    fn load_part(&self, part: &str, out: &mut Transcript) {
        out.line(format!("Part: {} loaded!", part));
    }

    // Optional hook.
    fn pre_processing_hook(&self, _part: &str, _out: &mut Transcript) {}

    fn process_part(&self, part: &str, out: &mut Transcript);

    fn unload_part(&self, part: &str, out: &mut Transcript) {
        out.line(format!("{} unloaded!", part));
    }
}

pub struct SedanMachine;
impl PartMachine for SedanMachine {
    fn process_part(&self, part: &str, out: &mut Transcript) {
        out.line(format!("Processing {} for Sedan", part));
    }
}

pub struct CompactMachine;
impl PartMachine for CompactMachine {
    fn process_part(&self, part: &str, out: &mut Transcript) {
        out.line(format!("Processing {} for Compact", part));
    }
}

pub struct SuvMachine;
impl PartMachine for SuvMachine {
    fn pre_processing_hook(&self, part: &str, out: &mut Transcript) {
        out.line(format!("Reinforcing {} for SUV", part));
    }

    fn process_part(&self, part: &str, out: &mut Transcript) {
        out.line(format!("Processing {} for SUV", part));
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let machines: [&dyn PartMachine; 3] = [&SedanMachine, &CompactMachine, &SuvMachine];
    for machine in machines {
        machine.machine_part("Door", out);
    }
    Ok(())
}
