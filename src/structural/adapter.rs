// Adapter
// Wrap an object so it speaks the interface another piece of code expects.
//
// Context: reuse existing tractor automation on the car side.
//
// This is the object adapter: the adapter owns the service and translates
// calls. (The class adapter variant would implement both interfaces on one
// type.)

use crate::console::Transcript;
use crate::error::PatternError;

// The client interface
pub trait Car {
    fn trunk_size_in_cubic_meters(&self) -> u32;
    fn carry_load(&mut self) -> String;
}

#[derive(Debug, Default)]
pub struct ConcreteCar {
    pub trunk_size_in_cubic_meters: u32,
}

impl Car for ConcreteCar {
    fn trunk_size_in_cubic_meters(&self) -> u32 {
        self.trunk_size_in_cubic_meters
    }

    fn carry_load(&mut self) -> String {
        "Cannot carry a load - No bin in a car!".to_string()
    }
}

// The service. Treated as third-party code we cannot change.
#[derive(Debug, Default)]
pub struct Tractor {
    pub bin_size_in_cubic_meters: u32,
}

impl Tractor {
    pub fn carry_load_in_bin(&self) -> String {
        format!("Carrying a load of {} cubic meters", self.bin_size_in_cubic_meters)
    }
}

/// A tractor that can be used wherever a [`Car`] is expected.
#[derive(Debug)]
pub struct TractorAdapter {
    tractor: Tractor,
    pub trunk_size_in_cubic_meters: u32,
}

impl TractorAdapter {
    pub fn new(tractor: Tractor) -> Self {
        Self {
            trunk_size_in_cubic_meters: tractor.bin_size_in_cubic_meters,
            tractor,
        }
    }

    pub fn into_inner(self) -> Tractor {
        self.tractor
    }
}

impl Car for TractorAdapter {
    fn trunk_size_in_cubic_meters(&self) -> u32 {
        self.trunk_size_in_cubic_meters
    }

    fn carry_load(&mut self) -> String {
        self.tractor.bin_size_in_cubic_meters = self.trunk_size_in_cubic_meters;
        self.tractor.carry_load_in_bin()
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut car = ConcreteCar::default();
    out.line(format!("Carrying load from Car: {}", car.carry_load()));

    let tractor = Tractor {
        bin_size_in_cubic_meters: 55,
    };
    out.line(format!("Carrying load from Tractor: {}", tractor.carry_load_in_bin()));

    let mut adapter = TractorAdapter::new(tractor);
    adapter.trunk_size_in_cubic_meters = 25;
    out.line(format!(
        "Carrying load from Car through Adapter: {}",
        adapter.carry_load()
    ));

    Ok(())
}
