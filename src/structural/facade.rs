// Facade
// A small interface in front of a complex subsystem. Client code only sees
// what it needs; the subsystem's details stay behind the facade.
//
// Context: cars must be crash-test certified through the governing body's
// vehicle certification system.

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

#[derive(Debug, Default)]
pub struct Car {
    pub is_safety_certified: bool,
}

// ============================================================================
// The complex third-party subsystem
// ============================================================================

pub mod certification_library {
    use super::Car;

    /// Certifies every kind of vehicle. Cars use a fraction of it.
    #[derive(Debug, Default)]
    pub struct VehicleCertificationLibrary {
        inspected: bool,
        crash_tested: bool,
        emissions_checked: bool,
    }

    impl VehicleCertificationLibrary {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn inspect_structure(&mut self, _car: &Car) {
            self.inspected = true;
        }

        pub fn crash_test(&mut self, _car: &Car) -> bool {
            self.crash_tested = self.inspected;
            self.crash_tested
        }

        pub fn check_emissions(&mut self, _car: &Car) -> bool {
            self.emissions_checked = true;
            self.emissions_checked
        }

        pub fn issue_certificate(&self) -> bool {
            self.inspected && self.crash_tested && self.emissions_checked
        }

        // certify_plane, certify_horse, ... live here too.
    }
}

use certification_library::VehicleCertificationLibrary;

// ============================================================================
// The facade
// ============================================================================

#[derive(Debug, Default)]
pub struct CarCertifier;

impl CarCertifier {
    pub fn new() -> Self {
        Self
    }

    pub fn certify_car(&self, car: &mut Car) {
        let mut library = VehicleCertificationLibrary::new();
        library.inspect_structure(car);
        let crashed_ok = library.crash_test(car);
        let emissions_ok = library.check_emissions(car);
        debug!(crashed_ok, emissions_ok, "certification steps done");

        car.is_safety_certified = library.issue_certificate();
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut car = Car::default();
    out.line(format!("Safety certified before: {}", car.is_safety_certified));

    CarCertifier::new().certify_car(&mut car);
    out.line(format!("Safety certified after: {}", car.is_safety_certified));

    Ok(())
}
