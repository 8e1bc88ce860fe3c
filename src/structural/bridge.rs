// Bridge
// Split one wide hierarchy into two: an abstraction that wraps an
// implementation. Both sides can then grow independently instead of
// multiplying into CarWheel, BoatWheel, ...
//
// Context: a generic part (a wheel) steers many kinds of vehicle.

use crate::console::Transcript;
use crate::error::PatternError;

// The implementation side
pub trait Vehicle {
    fn change_direction_left(&self) -> String;
    fn change_direction_right(&self) -> String;
}

pub struct Boat;
impl Vehicle for Boat {
    fn change_direction_left(&self) -> String {
        "Boat is turning left".to_string()
    }

    fn change_direction_right(&self) -> String {
        "Boat is turning right".to_string()
    }
}

pub struct Car;
impl Vehicle for Car {
    fn change_direction_left(&self) -> String {
        "Car is turning left".to_string()
    }

    fn change_direction_right(&self) -> String {
        "Car is turning right".to_string()
    }
}

// The abstraction side
pub struct Wheel {
    vehicle: Box<dyn Vehicle>,
    is_installed: bool,
}

impl Wheel {
    pub fn new(vehicle: Box<dyn Vehicle>) -> Self {
        Self {
            vehicle,
            is_installed: true,
        }
    }

    pub fn turn_left(&self, out: &mut Transcript) {
        out.line(self.vehicle.change_direction_left());
    }

    pub fn turn_right(&self, out: &mut Transcript) {
        out.line(self.vehicle.change_direction_right());
    }

    pub fn check_if_installed(&self) -> bool {
        self.is_installed
    }

    pub fn uninstall(&mut self) {
        self.is_installed = false;
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut wheel = Wheel::new(Box::new(Car));
    wheel.turn_left(out);

    wheel = Wheel::new(Box::new(Boat));
    wheel.turn_right(out);
    out.line(format!("Wheel installed: {}", wheel.check_if_installed()));

    Ok(())
}
