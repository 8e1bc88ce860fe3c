// Flyweight
// Split state into the shared, immutable part (intrinsic) and the part
// that differs per object (extrinsic). Objects holding only intrinsic
// state are flyweights and get shared instead of duplicated.
//
// Context: every sensor in a car has its own reading, but all sensors of
// one kind report to the same regional micro-controller.
//
// This is the factory variant: a cache hands out shared flyweights.

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

// Intrinsic state
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Sensor {
    micro_controller_address: String,
    sensor_type: String,
}

impl Sensor {
    fn new(micro_controller_address: &str, sensor_type: &str) -> Self {
        Self {
            micro_controller_address: micro_controller_address.to_string(),
            sensor_type: sensor_type.to_string(),
        }
    }

    pub fn micro_controller_address(&self) -> &str {
        &self.micro_controller_address
    }

    pub fn sensor_type(&self) -> &str {
        &self.sensor_type
    }

    fn matches(&self, micro_controller_address: &str, sensor_type: &str) -> bool {
        self.micro_controller_address == micro_controller_address
            && self.sensor_type == sensor_type
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sensor {{ address: {}, type: {} }}",
            self.micro_controller_address, self.sensor_type
        )
    }
}

/// Hands out shared sensors. Linear scan, never evicts.
#[derive(Debug, Default)]
pub struct SensorFactory {
    sensors_cache: Vec<Rc<Sensor>>,
}

impl SensorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_sensor(&mut self, micro_controller_address: &str, sensor_type: &str) -> Rc<Sensor> {
        if let Some(sensor) = self
            .sensors_cache
            .iter()
            .find(|s| s.matches(micro_controller_address, sensor_type))
        {
            debug!(micro_controller_address, sensor_type, "sensor cache hit");
            return Rc::clone(sensor);
        }

        debug!(micro_controller_address, sensor_type, "sensor cache miss");
        let sensor = Rc::new(Sensor::new(micro_controller_address, sensor_type));
        self.sensors_cache.push(Rc::clone(&sensor));
        sensor
    }

    pub fn sensors(&self) -> &[Rc<Sensor>] {
        &self.sensors_cache
    }

    pub fn list_sensors(&self, out: &mut Transcript) {
        for sensor in &self.sensors_cache {
            out.line(sensor.to_string());
        }
    }
}

// Extrinsic state. Holds a flyweight instead of inheriting from it.
#[derive(Debug)]
pub struct WheelSensor {
    sensor: Rc<Sensor>,
    pub value: f64,
}

impl WheelSensor {
    pub fn new(factory: &mut SensorFactory) -> Self {
        Self {
            sensor: factory.get_sensor("AAx0", "wheel"),
            value: 0.0,
        }
    }

    pub fn read(&self) -> f64 {
        self.value
    }

    pub fn sensor(&self) -> &Rc<Sensor> {
        &self.sensor
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut factory = SensorFactory::new();

    let mut front_left = WheelSensor::new(&mut factory);
    let mut front_right = WheelSensor::new(&mut factory);
    front_left.value = 2.1;
    front_right.value = 2.3;
    let _pressure = factory.get_sensor("AAx1", "tire-pressure");

    factory.list_sensors(out);
    out.line(format!(
        "Wheel sensors share one flyweight: {}",
        Rc::ptr_eq(front_left.sensor(), front_right.sensor())
    ));
    out.line(format!(
        "Readings: {} / {}",
        front_left.read(),
        front_right.read()
    ));

    Ok(())
}
