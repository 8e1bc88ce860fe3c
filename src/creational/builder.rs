// Builder
// Construct a complex object step by step. The director knows the recipes;
// builders know how to apply each step to their own product, so the same
// recipe can yield different products.
//
// Context: one vehicle, many possible configurations and options.

use std::mem;

use serde::Serialize;
use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Windows {
    pub count: u32,
    pub tint_hue: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    pub wheels: u32,
    pub windows: Option<Windows>,
    pub doors: u32,
    pub has_sunroof: bool,
    pub has_trunk: bool,
}

/// Human readable spec sheet assembled from the same steps as a [`Car`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CarManual {
    pub sections: Vec<String>,
}

pub trait Builder {
    type Product;

    fn reset(&mut self);
    fn set_wheels(&mut self, count: u32);
    fn set_windows(&mut self, count: u32, tint_hue: u32);
    fn set_doors(&mut self, count: u32);
    fn add_sunroof(&mut self);
    fn add_trunk(&mut self);

    /// Hand over the finished product, leaving the builder empty.
    fn get_result(&mut self) -> Self::Product;
}

#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
}

impl Builder for CarBuilder {
    type Product = Car;

    fn reset(&mut self) {
        self.car = Car::default();
    }

    fn set_wheels(&mut self, count: u32) {
        self.car.wheels = count;
    }

    fn set_windows(&mut self, count: u32, tint_hue: u32) {
        self.car.windows = Some(Windows { count, tint_hue });
    }

    fn set_doors(&mut self, count: u32) {
        self.car.doors = count;
    }

    fn add_sunroof(&mut self) {
        self.car.has_sunroof = true;
    }

    fn add_trunk(&mut self) {
        self.car.has_trunk = true;
    }

    fn get_result(&mut self) -> Car {
        mem::take(&mut self.car)
    }
}

#[derive(Debug, Default)]
pub struct CarManualBuilder {
    manual: CarManual,
}

impl Builder for CarManualBuilder {
    type Product = CarManual;

    fn reset(&mut self) {
        self.manual = CarManual::default();
    }

    fn set_wheels(&mut self, count: u32) {
        self.manual.sections.push(format!("Wheels: {}", count));
    }

    fn set_windows(&mut self, count: u32, tint_hue: u32) {
        self.manual
            .sections
            .push(format!("Windows: {} (tint hue {})", count, tint_hue));
    }

    fn set_doors(&mut self, count: u32) {
        self.manual.sections.push(format!("Doors: {}", count));
    }

    fn add_sunroof(&mut self) {
        self.manual.sections.push("Sunroof: operate only when parked".to_string());
    }

    fn add_trunk(&mut self) {
        self.manual.sections.push("Trunk: max load 400 kg".to_string());
    }

    fn get_result(&mut self) -> CarManual {
        mem::take(&mut self.manual)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarType {
    Simple,
    Full,
}

pub struct Director<B: Builder> {
    builder: B,
}

impl<B: Builder> Director<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn change_builder(&mut self, builder: B) {
        self.builder = builder;
    }

    pub fn make(&mut self, car_type: CarType) -> B::Product {
        debug!(?car_type, "director making car");
        self.builder.reset();

        self.builder.set_wheels(4);
        self.builder.set_windows(4, 0);
        self.builder.set_doors(2);

        if car_type == CarType::Full {
            self.builder.add_sunroof();
        }

        self.builder.get_result()
    }
}

fn describe(car: &Car) -> String {
    serde_json::to_string_pretty(car).unwrap_or_else(|_| format!("{:?}", car))
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut director = Director::new(CarBuilder::default());

    let full = director.make(CarType::Full);
    out.line(describe(&full));

    let simple = director.make(CarType::Simple);
    out.line(describe(&simple));

    // Same recipe, different product.
    let mut manual_director = Director::new(CarManualBuilder::default());
    let manual = manual_director.make(CarType::Full);
    out.line("Manual for the full car:");
    for section in &manual.sections {
        out.line(format!("  {}", section));
    }

    // Builders also work without a director.
    let mut builder = CarBuilder::default();
    builder.set_wheels(6);
    builder.set_doors(4);
    builder.add_trunk();
    out.line(format!("Custom build: {:?}", builder.get_result()));

    director.change_builder(builder);
    out.line(format!("Builder swapped, next car: {:?}", director.make(CarType::Simple)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_car_has_sunroof() {
        let mut director = Director::new(CarBuilder::default());
        let car = director.make(CarType::Full);

        assert_eq!(car.wheels, 4);
        assert_eq!(car.doors, 2);
        assert_eq!(car.windows, Some(Windows { count: 4, tint_hue: 0 }));
        assert!(car.has_sunroof);
        assert!(!car.has_trunk);
    }

    #[test]
    fn test_simple_car_has_no_sunroof() {
        let mut director = Director::new(CarBuilder::default());
        assert!(!director.make(CarType::Simple).has_sunroof);
    }

    #[test]
    fn test_successive_builds_are_independent() {
        let mut director = Director::new(CarBuilder::default());
        let full = director.make(CarType::Full);
        let simple = director.make(CarType::Simple);
        assert!(full.has_sunroof);
        assert!(!simple.has_sunroof);
    }

    #[test]
    fn test_get_result_empties_the_builder() {
        let mut builder = CarBuilder::default();
        builder.add_trunk();
        assert!(builder.get_result().has_trunk);
        assert_eq!(builder.get_result(), Car::default());
    }

    #[test]
    fn test_change_builder_resets_before_use() {
        let mut director = Director::new(CarBuilder::default());
        let mut dirty = CarBuilder::default();
        dirty.add_trunk();
        director.change_builder(dirty);

        assert!(!director.make(CarType::Simple).has_trunk);
    }

    #[test]
    fn test_manual_builder_follows_same_recipe() {
        let mut director = Director::new(CarManualBuilder::default());
        let manual = director.make(CarType::Full);
        assert_eq!(
            manual.sections,
            vec![
                "Wheels: 4",
                "Windows: 4 (tint hue 0)",
                "Doors: 2",
                "Sunroof: operate only when parked",
            ]
        );
    }

    #[test]
    fn test_car_serializes() {
        let car = Car {
            wheels: 4,
            ..Car::default()
        };
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["wheels"], 4);
        assert!(json["windows"].is_null());
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out).unwrap();
        assert!(out.lines()[0].contains("\"has_sunroof\": true"));
        assert!(out.contains("  Doors: 2"));
        assert!(out.contains("Builder swapped"));
    }
}
