// Abstract Factory
// One factory per product family. Each factory builds every product of its
// family, so client code never mixes a deluxe car with a cheap SUV.
//
// Context: a manufacturer runs several lines, each with its own range.

use crate::console::Transcript;
use crate::error::PatternError;

pub trait Car {
    fn drive(&self) -> String;
}

pub trait Suv {
    fn drive(&self) -> String;
}

pub trait Truck {
    fn drive(&self) -> String;
}

pub trait VehicleFactory {
    fn create_car(&self) -> Box<dyn Car>;
    fn create_suv(&self) -> Box<dyn Suv>;

    /// Not every line builds trucks.
    fn create_truck(&self) -> Option<Box<dyn Truck>> {
        None
    }

    fn line_name(&self) -> &str;
}

// ============================================================================
// Deluxe family
// ============================================================================

pub struct DeluxeCar;
impl Car for DeluxeCar {
    fn drive(&self) -> String {
        "Driving a Deluxe Car".to_string()
    }
}

pub struct DeluxeSuv;
impl Suv for DeluxeSuv {
    fn drive(&self) -> String {
        "Driving a Deluxe SUV".to_string()
    }
}

pub struct DeluxeTruck;
impl Truck for DeluxeTruck {
    fn drive(&self) -> String {
        "Driving a Deluxe Truck".to_string()
    }
}

pub struct DeluxeVehicleFactory;
impl VehicleFactory for DeluxeVehicleFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(DeluxeCar)
    }

    fn create_suv(&self) -> Box<dyn Suv> {
        Box::new(DeluxeSuv)
    }

    fn create_truck(&self) -> Option<Box<dyn Truck>> {
        Some(Box::new(DeluxeTruck))
    }

    fn line_name(&self) -> &str {
        "Deluxe"
    }
}

// ============================================================================
// Cheap family
// ============================================================================

pub struct CheapCar;
impl Car for CheapCar {
    fn drive(&self) -> String {
        "Driving a Cheap Car".to_string()
    }
}

pub struct CheapSuv;
impl Suv for CheapSuv {
    fn drive(&self) -> String {
        "Driving a Cheap SUV".to_string()
    }
}

pub struct CheapVehicleFactory;
impl VehicleFactory for CheapVehicleFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(CheapCar)
    }

    fn create_suv(&self) -> Box<dyn Suv> {
        Box::new(CheapSuv)
    }

    fn line_name(&self) -> &str {
        "Cheap"
    }
}

// ============================================================================
// Client
// ============================================================================

pub struct VehicleCompany {
    factory: Box<dyn VehicleFactory>,
}

impl VehicleCompany {
    pub fn new(factory: Box<dyn VehicleFactory>) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &dyn VehicleFactory {
        self.factory.as_ref()
    }

    /// Test-drive one of every vehicle this company's line produces.
    pub fn showroom(&self, out: &mut Transcript) {
        out.line(self.factory.create_car().drive());
        out.line(self.factory.create_suv().drive());
        match self.factory.create_truck() {
            Some(truck) => out.line(truck.drive()),
            None => out.line(format!("The {} line does not build trucks", self.factory.line_name())),
        }
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let deluxe_company = VehicleCompany::new(Box::new(DeluxeVehicleFactory));
    let cheap_company = VehicleCompany::new(Box::new(CheapVehicleFactory));

    out.line(deluxe_company.factory().create_car().drive());
    out.line(cheap_company.factory().create_car().drive());

    out.blank();
    deluxe_company.showroom(out);
    cheap_company.showroom(out);

    Ok(())
}
