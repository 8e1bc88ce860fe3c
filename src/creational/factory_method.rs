// Factory Method
// Creators defer the choice of concrete product to a single overridable
// method. The creator's own logic only ever sees the product trait.
//
// Context: the same car ships in different configurations per region.

use std::fmt;

use crate::console::Transcript;
use crate::error::PatternError;

pub trait CarModel {
    fn drive(&self) -> String;
}

pub struct UsaModel;
impl CarModel for UsaModel {
    fn drive(&self) -> String {
        "Driving the USA Configuration".to_string()
    }
}

pub struct EmeaModel;
impl CarModel for EmeaModel {
    fn drive(&self) -> String {
        "Driving the EMEA Configuration".to_string()
    }
}

pub trait CarModelCreator {
    /// The factory method.
    fn create_car_model(&self) -> Box<dyn CarModel>;

    // Creator logic built on top of the factory method.
    fn test_drive(&self, out: &mut Transcript) {
        let model = self.create_car_model();
        out.line(model.drive());
    }
}

pub struct UsaCreator;
impl CarModelCreator for UsaCreator {
    fn create_car_model(&self) -> Box<dyn CarModel> {
        Box::new(UsaModel)
    }
}

pub struct EmeaCreator;
impl CarModelCreator for EmeaCreator {
    fn create_car_model(&self) -> Box<dyn CarModel> {
        Box::new(EmeaModel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Usa,
    Emea,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Usa, Region::Emea];

    pub fn creator(self) -> Box<dyn CarModelCreator> {
        match self {
            Region::Usa => Box::new(UsaCreator),
            Region::Emea => Box::new(EmeaCreator),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Usa => write!(f, "USA"),
            Region::Emea => write!(f, "EMEA"),
        }
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let usa = UsaCreator;
    out.line(usa.create_car_model().drive());

    for region in Region::ALL {
        out.line(format!("Test drive in {}:", region));
        region.creator().test_drive(out);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creators_pick_their_model() {
        assert_eq!(UsaCreator.create_car_model().drive(), "Driving the USA Configuration");
        assert_eq!(EmeaCreator.create_car_model().drive(), "Driving the EMEA Configuration");
    }

    #[test]
    fn test_region_selects_creator() {
        let mut out = Transcript::new();
        Region::Emea.creator().test_drive(&mut out);
        assert_eq!(out.lines(), &["Driving the EMEA Configuration"]);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "Driving the USA Configuration",
                "Test drive in USA:",
                "Driving the USA Configuration",
                "Test drive in EMEA:",
                "Driving the EMEA Configuration",
            ]
        );
    }
}
