// Prototype
// New objects are copied from an existing instance that knows how to clone
// itself, so callers never couple to the concrete type they duplicate.
//
// Context: one configured car, many identical copies.
//
// In Rust `Clone` already is the prototype for concrete types; `clone_box`
// extends it to trait objects so a registry can hold mixed templates.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

pub trait Prototype: fmt::Debug {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn windows(&self) -> u32;
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Car {
    pub windows: u32,
}

impl Prototype for Car {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn windows(&self) -> u32 {
        self.windows
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Civic {
    pub car: Car,
    pub has_spoiler: bool,
}

impl Civic {
    pub fn new() -> Self {
        Self {
            car: Car::default(),
            has_spoiler: true,
        }
    }
}

// Subtypes implement clone_box themselves so a copy is never the parent type.
impl Prototype for Civic {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn windows(&self) -> u32 {
        self.car.windows
    }
}

/// Named templates to clone from.
#[derive(Debug, Default)]
pub struct PrototypeRegistry {
    templates: BTreeMap<String, Box<dyn Prototype>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, template: Box<dyn Prototype>) {
        let name = name.into();
        debug!(%name, "prototype registered");
        self.templates.insert(name, template);
    }

    pub fn spawn(&self, name: &str) -> Result<Box<dyn Prototype>, PatternError> {
        self.templates
            .get(name)
            .map(|template| template.clone_box())
            .ok_or_else(|| PatternError::unknown_prototype(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut civic = Civic::new();
    out.line(format!("{:?}", civic));

    civic.car.windows = 1550;
    let civic_copy = civic.clone();
    out.line(format!("{:?}", civic_copy));

    let mut registry = PrototypeRegistry::new();
    registry.register("civic", Box::new(civic));
    registry.register("base", Box::new(Car { windows: 4 }));

    for name in ["civic", "base", "roadster"] {
        match registry.spawn(name) {
            Ok(copy) => out.line(format!("Spawned '{}' with {} windows", name, copy.windows())),
            Err(err) => out.line(err.to_string()),
        }
    }

    Ok(())
}
