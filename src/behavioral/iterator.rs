// Iterator
// Pull the traversal of a collection out into a separate cursor object.
// The cursor owns all traversal state, so several cursors can walk the same
// storage at once.
//
// Context: components live in storages organised in different ways, and
// the factory floor should not care how a given storage is laid out.

use std::fmt;

use crate::console::Transcript;
use crate::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarComponent {
    pub name: String,
}

impl CarComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub trait IterableStorage {
    type Cursor<'a>
    where
        Self: 'a;

    fn create_iterator(&self) -> Self::Cursor<'_>;
}

#[derive(Debug, Clone)]
pub struct CarComponentStorage {
    parts: Vec<CarComponent>,
}

impl Default for CarComponentStorage {
    fn default() -> Self {
        Self {
            parts: vec![
                CarComponent::new("Doors"),
                CarComponent::new("Wheels"),
                CarComponent::new("Hood"),
            ],
        }
    }
}

impl CarComponentStorage {
    pub fn with_parts(parts: Vec<CarComponent>) -> Self {
        Self { parts }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl IterableStorage for CarComponentStorage {
    type Cursor<'a> = StorageCursor<'a>;

    fn create_iterator(&self) -> StorageCursor<'_> {
        StorageCursor {
            storage: self,
            position: None,
        }
    }
}

/// Result of one [`StorageCursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub done: bool,
    pub value: Option<&'a CarComponent>,
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(component) => write!(f, "{{ done: {}, value: {} }}", self.done, component.name),
            None => write!(f, "{{ done: {}, value: none }}", self.done),
        }
    }
}

/// Single forward cursor. `position` is `None` until the first step.
#[derive(Debug, Clone)]
pub struct StorageCursor<'a> {
    storage: &'a CarComponentStorage,
    position: Option<usize>,
}

impl<'a> StorageCursor<'a> {
    pub fn current(&self) -> Result<&'a CarComponent, PatternError> {
        self.position
            .and_then(|position| self.storage.parts.get(position))
            .ok_or(PatternError::IteratorNotStarted)
    }

    pub fn has_next(&self) -> bool {
        let next = self.position.map_or(0, |position| position + 1);
        next < self.storage.parts.len()
    }

    /// Move one step forward. At the end the cursor stays on the last
    /// component and reports `done`.
    pub fn advance(&mut self, out: &mut Transcript) -> Step<'a> {
        if self.has_next() {
            self.position = Some(self.position.map_or(0, |position| position + 1));
        } else {
            let position = self.position.map_or(-1, |position| position as i64);
            out.line(format!("Iterator finished at Position: {}", position));
            return Step {
                done: true,
                value: self.position.and_then(|position| self.storage.parts.get(position)),
            };
        }

        Step {
            done: !self.has_next(),
            value: self.current().ok(),
        }
    }

    pub fn reset(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl<'a> Iterator for StorageCursor<'a> {
    type Item = &'a CarComponent;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let position = self.position.map_or(0, |position| position + 1);
        self.position = Some(position);
        self.storage.parts.get(position)
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let storage = CarComponentStorage::default();
    let mut iterator = storage.create_iterator();

    match iterator.current() {
        Ok(component) => out.line(component.name.clone()),
        Err(err) => out.line(err.to_string()),
    }

    for _ in 0..2 {
        let step = iterator.advance(out);
        out.line(step.to_string());
    }

    iterator.reset();
    for _ in 0..4 {
        let step = iterator.advance(out);
        out.line(step.to_string());
    }

    // A second cursor walks the same storage independently.
    let names: Vec<&str> = storage
        .create_iterator()
        .map(|component| component.name.as_str())
        .collect();
    out.line(format!("Independent cursor saw: {}", names.join(", ")));

    Ok(())
}
