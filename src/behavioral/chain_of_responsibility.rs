// Chain of Responsibility
// Requests travel along a chain of handlers. Each handler either processes
// the request or passes it on to its successor.
//
// Context: components are prepared (checked, painted, polished) before being
// installed on a car.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Component {
    pub is_painted: bool,
    pub is_polished: bool,
    pub is_damaged: bool,
}

impl Component {
    pub fn damaged() -> Self {
        Self {
            is_damaged: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOutcome {
    /// The request reached the end of the chain.
    Completed,
    /// A handler refused to pass the request on.
    Stopped,
}

pub trait Handler {
    /// Link `next` after this handler and hand it back, so links can be
    /// chained: `a.set_next(b).set_next(c)`.
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler>;

    fn handle(&self, component: &mut Component, out: &mut Transcript) -> HandleOutcome;
}

// ============================================================================
// Shared link to the successor
// ============================================================================

#[derive(Default)]
struct Link {
    next: RefCell<Option<Rc<dyn Handler>>>,
}

impl Link {
    fn set(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        *self.next.borrow_mut() = Some(Rc::clone(&next));
        next
    }

    fn forward(&self, component: &mut Component, out: &mut Transcript) -> HandleOutcome {
        // Clone the Rc so the RefCell is not borrowed while the successor runs.
        let next = self.next.borrow().clone();
        match next {
            Some(handler) => handler.handle(component, out),
            None => HandleOutcome::Completed,
        }
    }
}

// ============================================================================
// Concrete handlers
// ============================================================================

#[derive(Default)]
pub struct PaintHandler {
    link: Link,
}

impl PaintHandler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl Handler for PaintHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.link.set(next)
    }

    fn handle(&self, component: &mut Component, out: &mut Transcript) -> HandleOutcome {
        if !component.is_painted {
            component.is_painted = true;
            out.line("Painted Component");
        }
        self.link.forward(component, out)
    }
}

#[derive(Default)]
pub struct PolishHandler {
    link: Link,
}

impl PolishHandler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl Handler for PolishHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.link.set(next)
    }

    fn handle(&self, component: &mut Component, out: &mut Transcript) -> HandleOutcome {
        if !component.is_polished {
            component.is_polished = true;
            out.line("Polished Component");
        }
        self.link.forward(component, out)
    }
}

#[derive(Default)]
pub struct DamageHandler {
    link: Link,
}

impl DamageHandler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl Handler for DamageHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.link.set(next)
    }

    fn handle(&self, component: &mut Component, out: &mut Transcript) -> HandleOutcome {
        if component.is_damaged {
            debug!("damaged component, chain stopped");
            out.line("Item is damaged!");
            return HandleOutcome::Stopped;
        }
        self.link.forward(component, out)
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let paint_handler = PaintHandler::new();
    let polish_handler = PolishHandler::new();
    let damage_handler = DamageHandler::new();

    let mut valid_component = Component::default();
    let mut damaged_component = Component::damaged();

    damage_handler
        .set_next(paint_handler.clone())
        .set_next(polish_handler);

    out.line("Processing Valid Component");
    damage_handler.handle(&mut valid_component, out);

    out.line("Processing Damaged Component");
    damage_handler.handle(&mut damaged_component, out);

    out.line("Processing Damaged Component Without the Damage Handler");
    paint_handler.handle(&mut damaged_component, out);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_chain() -> (Rc<DamageHandler>, Rc<PaintHandler>) {
        let damage = DamageHandler::new();
        let paint = PaintHandler::new();
        damage.set_next(paint.clone()).set_next(PolishHandler::new());
        (damage, paint)
    }

    #[test]
    fn test_valid_component_is_painted_and_polished() {
        let (damage, _) = full_chain();
        let mut component = Component::default();
        let mut out = Transcript::new();

        let outcome = damage.handle(&mut component, &mut out);

        assert_eq!(outcome, HandleOutcome::Completed);
        assert!(component.is_painted);
        assert!(component.is_polished);
        assert_eq!(out.lines(), &["Painted Component", "Polished Component"]);
    }

    #[test]
    fn test_damaged_component_stops_the_chain() {
        let (damage, _) = full_chain();
        let mut component = Component::damaged();
        let mut out = Transcript::new();

        let outcome = damage.handle(&mut component, &mut out);

        assert_eq!(outcome, HandleOutcome::Stopped);
        assert!(!component.is_painted);
        assert_eq!(out.lines(), &["Item is damaged!"]);
    }

    #[test]
    fn test_entering_the_chain_midway_skips_the_damage_check() {
        let (_, paint) = full_chain();
        let mut component = Component::damaged();
        let mut out = Transcript::new();

        let outcome = paint.handle(&mut component, &mut out);

        assert_eq!(outcome, HandleOutcome::Completed);
        assert!(component.is_painted && component.is_polished);
    }

    #[test]
    fn test_already_processed_component_is_left_alone() {
        let (damage, _) = full_chain();
        let mut component = Component {
            is_painted: true,
            is_polished: true,
            is_damaged: false,
        };
        let mut out = Transcript::new();

        damage.handle(&mut component, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_lone_handler_completes() {
        let polish = PolishHandler::new();
        let mut component = Component::default();
        let mut out = Transcript::new();
        assert_eq!(polish.handle(&mut component, &mut out), HandleOutcome::Completed);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "Processing Valid Component",
                "Painted Component",
                "Polished Component",
                "Processing Damaged Component",
                "Item is damaged!",
                "Processing Damaged Component Without the Damage Handler",
                "Painted Component",
                "Polished Component",
            ]
        );
    }
}
