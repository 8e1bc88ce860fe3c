// Singleton
// Exactly one instance, created lazily and reachable from anywhere.
//
// Singletons hide dependencies, own their own lifecycle and carry state
// across the whole run, which makes them awkward to test. Passing the
// dependency explicitly is usually the better choice; this is the shape
// when a single instance really is required.

use std::sync::OnceLock;

use tracing::debug;
use uuid::Uuid;

use crate::console::Transcript;
use crate::error::PatternError;

#[derive(Debug)]
pub struct Singleton {
    instance_id: Uuid,
}

impl Singleton {
    pub fn get_instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let instance = Singleton {
                instance_id: Uuid::new_v4(),
            };
            debug!(id = %instance.instance_id, "singleton created");
            instance
        })
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let first = Singleton::get_instance();
    let second = Singleton::get_instance();

    out.line(format!("Singleton instance {}", first.instance_id()));
    out.line(format!("Same instance: {}", std::ptr::eq(first, second)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_instance() {
        let a = Singleton::get_instance();
        let b = Singleton::get_instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.instance_id(), b.instance_id());
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out).unwrap();
        assert_eq!(
            out.lines()[0],
            format!("Singleton instance {}", Singleton::get_instance().instance_id())
        );
        assert_eq!(out.lines()[1], "Same instance: true");
    }
}
