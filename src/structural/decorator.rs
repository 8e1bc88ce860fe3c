// Decorator
// Wrap an object in another that exposes the same interface and adds to
// it. Decorators stack, so features combine at runtime through composition.
//
// Context: resellers combine several warranty options into one deal.

use crate::console::Transcript;
use crate::error::PatternError;

// The component interface
pub trait Warranty {
    fn details(&self) -> &str;
    fn price(&self) -> u32;
    fn cover(&self, out: &mut Transcript);

    /// Price of this warranty and everything it wraps.
    fn total_price(&self) -> u32;
}

fn cover_line(warranty: &dyn Warranty) -> String {
    format!("Warranty: {} for {} USD.", warranty.details(), warranty.price())
}

// The base warranty
#[derive(Debug, Default)]
pub struct BasicWarranty;

impl Warranty for BasicWarranty {
    fn details(&self) -> &str {
        "Global Basic Warranty"
    }

    fn price(&self) -> u32 {
        500
    }

    fn cover(&self, out: &mut Transcript) {
        out.line(cover_line(self));
    }

    fn total_price(&self) -> u32 {
        self.price()
    }
}

pub struct MotorWarranty {
    wrapped: Box<dyn Warranty>,
}

impl MotorWarranty {
    pub fn new(wrapped: Box<dyn Warranty>) -> Self {
        Self { wrapped }
    }
}

impl Warranty for MotorWarranty {
    fn details(&self) -> &str {
        "Specialized Motor Coverage"
    }

    fn price(&self) -> u32 {
        2000
    }

    fn cover(&self, out: &mut Transcript) {
        self.wrapped.cover(out);
        out.line(cover_line(self));
    }

    fn total_price(&self) -> u32 {
        self.wrapped.total_price() + self.price()
    }
}

pub struct RimsWarranty {
    wrapped: Box<dyn Warranty>,
}

impl RimsWarranty {
    pub fn new(wrapped: Box<dyn Warranty>) -> Self {
        Self { wrapped }
    }
}

impl Warranty for RimsWarranty {
    fn details(&self) -> &str {
        "Cover dem Spinners"
    }

    fn price(&self) -> u32 {
        5000
    }

    fn cover(&self, out: &mut Transcript) {
        self.wrapped.cover(out);
        out.line(cover_line(self));
    }

    fn total_price(&self) -> u32 {
        self.wrapped.total_price() + self.price()
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let simple: Box<dyn Warranty> = Box::new(BasicWarranty);
    let motor = Box::new(MotorWarranty::new(simple));
    // The outermost decorator is what client code holds on to.
    let rims = RimsWarranty::new(motor);

    rims.cover(out);
    out.line(format!("Total deal: {} USD", rims.total_price()));

    Ok(())
}
