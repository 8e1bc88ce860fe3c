// Observer
// One-way publish/subscribe: subscribers register with a publisher and are
// told whenever its state changes.
//
// Context: the manufacturer notifies dealerships and buyers once cars are
// ready to ship.

use std::rc::Rc;

use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

pub trait Subscriber {
    fn update(&self, manufacturer: &Manufacturer, out: &mut Transcript);
}

pub trait Publisher {
    fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>);
    fn unsubscribe(&mut self, subscriber: &Rc<dyn Subscriber>);
    fn notify_subscribers(&self, out: &mut Transcript);
}

// Identity of a subscriber is its allocation, not its vtable.
fn same_subscriber(a: &Rc<dyn Subscriber>, b: &Rc<dyn Subscriber>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

#[derive(Default)]
pub struct Manufacturer {
    subscribers: Vec<Rc<dyn Subscriber>>,
    is_car_available: bool,
}

impl Manufacturer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_car_available(&self) -> bool {
        self.is_car_available
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn set_car_available(&mut self, is_car_available: bool, out: &mut Transcript) {
        self.is_car_available = is_car_available;
        self.notify_subscribers(out);
    }
}

impl Publisher for Manufacturer {
    fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>) {
        if self.subscribers.iter().any(|s| same_subscriber(s, &subscriber)) {
            return;
        }
        self.subscribers.push(subscriber);
    }

    fn unsubscribe(&mut self, subscriber: &Rc<dyn Subscriber>) {
        self.subscribers.retain(|s| !same_subscriber(s, subscriber));
    }

    fn notify_subscribers(&self, out: &mut Transcript) {
        debug!(subscribers = self.subscribers.len(), "notifying");
        for subscriber in &self.subscribers {
            subscriber.update(self, out);
        }
    }
}

pub struct CarDealer;

impl Subscriber for CarDealer {
    fn update(&self, manufacturer: &Manufacturer, out: &mut Transcript) {
        if manufacturer.is_car_available() {
            out.line("{Dealer} Car available for sale!");
        }
    }
}

pub struct CarBuyer;

impl Subscriber for CarBuyer {
    fn update(&self, manufacturer: &Manufacturer, out: &mut Transcript) {
        if manufacturer.is_car_available() {
            out.line("{Buyer} Car available for order!");
        }
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut manufacturer = Manufacturer::new();
    let dealer: Rc<dyn Subscriber> = Rc::new(CarDealer);
    let buyer: Rc<dyn Subscriber> = Rc::new(CarBuyer);

    manufacturer.subscribe(Rc::clone(&dealer));
    manufacturer.subscribe(Rc::clone(&buyer));

    manufacturer.set_car_available(true, out);
    manufacturer.set_car_available(false, out);

    out.line("Buyer unsubscribes");
    manufacturer.unsubscribe(&buyer);
    manufacturer.set_car_available(true, out);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingSubscriber {
        calls: Cell<u32>,
    }

    impl Subscriber for CountingSubscriber {
        fn update(&self, _manufacturer: &Manufacturer, _out: &mut Transcript) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn test_subscribers_notified_on_change() {
        let mut manufacturer = Manufacturer::new();
        manufacturer.subscribe(Rc::new(CarDealer));
        manufacturer.subscribe(Rc::new(CarBuyer));
        let mut out = Transcript::new();

        manufacturer.set_car_available(true, &mut out);

        assert_eq!(
            out.lines(),
            &["{Dealer} Car available for sale!", "{Buyer} Car available for order!"]
        );
    }

    #[test]
    fn test_nothing_printed_when_unavailable() {
        let mut manufacturer = Manufacturer::new();
        manufacturer.subscribe(Rc::new(CarDealer));
        let mut out = Transcript::new();

        manufacturer.set_car_available(false, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_double_subscribe_is_ignored() {
        let counter = Rc::new(CountingSubscriber { calls: Cell::new(0) });
        let as_subscriber: Rc<dyn Subscriber> = counter.clone();
        let mut manufacturer = Manufacturer::new();

        manufacturer.subscribe(as_subscriber.clone());
        manufacturer.subscribe(as_subscriber);
        manufacturer.set_car_available(true, &mut Transcript::new());

        assert_eq!(manufacturer.subscriber_count(), 1);
        assert_eq!(counter.calls.get(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_is_noop() {
        let mut manufacturer = Manufacturer::new();
        let dealer: Rc<dyn Subscriber> = Rc::new(CarDealer);
        let stranger: Rc<dyn Subscriber> = Rc::new(CarDealer);
        manufacturer.subscribe(dealer.clone());

        manufacturer.unsubscribe(&stranger);
        assert_eq!(manufacturer.subscriber_count(), 1);

        manufacturer.unsubscribe(&dealer);
        assert_eq!(manufacturer.subscriber_count(), 0);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "{Dealer} Car available for sale!",
                "{Buyer} Car available for order!",
                "Buyer unsubscribes",
                "{Dealer} Car available for sale!",
            ]
        );
    }
}
