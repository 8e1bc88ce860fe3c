//! # Gang-of-Four patterns on an assembly line
//!
//! Every classic pattern, told through one recurring story: a car
//! manufacturer building, certifying and shipping cars. Each example is a
//! closed world of a few participants plus a driver script (`demo`) that
//! writes to a [`console::Transcript`].
//!
//! ## Behavioral
//! - Chain of Responsibility, Command, Iterator, Mediator, Memento
//! - Observer, State, Strategy, Template Method, Visitor
//!
//! ## Creational
//! - Abstract Factory, Builder, Factory Method, Prototype, Singleton
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
//!
//! Run the examples with:
//! ```bash
//! cargo run --bin gof -- list
//! cargo run --bin gof -- run observer visitor
//! cargo run --bin gof -- all
//! cargo run --bin behavioral
//! cargo run --bin creational
//! cargo run --bin structural
//! ```

pub mod behavioral;
pub mod catalogue;
pub mod cli;
pub mod config;
pub mod console;
pub mod creational;
pub mod error;
pub mod structural;

pub use catalogue::{Category, Pattern};
pub use console::Transcript;
pub use error::{ConfigError, PatternError};
