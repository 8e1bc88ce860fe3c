//! Index of every pattern in the crate: its family, a one-line intent and
//! the driver script that demonstrates it.

use std::fmt;

use clap::ValueEnum;
use itertools::Itertools;
use serde::Deserialize;
use tracing::{info, warn};

use crate::console::Transcript;
use crate::error::PatternError;
use crate::{behavioral, creational, structural};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Behavioral => "Behavioral",
            Category::Creational => "Creational",
            Category::Structural => "Structural",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    // Behavioral
    ChainOfResponsibility,
    Command,
    Iterator,
    Mediator,
    Memento,
    Observer,
    State,
    Strategy,
    TemplateMethod,
    Visitor,
    // Creational
    AbstractFactory,
    Builder,
    FactoryMethod,
    Prototype,
    Singleton,
    // Structural
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
}

impl Pattern {
    /// Catalogue order: grouped by family, alphabetical inside a family.
    pub const ALL: [Pattern; 22] = [
        Pattern::ChainOfResponsibility,
        Pattern::Command,
        Pattern::Iterator,
        Pattern::Mediator,
        Pattern::Memento,
        Pattern::Observer,
        Pattern::State,
        Pattern::Strategy,
        Pattern::TemplateMethod,
        Pattern::Visitor,
        Pattern::AbstractFactory,
        Pattern::Builder,
        Pattern::FactoryMethod,
        Pattern::Prototype,
        Pattern::Singleton,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Flyweight,
        Pattern::Proxy,
    ];

    pub fn in_category(category: Category) -> impl Iterator<Item = Pattern> {
        Self::ALL.into_iter().filter(move |p| p.category() == category)
    }

    pub fn category(&self) -> Category {
        use Pattern::*;
        match self {
            ChainOfResponsibility | Command | Iterator | Mediator | Memento | Observer
            | State | Strategy | TemplateMethod | Visitor => Category::Behavioral,
            AbstractFactory | Builder | FactoryMethod | Prototype | Singleton => {
                Category::Creational
            }
            Adapter | Bridge | Composite | Decorator | Facade | Flyweight | Proxy => {
                Category::Structural
            }
        }
    }

    /// Command-line and config name, e.g. `chain-of-responsibility`.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "chain-of-responsibility",
            Pattern::Command => "command",
            Pattern::Iterator => "iterator",
            Pattern::Mediator => "mediator",
            Pattern::Memento => "memento",
            Pattern::Observer => "observer",
            Pattern::State => "state",
            Pattern::Strategy => "strategy",
            Pattern::TemplateMethod => "template-method",
            Pattern::Visitor => "visitor",
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::Builder => "builder",
            Pattern::FactoryMethod => "factory-method",
            Pattern::Prototype => "prototype",
            Pattern::Singleton => "singleton",
            Pattern::Adapter => "adapter",
            Pattern::Bridge => "bridge",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
            Pattern::Facade => "facade",
            Pattern::Flyweight => "flyweight",
            Pattern::Proxy => "proxy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "Chain of Responsibility",
            Pattern::Command => "Command",
            Pattern::Iterator => "Iterator",
            Pattern::Mediator => "Mediator",
            Pattern::Memento => "Memento",
            Pattern::Observer => "Observer",
            Pattern::State => "State",
            Pattern::Strategy => "Strategy",
            Pattern::TemplateMethod => "Template Method",
            Pattern::Visitor => "Visitor",
            Pattern::AbstractFactory => "Abstract Factory",
            Pattern::Builder => "Builder",
            Pattern::FactoryMethod => "Factory Method",
            Pattern::Prototype => "Prototype",
            Pattern::Singleton => "Singleton",
            Pattern::Adapter => "Adapter",
            Pattern::Bridge => "Bridge",
            Pattern::Composite => "Composite",
            Pattern::Decorator => "Decorator",
            Pattern::Facade => "Facade",
            Pattern::Flyweight => "Flyweight",
            Pattern::Proxy => "Proxy",
        }
    }

    pub fn intent(&self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => {
                "Pass a request along a chain of handlers that each process or stop it"
            }
            Pattern::Command => "Turn a request into an object that can be queued and passed around",
            Pattern::Iterator => "Traverse a collection without exposing its representation",
            Pattern::Mediator => "Route all communication between objects through one coordinator",
            Pattern::Memento => "Capture and restore an object's state without exposing it",
            Pattern::Observer => "Notify subscribers whenever the publisher's state changes",
            Pattern::State => "Change behavior when the internal state changes",
            Pattern::Strategy => "Swap interchangeable algorithms at runtime",
            Pattern::TemplateMethod => "Fix an algorithm's skeleton and let subclasses fill in steps",
            Pattern::Visitor => "Add operations to objects without changing their types",
            Pattern::AbstractFactory => "Create families of related objects without naming their types",
            Pattern::Builder => "Construct complex objects step by step",
            Pattern::FactoryMethod => "Let subtypes decide which product to create",
            Pattern::Prototype => "Copy existing objects without coupling to their types",
            Pattern::Singleton => "Guarantee one shared instance with a global access point",
            Pattern::Adapter => "Make an incompatible interface usable by existing code",
            Pattern::Bridge => "Split an abstraction from its implementation so both can vary",
            Pattern::Composite => "Treat trees of objects and single objects uniformly",
            Pattern::Decorator => "Stack extra behavior onto an object by wrapping it",
            Pattern::Facade => "Put a simple interface in front of a complex subsystem",
            Pattern::Flyweight => "Share common state between many objects to save memory",
            Pattern::Proxy => "Control access to an object through a stand-in",
        }
    }

    /// Runs the driver script.
    pub fn run(&self, out: &mut Transcript) -> Result<(), PatternError> {
        match self {
            Pattern::ChainOfResponsibility => behavioral::chain_of_responsibility::demo(out),
            Pattern::Command => behavioral::command::demo(out),
            Pattern::Iterator => behavioral::iterator::demo(out),
            Pattern::Mediator => behavioral::mediator::demo(out),
            Pattern::Memento => behavioral::memento::demo(out),
            Pattern::Observer => behavioral::observer::demo(out),
            Pattern::State => behavioral::state::demo(out),
            Pattern::Strategy => behavioral::strategy::demo(out),
            Pattern::TemplateMethod => behavioral::template_method::demo(out),
            Pattern::Visitor => behavioral::visitor::demo(out),
            Pattern::AbstractFactory => creational::abstract_factory::demo(out),
            Pattern::Builder => creational::builder::demo(out),
            Pattern::FactoryMethod => creational::factory_method::demo(out),
            Pattern::Prototype => creational::prototype::demo(out),
            Pattern::Singleton => creational::singleton::demo(out),
            Pattern::Adapter => structural::adapter::demo(out),
            Pattern::Bridge => structural::bridge::demo(out),
            Pattern::Composite => structural::composite::demo(out),
            Pattern::Decorator => structural::decorator::demo(out),
            Pattern::Facade => structural::facade::demo(out),
            Pattern::Flyweight => structural::flyweight::demo(out),
            Pattern::Proxy => structural::proxy::demo(out),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Writes the catalogue, grouped by family.
pub fn list(category: Option<Category>, out: &mut Transcript) {
    let selected = Pattern::ALL
        .into_iter()
        .filter(|p| category.map_or(true, |c| p.category() == c));

    for (family, patterns) in &selected.chunk_by(|p| p.category()) {
        out.heading(family.to_string());
        for pattern in patterns {
            out.line(format!("  {:<24} {}", pattern.name(), pattern.intent()));
        }
    }
}

// =============================================================================
// Running
// =============================================================================

#[derive(Debug, Default)]
pub struct RunSummary {
    pub passed: Vec<Pattern>,
    pub failed: Vec<(Pattern, PatternError)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }
}

/// Runs each pattern's driver script under its own heading.
pub fn run_patterns(patterns: &[Pattern], stop_on_error: bool, out: &mut Transcript) -> RunSummary {
    run_with(patterns, stop_on_error, out, |pattern, out| pattern.run(out))
}

/// Runs each pattern through `runner`. Without `stop_on_error` a failing
/// example is recorded and the run continues.
pub fn run_with<F>(
    patterns: &[Pattern],
    stop_on_error: bool,
    out: &mut Transcript,
    mut runner: F,
) -> RunSummary
where
    F: FnMut(Pattern, &mut Transcript) -> Result<(), PatternError>,
{
    let mut summary = RunSummary::default();

    for (i, pattern) in patterns.iter().copied().enumerate() {
        if i > 0 {
            out.blank();
        }
        out.heading(pattern.title());
        info!(pattern = %pattern, "running example");

        match runner(pattern, out) {
            Ok(()) => summary.passed.push(pattern),
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "example failed");
                summary.failed.push((pattern, e));
                if stop_on_error {
                    break;
                }
            }
        }
    }

    summary
}
