// Composite
// When the model is a tree, containers and leaves share one interface and
// the tree is traversed recursively through it.
//
// Context: components travel by freight; the total weight of a shipment is
// needed.

use crate::console::Transcript;
use crate::error::PatternError;

pub trait Item {
    fn weight(&self) -> u64;
}

// Leaf: any single car component.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    weight: u64,
}

impl Component {
    pub fn new(weight: u64) -> Self {
        Self { weight }
    }
}

impl Item for Component {
    fn weight(&self) -> u64 {
        self.weight
    }
}

/// Composite: holds components and further containers.
pub struct Container {
    weight: u64,
    contents: Vec<Box<dyn Item>>,
}

impl Container {
    pub fn new(weight: u64) -> Self {
        Self {
            weight,
            contents: Vec::new(),
        }
    }

    pub fn add(&mut self, item: Box<dyn Item>) {
        self.contents.push(item);
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl Item for Container {
    fn weight(&self) -> u64 {
        self.contents
            .iter()
            .fold(self.weight, |total, item| total + item.weight())
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let mut main_freight_container = Container::new(100);
    main_freight_container.add(Box::new(Component::new(25)));

    let mut sub_container = Container::new(25);
    sub_container.add(Box::new(Component::new(50)));

    main_freight_container.add(Box::new(sub_container));

    out.line(format!(
        "The total weight of the freight is: {} *units*",
        main_freight_container.weight()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_container_weighs_itself() {
        let container = Container::new(10);
        assert!(container.is_empty());
        assert_eq!(container.weight(), 10);
    }

    #[test]
    fn test_nested_containers() {
        let mut inner = Container::new(1);
        inner.add(Box::new(Component::new(2)));
        let mut middle = Container::new(3);
        middle.add(Box::new(inner));
        let mut outer = Container::new(4);
        outer.add(Box::new(middle));
        outer.add(Box::new(Component::new(5)));

        assert_eq!(outer.len(), 2);
        assert_eq!(outer.weight(), 15);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out).unwrap();
        assert_eq!(out.lines(), &["The total weight of the freight is: 200 *units*"]);
    }

    proptest! {
        #[test]
        fn prop_weight_is_sum_of_parts(
            own in 0u64..1_000,
            leaves in prop::collection::vec(0u64..1_000, 0..20),
            nested in prop::collection::vec(0u64..1_000, 0..20),
        ) {
            let mut sub = Container::new(0);
            for w in &nested {
                sub.add(Box::new(Component::new(*w)));
            }
            let mut root = Container::new(own);
            for w in &leaves {
                root.add(Box::new(Component::new(*w)));
            }
            root.add(Box::new(sub));

            let expected = own + leaves.iter().sum::<u64>() + nested.iter().sum::<u64>();
            prop_assert_eq!(root.weight(), expected);
        }
    }
}
