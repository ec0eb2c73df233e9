//! Shared DSL object fixtures for integration tests.

use dsl_object::{DslObject, Settings};
use rstest::fixture;

/// A mother, described in the DSL's own vocabulary.
#[derive(Debug, DslObject)]
#[dsl(keys(college, combat_boots, fat, so_fat))]
pub struct Mom {
    settings: Settings,
}

/// Owner of a lazily created [`Mom`], configured through a block.
#[derive(Debug, Default)]
pub struct Person {
    momma: Option<Mom>,
}

impl Person {
    /// Return the mother, creating her on first use.
    pub fn momma(&mut self) -> &mut Mom {
        self.momma.get_or_insert_with(Mom::default)
    }

    /// Configure the mother with `block`, creating her on first use.
    pub fn momma_with(&mut self, block: impl FnOnce(&mut Mom)) -> &mut Mom {
        self.momma().configure_with(block)
    }
}

/// Base type for inheritance checks.
#[derive(Debug, DslObject)]
#[dsl(keys(foo))]
pub struct Base {
    settings: Settings,
}

/// Subtype adding `bar` on top of [`Base`].
#[derive(Debug, DslObject)]
#[dsl(keys(bar))]
pub struct Derived {
    #[dsl(base)]
    base: Base,
}

/// Sibling of [`Derived`] adding `baz`.
#[derive(Debug, DslObject)]
#[dsl(keys(baz))]
pub struct Sibling {
    #[dsl(base)]
    base: Base,
    /// Non-settings state that survives construction with its default.
    pub visits: u32,
}

/// A freshly constructed [`Mom`] with no settings.
#[fixture]
pub fn mom() -> Mom {
    Mom::default()
}
