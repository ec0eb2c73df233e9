//! Per-type attribute schemas.
//!
//! A schema is the ordered, duplicate-free list of attribute names a
//! [`crate::DslObject`] type declares. Subtypes derive their schema from the
//! parent's with [`AttributeSchema::extend`], which leaves the parent value
//! untouched, so sibling types never observe each other's declarations.

use crate::AttributeName;

/// Declared attribute names for one type.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AttributeSchema {
    owner: &'static str,
    names: Vec<AttributeName>,
}

impl AttributeSchema {
    /// Build the schema for `owner` from `names`.
    ///
    /// Names are canonicalised and duplicates collapse onto their first
    /// occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsl_object::AttributeSchema;
    ///
    /// let schema = AttributeSchema::new("Mom", ["fat", ":so_fat", "fat"]);
    /// let names: Vec<_> = schema.iter().map(|n| n.as_str()).collect();
    /// assert_eq!(names, ["fat", "so_fat"]);
    /// ```
    #[must_use]
    pub fn new<I>(owner: &'static str, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AttributeName>,
    {
        let mut schema = Self {
            owner,
            names: Vec::new(),
        };
        schema.declare(names);
        schema
    }

    /// Add `names` to this schema, skipping any already declared.
    pub fn declare<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: Into<AttributeName>,
    {
        for name in names {
            let name = name.into();
            if !self.names.contains(&name) {
                self.names.push(name);
            }
        }
    }

    /// Derive the schema of a subtype named `owner`.
    ///
    /// The result holds every inherited name followed by the new ones; `self`
    /// is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsl_object::AttributeSchema;
    ///
    /// let base = AttributeSchema::new("A", ["foo"]);
    /// let derived = base.extend("B", ["bar"]);
    /// assert!(derived.contains("foo") && derived.contains("bar"));
    /// assert!(!base.contains("bar"));
    /// ```
    #[must_use]
    pub fn extend<I>(&self, owner: &'static str, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AttributeName>,
    {
        let mut schema = Self {
            owner,
            names: self.names.clone(),
        };
        schema.declare(names);
        schema
    }

    /// Name of the type that owns this schema.
    #[must_use]
    pub const fn owner(&self) -> &'static str {
        self.owner
    }

    /// Whether `name`, in any spelling, has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|declared| declared == name)
    }

    /// Iterate over declared names in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeName> {
        self.names.iter()
    }

    /// Number of declared names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names have been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributeSchema {
    type Item = &'a AttributeName;
    type IntoIter = std::slice::Iter<'a, AttributeName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for schema accumulation and inheritance.

    use super::*;
    use rstest::{fixture, rstest};

    fn names(schema: &AttributeSchema) -> Vec<&str> {
        schema.iter().map(AttributeName::as_str).collect()
    }

    #[fixture]
    fn base() -> AttributeSchema {
        AttributeSchema::new("A", ["foo"])
    }

    #[rstest]
    fn declare_accumulates_across_calls() {
        let mut schema = AttributeSchema::new("Mom", ["college"]);
        schema.declare(["combat_boots"]);
        schema.declare(["fat", "so_fat"]);
        assert_eq!(names(&schema), ["college", "combat_boots", "fat", "so_fat"]);
    }

    #[rstest]
    #[case::repeated(vec!["fat", "fat"])]
    #[case::mixed_spelling(vec!["fat", ":fat", " fat "])]
    fn declare_is_idempotent(#[case] input: Vec<&str>) {
        let schema = AttributeSchema::new("Mom", input);
        assert_eq!(names(&schema), ["fat"]);
    }

    #[rstest]
    fn extend_leaves_parent_untouched(base: AttributeSchema) {
        let derived = base.extend("B", ["bar"]);
        assert_eq!(names(&base), ["foo"]);
        assert_eq!(names(&derived), ["foo", "bar"]);
        assert_eq!(derived.owner(), "B");
    }

    #[rstest]
    fn siblings_do_not_share_declarations(base: AttributeSchema) {
        let left = base.extend("Left", ["left"]);
        let right = base.extend("Right", ["right"]);
        assert!(!left.contains("right"));
        assert!(!right.contains("left"));
        assert_eq!(base.len(), 1);
    }

    #[rstest]
    fn redeclaring_inherited_name_does_not_duplicate(base: AttributeSchema) {
        let derived = base.extend("B", ["foo", "bar"]);
        assert_eq!(names(&derived), ["foo", "bar"]);
    }

    #[rstest]
    fn empty_schema_reports_empty() {
        let schema = AttributeSchema::new("Nothing", Vec::<&str>::new());
        assert!(schema.is_empty());
        assert_eq!(schema.owner(), "Nothing");
    }
}
