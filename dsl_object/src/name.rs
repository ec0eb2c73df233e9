//! Canonical attribute names.

use std::borrow::Borrow;
use std::fmt;

/// Reduce an attribute name to its canonical spelling.
///
/// Surrounding whitespace and a single leading `:` are removed, so the plain
/// and symbol spellings of a name address the same key.
///
/// # Examples
///
/// ```rust
/// use dsl_object::canonical;
///
/// assert_eq!(canonical("fat"), "fat");
/// assert_eq!(canonical(":fat"), "fat");
/// assert_eq!(canonical("  so_fat "), "so_fat");
/// ```
#[must_use]
pub fn canonical(name: &str) -> &str {
    let trimmed = name.trim();
    trimmed.strip_prefix(':').unwrap_or(trimmed).trim_start()
}

/// Owned attribute name in canonical form.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AttributeName(String);

impl AttributeName {
    /// Canonicalise `name` and take ownership of it.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(canonical(name.as_ref()).to_owned())
    }

    /// Borrow the canonical name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for AttributeName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AttributeName {
    fn from(value: String) -> Self {
        if canonical(&value).len() == value.len() {
            Self(value)
        } else {
            Self::new(value)
        }
    }
}

impl From<&String> for AttributeName {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AttributeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AttributeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == canonical(other)
    }
}

impl PartialEq<&str> for AttributeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == canonical(other)
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
