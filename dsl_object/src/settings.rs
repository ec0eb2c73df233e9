//! The open settings map held by every DSL object.
//!
//! Values are arbitrary JSON so scalars, sequences and nested mappings can all
//! be stored without a schema. Keys are canonicalised on every access; keys that
//! no schema declares are still accepted.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{DslError, DslResult, DslResultExt, canonical};

/// Key/value store behind a DSL object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Parse a JSON object into settings.
    ///
    /// # Errors
    ///
    /// Returns [`DslError::Json`] for malformed input and
    /// [`DslError::NotAMapping`] when the document is not an object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsl_object::Settings;
    ///
    /// let settings = Settings::from_json_str(r#"{"fat": true}"#)?;
    /// assert_eq!(settings.len(), 1);
    /// # Ok::<_, std::sync::Arc<dsl_object::DslError>>(())
    /// ```
    pub fn from_json_str(input: &str) -> DslResult<Self> {
        let value: Value = serde_json::from_str(input).into_dsl()?;
        Self::try_from(value).into_dsl()
    }

    /// Parse a TOML document into settings.
    ///
    /// # Errors
    ///
    /// Returns [`DslError::Toml`] when the document cannot be parsed.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> DslResult<Self> {
        let values: Map<String, Value> = toml::from_str(input).into_dsl()?;
        Ok(Self::from(values))
    }

    /// Current value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(canonical(key))
    }

    /// Whether `key` holds a value, including an explicit null stored via
    /// [`Settings::insert`].
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(canonical(key))
    }

    /// Write `value` at `key` unless it is null, then return the current value.
    ///
    /// A null `value` leaves any existing entry alone, so calling this with
    /// null is a read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsl_object::Settings;
    /// use serde_json::{Value, json};
    ///
    /// let mut settings = Settings::new();
    /// assert_eq!(settings.assign("fat", json!(true)), Some(&json!(true)));
    /// assert_eq!(settings.assign("fat", Value::Null), Some(&json!(true)));
    /// ```
    pub fn assign(&mut self, key: &str, value: Value) -> Option<&Value> {
        let key = canonical(key);
        if value.is_null() {
            return self.values.get(key);
        }
        self.values.insert(key.to_owned(), value);
        self.values.get(key)
    }

    /// Store `value` at `key` unconditionally, returning the previous value.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(canonical(key).to_owned(), value.into())
    }

    /// Remove `key`, returning the value it held.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(canonical(key))
    }

    /// Overlay `other`: every key it holds replaces the current value.
    pub fn merge(&mut self, other: Self) {
        for (key, value) in other.values {
            self.values.insert(key, value);
        }
    }

    /// Fill in keys from `other` that are not yet present.
    ///
    /// Existing entries always win, whatever `other` holds for them.
    pub fn reverse_merge(&mut self, other: Self) {
        for (key, value) in other.values {
            self.values.entry(key).or_insert(value);
        }
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over entries.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.values.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the underlying JSON map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Consume the settings, returning the JSON map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }

    /// Consume the settings, returning a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(values: Map<String, Value>) -> Self {
        if values.keys().all(|key| canonical(key).len() == key.len()) {
            return Self { values };
        }
        Self {
            values: values
                .into_iter()
                .map(|(key, value)| (canonical(&key).to_owned(), value))
                .collect(),
        }
    }
}

impl From<Settings> for Map<String, Value> {
    fn from(settings: Settings) -> Self {
        settings.values
    }
}

impl TryFrom<Value> for Settings {
    type Error = DslError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(DslError::not_a_mapping(&other)),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: AsRef<str>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = Self::new();
        for (key, value) in iter {
            settings.insert(key.as_ref(), value);
        }
        settings
    }
}

impl<'a> IntoIterator for &'a Settings {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `Map` serialisation cannot fail: keys are strings and values are JSON.
        let rendered = serde_json::to_string(&self.values).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Anything that can expose its contents as a settings mapping.
///
/// Used by [`crate::DslObject::configure`] and
/// [`crate::DslObject::reverse_merge`] so plain maps and other DSL objects can
/// be merged alike. `#[derive(DslObject)]` implements it for every derived
/// type.
pub trait SettingsSource {
    /// Copy of this source's contents as [`Settings`].
    fn to_settings(&self) -> Settings;
}

impl SettingsSource for Settings {
    fn to_settings(&self) -> Settings {
        self.clone()
    }
}

impl SettingsSource for Map<String, Value> {
    fn to_settings(&self) -> Settings {
        Settings::from(self.clone())
    }
}

impl<S: BuildHasher> SettingsSource for HashMap<String, Value, S> {
    fn to_settings(&self) -> Settings {
        self.iter().map(|(k, v)| (k, v.clone())).collect()
    }
}

impl SettingsSource for BTreeMap<String, Value> {
    fn to_settings(&self) -> Settings {
        self.iter().map(|(k, v)| (k, v.clone())).collect()
    }
}
