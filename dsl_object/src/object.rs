//! The [`DslObject`] trait: accessors, merging and block configuration.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{AttributeSchema, DslResult, DslResultExt, Settings, SettingsSource, helpers};

/// A settings object whose attribute names are declared once per type.
///
/// Implementations are normally produced by `#[derive(DslObject)]`, which
/// supplies the four required methods and one accessor pair per declared
/// key. Everything else is provided here and shared by all derived types.
///
/// Block configuration takes a closure over `&mut Self`: the closure captures
/// its surroundings as usual while every attribute call inside it is made on
/// the configured instance.
///
/// # Examples
///
/// ```rust
/// use dsl_object::{DslObject, Settings};
/// use serde_json::json;
///
/// #[derive(DslObject)]
/// #[dsl(keys(fat, so_fat))]
/// struct Mom {
///     settings: Settings,
/// }
///
/// let how = "very";
/// let mut momma = Mom::default();
/// momma
///     .configure(&Settings::from_json_str(r#"{"fat": false}"#)?)
///     .configure_with(|m| {
///         m.fat(true);
///         m.so_fat(how);
///     });
///
/// assert_eq!(momma.to_hash().into_value(), json!({"fat": true, "so_fat": "very"}));
/// # Ok::<_, std::sync::Arc<dsl_object::DslError>>(())
/// ```
pub trait DslObject: Sized {
    /// Attribute names declared by this type, including inherited ones.
    fn schema() -> &'static AttributeSchema;

    /// Build an instance holding `settings`. No validation is performed.
    fn from_settings(settings: Settings) -> Self;

    /// Borrow the live settings.
    fn settings(&self) -> &Settings;

    /// Mutably borrow the live settings.
    fn settings_mut(&mut self) -> &mut Settings;

    /// Set `key` to `value` unless the value is null, returning the current
    /// value.
    ///
    /// Passing [`Value::Null`] (or `None`, or `()`) reads without writing, so
    /// an existing value can never be cleared through this method; use
    /// [`Settings::remove`] for that. Keys outside [`DslObject::schema`] are
    /// accepted.
    fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<&Value> {
        let schema = Self::schema();
        if !schema.contains(key) {
            tracing::trace!(owner = schema.owner(), key, "undeclared attribute");
        }
        self.settings_mut().assign(key, value.into())
    }

    /// Current value of `key`, if any.
    fn get(&self, key: &str) -> Option<&Value> {
        self.settings().get(key)
    }

    /// Independent copy of the current settings.
    #[must_use]
    fn to_hash(&self) -> Settings {
        self.settings().clone()
    }

    /// Fill in every key of `source` that is not already set.
    fn reverse_merge<S>(&mut self, source: &S) -> &mut Self
    where
        S: SettingsSource + ?Sized,
    {
        let defaults = source.to_settings();
        tracing::debug!(
            owner = Self::schema().owner(),
            keys = defaults.len(),
            "merging defaults"
        );
        self.settings_mut().reverse_merge(defaults);
        self
    }

    /// Overlay `source` onto the current settings.
    ///
    /// Unlike [`DslObject::reverse_merge`], every key in `source` replaces the
    /// current value.
    fn configure<S>(&mut self, source: &S) -> &mut Self
    where
        S: SettingsSource + ?Sized,
    {
        let overrides = source.to_settings();
        tracing::debug!(
            owner = Self::schema().owner(),
            keys = overrides.len(),
            "applying configuration"
        );
        self.settings_mut().merge(overrides);
        self
    }

    /// Run `block` against this instance.
    fn configure_with<F>(&mut self, block: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        block(self);
        self
    }

    /// Overlay `source`, then run `block` against this instance.
    fn configure_from<S, F>(&mut self, source: &S, block: F) -> &mut Self
    where
        S: SettingsSource + ?Sized,
        F: FnOnce(&mut Self),
    {
        self.configure(source).configure_with(block)
    }

    /// Run a fallible `block` against this instance.
    ///
    /// # Errors
    ///
    /// Returns whatever error `block` returns, unchanged. Values set before
    /// the failure stay set.
    fn try_configure_with<F, E>(&mut self, block: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        block(self)?;
        Ok(self)
    }

    /// Overlay `source`, then run a fallible `block` against this instance.
    ///
    /// # Errors
    ///
    /// Returns whatever error `block` returns, unchanged.
    fn try_configure_from<S, F, E>(&mut self, source: &S, block: F) -> Result<&mut Self, E>
    where
        S: SettingsSource + ?Sized,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.configure(source).try_configure_with(block)
    }

    /// Deserialise the current settings into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DslError::Json`] when the settings do not fit `T`.
    fn extract<T: DeserializeOwned>(&self) -> DslResult<T> {
        serde_json::from_value(self.to_hash().into_value()).into_dsl()
    }

    /// See [`helpers::die`].
    fn die<I>(&self, messages: I, exit_code: i32) -> !
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        helpers::die(messages, exit_code)
    }

    /// See [`helpers::safely`].
    fn safely<T, E, F>(&self, f: F) -> Option<T>
    where
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        helpers::safely(f)
    }

    /// See [`helpers::dump`].
    #[track_caller]
    fn dump(&self, args: &[&dyn fmt::Debug]) {
        helpers::dump(args);
    }
}
