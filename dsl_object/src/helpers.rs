//! Script-level conveniences exposed alongside DSL objects.
//!
//! None of these touch settings. They let configuration code bail out with a
//! message, downgrade a failure to a warning, or log intermediate values, and
//! they are re-exported as pass-through methods on [`crate::DslObject`].

use std::fmt;
use std::panic::Location;

/// Exit status used by [`die`] when the caller has no better one.
///
/// Matches a `-1` exit status as reported by POSIX shells.
pub const DEFAULT_EXIT_CODE: i32 = 255;

/// Log each message at `error` level and terminate the process.
///
/// # Examples
///
/// ```rust,no_run
/// dsl_object::die(["cluster name is required"], dsl_object::DEFAULT_EXIT_CODE);
/// ```
pub fn die<I>(messages: I, exit_code: i32) -> !
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for message in messages {
        tracing::error!(exit_code, "{message}");
    }
    std::process::exit(exit_code)
}

/// Run `f`, turning an error into a logged warning.
///
/// Returns the closure's value on success and `None` when it failed. Panics
/// are not caught.
///
/// # Examples
///
/// ```rust
/// let parsed = dsl_object::safely(|| "42".parse::<u32>());
/// assert_eq!(parsed, Some(42));
///
/// let failed = dsl_object::safely(|| "forty-two".parse::<u32>());
/// assert_eq!(failed, None);
/// ```
pub fn safely<T, E, F>(f: F) -> Option<T>
where
    E: fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    match f() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "suppressed error");
            None
        }
    }
}

/// Log each argument at `debug` level, tagged with the caller's location.
#[track_caller]
pub fn dump(args: &[&dyn fmt::Debug]) {
    let caller = Location::caller();
    for arg in args {
        tracing::debug!(%caller, "{arg:?}");
    }
}
