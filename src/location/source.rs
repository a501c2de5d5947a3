//! # Ambient location providers.
//!
//! A [`LocationSource`] answers "where are we now?" when a subject has no
//! explicit href. Provided implementations:
//! - [`NoLocation`] → never provides a value
//! - [`StaticLocation`] → a fixed href
//! - [`EnvLocation`] → reads a process environment variable
//!
//! Closures `Fn() -> Option<String>` implement the trait as well.

use std::fmt;

use crate::config::DEFAULT_ENV_VAR;

/// Provider of the current navigation location.
pub trait LocationSource: Send + Sync {
    /// Returns the current href, or `None` if there is none.
    ///
    /// An empty string is treated by callers the same as `None`.
    fn current_href(&self) -> Option<String>;
}

impl<F> LocationSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn current_href(&self) -> Option<String> {
        self()
    }
}

/// Source with no location.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLocation;

impl LocationSource for NoLocation {
    fn current_href(&self) -> Option<String> {
        None
    }
}

/// Source returning a fixed href.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticLocation(pub String);

impl StaticLocation {
    /// Construct a new [`StaticLocation`].
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }
}

impl LocationSource for StaticLocation {
    fn current_href(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

/// Source reading the href from an environment variable on every call.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvLocation {
    var: String,
}

impl EnvLocation {
    /// Reads `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable being read.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvLocation {
    /// Reads [`DEFAULT_ENV_VAR`].
    fn default() -> Self {
        Self::new(DEFAULT_ENV_VAR)
    }
}

impl fmt::Debug for EnvLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnvLocation").field(&self.var).finish()
    }
}

impl LocationSource for EnvLocation {
    fn current_href(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_location() {
        assert_eq!(
            StaticLocation::new("http://host/a").current_href().as_deref(),
            Some("http://host/a")
        );
        assert_eq!(StaticLocation::default().current_href(), None);
    }

    #[test]
    fn test_closure_source() {
        let src = || Some("foo".to_string());
        assert_eq!(src.current_href().as_deref(), Some("foo"));
    }

    #[test]
    fn test_env_location_reads_set_var() {
        let var = "WAYPOST_TEST_ENV_LOCATION_SET";
        std::env::set_var(var, "https://site/docs/page");
        assert_eq!(
            EnvLocation::new(var).current_href().as_deref(),
            Some("https://site/docs/page")
        );

        std::env::set_var(var, "");
        assert_eq!(EnvLocation::new(var).current_href(), None);
        std::env::remove_var(var);
    }

    #[test]
    fn test_env_location_defaults() {
        assert_eq!(EnvLocation::default().var(), DEFAULT_ENV_VAR);
        assert_eq!(
            EnvLocation::new("WAYPOST_TEST_SURELY_UNSET_VAR").current_href(),
            None
        );
    }
}
