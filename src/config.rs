//! # Location subject configuration.
//!
//! Provides [`LocationConfig`], the settings a [`LocationSubject`](crate::LocationSubject)
//! is built from.
//!
//! ## Sentinel values
//! - `env_var = None` → no environment fallback; an empty href yields
//!   [`SubjectError::NoHrefAvailable`](crate::SubjectError::NoHrefAvailable)
//! - empty entries in `transports` are ignored (they would match every href)

use crate::location::{EnvLocation, LocationSource, NoLocation};

/// Transports accepted by default.
pub const DEFAULT_TRANSPORTS: [&str; 2] = ["http://", "https://"];

/// Environment variable read by [`EnvLocation::default`].
pub const DEFAULT_ENV_VAR: &str = "WAYPOST_HREF";

/// Configuration for a [`LocationSubject`](crate::LocationSubject).
///
/// ## Field semantics
/// - `transports`: whitelisted `scheme://` prefixes, matched case-insensitively
/// - `env_var`: variable consulted when no explicit href is set (`None` = no fallback)
///
/// The transport list is copied into the subject at construction and cannot
/// change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationConfig {
    /// Accepted transport prefixes, including the trailing `://`.
    pub transports: Vec<String>,

    /// Environment variable holding the fallback href.
    pub env_var: Option<String>,
}

impl LocationConfig {
    /// Adds a transport prefix to the whitelist.
    #[must_use]
    pub fn with_transport(mut self, prefix: impl Into<String>) -> Self {
        self.transports.push(prefix.into());
        self
    }

    /// Sets the environment variable used as href fallback.
    #[must_use]
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = Some(name.into());
        self
    }

    /// Returns the whitelist with empty entries removed and duplicates
    /// (compared case-insensitively) collapsed, keeping first occurrences.
    ///
    /// # Example
    /// ```
    /// use waypost::LocationConfig;
    ///
    /// let cfg = LocationConfig::default().with_transport("HTTP://").with_transport("");
    /// assert_eq!(cfg.valid_transports(), vec!["http://", "https://"]);
    /// ```
    pub fn valid_transports(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.transports.len());
        for prefix in &self.transports {
            if prefix.is_empty() || out.iter().any(|p| p.eq_ignore_ascii_case(prefix)) {
                continue;
            }
            out.push(prefix.clone());
        }
        out
    }

    /// Builds the fallback source described by `env_var`.
    pub fn env_source(&self) -> Box<dyn LocationSource> {
        match &self.env_var {
            Some(name) => Box::new(EnvLocation::new(name.clone())),
            None => Box::new(NoLocation),
        }
    }
}

impl Default for LocationConfig {
    /// Default configuration:
    ///
    /// - `transports = ["http://", "https://"]`
    /// - `env_var = None` (no fallback)
    fn default() -> Self {
        Self {
            transports: DEFAULT_TRANSPORTS.iter().map(|p| (*p).to_string()).collect(),
            env_var: None,
        }
    }
}
