//! # LocationSubject: broadcasts the last segment of an href
//!
//! The subject keeps an explicit href (possibly empty) and derives its message
//! from it on every [`set_href`](LocationSubject::set_href).
//!
//! ## State
//! ```text
//!   href = ""          ──► effective href comes from the LocationSource
//!   href = "foo/bar"   ──► effective href is "foo/bar", message "bar"
//!
//!   set_href(x):
//!     x has "://" with unknown transport ──► InvalidTransport (state untouched)
//!     x == "" and source has nothing     ──► NoHrefAvailable  (state untouched)
//!     otherwise                          ──► href = x, message = last_part(effective)
//! ```
//!
//! ## Example
//! ```
//! use waypost::{LocationSubject, Subject, SubjectError};
//!
//! # fn main() -> Result<(), SubjectError> {
//! let mut subject = LocationSubject::new();
//! subject.set_href("http://foo/bar/baz/")?;
//! assert_eq!(subject.message(), Some("baz"));
//!
//! let err = subject.set_href("ftp://foo.bar").unwrap_err();
//! assert_eq!(err.as_label(), "subject_invalid_transport");
//! assert_eq!(subject.href()?, "http://foo/bar/baz/");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::fmt;

use tracing::{debug, warn};

use crate::config::LocationConfig;
use crate::error::SubjectError;
use crate::location::href;
use crate::location::LocationSource;

use super::{Attachments, MessageKey, Subject, SubjectCore};

/// Subject whose message is the last path segment of its href.
pub struct LocationSubject {
    core: SubjectCore,
    key: MessageKey,
    href: String,
    transports: Box<[String]>,
    source: Box<dyn LocationSource>,
}

impl LocationSubject {
    /// Subject with the default [`LocationConfig`].
    pub fn new() -> Self {
        Self::with_config(LocationConfig::default())
    }

    /// Subject built from `config`.
    pub fn with_config(config: LocationConfig) -> Self {
        let (core, key) = SubjectCore::owned_by(std::any::type_name::<Self>());
        Self {
            core,
            key,
            href: String::new(),
            transports: config.valid_transports().into_boxed_slice(),
            source: config.env_source(),
        }
    }

    /// Replaces the fallback location source.
    #[must_use]
    pub fn with_source(mut self, source: impl LocationSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Whitelisted transport prefixes.
    pub fn transports(&self) -> &[String] {
        &self.transports
    }

    /// True if `href` starts with a whitelisted transport (ASCII case-insensitive).
    pub fn has_transport(&self, href: &str) -> bool {
        href::has_transport(href, &self.transports)
    }

    /// True if `href` has no `://`, or starts with a whitelisted transport.
    pub fn is_valid_href(&self, href: &str) -> bool {
        href::is_valid_href(href, &self.transports)
    }

    /// Validates and stores `href`, then recomputes the message.
    ///
    /// On error nothing changes.
    pub fn set_href(&mut self, href: impl Into<String>) -> Result<(), SubjectError> {
        let href = href.into();
        if !self.is_valid_href(&href) {
            warn!(subject = self.core.owner(), %href, "href rejected: unsupported transport");
            return Err(SubjectError::InvalidTransport { href });
        }

        let message = {
            let effective = self.resolve(&href)?;
            href::last_part(&effective, &self.transports).to_owned()
        };
        debug!(subject = self.core.owner(), %href, %message, "href updated");

        self.core.set_message(&self.key, message)?;
        self.href = href;
        Ok(())
    }

    /// [`set_href`](Self::set_href) followed by [`broadcast`](Subject::broadcast).
    pub fn set_href_and_notify(&mut self, href: impl Into<String>) -> Result<(), SubjectError> {
        self.set_href(href)?;
        self.broadcast()
    }

    /// Explicit href if set, otherwise the one provided by the location source.
    pub fn href(&self) -> Result<Cow<'_, str>, SubjectError> {
        self.resolve(&self.href)
    }

    /// Last path segment of the effective href.
    pub fn last_part(&self) -> Result<String, SubjectError> {
        let effective = self.href()?;
        Ok(href::last_part(&effective, &self.transports).to_owned())
    }

    fn resolve<'a>(&self, explicit: &'a str) -> Result<Cow<'a, str>, SubjectError> {
        if !explicit.is_empty() {
            return Ok(Cow::Borrowed(explicit));
        }
        self.source
            .current_href()
            .filter(|h| !h.is_empty())
            .map(Cow::Owned)
            .ok_or(SubjectError::NoHrefAvailable)
    }
}

impl Default for LocationSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject for LocationSubject {
    fn core(&self) -> &SubjectCore {
        &self.core
    }

    fn attachments(&mut self) -> Attachments<'_> {
        self.core.attachments()
    }
}

impl fmt::Debug for LocationSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationSubject")
            .field("core", &self.core)
            .field("href", &self.href)
            .field("transports", &self.transports)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::ObserverError;
    use crate::location::StaticLocation;
    use crate::observers::Observer;

    fn part_of(href: &str) -> String {
        let mut s = LocationSubject::new();
        s.set_href(href).unwrap();
        s.last_part().unwrap()
    }

    #[derive(Default)]
    struct Sink(Mutex<Vec<Option<String>>>);

    impl Observer for Sink {
        fn on_update(&self, message: Option<&str>) -> Result<(), ObserverError> {
            self.0.lock().unwrap().push(message.map(str::to_owned));
            Ok(())
        }
    }

    #[test]
    fn test_get_href_returns_set_value() {
        let mut s = LocationSubject::new();
        s.set_href("foo").unwrap();
        assert_eq!(s.href().unwrap(), "foo");
    }

    #[test]
    fn test_last_part_literals() {
        assert_eq!(part_of("foo/bar"), "bar");
        assert_eq!(part_of("foo/baz/bar"), "bar");
        assert_eq!(part_of("foo//bar"), "bar");
        assert_eq!(part_of("http://localhost"), "http://localhost");
        assert_eq!(part_of("http://localhost/"), "http://localhost");
        assert_eq!(
            part_of("http://foo/bar/baz/foobar/foobaz/foobarbaz"),
            "foobarbaz"
        );
    }

    #[test]
    fn test_message_follows_set_href() {
        let mut s = LocationSubject::new();
        assert_eq!(s.message(), None);
        s.set_href("foo").unwrap();
        assert_eq!(s.message(), Some("foo"));
        s.set_href("a/b/c/").unwrap();
        assert_eq!(s.message(), Some("c"));
        assert_eq!(s.message().map(str::to_owned), Some(s.last_part().unwrap()));
    }

    #[test]
    fn test_invalid_transport_keeps_state() {
        let mut s = LocationSubject::new();
        s.set_href("http://foo/bar").unwrap();

        let err = s.set_href("ftp://foo.bar").unwrap_err();
        assert!(matches!(err, SubjectError::InvalidTransport { ref href } if href == "ftp://foo.bar"));
        assert_eq!(s.href().unwrap(), "http://foo/bar");
        assert_eq!(s.message(), Some("bar"));
    }

    #[test]
    fn test_invalid_transport_on_fresh_subject() {
        let mut s = LocationSubject::new();
        assert!(s.set_href("ftp://foo.bar").is_err());
        assert_eq!(s.message(), None);
        assert!(matches!(s.href(), Err(SubjectError::NoHrefAvailable)));
    }

    #[test]
    fn test_has_transport() {
        let s = LocationSubject::new();
        assert!(s.has_transport("HTTP://"));
        assert!(!s.has_transport("://"));
        assert!(!s.has_transport("foo"));
    }

    #[test]
    fn test_uppercase_transport_is_accepted() {
        let mut s = LocationSubject::new();
        s.set_href("HTTPS://Example.org/Docs").unwrap();
        assert_eq!(s.message(), Some("Docs"));
    }

    #[test]
    fn test_no_href_without_source() {
        let s = LocationSubject::new();
        assert!(matches!(s.href(), Err(SubjectError::NoHrefAvailable)));
        assert!(matches!(s.last_part(), Err(SubjectError::NoHrefAvailable)));
    }

    #[test]
    fn test_href_falls_back_to_source() {
        let s = LocationSubject::new().with_source(StaticLocation::new("http://host/app/page"));
        assert_eq!(s.href().unwrap(), "http://host/app/page");
        assert_eq!(s.last_part().unwrap(), "page");
    }

    #[test]
    fn test_explicit_href_wins_over_source() {
        let mut s = LocationSubject::new().with_source(StaticLocation::new("http://host/env"));
        s.set_href("local/path").unwrap();
        assert_eq!(s.href().unwrap(), "local/path");
    }

    #[test]
    fn test_empty_href_reverts_to_source() {
        let mut s = LocationSubject::new().with_source(StaticLocation::new("http://host/env"));
        s.set_href("local/path").unwrap();
        s.set_href("").unwrap();
        assert_eq!(s.href().unwrap(), "http://host/env");
        assert_eq!(s.message(), Some("env"));
    }

    #[test]
    fn test_empty_href_without_source_keeps_state() {
        let mut s = LocationSubject::new();
        s.set_href("a/b").unwrap();
        let err = s.set_href("").unwrap_err();
        assert!(matches!(err, SubjectError::NoHrefAvailable));
        assert_eq!(s.href().unwrap(), "a/b");
        assert_eq!(s.message(), Some("b"));
    }

    #[test]
    fn test_href_falls_back_to_env_var() {
        let var = "WAYPOST_TEST_LOCATION_SUBJECT_FALLBACK";
        std::env::set_var(var, "http://host/app/from-env/");
        let mut s = LocationSubject::with_config(LocationConfig::default().with_env_var(var));

        assert_eq!(s.href().unwrap(), "http://host/app/from-env/");
        assert_eq!(s.last_part().unwrap(), "from-env");

        s.set_href("").unwrap();
        assert_eq!(s.message(), Some("from-env"));
        std::env::remove_var(var);
    }

    #[test]
    fn test_custom_transport_whitelist() {
        let cfg = LocationConfig::default().with_transport("ws://");
        let mut s = LocationSubject::with_config(cfg);
        s.set_href("ws://socket").unwrap();
        assert_eq!(s.message(), Some("ws://socket"));
        assert_eq!(s.transports().len(), 3);
    }

    #[test]
    fn test_set_href_and_notify() {
        let sink = Arc::new(Sink::default());
        let mut s = LocationSubject::new();
        s.attach(sink.clone());

        s.set_href_and_notify("foo/bar").unwrap();
        assert!(s.set_href_and_notify("ftp://nope").is_err());
        s.set_href_and_notify("http://localhost/").unwrap();

        assert_eq!(
            *sink.0.lock().unwrap(),
            vec![Some("bar".to_string()), Some("http://localhost".to_string())]
        );
    }
}
