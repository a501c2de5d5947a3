//! Error types used by subjects and observers.
//!
//! This module defines two enums:
//!
//! - [`SubjectError`] — failures raised by a subject operation (construction,
//!   detach, href updates, broadcast).
//! - [`ObserverError`] — failures raised by an observer while handling an update.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging.

use thiserror::Error;

/// # Errors produced by subjects.
///
/// Every failure aborts the operation that triggered it. Operations that
/// validate input (such as [`LocationSubject::set_href`](crate::LocationSubject::set_href))
/// never leave partial state behind.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SubjectError {
    /// The base subject state was asked to be built for itself rather than
    /// for a concrete subject type.
    #[error("cannot instantiate {owner} directly; it must back a concrete subject")]
    AbstractInstantiation {
        /// Type name that was rejected.
        owner: &'static str,
    },

    /// A message write used a key issued for a different subject core.
    #[error("message key does not belong to {owner}")]
    ForeignKey {
        /// Type name of the subject whose message was targeted.
        owner: &'static str,
    },

    /// `detach` was given an observer that is not attached to the subject.
    #[error("observer {observer} is not attached to this subject")]
    NotAttached {
        /// Name of the observer that was not found.
        observer: &'static str,
    },

    /// The href names a transport (`scheme://`) that is not whitelisted.
    #[error("href {href:?} uses an unsupported transport")]
    InvalidTransport {
        /// The rejected href.
        href: String,
    },

    /// No explicit href is set and the environment does not provide one.
    #[error("no href was set and the environment provides none")]
    NoHrefAvailable,

    /// An observer failed while handling a broadcast; remaining observers were skipped.
    #[error("observer {observer} failed during broadcast: {source}")]
    Observer {
        /// Name of the failing observer.
        observer: &'static str,
        /// The error returned by the observer.
        #[source]
        source: ObserverError,
    },
}

impl SubjectError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use waypost::SubjectError;
    ///
    /// let err = SubjectError::InvalidTransport { href: "ftp://foo.bar".into() };
    /// assert_eq!(err.as_label(), "subject_invalid_transport");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SubjectError::AbstractInstantiation { .. } => "subject_abstract_instantiation",
            SubjectError::ForeignKey { .. } => "subject_foreign_key",
            SubjectError::NotAttached { .. } => "subject_not_attached",
            SubjectError::InvalidTransport { .. } => "subject_invalid_transport",
            SubjectError::NoHrefAvailable => "subject_no_href",
            SubjectError::Observer { .. } => "subject_observer_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SubjectError::AbstractInstantiation { owner } => {
                format!("abstract instantiation of {owner}")
            }
            SubjectError::ForeignKey { owner } => format!("foreign message key for {owner}"),
            SubjectError::NotAttached { observer } => format!("not attached: {observer}"),
            SubjectError::InvalidTransport { href } => format!("invalid transport: {href}"),
            SubjectError::NoHrefAvailable => "no href available".to_string(),
            SubjectError::Observer { observer, source } => {
                format!("observer {observer}: {}", source.as_message())
            }
        }
    }
}

/// # Errors produced by observers.
///
/// Returned from [`Observer::on_update`](crate::Observer::on_update). A subject
/// stops broadcasting at the first observer error and reports it wrapped in
/// [`SubjectError::Observer`].
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    /// The observer could not handle the message.
    #[error("update failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl ObserverError {
    /// Shorthand for [`ObserverError::Fail`].
    ///
    /// # Example
    /// ```
    /// use waypost::ObserverError;
    ///
    /// let err = ObserverError::fail("sink closed");
    /// assert_eq!(err.as_label(), "observer_failed");
    /// assert_eq!(err.to_string(), "update failed: sink closed");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        ObserverError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ObserverError::Fail { .. } => "observer_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ObserverError::Fail { error } => format!("error: {error}"),
        }
    }
}
