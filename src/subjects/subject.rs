//! # Core subject trait
//!
//! `Subject` is the broadcaster contract. Implementors embed a
//! [`SubjectCore`] and expose it through [`core`](Subject::core) (read-only)
//! and [`attachments`](Subject::attachments) (observer list only); every other
//! method is provided.
//!
//! ## Contract
//! - Observers are kept in attach order; duplicates are allowed and receive
//!   one update per attachment.
//! - A subject shares ownership of its observers: an attached [`ObserverRef`]
//!   stays alive at least until it is detached or the subject is dropped.
//! - `detach` removes the first matching attachment only.
//! - `broadcast` is synchronous and **fail-fast**: the first observer error
//!   stops delivery to the remaining observers.
//! - The message can only be written by the subject implementation, which
//!   holds the [`MessageKey`](super::MessageKey) issued with its core.
//!
//! Code holding a subject cannot reach its core mutably:
//! ```compile_fail
//! use waypost::{LocationSubject, Subject, SubjectCore};
//!
//! let mut subject = LocationSubject::new();
//! let (_, key) = SubjectCore::for_owner::<u8>().unwrap();
//! subject.core().set_message(&key, "hijacked").unwrap();
//! ```

use crate::error::SubjectError;
use crate::observers::{Observer, ObserverRef};

use super::{Attachments, SubjectCore};

/// Contract for message broadcasters.
pub trait Subject {
    /// Shared subject state.
    fn core(&self) -> &SubjectCore;

    /// Handle to the observer list; see [`SubjectCore::attachments`].
    fn attachments(&mut self) -> Attachments<'_>;

    /// Number of attached observers.
    fn observer_count(&self) -> usize {
        self.core().len()
    }

    /// Appends `observer`; no duplicate check. The subject keeps a strong
    /// reference until the observer is detached.
    fn attach(&mut self, observer: ObserverRef) {
        self.attachments().attach(observer);
    }

    /// Removes the first attachment of `observer`.
    ///
    /// Fails with [`SubjectError::NotAttached`] if it is not attached.
    fn detach(&mut self, observer: &dyn Observer) -> Result<(), SubjectError> {
        self.attachments().detach(observer)
    }

    /// Delivers the current message to every observer, in attach order.
    fn broadcast(&self) -> Result<(), SubjectError> {
        self.core().broadcast()
    }

    /// Current message; `None` until first set.
    fn message(&self) -> Option<&str> {
        self.core().message()
    }
}
