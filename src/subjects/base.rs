//! # SubjectCore: observer list plus the current message
//!
//! [`SubjectCore`] is the state behind every [`Subject`](super::Subject). It cannot
//! stand on its own: it is built *for* a concrete subject type through
//! [`SubjectCore::for_owner`], which also hands out the [`MessageKey`] that
//! authorizes message writes. A key only opens the core it was issued with.
//!
//! Callers outside the subject reach the observer list through
//! [`Attachments`], which can attach and detach but never touches the message.
//!
//! ## Diagram
//! ```text
//!    broadcast()
//!        │                    (same &str for every observer)
//!        ├──► observer[0].update(message) ── Ok
//!        ├──► observer[1].update(message) ── Err ──► return SubjectError::Observer
//!        └──► observer[2]                     (skipped)
//! ```

use std::any::{type_name, TypeId};
use std::fmt;
use std::ptr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::error::SubjectError;
use crate::observers::{Observer, ObserverRef};

use super::Subject;

static NEXT_CORE_ID: AtomicU64 = AtomicU64::new(1);

/// Capability to write a subject's message.
///
/// Only returned by [`SubjectCore::for_owner`] and bound to the core returned
/// alongside it; not `Clone`.
#[derive(Debug)]
pub struct MessageKey {
    core: u64,
}

/// Ordered observer list and current message of a subject.
pub struct SubjectCore {
    id: u64,
    owner: &'static str,
    observers: Vec<ObserverRef>,
    message: Option<String>,
}

impl SubjectCore {
    /// Builds the core for subject type `T`.
    ///
    /// Fails with [`SubjectError::AbstractInstantiation`] when `T` is the base
    /// itself (`SubjectCore` or `dyn Subject`).
    ///
    /// # Example
    /// ```
    /// use waypost::{Attachments, MessageKey, Subject, SubjectCore, SubjectError};
    ///
    /// struct Ticker {
    ///     core: SubjectCore,
    ///     key: MessageKey,
    /// }
    ///
    /// impl Subject for Ticker {
    ///     fn core(&self) -> &SubjectCore { &self.core }
    ///     fn attachments(&mut self) -> Attachments<'_> { self.core.attachments() }
    /// }
    ///
    /// # fn main() -> Result<(), SubjectError> {
    /// let (core, key) = SubjectCore::for_owner::<Ticker>()?;
    /// let mut ticker = Ticker { core, key };
    /// ticker.core.set_message(&ticker.key, "tick")?;
    /// assert_eq!(ticker.message(), Some("tick"));
    ///
    /// assert!(matches!(
    ///     SubjectCore::for_owner::<SubjectCore>(),
    ///     Err(SubjectError::AbstractInstantiation { .. })
    /// ));
    /// # Ok(())
    /// # }
    /// ```
    pub fn for_owner<T>() -> Result<(Self, MessageKey), SubjectError>
    where
        T: ?Sized + 'static,
    {
        let id = TypeId::of::<T>();
        if id == TypeId::of::<SubjectCore>() || id == TypeId::of::<dyn Subject>() {
            return Err(SubjectError::AbstractInstantiation {
                owner: type_name::<T>(),
            });
        }
        Ok(Self::owned_by(type_name::<T>()))
    }

    /// Infallible path for subject types defined in this crate.
    pub(crate) fn owned_by(owner: &'static str) -> (Self, MessageKey) {
        let id = NEXT_CORE_ID.fetch_add(1, Ordering::Relaxed);
        let core = Self {
            id,
            owner,
            observers: Vec::new(),
            message: None,
        };
        (core, MessageKey { core: id })
    }

    /// Type name of the owning subject.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Number of attached observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True if no observer is attached.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Appends `observer` to the list.
    pub fn attach(&mut self, observer: ObserverRef) {
        debug!(
            subject = self.owner,
            observer = observer.name(),
            count = self.observers.len() + 1,
            "observer attached"
        );
        self.observers.push(observer);
    }

    /// Removes the first attachment of `observer` (matched by address).
    pub fn detach(&mut self, observer: &dyn Observer) -> Result<(), SubjectError> {
        let Some(idx) = self
            .observers
            .iter()
            .position(|o| ptr::addr_eq(Arc::as_ptr(o), observer))
        else {
            return Err(SubjectError::NotAttached {
                observer: observer.name(),
            });
        };

        self.observers.remove(idx);
        debug!(
            subject = self.owner,
            observer = observer.name(),
            count = self.observers.len(),
            "observer detached"
        );
        Ok(())
    }

    /// Calls [`Observer::update`] on every observer in attach order and
    /// stops at the first error.
    pub fn broadcast(&self) -> Result<(), SubjectError> {
        let message = self.message.as_deref();
        for observer in &self.observers {
            if let Err(source) = observer.update(message) {
                warn!(
                    subject = self.owner,
                    observer = observer.name(),
                    error = %source,
                    "broadcast aborted"
                );
                return Err(SubjectError::Observer {
                    observer: observer.name(),
                    source,
                });
            }
            trace!(subject = self.owner, observer = observer.name(), ?message, "delivered");
        }
        Ok(())
    }

    /// Current message; `None` until first set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Overwrites the message.
    ///
    /// Fails with [`SubjectError::ForeignKey`] if `key` was issued for another core.
    pub fn set_message(
        &mut self,
        key: &MessageKey,
        message: impl Into<String>,
    ) -> Result<(), SubjectError> {
        if key.core != self.id {
            warn!(subject = self.owner, "message write with a foreign key");
            return Err(SubjectError::ForeignKey { owner: self.owner });
        }
        self.message = Some(message.into());
        Ok(())
    }

    /// Attach/detach handle over this core's observer list.
    pub fn attachments(&mut self) -> Attachments<'_> {
        Attachments { core: self }
    }
}

/// Handle to a subject's observer list.
///
/// Handed out by [`Subject::attachments`]; it can change which observers are
/// attached but cannot read or write the message, nor replace the core.
pub struct Attachments<'a> {
    core: &'a mut SubjectCore,
}

impl Attachments<'_> {
    /// Appends `observer` to the list.
    pub fn attach(&mut self, observer: ObserverRef) {
        self.core.attach(observer);
    }

    /// Removes the first attachment of `observer`.
    pub fn detach(&mut self, observer: &dyn Observer) -> Result<(), SubjectError> {
        self.core.detach(observer)
    }

    /// Number of attached observers.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// True if no observer is attached.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }
}

impl fmt::Debug for SubjectCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubjectCore")
            .field("owner", &self.owner)
            .field("observers", &self.observers.len())
            .field("message", &self.message)
            .finish()
    }
}
