//! # Observer: the listener half of the pattern
//!
//! The [`Observer`] trait is the main **extension point** for end users.
//! Every [`Subject::broadcast`](crate::Subject::broadcast) delivers the subject's
//! current message to each attached observer through [`Observer::update`].
//!
//! # High-level architecture:
//! ```text
//! Message flow:
//!   Subject::broadcast() ──► for each attached observer (attach order)
//!                                └─► Observer::update(message)
//!                                        └─► Observer::on_update(message)
//!
//! User-defined observers:
//!   - implement [`Observer`] and override `on_update`
//!   - can be attached to any number of subjects at once
//!   - are shared through [`ObserverRef`] (`Arc<dyn Observer>`)
//! ```
//!
//! Only types implementing [`Observer`] can be attached:
//! ```compile_fail
//! use std::sync::Arc;
//! use waypost::{LocationSubject, Subject};
//!
//! struct NotAnObserver;
//!
//! let mut subject = LocationSubject::new();
//! subject.attach(Arc::new(NotAnObserver));
//! ```
//!
//! # Example: custom observer
//! ```
//! use std::sync::{Arc, Mutex};
//! use waypost::{LocationSubject, Observer, ObserverError, Subject};
//!
//! #[derive(Default)]
//! struct LastSeen(Mutex<Option<String>>);
//!
//! impl Observer for LastSeen {
//!     fn on_update(&self, message: Option<&str>) -> Result<(), ObserverError> {
//!         let mut slot = self.0.lock().map_err(|_| ObserverError::fail("poisoned"))?;
//!         *slot = message.map(str::to_owned);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), waypost::SubjectError> {
//! let seen = Arc::new(LastSeen::default());
//! let mut subject = LocationSubject::new();
//! Arc::clone(&seen).observe(&mut subject);
//!
//! subject.set_href("docs/guide")?;
//! subject.broadcast()?;
//! assert_eq!(seen.0.lock().unwrap().as_deref(), Some("guide"));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::error::{ObserverError, SubjectError};
use crate::subjects::Subject;

/// Shared handle to an observer, as stored by subjects.
///
/// Subjects share ownership: an attached observer is kept alive until it is
/// detached or the subject is dropped.
pub type ObserverRef = Arc<dyn Observer>;

/// # Trait for receiving subject messages.
///
/// Implementors override [`on_update`](Observer::on_update); the default does
/// nothing. Subjects call [`update`](Observer::update), which delegates to it.
pub trait Observer: Send + Sync + 'static {
    /// Entry point invoked by a subject during broadcast.
    fn update(&self, message: Option<&str>) -> Result<(), ObserverError> {
        self.on_update(message)
    }

    /// Reaction to a broadcast message. `None` means the subject has no
    /// message yet.
    fn on_update(&self, message: Option<&str>) -> Result<(), ObserverError> {
        let _ = message;
        Ok(())
    }

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Attaches this observer to `subject`.
    fn observe<S>(self: Arc<Self>, subject: &mut S)
    where
        Self: Sized,
        S: Subject + ?Sized,
    {
        subject.attach(self);
    }

    /// Detaches this observer from `subject`.
    fn forget<S>(&self, subject: &mut S) -> Result<(), SubjectError>
    where
        Self: Sized,
        S: Subject + ?Sized,
    {
        subject.detach(self)
    }
}
