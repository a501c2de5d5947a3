//! # waypost
//!
//! **Waypost** is a minimal observer toolkit for Rust.
//!
//! A *subject* keeps an ordered list of observers and one current message, and
//! broadcasts that message on demand. The bundled [`LocationSubject`] derives its
//! message from an href: it validates the transport (`http://`, `https://`) and
//! keeps the final path segment.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!        caller
//!          │ set_href("http://host/docs/guide/")
//!          ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  LocationSubject                                         │
//! │  - href validation (transport whitelist)                 │
//! │  - last_part() ──► "guide"                               │
//! │  - LocationSource fallback when href is empty            │
//! │            │ set_message(&MessageKey, "guide")           │
//! │            ▼                                             │
//! │  SubjectCore { observers: [o1, o2, o1], message }        │
//! └────────────┬─────────────────────────────────────────────┘
//!              │ broadcast()  (in order, fail-fast)
//!      ┌───────┼───────────┬──────────────┐
//!      ▼       ▼           ▼              ▼
//!   o1.update  o2.update   o1.update    (stop at first Err)
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                      |
//! |-------------------|----------------------------------------------------------|-----------------------------------------|
//! | **Observer API**  | React to broadcast messages.                             | [`Observer`], [`ObserverRef`]           |
//! | **Subjects**      | Hold observers and a message; build your own subjects.   | [`Subject`], [`SubjectCore`], [`MessageKey`], [`Attachments`] |
//! | **Location**      | Href validation and last-segment extraction.             | [`LocationSubject`], [`location::href`] |
//! | **Environment**   | Fallback href when none was set.                         | [`LocationSource`], [`EnvLocation`]     |
//! | **Errors**        | Typed errors for subjects and observers.                 | [`SubjectError`], [`ObserverError`]     |
//! | **Configuration** | Transport whitelist and fallback settings.               | [`LocationConfig`]                      |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] observer _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use waypost::{LocationSubject, Observer, ObserverError, Subject, SubjectError};
//!
//! struct Print;
//!
//! impl Observer for Print {
//!     fn on_update(&self, message: Option<&str>) -> Result<(), ObserverError> {
//!         println!("location: {}", message.unwrap_or("-"));
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), SubjectError> {
//!     let mut subject = LocationSubject::new();
//!     Arc::new(Print).observe(&mut subject);
//!
//!     subject.set_href("http://localhost/docs/guide/")?;
//!     assert_eq!(subject.message(), Some("guide"));
//!     subject.broadcast()?;
//!     Ok(())
//! }
//! ```
mod config;
mod error;
pub mod location;
mod observers;
mod subjects;

// ---- Public re-exports ----

pub use config::{LocationConfig, DEFAULT_ENV_VAR, DEFAULT_TRANSPORTS};
pub use error::{ObserverError, SubjectError};
pub use location::{EnvLocation, LocationSource, NoLocation, StaticLocation};
pub use observers::{Observer, ObserverRef};
pub use subjects::{Attachments, LocationSubject, MessageKey, Subject, SubjectCore};

// Optional: expose a simple built-in logger observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
