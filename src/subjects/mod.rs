//! # Subjects: the broadcaster half of the pattern.
//!
//! This module provides the [`Subject`] trait, the [`SubjectCore`] state every
//! subject embeds, and the concrete [`LocationSubject`].
//!
//! ## Architecture
//! ```text
//!   LocationSubject ── set_href ──► SubjectCore.set_message(&MessageKey, last_part)
//!          │
//!          └─ broadcast ──► SubjectCore ──► Observer::update(message) ×N
//! ```

mod base;
mod location;
mod subject;

pub use base::{Attachments, MessageKey, SubjectCore};
pub use location::LocationSubject;
pub use subject::Subject;
