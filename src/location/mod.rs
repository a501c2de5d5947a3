//! # Href parsing and the ambient location source.
//!
//! - [`href`] holds pure string helpers: transport detection, validation and
//!   last-segment extraction.
//! - [`LocationSource`] is the environment collaborator consulted when a
//!   [`LocationSubject`](crate::LocationSubject) has no explicit href.
//!
//! ```text
//!   set_href("http://foo/bar/") ──► is_valid_href ──► last_part ──► "bar"
//!                                       │
//!                                       └─ "ftp://…" ──► InvalidTransport
//! ```

pub mod href;
mod source;

pub use source::{EnvLocation, LocationSource, NoLocation, StaticLocation};
