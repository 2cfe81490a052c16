//! Domain model for portfolio project cards.
//!
//! # Responsibility
//! - Define the canonical project record rendered into cards.
//! - Define the partial-update shape used by catalog replacement.
//!
//! # Invariants
//! - Required record fields are non-optional in the type; serde rejects
//!   payloads that omit them.
//! - Only `live_link` may be absent.

pub mod project;
