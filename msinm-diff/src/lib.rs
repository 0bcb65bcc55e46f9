//! Structural diff over JSON values.
//!
//! The back office shows message history as a structural comparison of two
//! JSON snapshots. [`compare`] walks both values and produces a
//! [`DiffNode`] tree classifying every key present on either side as added,
//! removed, changed, or unchanged, notifying a caller-supplied observer for
//! each difference. The comparison is pure data; [`render`] turns the tree
//! into a plain-text report so no UI surface is needed.

#![forbid(unsafe_code)]

mod compare;
mod node;
mod render;

pub use compare::compare;
pub use node::{DiffNode, DiffStatus, ValueKind};
pub use render::render;
