//! Structural diffing of schema documents.
//!
//! Compares two JSON documents and buckets every difference into a
//! category addressed by its JSON path.

mod engine;
mod report;

pub use engine::generate_diff;
pub use report::{DiffReport, TypeChange, ValueChange};
