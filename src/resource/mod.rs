//! Schema resource acquisition.
//!
//! A resource is a JSON document obtained from either a local file path
//! or a remote URL.

mod loader;

pub use loader::Resource;
