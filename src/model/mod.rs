//! Typed model source generation from Avro schemas.

mod generator;

pub use generator::{generate_model, BaseClass};
