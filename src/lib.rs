//! avroctl
//!
//! Command-line toolkit for Apache Avro schemas: validate a schema,
//! diff two schemas, lint a batch of schema files, generate Rust model
//! source, serialize/deserialize sample records, and generate fake data.
//!
//! This crate provides the core implementation for the `avroctl` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install avroctl
//! avroctl --help
//! ```

pub mod codec;
pub mod commands;
pub mod datagen;
pub mod diff;
pub mod model;
pub mod resource;
pub mod schema;
pub mod utils;
