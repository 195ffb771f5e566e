//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while acquiring a schema resource
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Content was retrieved but is not valid JSON.
    /// The message names the offending path or URL.
    #[error("can not convert to json the resource from {location}")]
    ResourceFormat {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem failure (missing or unreadable path), propagated as-is
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Network failure (timeout, connection refused, non-2xx), propagated as-is
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors that can occur during schema validation
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Valid JSON that the Avro parser rejects.
    /// Carries the offending document and the parser's own message.
    #[error("schema {schema} is not valid.\n Error: `{source}`")]
    InvalidSchema {
        schema: String,
        #[source]
        source: apache_avro::Error,
    },
}

/// Errors that can occur while encoding or decoding sample records
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("data is not a valid JSON literal: {0}")]
    DataFormat(#[from] serde_json::Error),

    #[error("event is not valid hex: {0}")]
    EventFormat(String),

    #[error(transparent)]
    Avro(#[from] apache_avro::Error),
}

/// Errors that can occur during model source generation
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("schema contains no record, enum, or fixed type to render")]
    NoNamedTypes,
}

/// Errors that can occur during fake data generation
#[derive(Error, Debug)]
pub enum DatagenError {
    #[error("schema nesting exceeds {limit} levels")]
    RecursionLimit { limit: usize },

    #[error("unresolved type reference: {name}")]
    UnresolvedRef { name: String },

    #[error("can not generate sample data for schema type {kind}")]
    Unsupported { kind: String },
}

/// Batch result of the lint command, raised only after every file was checked
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Total errors detected: {failures}")]
    Aggregate { failures: usize },
}
