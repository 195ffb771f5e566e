//! Avro schema validation.

mod validator;

pub use validator::validate;
