//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components: acquire a resource,
//! validate it, delegate to one capability, print the result.

pub mod datagen;
pub mod deserialize;
pub mod diff;
pub mod lint;
pub mod model;
pub mod serialize;
pub mod validate;

// Re-export main command functions
pub use datagen::execute_generate_data;
pub use deserialize::execute_deserialize;
pub use diff::execute_diff;
pub use lint::execute_lint;
pub use model::execute_generate_model;
pub use serialize::execute_serialize;
pub use validate::execute_validate;
