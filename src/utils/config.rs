//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for URL resource fetches
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current diff report format version
pub const DIFF_REPORT_VERSION: &str = "1.0.0";

/// Length of generated fake strings
pub const FAKE_STRING_LEN: usize = 12;

/// Upper bound on generated fake collection sizes (arrays, maps)
pub const FAKE_COLLECTION_MAX: usize = 3;

/// Recursion guard for fake data generation over self-referential schemas
pub const MAX_SCHEMA_DEPTH: usize = 32;
