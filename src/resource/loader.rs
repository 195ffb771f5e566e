//! Resource references and the loader that turns them into JSON documents.

use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::ResourceError;
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A schema resource reference: exactly one of a local path or a remote URL.
///
/// Constructed once at the command boundary, so the "exactly one" contract
/// is carried by the type rather than re-checked before every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Path(PathBuf),
    Url(String),
}

impl Resource {
    /// Classify a bare string as a URL or a local path.
    ///
    /// Used by commands that take a single positional resource argument
    /// instead of the `--path`/`--url` option pair.
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Resource::Url(raw.to_string())
        } else {
            Resource::Path(PathBuf::from(raw))
        }
    }

    /// Human-readable location for error messages
    pub fn location(&self) -> String {
        match self {
            Resource::Path(path) => path.display().to_string(),
            Resource::Url(url) => url.clone(),
        }
    }

    /// Load the resource and parse its content as JSON
    ///
    /// # Errors
    /// * `ResourceError::Io` - path does not exist or is unreadable
    /// * `ResourceError::Http` - URL fetch failed (one GET, no retry)
    /// * `ResourceError::ResourceFormat` - content is not valid JSON
    pub fn load(&self) -> Result<Value, ResourceError> {
        match self {
            Resource::Path(path) => load_from_path(path),
            Resource::Url(url) => load_from_url(url),
        }
    }
}

fn load_from_path(path: &Path) -> Result<Value, ResourceError> {
    debug!("Reading schema resource from {}", path.display());

    let text = fs::read_to_string(path)?;

    serde_json::from_str(&text).map_err(|source| ResourceError::ResourceFormat {
        location: path.display().to_string(),
        source,
    })
}

fn load_from_url(url: &str) -> Result<Value, ResourceError> {
    info!("Fetching schema resource from {}", url);

    let client = Client::builder().timeout(DEFAULT_HTTP_TIMEOUT).build()?;

    let response = client.get(url).send()?;
    let text = response.error_for_status()?.text()?;

    serde_json::from_str(&text).map_err(|source| ResourceError::ResourceFormat {
        location: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_classify_url() {
        assert_eq!(
            Resource::classify("https://registry/example.avsc"),
            Resource::Url("https://registry/example.avsc".to_string())
        );
        assert_eq!(
            Resource::classify("http://registry/example.avsc"),
            Resource::Url("http://registry/example.avsc".to_string())
        );
    }

    #[test]
    fn test_classify_path() {
        assert_eq!(
            Resource::classify("schemas/example.avsc"),
            Resource::Path(PathBuf::from("schemas/example.avsc"))
        );
    }

    #[test]
    fn test_load_valid_json_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"type": "string"}}"#).unwrap();

        let document = Resource::Path(file.path().to_path_buf()).load().unwrap();
        assert_eq!(document["type"], "string");
    }

    #[test]
    fn test_load_invalid_json_is_format_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let error = Resource::Path(file.path().to_path_buf()).load().unwrap_err();
        match error {
            ResourceError::ResourceFormat { location, .. } => {
                assert_eq!(location, file.path().display().to_string());
            }
            other => panic!("expected ResourceFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_path_is_io_error() {
        let error = Resource::Path(PathBuf::from("/no/such/file.avsc"))
            .load()
            .unwrap_err();
        assert!(matches!(error, ResourceError::Io(_)));
    }
}
