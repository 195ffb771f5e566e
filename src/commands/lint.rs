//! `lint` command implementation.
//!
//! Unlike validate-schema, lint keeps going after a failure so one bad
//! file does not hide the state of the rest of the batch. The aggregate
//! error is raised only after every file has been checked.

use crate::resource::Resource;
use crate::schema;
use crate::utils::error::LintError;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// Execute the lint command over a batch of local schema files
///
/// Prints the summary of valid paths first, then every failing path with
/// its error. Exits non-zero iff at least one file failed.
pub fn execute_lint(files: &[PathBuf]) -> Result<()> {
    let mut valid_paths: Vec<&PathBuf> = Vec::new();
    let mut failures: Vec<(&PathBuf, anyhow::Error)> = Vec::new();

    for path in files {
        debug!("Linting {}", path.display());
        match lint_one(path) {
            Ok(()) => valid_paths.push(path),
            Err(error) => failures.push((path, error)),
        }
    }

    if !valid_paths.is_empty() {
        println!("Total valid schemas: {}", valid_paths.len());
        for path in &valid_paths {
            println!("{}", path.display());
        }
    }

    if !failures.is_empty() {
        for (path, error) in &failures {
            println!("File: {}", path.display());
            println!("{error:#}");
        }
        return Err(LintError::Aggregate {
            failures: failures.len(),
        }
        .into());
    }

    Ok(())
}

fn lint_one(path: &Path) -> Result<()> {
    let document = Resource::Path(path.to_path_buf()).load()?;
    schema::validate(&document)?;
    Ok(())
}
