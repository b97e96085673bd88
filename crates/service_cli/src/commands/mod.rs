//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod book;
pub mod check;
pub mod render;
pub mod schedule;

use std::path::Path;

use crate::{CliError, Result};

/// Read an input file, distinguishing a missing file from other IO failures.
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}
