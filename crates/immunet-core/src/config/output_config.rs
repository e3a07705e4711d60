//! Output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INDENT, DEFAULT_OUTPUT_DIRECTORY};

/// Configuration for files written by a run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the realization JSON. Default: current directory.
    pub directory: Option<String>,
    /// Whether sampled realizations are written to disk. Default: true.
    pub write_realizations: Option<bool>,
    /// JSON indent width. Default: 4.
    pub indent: Option<usize>,
}

impl OutputConfig {
    /// Returns the effective output directory.
    pub fn effective_directory(&self) -> PathBuf {
        PathBuf::from(
            self.directory
                .as_deref()
                .unwrap_or(DEFAULT_OUTPUT_DIRECTORY),
        )
    }

    /// Returns whether realizations should be written, defaulting to true.
    pub fn effective_write_realizations(&self) -> bool {
        self.write_realizations.unwrap_or(true)
    }

    /// Returns the effective indent width, defaulting to 4.
    pub fn effective_indent(&self) -> usize {
        self.indent.unwrap_or(DEFAULT_INDENT)
    }
}
