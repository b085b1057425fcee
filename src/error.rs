// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("No ksonnet application found from {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load application metadata from {}: {message}", .path.display())]
    Metadata { path: PathBuf, message: String },

    #[error("Failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool exited with a non-zero status; the message is its trimmed stderr.
    #[error("{message}")]
    Tool { command: String, message: String },

    #[error("Failed to parse output of `{command}`: {message}")]
    Parse { command: String, message: String },

    #[error("Manifest field error: {0}")]
    Field(String),

    #[error("Failed to convert manifest: {0}")]
    Conversion(#[from] serde_json::Error),
}

impl AdapterError {
    /// True when the error carries the tool's own diagnostic text
    pub fn is_tool_failure(&self) -> bool {
        matches!(self, AdapterError::Tool { .. })
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
