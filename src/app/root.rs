// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Application root discovery and descriptor loading

use super::spec::AppSpec;
use crate::constants::APP_SPEC_FILE;
use crate::error::{AdapterError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the nearest directory at or above `path` that contains `app.yaml`
pub fn find_root(path: &Path) -> Result<PathBuf> {
    let start = fs::canonicalize(path).map_err(|e| {
        debug!("Cannot resolve {}: {}", path.display(), e);
        AdapterError::NotFound(path.to_path_buf())
    })?;

    start
        .ancestors()
        .find(|dir| dir.join(APP_SPEC_FILE).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| AdapterError::NotFound(path.to_path_buf()))
}

/// Read and decode the descriptor at the given application root
pub fn load_app_spec(root: &Path) -> Result<AppSpec> {
    let spec_path = root.join(APP_SPEC_FILE);

    let contents = fs::read_to_string(&spec_path).map_err(|e| AdapterError::Metadata {
        path: spec_path.clone(),
        message: e.to_string(),
    })?;

    serde_yaml::from_str(&contents).map_err(|e| AdapterError::Metadata {
        path: spec_path,
        message: e.to_string(),
    })
}
