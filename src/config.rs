// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env_vars, KS_BINARY};
use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

/// Adapter configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name or path of the `ks` executable, resolved through PATH when bare
    pub ks_binary: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        match env::var(env_vars::KS_BINARY) {
            Ok(value) => Self::with_binary(value),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => bail!("{} environment variable is invalid: {}", env_vars::KS_BINARY, e),
        }
    }

    fn with_binary(value: String) -> Result<Self> {
        if value.trim().is_empty() {
            bail!("{} environment variable is empty", env_vars::KS_BINARY);
        }
        Ok(Config {
            ks_binary: PathBuf::from(value),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ks_binary: PathBuf::from(KS_BINARY),
        }
    }
}
