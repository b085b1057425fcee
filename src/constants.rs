// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Default executable name of the ksonnet command-line tool
pub const KS_BINARY: &str = "ks";

/// Application descriptor file marking a ksonnet application root
pub const APP_SPEC_FILE: &str = "app.yaml";

/// Environment variables read by `Config::from_env`
pub mod env_vars {
    /// Overrides the `ks` executable
    pub const KS_BINARY: &str = "KS_BINARY";
}

/// Layout of the `ks` text output
pub mod output {
    /// Separates YAML documents in `ks show` output
    pub const DOCUMENT_SEPARATOR: &str = "\n---";
    /// Header and separator lines preceding the rows of `ks param list`
    pub const PARAM_LIST_HEADER_ROWS: usize = 2;
    /// Zero-based column of the parameter name in a `ks param list` row
    pub const PARAM_NAME_COLUMN: usize = 1;
    /// Zero-based column of the raw value in a `ks param list` row
    pub const PARAM_VALUE_COLUMN: usize = 2;
}
