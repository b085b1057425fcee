// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a scripted stand-in for the `ks` binary and app fixtures.

use crate::constants::APP_SPEC_FILE;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary application root holding the given `app.yaml`
pub fn app_dir(app_yaml: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(APP_SPEC_FILE), app_yaml).unwrap();
    dir
}

/// A fake `ks` executable that prints canned output and records how it was called.
pub struct FakeKs {
    dir: TempDir,
    stdout: String,
    stderr: String,
    exit_code: i32,
}

impl FakeKs {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    /// Text written to stdout on every invocation
    pub fn stdout(mut self, stdout: &str) -> Self {
        self.stdout = stdout.to_string();
        self
    }

    /// Text written to stderr on every invocation
    pub fn stderr(mut self, stderr: &str) -> Self {
        self.stderr = stderr.to_string();
        self
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Write the script and return the installed fake
    #[cfg(unix)]
    pub fn install(self) -> InstalledFakeKs {
        use std::os::unix::fs::PermissionsExt;

        let base = self.dir.path();
        fs::write(base.join("stdout"), &self.stdout).unwrap();
        fs::write(base.join("stderr"), &self.stderr).unwrap();

        let script = format!(
            "#!/bin/sh\n\
             pwd -P > '{base}/cwd'\n\
             printf '%s\\n' \"$@\" > '{base}/args'\n\
             cat '{base}/stdout'\n\
             cat '{base}/stderr' >&2\n\
             exit {code}\n",
            base = base.display(),
            code = self.exit_code,
        );
        let binary = base.join("ks");
        fs::write(&binary, script).unwrap();
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();

        InstalledFakeKs {
            _dir: self.dir,
            binary,
        }
    }
}

impl Default for FakeKs {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to an installed fake; the script lives as long as this value.
pub struct InstalledFakeKs {
    _dir: TempDir,
    binary: PathBuf,
}

impl InstalledFakeKs {
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Arguments of the last invocation, one entry per argv element
    pub fn last_args(&self) -> Vec<String> {
        let args = fs::read_to_string(self.recorded("args")).unwrap();
        args.lines().map(str::to_string).collect()
    }

    /// Physical working directory of the last invocation
    pub fn last_cwd(&self) -> PathBuf {
        PathBuf::from(fs::read_to_string(self.recorded("cwd")).unwrap().trim_end())
    }

    pub fn was_called(&self) -> bool {
        self.recorded("args").exists()
    }

    fn recorded(&self, name: &str) -> PathBuf {
        self.binary.with_file_name(name)
    }
}
