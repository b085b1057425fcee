// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Invocation of the `ks` binary. This is the only place a subprocess is spawned.

use crate::error::{AdapterError, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error};

/// One `ks` invocation, run with the application root as working directory
#[derive(Debug, Clone)]
pub struct KsCommand {
    binary: PathBuf,
    root: PathBuf,
    args: Vec<String>,
}

impl KsCommand {
    pub fn new(binary: &Path, root: &Path, args: &[&str]) -> Self {
        Self {
            binary: binary.to_path_buf(),
            root: root.to_path_buf(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The command line as it would be typed in a shell, used in logs and errors
    pub fn command_line(&self) -> String {
        std::iter::once(self.binary.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion and return stdout
    pub async fn output(&self) -> Result<String> {
        let command_line = self.command_line();
        debug!("{}", command_line);

        let output = Command::new(&self.binary)
            .args(&self.args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| AdapterError::Launch {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("`{}` failed: {}", command_line, stderr);
            return Err(AdapterError::Tool {
                command: command_line,
                message: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let cmd = KsCommand::new(
            Path::new("ks"),
            Path::new("/apps/guestbook"),
            &["param", "list", "--env", "default"],
        );
        assert_eq!(cmd.command_line(), "ks param list --env default");
    }

    #[tokio::test]
    async fn test_launch_error_for_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = KsCommand::new(&dir.path().join("no-such-ks"), dir.path(), &["show", "default"]);

        let err = cmd.output().await.unwrap_err();
        match err {
            AdapterError::Launch { command, source } => {
                assert!(command.ends_with("no-such-ks show default"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected launch error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    mod with_fake_ks {
        use super::*;
        use crate::test_utils::FakeKs;

        #[tokio::test]
        async fn test_returns_stdout_and_uses_root_as_cwd() {
            let fake = FakeKs::new().stdout("hello\n").install();
            let root = tempfile::tempdir().unwrap();
            let cmd = KsCommand::new(fake.binary(), root.path(), &["show", "default"]);
            assert!(!fake.was_called());

            assert_eq!(cmd.output().await.unwrap(), "hello\n");
            assert!(fake.was_called());
            assert_eq!(fake.last_args(), vec!["show", "default"]);
            assert_eq!(fake.last_cwd(), std::fs::canonicalize(root.path()).unwrap());
        }

        #[tokio::test]
        async fn test_non_zero_exit_becomes_tool_error() {
            let fake = FakeKs::new()
                .stdout("partial output")
                .stderr("\n  ERROR environment \"prod\" does not exist  \n")
                .exit_code(1)
                .install();
            let root = tempfile::tempdir().unwrap();
            let cmd = KsCommand::new(fake.binary(), root.path(), &["show", "prod"]);

            let err = cmd.output().await.unwrap_err();
            assert!(err.is_tool_failure());
            assert_eq!(err.to_string(), "ERROR environment \"prod\" does not exist");
        }

        #[tokio::test]
        async fn test_empty_stdout_on_success() {
            let fake = FakeKs::new().install();
            let root = tempfile::tempdir().unwrap();
            let cmd = KsCommand::new(fake.binary(), root.path(), &["param", "set"]);

            assert_eq!(cmd.output().await.unwrap(), "");
        }
    }
}
