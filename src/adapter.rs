// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Facade over a ksonnet application directory and the `ks` tool.

use crate::app::{find_root, load_app_spec, AppSpec};
use crate::config::Config;
use crate::error::{AdapterError, Result};
use crate::ksonnet::{parse_manifests, parse_param_list, KsCommand, ParameterMap};
use crate::types::manifest::ManifestObject;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A ksonnet application and the operations `ks` can perform on it.
///
/// All state lives in the application's files; every operation runs one `ks`
/// process to completion, without retries. Awaiting an operation suspends the
/// caller until the child exits: there is no timeout, and dropping the future
/// does not kill the child.
#[derive(Debug, Clone)]
pub struct EnvironmentAdapter {
    root: PathBuf,
    app: AppSpec,
    config: Config,
}

impl EnvironmentAdapter {
    /// Open the application enclosing `path`, using the `ks` binary on PATH.
    ///
    /// `KS_BINARY` is not consulted; pass `Config::from_env()` to
    /// [`EnvironmentAdapter::with_config`] to honor it.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(path, Config::default())
    }

    pub fn with_config(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let root = find_root(path.as_ref())?;
        let app = load_app_spec(&root)?;
        debug!("Loaded ksonnet application '{}' at {}", app.name, root.display());

        Ok(Self { root, app, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app(&self) -> &AppSpec {
        &self.app
    }

    /// Render the manifests `ks` would apply to an environment, in output order
    #[instrument(skip(self), fields(app = %self.app.name))]
    pub async fn show(&self, environment: &str) -> Result<Vec<ManifestObject>> {
        let cmd = self.ks(&["show", environment]);
        let out = cmd.output().await?;

        // Objects are not sorted by creation dependencies.
        let objs = parse_manifests(&out).map_err(|message| AdapterError::Parse {
            command: cmd.command_line(),
            message,
        })?;
        debug!("Rendered {} objects for environment {}", objs.len(), environment);
        Ok(objs)
    }

    /// Parameters of all components in an environment
    #[instrument(skip(self), fields(app = %self.app.name))]
    pub async fn list_env_params(&self, environment: &str) -> Result<ParameterMap> {
        let cmd = self.ks(&["param", "list", "--env", environment]);
        let out = cmd.output().await?;

        parse_param_list(&out).map_err(|message| AdapterError::Parse {
            command: cmd.command_line(),
            message,
        })
    }

    /// Update a component parameter in an environment.
    ///
    /// This rewrites the application's parameter files. Concurrent updates of
    /// the same environment are not serialized.
    #[instrument(skip(self), fields(app = %self.app.name))]
    pub async fn set_component_params(
        &self,
        environment: &str,
        component: &str,
        param: &str,
        value: &str,
    ) -> Result<()> {
        self.ks(&["param", "set", component, param, value, "--env", environment])
            .output()
            .await?;
        info!(
            "Set {}.{} in environment {}",
            component, param, environment
        );
        Ok(())
    }

    fn ks(&self, args: &[&str]) -> KsCommand {
        KsCommand::new(&self.config.ks_binary, &self.root, args)
    }
}
