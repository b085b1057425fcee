// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Model of the ksonnet application descriptor (`app.yaml`)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default)]
    pub registries: BTreeMap<String, RegistryRef>,
    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentSpec>,
    #[serde(default)]
    pub libraries: BTreeMap<String, LibraryRef>,
}

impl AppSpec {
    /// Look up a registry by name
    pub fn registry(&self, name: &str) -> Option<&RegistryRef> {
        self.registries.get(name)
    }

    /// Look up an environment by name
    pub fn environment(&self, name: &str) -> Option<&EnvironmentSpec> {
        self.environments.get(name)
    }

    /// Names of the environments declared in the descriptor, sorted
    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RegistryRef {
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub uri: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k8s_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl EnvironmentSpec {
    /// Target namespace, if a destination is configured
    pub fn namespace(&self) -> Option<&str> {
        self.destination
            .as_ref()
            .and_then(|d| d.namespace.as_deref())
    }

    /// Target API server, if a destination is configured
    pub fn server(&self) -> Option<&str> {
        self.destination.as_ref().and_then(|d| d.server.as_deref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Destination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LibraryRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub registry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
