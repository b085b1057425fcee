// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{AdapterError, Result};
use kube::core::{DynamicObject, GroupVersionKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single Kubernetes resource with no schema known at compile time
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ManifestObject(Map<String, Value>);

impl ManifestObject {
    /// Decode one YAML document, which must be a mapping
    pub fn from_yaml(document: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(document)
    }

    /// Look up a value by dotted path, e.g. `metadata.labels`
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = self.0.get(segments.next()?)?;
        segments.try_fold(first, |value, key| value.as_object()?.get(key))
    }

    /// Look up a string by dotted path, failing on a missing field or a non-string value
    pub fn get_str(&self, path: &str) -> Result<&str> {
        match self.get(path) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(AdapterError::Field(format!(
                "{} is not a string: {}",
                path, other
            ))),
            None => Err(AdapterError::Field(format!("{} is missing", path))),
        }
    }

    pub fn api_version(&self) -> Result<&str> {
        self.get_str("apiVersion")
    }

    pub fn kind(&self) -> Result<&str> {
        self.get_str("kind")
    }

    pub fn name(&self) -> Result<&str> {
        self.get_str("metadata.name")
    }

    /// Namespace, if set; cluster-scoped and namespace-defaulted objects have none
    pub fn namespace(&self) -> Option<&str> {
        self.get("metadata.namespace").and_then(Value::as_str)
    }

    /// Group, version and kind derived from `apiVersion` and `kind`
    pub fn gvk(&self) -> Result<GroupVersionKind> {
        let api_version = self.api_version()?;
        let kind = self.kind()?;
        let (group, version) = api_version.split_once('/').unwrap_or(("", api_version));
        Ok(GroupVersionKind::gvk(group, version, kind))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Convert into a kube `DynamicObject`; requires `metadata` to be present
    pub fn into_dynamic(self) -> Result<DynamicObject> {
        self.try_parse()
    }

    /// Convert into a typed resource such as `k8s_openapi::api::core::v1::ConfigMap`
    pub fn try_parse<K: DeserializeOwned>(self) -> Result<K> {
        Ok(serde_json::from_value(Value::Object(self.0))?)
    }
}

impl From<Map<String, Value>> for ManifestObject {
    fn from(map: Map<String, Value>) -> Self {
        ManifestObject(map)
    }
}
