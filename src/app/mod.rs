// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ksonnet application discovery and metadata.

pub mod root;
pub mod spec;

pub use root::{find_root, load_app_spec};
pub use spec::{AppSpec, Destination, EnvironmentSpec, LibraryRef, RegistryRef};
