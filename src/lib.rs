// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-process adapter around the ksonnet `ks` command-line tool.
//!
//! ```no_run
//! # async fn run() -> ks_adapter::error::Result<()> {
//! use ks_adapter::EnvironmentAdapter;
//!
//! let adapter = EnvironmentAdapter::new("./guestbook")?;
//! for obj in adapter.show("default").await? {
//!     println!("{} {}", obj.kind()?, obj.name()?);
//! }
//! adapter
//!     .set_component_params("default", "guestbook-ui", "replicas", "3")
//!     .await?;
//! # Ok(())
//! # }
//! ```
pub mod adapter;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod ksonnet;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use adapter::EnvironmentAdapter;
pub use error::{AdapterError, Result};
pub use ksonnet::ParameterMap;
pub use types::manifest::ManifestObject;
