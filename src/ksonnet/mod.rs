// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Running the `ks` tool and reading its output.

pub mod command;
pub mod manifests;
pub mod params;

pub use command::KsCommand;
pub use manifests::parse_manifests;
pub use params::{parse_param_list, unquote, ParameterMap};
