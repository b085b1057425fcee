// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Parsing of `ks show` output

use crate::constants::output::DOCUMENT_SEPARATOR;
use crate::types::manifest::ManifestObject;

/// Split a `ks show` stream into objects, in output order.
///
/// Blank documents are skipped. Any document that is not a YAML mapping, or
/// has no non-empty `kind`, fails the whole parse; the returned message names
/// the document's position.
pub fn parse_manifests(output: &str) -> Result<Vec<ManifestObject>, String> {
    output
        .split(DOCUMENT_SEPARATOR)
        .filter(|part| !part.trim().is_empty())
        .enumerate()
        .map(|(index, part)| {
            let obj = ManifestObject::from_yaml(part)
                .map_err(|e| format!("failed to unmarshal manifest #{}: {}", index + 1, e))?;
            match obj.kind() {
                Ok(kind) if !kind.is_empty() => Ok(obj),
                _ => Err(format!("manifest #{} has no kind", index + 1)),
            }
        })
        .collect()
}
