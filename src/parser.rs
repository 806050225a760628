// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Strict YAML decoding of the cluster document.
//!
//! Unknown keys anywhere in the tree are rejected so that typos surface
//! before any defaults are applied.

use crate::error::{GkeTfError, Result};
use crate::types::ClusterDocument;
use std::fs;
use std::path::Path;
use tracing::debug;

const UNKNOWN_FIELD_MARKER: &str = "unknown field `";

/// Decode a cluster document from YAML text.
pub fn parse_document(text: &str) -> Result<ClusterDocument> {
    serde_yaml::from_str(text).map_err(classify)
}

/// Read and decode the cluster document at `path`.
pub fn load_document(path: &Path) -> Result<ClusterDocument> {
    debug!("Reading cluster document from {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| GkeTfError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text)
}

fn classify(err: serde_yaml::Error) -> GkeTfError {
    let message = err.to_string();
    match unknown_field_name(&message) {
        Some(field) => GkeTfError::UnknownField {
            field: field.to_string(),
            message,
        },
        None => GkeTfError::Parse(err),
    }
}

fn unknown_field_name(message: &str) -> Option<&str> {
    let start = message.find(UNKNOWN_FIELD_MARKER)? + UNKNOWN_FIELD_MARKER.len();
    let rest = &message[start..];
    rest.find('`').map(|end| &rest[..end])
}
