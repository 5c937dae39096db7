//! Encoding of files on disk as `data:` URIs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};

use crate::mime;

/// Read `path` and return it as `data:<mime>;base64,<payload>`.
pub fn file_to_data_uri(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(encode_data_uri(mime::from_path(path), &bytes))
}

/// Build a base64 data URI from raw bytes.
pub fn encode_data_uri(content_type: &str, bytes: &[u8]) -> String {
    let encoded_capacity = base64::encoded_len(bytes.len(), true).unwrap_or(0);
    let mut encoded = String::with_capacity(encoded_capacity + content_type.len() + 13);

    encoded.push_str("data:");
    encoded.push_str(content_type);
    encoded.push_str(";base64,");
    general_purpose::STANDARD.encode_string(bytes, &mut encoded);

    encoded
}
