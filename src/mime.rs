//! MIME type lookup for inlined files.
//!
//! The type only labels the payload of a data URI; file contents are never sniffed.

use std::path::Path;

/// MIME type constants used in generated data URIs.
#[allow(missing_docs)]
pub mod types {
    // Images
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/vnd.microsoft.icon";
    pub const BMP: &str = "image/bmp";
    pub const TIFF: &str = "image/tiff";
    pub const APNG: &str = "image/apng";

    // Other assets occasionally referenced from `img`
    pub const PDF: &str = "application/pdf";
    pub const MP4: &str = "video/mp4";
    pub const WEBM: &str = "video/webm";
    pub const HTML: &str = "text/html";
    pub const PLAIN: &str = "text/plain";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";

    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Guess the MIME type of a file from its extension.
pub fn from_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    from_extension(extension.as_deref())
}

/// Guess the MIME type for a lowercase extension, falling back to `application/octet-stream`.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("png") => types::PNG,
        Some("jpg" | "jpeg" | "jpe" | "jfif") => types::JPEG,
        Some("gif") => types::GIF,
        Some("webp") => types::WEBP,
        Some("avif") => types::AVIF,
        Some("svg" | "svgz") => types::SVG,
        Some("ico") => types::ICO,
        Some("bmp") => types::BMP,
        Some("tif" | "tiff") => types::TIFF,
        Some("apng") => types::APNG,

        Some("pdf") => types::PDF,
        Some("mp4" | "m4v") => types::MP4,
        Some("webm") => types::WEBM,
        Some("html" | "htm") => types::HTML,
        Some("txt") => types::PLAIN,
        Some("json") => types::JSON,
        Some("xml") => types::XML,

        _ => types::OCTET_STREAM,
    }
}
