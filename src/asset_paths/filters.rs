use regex::Regex;

/// How an image attribute value should be treated by the inliner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Blank value, nothing to resolve.
    Empty,
    /// Already a `data:` URI.
    Inline,
    /// Absolute `http://` or `https://` URL, left for the browser to fetch.
    Remote,
    /// Anything else, resolved against the base directory.
    Local,
}

fn inline_reference() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^data:").expect("invalid data URI regex"))
}

fn remote_reference() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://").expect("invalid http(s) regex"))
}

/// Classify an attribute value taken from an `<img>` element.
///
/// Prefixes are matched literally, so `HTTP://` or `Data:` values are treated as local paths.
/// Surrounding whitespace is kept as part of local references, so `" logo.png"` resolves to a
/// file literally named with a leading space.
pub fn classify_reference(value: &str) -> ReferenceKind {
    if value.is_empty() {
        ReferenceKind::Empty
    } else if inline_reference().is_match(value) {
        ReferenceKind::Inline
    } else if remote_reference().is_match(value) {
        ReferenceKind::Remote
    } else {
        ReferenceKind::Local
    }
}

#[cfg(test)]
mod tests {
    use super::{ReferenceKind, classify_reference};

    #[test]
    fn http_urls_are_remote() {
        assert_eq!(classify_reference("https://example.com/x.png"), ReferenceKind::Remote);
        assert_eq!(classify_reference("http://example.com/x.png"), ReferenceKind::Remote);
    }

    #[test]
    fn data_uris_are_inline() {
        assert_eq!(classify_reference("data:image/png;base64,abc"), ReferenceKind::Inline);
        assert_eq!(classify_reference("data:,"), ReferenceKind::Inline);
    }

    #[test]
    fn prefixes_are_case_sensitive() {
        assert_eq!(classify_reference("HTTP://example.com"), ReferenceKind::Local);
        assert_eq!(classify_reference("Https://example.com"), ReferenceKind::Local);
        assert_eq!(classify_reference("Data:image/png;base64,AAAA"), ReferenceKind::Local);
    }

    #[test]
    fn keeps_relative_paths() {
        assert_eq!(classify_reference("images/photo.png"), ReferenceKind::Local);
        assert_eq!(classify_reference("../logo.png"), ReferenceKind::Local);
    }

    #[test]
    fn protocol_relative_and_other_schemes_are_local() {
        assert_eq!(classify_reference("//cdn.example.com/x.png"), ReferenceKind::Local);
        assert_eq!(classify_reference("ftp://example.com/x.png"), ReferenceKind::Local);
        assert_eq!(classify_reference("https:/broken"), ReferenceKind::Local);
    }

    #[test]
    fn empty_values_are_empty() {
        assert_eq!(classify_reference(""), ReferenceKind::Empty);
    }
}
