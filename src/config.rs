//! Options controlling a single inlining run.

use std::path::{Path, PathBuf};

/// Attribute holding the primary image reference.
pub const SRC_ATTRIBUTE: &str = "src";
/// Attribute holding an optional full-size variant used by lightbox scripts.
pub const DATA_FULL_ATTRIBUTE: &str = "data-full";

/// Run options. The default reproduces the plain `<input> <output>` invocation.
#[derive(Debug, Clone)]
pub struct InlineOptions {
    /// Directory references are resolved against. `None` means the input document's directory.
    pub base_dir: Option<PathBuf>,
    /// Whether `data-full` attributes are inlined alongside `src`.
    pub inline_data_full: bool,
    /// Optional destination for a JSON run report.
    pub report_path: Option<PathBuf>,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            base_dir: None,
            inline_data_full: true,
            report_path: None,
        }
    }
}

impl InlineOptions {
    /// Resolve references against `dir` instead of the input's directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Enable or disable `data-full` processing.
    pub fn with_data_full(mut self, enabled: bool) -> Self {
        self.inline_data_full = enabled;
        self
    }

    /// Write a JSON report to `path` after the output document.
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    /// Base directory override, if any.
    pub fn base_dir_override(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_process_data_full_without_overrides() {
        let options = InlineOptions::default();
        assert!(options.inline_data_full);
        assert!(options.base_dir_override().is_none());
        assert!(options.report_path.is_none());
    }

    #[test]
    fn builders_set_fields() {
        let options = InlineOptions::default()
            .with_base_dir("/srv/site")
            .with_data_full(false)
            .with_report_path("report.json");

        assert_eq!(options.base_dir_override(), Some(Path::new("/srv/site")));
        assert!(!options.inline_data_full);
        assert_eq!(options.report_path, Some(PathBuf::from("report.json")));
    }
}
