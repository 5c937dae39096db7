//! Data describing the outcome of an inlining run.

use std::path::PathBuf;

use serde::Serialize;

/// Result of examining one image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceOutcome {
    /// Replaced by a data URI.
    Inlined,
    /// Left alone because it points at an `http(s)` URL.
    Remote,
    /// The resolved file does not exist.
    Missing,
    /// The resolved file exists but could not be read.
    Failed,
}

/// One examined reference in document order.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceRecord {
    /// Attribute the value was read from (`src` or `data-full`).
    pub attribute: String,
    /// Value as it appeared in the document, entity decoded.
    pub value: String,
    /// Absolute path the value resolved to, for local references.
    pub resolved: Option<PathBuf>,
    /// What happened to the reference.
    pub outcome: ReferenceOutcome,
}

/// Counters and per-reference records accumulated over a run.
///
/// Only `src` references move `changed`/`skipped`; `data-full` references are recorded but
/// never counted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InlineReport {
    /// Number of `src` attributes replaced with a data URI.
    pub changed: usize,
    /// Number of `src` attributes left as-is because they were remote, missing or unreadable.
    pub skipped: usize,
    /// Where the rewritten document was written.
    pub output: Option<PathBuf>,
    /// Every examined reference.
    pub references: Vec<ReferenceRecord>,
}

impl InlineReport {
    /// Record the outcome of a `src` reference and update the counters.
    pub fn record_src(
        &mut self,
        value: &str,
        resolved: Option<PathBuf>,
        outcome: ReferenceOutcome,
    ) {
        match outcome {
            ReferenceOutcome::Inlined => self.changed += 1,
            _ => self.skipped += 1,
        }
        self.push(crate::config::SRC_ATTRIBUTE, value, resolved, outcome);
    }

    /// Record the outcome of a secondary attribute without touching the counters.
    pub fn record_secondary(
        &mut self,
        attribute: &str,
        value: &str,
        resolved: Option<PathBuf>,
        outcome: ReferenceOutcome,
    ) {
        self.push(attribute, value, resolved, outcome);
    }

    fn push(
        &mut self,
        attribute: &str,
        value: &str,
        resolved: Option<PathBuf>,
        outcome: ReferenceOutcome,
    ) {
        self.references.push(ReferenceRecord {
            attribute: attribute.to_string(),
            value: value.to_string(),
            resolved,
            outcome,
        });
    }

    /// The two closing lines printed after a successful run.
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Done. Inlined images: {}, skipped: {}",
            self.changed, self.skipped
        );
        if let Some(output) = &self.output {
            text.push_str(&format!("\nWritten: {}", output.display()));
        }
        text
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_outcomes_drive_counters() {
        let mut report = InlineReport::default();
        report.record_src("a.png", Some(PathBuf::from("/site/a.png")), ReferenceOutcome::Inlined);
        report.record_src("https://x/y.png", None, ReferenceOutcome::Remote);
        report.record_src("b.png", Some(PathBuf::from("/site/b.png")), ReferenceOutcome::Missing);

        assert_eq!(report.changed, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.references.len(), 3);
    }

    #[test]
    fn secondary_outcomes_leave_counters_alone() {
        let mut report = InlineReport::default();
        report.record_secondary("data-full", "big.png", None, ReferenceOutcome::Failed);

        assert_eq!(report.changed, 0);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.references[0].attribute, "data-full");
    }

    #[test]
    fn summary_matches_cli_wording() {
        let report = InlineReport {
            changed: 1,
            skipped: 1,
            output: Some(PathBuf::from("out.single.html")),
            references: Vec::new(),
        };
        assert_eq!(
            report.summary(),
            "Done. Inlined images: 1, skipped: 1\nWritten: out.single.html"
        );
    }

    #[test]
    fn json_uses_snake_case_outcomes() {
        let mut report = InlineReport::default();
        report.record_src("x.png", None, ReferenceOutcome::Missing);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["references"][0]["outcome"], "missing");
        assert_eq!(json["skipped"], 1);
    }
}
