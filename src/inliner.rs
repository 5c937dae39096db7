//! Single-pass rewrite turning local `<img>` references into data URIs.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lol_html::{HtmlRewriter, Settings, element};

use crate::asset_paths::{
    ReferenceKind, classify_reference, document_base_dir, normalize_lexically, resolve_reference,
};
use crate::config::{DATA_FULL_ATTRIBUTE, InlineOptions, SRC_ATTRIBUTE};
use crate::data_uri::file_to_data_uri;
use crate::error::PackError;
use crate::report::{InlineReport, ReferenceOutcome};

/// Packs an HTML page and its local images into a single document.
#[derive(Debug, Clone, Default)]
pub struct Inliner {
    options: InlineOptions,
}

impl Inliner {
    /// Create an inliner with the provided options.
    pub fn new(options: InlineOptions) -> Self {
        Self { options }
    }

    /// Inline `input` into `output`, printing warnings to standard output.
    pub fn run(&self, input: &Path, output: &Path) -> Result<InlineReport, PackError> {
        let stdout = io::stdout();
        let mut console = stdout.lock();
        self.run_with_console(input, output, &mut console)
    }

    /// Inline `input` into `output`, writing `[warn]` lines to `console`.
    pub fn run_with_console<W: Write>(
        &self,
        input: &Path,
        output: &Path,
        console: &mut W,
    ) -> Result<InlineReport, PackError> {
        if !input.exists() {
            return Err(PackError::InputNotFound(input.to_path_buf()));
        }

        let bytes = fs::read(input).map_err(|source| PackError::ReadInput {
            path: input.to_path_buf(),
            source,
        })?;
        let html = String::from_utf8_lossy(&bytes);
        if matches!(html, Cow::Owned(_)) {
            log::debug!("replaced malformed UTF-8 in {}", input.display());
        }

        let base_dir = self.base_dir_for(input)?;
        log::debug!("resolving references against {}", base_dir.display());

        let (rewritten, mut report) = self.inline_html(&html, &base_dir, console)?;

        fs::write(output, rewritten).map_err(|source| PackError::WriteOutput {
            path: output.to_path_buf(),
            source,
        })?;
        report.output = Some(output.to_path_buf());

        if let Some(report_path) = &self.options.report_path {
            write_report(&report, report_path)?;
        }

        Ok(report)
    }

    /// Rewrite every `<img>` of `html`, resolving local references against `base_dir`.
    ///
    /// Markup outside the rewritten attributes passes through unchanged.
    pub fn inline_html<W: Write>(
        &self,
        html: &str,
        base_dir: &Path,
        console: &mut W,
    ) -> Result<(String, InlineReport), PackError> {
        let mut pass = Pass {
            base_dir,
            console,
            report: InlineReport::default(),
        };
        let inline_data_full = self.options.inline_data_full;
        let mut output = Vec::with_capacity(html.len());

        {
            let mut rewriter = HtmlRewriter::new(
                Settings {
                    element_content_handlers: vec![element!("img", |el| {
                        if let Some(uri) = pass.visit_src(el.get_attribute(SRC_ATTRIBUTE))? {
                            el.set_attribute(SRC_ATTRIBUTE, &uri)?;
                        }
                        if inline_data_full {
                            let data_full = el.get_attribute(DATA_FULL_ATTRIBUTE);
                            if let Some(uri) = pass.visit_data_full(data_full)? {
                                el.set_attribute(DATA_FULL_ATTRIBUTE, &uri)?;
                            }
                        }
                        Ok(())
                    })],
                    ..Settings::default()
                },
                |chunk: &[u8]| output.extend_from_slice(chunk),
            );

            rewriter
                .write(html.as_bytes())
                .map_err(|e| PackError::Rewrite(e.to_string()))?;
            rewriter
                .end()
                .map_err(|e| PackError::Rewrite(e.to_string()))?;
        }

        let rewritten = String::from_utf8(output).map_err(|e| PackError::Rewrite(e.to_string()))?;
        Ok((rewritten, pass.report))
    }

    fn base_dir_for(&self, input: &Path) -> Result<PathBuf, PackError> {
        match self.options.base_dir_override() {
            Some(dir) => std::path::absolute(dir)
                .map(|absolute| normalize_lexically(&absolute))
                .map_err(|source| PackError::ReadInput {
                    path: dir.to_path_buf(),
                    source,
                }),
            None => document_base_dir(input).map_err(|source| PackError::ReadInput {
                path: input.to_path_buf(),
                source,
            }),
        }
    }
}

fn write_report(report: &InlineReport, path: &Path) -> Result<(), PackError> {
    let json = report.to_json().map_err(|e| PackError::WriteOutput {
        path: path.to_path_buf(),
        source: io::Error::from(e),
    })?;
    fs::write(path, json).map_err(|source| PackError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// State threaded through the element handler for one document.
struct Pass<'a, W: Write> {
    base_dir: &'a Path,
    console: &'a mut W,
    report: InlineReport,
}

impl<W: Write> Pass<'_, W> {
    /// Decide what to do with a `src` value; returns the replacement when it was inlined.
    fn visit_src(&mut self, raw: Option<String>) -> io::Result<Option<String>> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let value = html_escape::decode_html_entities(&raw);

        match classify_reference(&value) {
            ReferenceKind::Empty | ReferenceKind::Inline => Ok(None),
            ReferenceKind::Remote => {
                log::debug!("keeping remote image {value}");
                self.report.record_src(&value, None, ReferenceOutcome::Remote);
                Ok(None)
            }
            ReferenceKind::Local => {
                let resolved = resolve_reference(self.base_dir, &value);
                if !resolved.exists() {
                    writeln!(
                        self.console,
                        "[warn] file not found for <img src='{}'> -> {}",
                        value,
                        resolved.display()
                    )?;
                    self.report.record_src(&value, Some(resolved), ReferenceOutcome::Missing);
                    return Ok(None);
                }

                match file_to_data_uri(&resolved) {
                    Ok(uri) => {
                        log::debug!("inlined {} ({} bytes)", resolved.display(), uri.len());
                        self.report.record_src(&value, Some(resolved), ReferenceOutcome::Inlined);
                        Ok(Some(uri))
                    }
                    Err(err) => {
                        writeln!(
                            self.console,
                            "[warn] failed to inline {}: {err:#}",
                            resolved.display()
                        )?;
                        self.report.record_src(&value, Some(resolved), ReferenceOutcome::Failed);
                        Ok(None)
                    }
                }
            }
        }
    }

    /// Inline a `data-full` value when its target exists. Never touches the counters.
    fn visit_data_full(&mut self, raw: Option<String>) -> io::Result<Option<String>> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let value = html_escape::decode_html_entities(&raw);
        if classify_reference(&value) != ReferenceKind::Local {
            return Ok(None);
        }

        let resolved = resolve_reference(self.base_dir, &value);
        if !resolved.exists() {
            log::debug!("data-full target {} does not exist", resolved.display());
            self.report.record_secondary(
                DATA_FULL_ATTRIBUTE,
                &value,
                Some(resolved),
                ReferenceOutcome::Missing,
            );
            return Ok(None);
        }

        match file_to_data_uri(&resolved) {
            Ok(uri) => {
                self.report.record_secondary(
                    DATA_FULL_ATTRIBUTE,
                    &value,
                    Some(resolved),
                    ReferenceOutcome::Inlined,
                );
                Ok(Some(uri))
            }
            Err(err) => {
                writeln!(
                    self.console,
                    "[warn] failed to inline data-full {}: {err:#}",
                    resolved.display()
                )?;
                self.report.record_secondary(
                    DATA_FULL_ATTRIBUTE,
                    &value,
                    Some(resolved),
                    ReferenceOutcome::Failed,
                );
                Ok(None)
            }
        }
    }
}
