//! Helpers for classifying and resolving image references found in a document.
//!
//! Filtering decides which attribute values are eligible at all; resolution turns an eligible
//! value into the absolute path that is read from disk. Both are kept apart from the rewriter
//! so they can be tested without parsing any HTML.

mod filters;
mod resolve;

pub use filters::{ReferenceKind, classify_reference};
pub use resolve::{document_base_dir, normalize_lexically, resolve_reference};
