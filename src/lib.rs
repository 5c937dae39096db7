#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod data_uri;
pub mod error;
pub mod inliner;
pub mod mime;
pub mod report;

pub use config::InlineOptions;
pub use error::PackError;
pub use inliner::Inliner;
pub use report::{InlineReport, ReferenceOutcome, ReferenceRecord};
