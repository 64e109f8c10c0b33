//! Line-oriented parsers for the Kindle "My Clippings.txt" format
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Entry-level failures**: A grammar mismatch in any line of an entry
//!   produces a [`FormatError`], which the entry parser recovers by dropping
//!   that single entry with a warning. One bad entry never aborts the run.
//!
//! - **File-level failures**: A missing or unreadable input file is fatal and
//!   propagated via `anyhow::Result` with context; no output is written.
//!
//! - **Auditable grammars**: Each field has exactly one parser function, so
//!   the accepted format per entity is visible in one place. Parsers return
//!   `Result` rather than panicking; malformed input is an expected condition.

pub mod document;
pub mod entry;
pub mod location;
pub mod metadata;
pub mod timestamp;

use thiserror::Error;

pub use document::parse_document;
pub use entry::{CLIPPINGS_SEPARATOR, parse_clippings, parse_clippings_file};
pub use location::parse_location;
pub use metadata::parse_metadata;
pub use timestamp::parse_timestamp;

/// Grammar mismatch local to a single entry.
///
/// Recovered at the entry-parser boundary: the offending entry is dropped and
/// parsing continues with the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("could not parse metadata line: {0}")]
    Metadata(String),
    #[error("invalid location token: {0}")]
    Location(String),
    #[error("unrecognized clipping category: {0}")]
    Category(String),
    #[error("could not parse timestamp: {0}")]
    Timestamp(String),
}
