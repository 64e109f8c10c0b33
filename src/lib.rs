//! Kindle Clippings - convert a "My Clippings.txt" export into grouped markdown
//!
//! This library parses the plain-text clippings file Amazon Kindle devices
//! write (highlights, notes, and bookmarks with document attribution and
//! timestamps) into typed records. It supports:
//!
//! - Parsing separator-delimited entries, tolerating malformed ones without
//!   aborting the run
//! - Grouping clippings by book with location-sorted, first-author-wins
//!   aggregation
//! - Rendering the grouped result as markdown, and optionally as a lossless
//!   JSON dump
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use kindle_clippings::{group_by_book, parse_clippings_file, render_markdown};
//!
//! let clippings = parse_clippings_file(Path::new("input/My Clippings.txt"))?;
//! let library = group_by_book(clippings);
//! println!("{}", render_markdown(&library));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod grouping;
pub mod models;
pub mod parsers;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use grouping::group_by_book;
pub use models::{BookGroup, Category, Clipping, Document, Library, Location, Metadata};
pub use parsers::{FormatError, parse_clippings, parse_clippings_file};
pub use render::{render_json, render_markdown};
