use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsers::FormatError;

/// Sentinel stored when a document line carries no parseable author group.
pub const UNKNOWN_AUTHORS: &str = "Unknown";

/// Timestamp format the device writes, e.g. `Friday, May 13, 2016 11:23:26 PM`.
///
/// The hour is unpadded (`%-I`) because the device never writes a leading
/// zero; chrono ignores padding when parsing, so the same format string
/// serves both directions.
pub const DEVICE_DATETIME_FORMAT: &str = "%A, %B %d, %Y %-I:%M:%S %p";

/// Document (e.g. book, article) a clipping originates from.
///
/// Holds a title and one or more authors joined in a single string, at the
/// device's discretion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub authors: String,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.authors)
    }
}

/// Begin-end position range within a document, in device-internal units.
///
/// Single-point locations have `begin == end`. The range is stored exactly as
/// parsed; `begin <= end` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub begin: u32,
    pub end: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.begin == self.end {
            write!(f, "{}", self.begin)
        } else {
            write!(f, "{}-{}", self.begin, self.end)
        }
    }
}

/// Kind of clipping, as named by the word the device emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Highlight,
    Note,
    Bookmark,
}

impl FromStr for Category {
    type Err = FormatError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word.to_ascii_lowercase().as_str() {
            "highlight" => Ok(Category::Highlight),
            "note" => Ok(Category::Note),
            "bookmark" => Ok(Category::Bookmark),
            _ => Err(FormatError::Category(word.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Highlight => "Highlight",
            Category::Note => "Note",
            Category::Bookmark => "Bookmark",
        })
    }
}

/// Metadata line of a clipping: category, location, timestamp, and the page
/// when the device reports one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub category: Category,
    pub location: Location,
    pub timestamp: NaiveDateTime,
    pub page: Option<u32>,
}

impl fmt::Display for Metadata {
    /// Render the metadata back into the device's line format.
    ///
    /// The page clause is re-inserted only when a page is present, and the
    /// hour is written without a leading zero, matching the device output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = match self.page {
            Some(page) => format!("page {page} | "),
            None => String::new(),
        };
        write!(
            f,
            "- Your {} on {}Location {} | Added on {}",
            self.category,
            page,
            self.location,
            self.timestamp.format(DEVICE_DATETIME_FORMAT)
        )
    }
}

/// One clipping: content captured from a particular document.
///
/// Immutable value object; equality is structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipping {
    pub document: Document,
    pub metadata: Metadata,
    pub content: String,
}

impl fmt::Display for Clipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.document, self.metadata, self.content)
    }
}
