//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for one clippings entry in the device's text format
pub struct EntryBuilder {
    document_line: String,
    metadata_line: String,
    content: String,
}

impl EntryBuilder {
    /// Create a highlight entry with default values
    pub fn highlight() -> Self {
        Self {
            document_line: "Example Book (Example Author)".to_string(),
            metadata_line:
                "- Your Highlight on Location 10-12 | Added on Friday, May 13, 2016 11:23:26 PM"
                    .to_string(),
            content: "Some highlighted text.".to_string(),
        }
    }

    /// Create a note entry with default values
    pub fn note() -> Self {
        Self {
            document_line: "Example Book (Example Author)".to_string(),
            metadata_line:
                "- Your Note on page 3 | Location 45 | Added on Friday, May 13, 2016 11:24:00 PM"
                    .to_string(),
            content: "A note.".to_string(),
        }
    }

    /// Create a bookmark entry with default values.
    ///
    /// Note the device writes bookmarks without content, and such entries
    /// trim below the three-line minimum and are skipped; set a content line
    /// with [`EntryBuilder::content`] to build a bookmark that survives.
    pub fn bookmark() -> Self {
        Self {
            document_line: "Example Book (Example Author)".to_string(),
            metadata_line:
                "- Your Bookmark on Location 7 | Added on Friday, May 13, 2016 11:25:00 PM"
                    .to_string(),
            content: String::new(),
        }
    }

    /// Set the document attribution line
    pub fn document(mut self, line: &str) -> Self {
        self.document_line = line.to_string();
        self
    }

    /// Set the metadata line verbatim
    pub fn metadata(mut self, line: &str) -> Self {
        self.metadata_line = line.to_string();
        self
    }

    /// Set the content text
    pub fn content(mut self, text: &str) -> Self {
        self.content = text.to_string();
        self
    }

    /// Render the entry the way the device writes it, separator included
    pub fn to_entry_text(&self) -> String {
        format!(
            "{}\n{}\n\n{}\n==========\n",
            self.document_line, self.metadata_line, self.content
        )
    }
}

/// Builder for complete clippings files
pub struct ClippingsFileBuilder {
    content: String,
}

impl ClippingsFileBuilder {
    pub fn new() -> Self {
        Self { content: String::new() }
    }

    /// Append a structured entry
    pub fn with_entry(mut self, entry: EntryBuilder) -> Self {
        self.content.push_str(&entry.to_entry_text());
        self
    }

    /// Append raw text verbatim (for malformed entries or trailing content)
    pub fn with_raw(mut self, text: &str) -> Self {
        self.content.push_str(text);
        self
    }

    /// Get the accumulated file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file into the given directory and return its path
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, &self.content).expect("Failed to write clippings file");
        path
    }
}

impl Default for ClippingsFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a temp directory holding a realistic multi-book clippings file
/// named `My Clippings.txt`.
///
/// Contains two highlights and a note that parse, plus a content-less
/// bookmark that the parser skips (below the three-line minimum), so callers
/// should expect 3 records.
pub fn realistic_clippings_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let builder = ClippingsFileBuilder::new()
        .with_entry(
            EntryBuilder::highlight()
                .document("Thinking, Fast and Slow (Kahneman, Daniel)")
                .metadata("- Your Highlight on Location 120-123 | Added on Friday, May 13, 2016 11:23:26 PM")
                .content("Nothing in life is as important as you think it is."),
        )
        .with_entry(
            EntryBuilder::note()
                .document("Thinking, Fast and Slow (Kahneman, Daniel)")
                .metadata("- Your Note on Location 121 | Added on Friday, May 13, 2016 11:24:10 PM")
                .content("Focusing illusion."),
        )
        .with_entry(
            EntryBuilder::highlight()
                .document("The Left Hand of Darkness (Ursula K. Le Guin)")
                .metadata("- Your Highlight on page 12 | Location 180-185 | Added on Monday, August 1, 2016 9:15:00 AM")
                .content("Light is the left hand of darkness."),
        )
        .with_entry(
            EntryBuilder::bookmark()
                .document("The Left Hand of Darkness (Ursula K. Le Guin)")
                .metadata("- Your Bookmark on Location 200 | Added on Monday, August 1, 2016 9:20:00 AM"),
        );
    builder.write_to(dir.path(), "My Clippings.txt");
    dir
}
