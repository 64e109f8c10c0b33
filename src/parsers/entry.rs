use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::Clipping;

use super::{FormatError, parse_document, parse_metadata};

/// Separator line the device writes after every entry.
pub const CLIPPINGS_SEPARATOR: &str = "==========";

/// Read a clippings file and parse it into records.
///
/// I/O failures are fatal and reported with context; per-entry parse failures
/// are handled by [`parse_clippings`] and never abort the run.
pub fn parse_clippings_file(path: &Path) -> Result<Vec<Clipping>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read clippings file: {}", path.display()))?;
    Ok(parse_clippings(&content))
}

/// Parse the full file content into an ordered list of clippings.
///
/// Entries are delimited by [`CLIPPINGS_SEPARATOR`]. The fragment after the
/// last separator is trailing content rather than an entry and is always
/// ignored, even when non-empty. Fragments with fewer than three lines are
/// silently skipped; fragments whose document or metadata lines fail to parse
/// are dropped with a warning. Output preserves file order.
pub fn parse_clippings(content: &str) -> Vec<Clipping> {
    let mut fragments: Vec<&str> = content.split(CLIPPINGS_SEPARATOR).collect();
    fragments.pop();

    let mut clippings = Vec::new();
    let mut skipped = 0usize;

    for fragment in fragments {
        let lines: Vec<&str> = fragment.trim().lines().collect();
        if lines.len() < 3 {
            continue;
        }

        match parse_entry(&lines) {
            Ok(clipping) => clippings.push(clipping),
            Err(e) => {
                warn!("Skipping malformed entry: {e}");
                skipped += 1;
            }
        }
    }

    debug!("Parsed {} clippings ({} skipped)", clippings.len(), skipped);
    clippings
}

fn parse_entry(lines: &[&str]) -> Result<Clipping, FormatError> {
    let document = parse_document(lines[0]);
    let metadata = parse_metadata(lines[1])?;
    // lines[2] is the blank line the device writes before the content.
    let content = lines[3..].join("\n").trim().to_string();
    Ok(Clipping { document, metadata, content })
}
