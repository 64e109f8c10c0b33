use anyhow::{Context, Result};

use crate::models::Library;

/// Serialize the grouped library as pretty-printed JSON.
///
/// This is a faithful structural dump rather than the markdown view: titles
/// key a map of `{author, clippings}`, timestamps encode as ISO-8601 strings,
/// and non-ASCII text is preserved unescaped. Deserializing the dump
/// reconstructs an equal [`Library`] with group order intact.
pub fn render_json(library: &Library) -> Result<String> {
    serde_json::to_string_pretty(library).context("Failed to serialize clippings to JSON")
}
