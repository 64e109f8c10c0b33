use crate::models::{Category, Metadata};

use super::{FormatError, parse_location, parse_timestamp};

/// Parse a clipping metadata line. The accepted grammar is:
///
/// ```text
/// - Your <category> (on|at) [(P|p)age <digits> | ] (L|l)ocation <location> | Added on <timestamp>
/// ```
///
/// The page clause is optional, the location clause mandatory, and everything
/// after `Added on` up to the end of the line is timestamp text. A line that
/// does not match produces a [`FormatError`] carrying the offending text; the
/// caller drops that entry and keeps going.
pub fn parse_metadata(line: &str) -> Result<Metadata, FormatError> {
    let mismatch = || FormatError::Metadata(line.to_string());

    let rest = line.strip_prefix("- Your ").ok_or_else(mismatch)?;
    let (word, rest) = rest.split_once(' ').ok_or_else(mismatch)?;
    let category: Category = word.parse()?;

    let rest = rest
        .strip_prefix("on ")
        .or_else(|| rest.strip_prefix("at "))
        .ok_or_else(mismatch)?;

    let (page, rest) = match strip_keyword(rest, "Page ", "page ") {
        Some(after) => {
            let (digits, tail) = after.split_once(" | ").ok_or_else(mismatch)?;
            let page: u32 = digits.parse().map_err(|_| mismatch())?;
            (Some(page), tail)
        }
        None => (None, rest),
    };

    let rest = strip_keyword(rest, "Location ", "location ").ok_or_else(mismatch)?;
    let (token, rest) = rest.split_once(" | ").ok_or_else(mismatch)?;
    let location = parse_location(token)?;

    let text = rest.strip_prefix("Added on ").ok_or_else(mismatch)?;
    if text.is_empty() {
        return Err(mismatch());
    }
    let timestamp = parse_timestamp(text)?;

    Ok(Metadata { category, location, timestamp, page })
}

/// The device capitalizes these keywords inconsistently across firmwares.
fn strip_keyword<'a>(input: &'a str, upper: &str, lower: &str) -> Option<&'a str> {
    input.strip_prefix(upper).or_else(|| input.strip_prefix(lower))
}
