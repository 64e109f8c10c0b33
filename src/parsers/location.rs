use crate::models::Location;

use super::FormatError;

/// Parse a location token of the form `N` or `N-M`.
///
/// A single number is a point location (`begin == end`). A range takes the
/// first two numbers literally; `begin <= end` is deliberately not enforced,
/// and any segments past the second are ignored, matching the permissiveness
/// of the device's own output handling.
pub fn parse_location(token: &str) -> Result<Location, FormatError> {
    let invalid = || FormatError::Location(token.to_string());

    let mut parts = token.split('-');
    let begin: u32 = parts.next().unwrap_or_default().parse().map_err(|_| invalid())?;
    let end: u32 = match parts.next() {
        Some(second) => second.parse().map_err(|_| invalid())?,
        None => begin,
    };
    Ok(Location { begin, end })
}
