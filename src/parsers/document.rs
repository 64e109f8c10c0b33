use crate::models::{Document, UNKNOWN_AUTHORS};

/// Parse a document attribution line of the form `<title> (<authors>)`.
///
/// The title is the longest prefix ending right before the final
/// parenthesized group; the group's contents become the authors string as-is
/// (multiple authors stay joined the way the device wrote them). A line
/// without a trailing author group is not an error: the whole trimmed line
/// becomes the title and the authors fall back to the `"Unknown"` sentinel.
pub fn parse_document(line: &str) -> Document {
    if let Some(stripped) = line.strip_suffix(')') {
        if let Some(open) = stripped.rfind(" (") {
            let title = &stripped[..open];
            let authors = &stripped[open + 2..];
            if !title.is_empty() && !authors.is_empty() {
                return Document { title: title.to_string(), authors: authors.to_string() };
            }
        }
    }
    Document { title: line.trim().to_string(), authors: UNKNOWN_AUTHORS.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_authors() {
        let doc = parse_document("Book One (Author A)");
        assert_eq!(doc.title, "Book One");
        assert_eq!(doc.authors, "Author A");
    }

    #[test]
    fn test_parse_multiple_authors_stay_joined() {
        let doc = parse_document("Thinking, Fast and Slow (Kahneman, Daniel; Egan, Patrick)");
        assert_eq!(doc.title, "Thinking, Fast and Slow");
        assert_eq!(doc.authors, "Kahneman, Daniel; Egan, Patrick");
    }

    #[test]
    fn test_parse_keeps_earlier_parentheses_in_title() {
        let doc = parse_document("C Programming (2nd Edition) (Kernighan)");
        assert_eq!(doc.title, "C Programming (2nd Edition)");
        assert_eq!(doc.authors, "Kernighan");
    }

    #[test]
    fn test_missing_author_group_falls_back_to_unknown() {
        let doc = parse_document("Some Book Title");
        assert_eq!(doc.title, "Some Book Title");
        assert_eq!(doc.authors, UNKNOWN_AUTHORS);
    }

    #[test]
    fn test_empty_author_group_falls_back_to_unknown() {
        let doc = parse_document("Some Book Title ()");
        assert_eq!(doc.title, "Some Book Title ()");
        assert_eq!(doc.authors, UNKNOWN_AUTHORS);
    }

    #[test]
    fn test_fallback_trims_surrounding_whitespace() {
        let doc = parse_document("  Some Book Title  ");
        assert_eq!(doc.title, "Some Book Title");
        assert_eq!(doc.authors, UNKNOWN_AUTHORS);
    }

    #[test]
    fn test_display_round_trip() {
        let doc = parse_document("Book One (Author A)");
        assert_eq!(doc.to_string(), "Book One (Author A)");
    }
}
