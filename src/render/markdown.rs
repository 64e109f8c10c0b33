use crate::models::{Category, Clipping, Library, UNKNOWN_AUTHORS};

/// Render the grouped library as a single markdown document.
///
/// Each book gets a `##` heading, an author line (omitted for the `"Unknown"`
/// sentinel), then Highlights, Notes, and Bookmarks sections in that fixed
/// order, each emitted only when non-empty. Bookmarks carry no content, so
/// they render a literal placeholder instead. A horizontal rule closes every
/// book group.
pub fn render_markdown(library: &Library) -> String {
    let mut out = String::new();
    out.push_str("# Kindle Clippings\n\n");

    for group in &library.groups {
        out.push_str(&format!("## {}\n", group.title));
        if !group.author.is_empty() && group.author != UNKNOWN_AUTHORS {
            out.push_str(&format!("**Author:** {}\n\n", group.author));
        }

        render_section(&mut out, "Highlights", Category::Highlight, &group.clippings);
        render_section(&mut out, "Notes", Category::Note, &group.clippings);
        render_section(&mut out, "Bookmarks", Category::Bookmark, &group.clippings);

        out.push_str("---\n\n");
    }

    out
}

fn render_section(out: &mut String, heading: &str, category: Category, clippings: &[Clipping]) {
    let items: Vec<&Clipping> =
        clippings.iter().filter(|c| c.metadata.category == category).collect();
    if items.is_empty() {
        return;
    }

    out.push_str(&format!("### {} ({})\n\n", heading, items.len()));
    for (i, clipping) in items.iter().enumerate() {
        let body = match category {
            Category::Bookmark => "Bookmark",
            _ => clipping.content.as_str(),
        };
        out.push_str(&format!("{}. {}\n", i + 1, body));

        let location = clipping.metadata.location;
        out.push_str(&format!("   - Location: {}-{}\n", location.begin, location.end));
        if let Some(page) = clipping.metadata.page {
            out.push_str(&format!("   - Page: {}\n", page));
        }
        out.push('\n');
    }
}
