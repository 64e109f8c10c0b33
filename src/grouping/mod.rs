//! Grouping of parsed clippings into per-book aggregates.
//!
//! Groups are keyed by document title and kept in order of first appearance
//! in the source file. The first clipping seen for a title establishes the
//! group's author; later clippings never override it, even when their author
//! string differs. Within a group, clippings sort ascending by the begin of
//! their location range with a stable sort, so ties keep file order.

use std::collections::HashMap;

use crate::models::{BookGroup, Clipping, Library};

/// Group clippings by document title into a [`Library`].
pub fn group_by_book(clippings: Vec<Clipping>) -> Library {
    let mut groups: Vec<BookGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for clipping in clippings {
        let slot = *index.entry(clipping.document.title.clone()).or_insert_with(|| {
            groups.push(BookGroup {
                title: clipping.document.title.clone(),
                author: clipping.document.authors.clone(),
                clippings: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].clippings.push(clipping);
    }

    for group in &mut groups {
        group.clippings.sort_by_key(|c| c.metadata.location.begin);
    }

    Library { groups }
}
