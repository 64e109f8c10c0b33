use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::clipping::Clipping;

/// All clippings for one document, in location order.
///
/// The author string is taken from the first clipping seen for the title and
/// never overridden by later clippings, even when their author differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookGroup {
    pub title: String,
    pub author: String,
    pub clippings: Vec<Clipping>,
}

/// Book groups in order of first appearance in the source file.
///
/// Built fresh per run from the full clipping list and discarded after
/// rendering. Serializes as a JSON map keyed by title so consumers can reload
/// the dump and reconstruct the groups; the custom impls keep the map in
/// insertion order in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Library {
    pub groups: Vec<BookGroup>,
}

impl Library {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[derive(Serialize)]
struct GroupBody<'a> {
    author: &'a str,
    clippings: &'a [Clipping],
}

#[derive(Deserialize)]
struct GroupBodyOwned {
    author: String,
    clippings: Vec<Clipping>,
}

impl Serialize for Library {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(
                &group.title,
                &GroupBody { author: &group.author, clippings: &group.clippings },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Library {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LibraryVisitor;

        impl<'de> Visitor<'de> for LibraryVisitor {
            type Value = Library;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of book titles to grouped clippings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Library, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((title, body)) = access.next_entry::<String, GroupBodyOwned>()? {
                    groups.push(BookGroup {
                        title,
                        author: body.author,
                        clippings: body.clippings,
                    });
                }
                Ok(Library { groups })
            }
        }

        deserializer.deserialize_map(LibraryVisitor)
    }
}
