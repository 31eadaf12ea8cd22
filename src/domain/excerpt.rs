//! Help excerpt extraction

use crate::domain::tags::TagEntry;
use crate::error::{DocpeekError, Result};

/// A bounded slice of a help document starting at a tag's anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub heading: String,
    pub body: Vec<String>,
}

impl Excerpt {
    /// Split text into a heading line and body lines, keeping at most
    /// `max_lines` lines in total when a bound is given.
    pub fn from_text(text: &str, max_lines: Option<usize>) -> Self {
        let limit = max_lines.unwrap_or(usize::MAX);
        let mut lines = text.lines().take(limit).map(str::to_string);
        let heading = lines.next().unwrap_or_default();
        Excerpt {
            heading,
            body: lines.collect(),
        }
    }

    /// Locate `entry`'s anchor inside `document` and slice from there.
    ///
    /// The anchor is the entry's lookup field minus its marker character,
    /// matched as a literal substring. If the document carries the marker
    /// right before the match, the excerpt starts on the marker.
    pub fn locate(document: &str, entry: &TagEntry, max_lines: usize) -> Result<Self> {
        let (marker, anchor) = entry
            .anchor()
            .ok_or_else(|| DocpeekError::AnchorNotFound(entry.lookup.clone()))?;

        let found = document
            .find(anchor)
            .ok_or_else(|| DocpeekError::AnchorNotFound(entry.lookup.clone()))?;

        let start = if document[..found].ends_with(marker) {
            found - marker.len_utf8()
        } else {
            found
        };

        Ok(Excerpt::from_text(&document[start..], Some(max_lines)))
    }
}
