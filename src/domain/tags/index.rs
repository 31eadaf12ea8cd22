//! Tags index parsing and tiered lookup
//!
//! A Vim runtime ships a `doc/tags` file mapping every help tag to the
//! document and anchor that define it. The index is scanned linearly on every
//! lookup; entries are bucketed into [`MatchTier`]s in a single pass.
//!
//! # Examples
//!
//! ```
//! use docpeek::domain::tags::{MatchTier, TagIndex};
//!
//! let index = TagIndex::parse("foobar\tf.txt\t*foobar*\nfoo\tf.txt\t*foo*\n");
//! let matches = index.lookup("foo");
//! let (tier, entries) = matches.best().unwrap();
//! assert_eq!(tier, MatchTier::Exact);
//! assert_eq!(entries[0].key, "foo");
//! ```

use super::entry::{MatchTier, TagEntry};

/// All well-formed entries of a tags file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    entries: Vec<TagEntry>,
}

impl TagIndex {
    /// Parse index text, skipping lines that are not exactly three fields
    pub fn parse(text: &str) -> Self {
        let entries = text.lines().filter_map(TagEntry::parse_line).collect();
        TagIndex { entries }
    }

    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bucket every entry matching `query` into its tier
    pub fn lookup(&self, query: &str) -> TierMatches<'_> {
        let mut matches = TierMatches::default();
        for entry in &self.entries {
            if let Some(tier) = entry.tier_for(query) {
                matches.push(tier, entry);
            }
        }
        matches
    }
}

/// Candidates for one query, grouped by tier, each group in file order
#[derive(Debug, Default)]
pub struct TierMatches<'a> {
    exact: Vec<&'a TagEntry>,
    prefix: Vec<&'a TagEntry>,
    substring: Vec<&'a TagEntry>,
}

impl<'a> TierMatches<'a> {
    fn push(&mut self, tier: MatchTier, entry: &'a TagEntry) {
        match tier {
            MatchTier::Exact => self.exact.push(entry),
            MatchTier::Prefix => self.prefix.push(entry),
            MatchTier::Substring => self.substring.push(entry),
        }
    }

    pub fn tier(&self, tier: MatchTier) -> &[&'a TagEntry] {
        match tier {
            MatchTier::Exact => &self.exact,
            MatchTier::Prefix => &self.prefix,
            MatchTier::Substring => &self.substring,
        }
    }

    /// The first non-empty tier and its candidates
    pub fn best(&self) -> Option<(MatchTier, &[&'a TagEntry])> {
        MatchTier::ALL
            .into_iter()
            .map(|tier| (tier, self.tier(tier)))
            .find(|(_, entries)| !entries.is_empty())
    }

    pub fn total(&self) -> usize {
        self.exact.len() + self.prefix.len() + self.substring.len()
    }
}
