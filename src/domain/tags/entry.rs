//! Tags index entries and match tiers

use std::fmt;

/// Field separator of a Vim `tags` file
pub const FIELD_SEPARATOR: char = '\t';

/// One line of the tags index: `key<TAB>file<TAB>lookup`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// The searchable term
    pub key: String,
    /// Document path, relative to the `doc` directory
    pub file: String,
    /// In-document anchor, including its leading marker character
    pub lookup: String,
}

impl TagEntry {
    pub fn new(key: &str, file: &str, lookup: &str) -> Self {
        TagEntry {
            key: key.to_string(),
            file: file.to_string(),
            lookup: lookup.to_string(),
        }
    }

    /// Parse a single index line.
    ///
    /// Returns `None` unless the line splits into exactly three fields.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split(FIELD_SEPARATOR);
        let key = fields.next()?;
        let file = fields.next()?;
        let lookup = fields.next()?;
        if fields.next().is_some() {
            return None;
        }
        Some(TagEntry::new(key, file, lookup))
    }

    /// The anchor with its marker character stripped.
    ///
    /// Returns `None` for an empty lookup field.
    pub fn anchor(&self) -> Option<(char, &str)> {
        let mut chars = self.lookup.chars();
        let marker = chars.next()?;
        Some((marker, chars.as_str()))
    }

    /// Classify this entry against a query
    pub fn tier_for(&self, query: &str) -> Option<MatchTier> {
        MatchTier::classify(&self.key, query)
    }
}

/// Match quality of a tag key against a query, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// `key == query` or `key == "<query>"`
    Exact,
    /// `key` starts with `query` or `"<query"`
    Prefix,
    /// `key` contains `query`
    Substring,
}

impl MatchTier {
    /// All tiers in precedence order
    pub const ALL: [MatchTier; 3] = [MatchTier::Exact, MatchTier::Prefix, MatchTier::Substring];

    /// Classify `key` against `query`. The first matching tier wins.
    pub fn classify(key: &str, query: &str) -> Option<MatchTier> {
        let bracketed_prefix = format!("<{}", query);

        if key == query || key == format!("{}>", bracketed_prefix) {
            Some(MatchTier::Exact)
        } else if key.starts_with(query) || key.starts_with(&bracketed_prefix) {
            Some(MatchTier::Prefix)
        } else if key.contains(query) {
            Some(MatchTier::Substring)
        } else {
            None
        }
    }

    /// Position of this tier in precedence order (0 = best)
    pub fn level(self) -> usize {
        match self {
            MatchTier::Exact => 0,
            MatchTier::Prefix => 1,
            MatchTier::Substring => 2,
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
        };
        write!(f, "{}", name)
    }
}
