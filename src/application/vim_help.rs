//! Vim help lookup use case

use crate::domain::{Excerpt, TagIndex};
use crate::error::{DocpeekError, Result};
use crate::infrastructure::HelpRuntime;

/// Service for previewing a help tag from a Vim runtime
pub struct VimHelpService<R: HelpRuntime> {
    runtime: R,
}

impl<R: HelpRuntime> VimHelpService<R> {
    /// Create a new vim help service
    pub fn new(runtime: R) -> Self {
        VimHelpService { runtime }
    }

    /// Find the best tag for `key` and cut its excerpt.
    ///
    /// Only the first candidate of the best tier is tried; a missing
    /// document or anchor for that candidate fails the whole lookup.
    pub fn execute(&self, key: &str, max_lines: usize) -> Result<Excerpt> {
        // 1. Read and parse the tags index
        let index = TagIndex::parse(&self.runtime.read_tags()?);
        tracing::debug!(entries = index.len(), "parsed tags index");

        // 2. Bucket candidates by tier
        let matches = index.lookup(key);
        let (tier, candidates) = matches
            .best()
            .ok_or_else(|| DocpeekError::TagNotFound(key.to_string()))?;
        let entry = candidates[0];
        tracing::debug!(
            %tier,
            level = tier.level(),
            candidates = candidates.len(),
            total = matches.total(),
            tag = %entry.key,
            file = %entry.file,
            "selected help tag"
        );

        // 3. Slice the referenced document at the anchor
        let document = self.runtime.read_doc(&entry.file)?;
        Excerpt::locate(&document, entry, max_lines)
    }
}
