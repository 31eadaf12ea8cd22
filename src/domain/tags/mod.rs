//! Help tags index

pub mod entry;
pub mod index;

// Re-export main types
pub use entry::{MatchTier, TagEntry};
pub use index::{TagIndex, TierMatches};
