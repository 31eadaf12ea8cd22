//! Domain layer - Help lookup models

pub mod excerpt;
pub mod tags;
pub mod topics;

pub use excerpt::Excerpt;
pub use tags::{MatchTier, TagEntry, TagIndex};
pub use topics::{Topic, TopicCatalog};
