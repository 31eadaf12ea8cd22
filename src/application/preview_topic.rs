//! Static topic preview use case

use crate::domain::{Topic, TopicCatalog};
use crate::error::{DocpeekError, Result};

/// Service for previewing one of the catalog's topics
pub struct TopicPreviewService<'a> {
    catalog: &'a TopicCatalog,
}

impl<'a> TopicPreviewService<'a> {
    pub fn new(catalog: &'a TopicCatalog) -> Self {
        TopicPreviewService { catalog }
    }

    /// Look up a topic by exact name
    pub fn execute(&self, key: &str) -> Result<&'a Topic> {
        self.catalog
            .get(key)
            .ok_or_else(|| DocpeekError::TopicNotFound {
                topic: key.to_string(),
                known: self.catalog.names(),
            })
    }

    /// All topic names, in catalog order
    pub fn list(&self) -> Vec<String> {
        self.catalog.names()
    }
}
