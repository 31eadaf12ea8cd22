//! Static top-level topics

/// A named topic with canned preview text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub preview: String,
}

impl Topic {
    pub fn new(name: &str, preview: &str) -> Self {
        Topic {
            name: name.to_string(),
            preview: preview.to_string(),
        }
    }
}

/// Immutable set of topics, looked up by exact name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl TopicCatalog {
    pub fn new(topics: Vec<Topic>) -> Self {
        TopicCatalog { topics }
    }

    /// The topics shipped with docpeek
    pub fn builtin() -> Self {
        TopicCatalog::new(vec![
            Topic::new(
                "text objects",
                "Do the stuffs with the text objects\n\
                 \n \
                 * The Operators\n \
                 * The Motions and Text Objects\n \
                 * The Niceness",
            ),
            Topic::new(
                "configuration",
                "Learning about configuration\n\
                 \n \
                 * The doing the config\n \
                 * The writing the config",
            ),
            Topic::new(
                "All-the-Things",
                "A big old fuzzy menu of goodness\n\
                 \n \
                 * FZF functionality\n \
                 * Lots of helpers\n \
                 * IDE-like stuffs",
            ),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.name == name)
    }

    /// Topic names in catalog order
    pub fn names(&self) -> Vec<String> {
        self.topics.iter().map(|topic| topic.name.clone()).collect()
    }
}
