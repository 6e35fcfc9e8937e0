use chrono::{DateTime, Utc};

/// Display name used when a feed does not declare a title.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// A single item as it came out of a feed, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
}

impl RawEntry {
    /// First timestamp present, in `published`, `updated`, `created` order.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.published.or(self.updated).or(self.created)
    }
}

/// Everything one feed contributed to a run.
#[derive(Debug, Clone)]
pub struct FeedEntries {
    pub source: String,
    pub entries: Vec<RawEntry>,
}

impl FeedEntries {
    pub fn new(title: Option<String>, entries: Vec<RawEntry>) -> Self {
        let source = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());
        Self { source, entries }
    }
}
