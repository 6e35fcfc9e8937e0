//! Validation, recency filtering and "latest wins" deduplication.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::domain::{canonicalize_url, Article, FeedEntries, Identity, RawEntry};

/// Width of the recency window.
pub const WINDOW_HOURS: i64 = 24;

/// The run's notion of "now" and the oldest timestamp still accepted.
///
/// Fixed once per run so every feed is judged against the same window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    pub now: DateTime<Utc>,
    pub cutoff: DateTime<Utc>,
}

impl RecencyWindow {
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            cutoff: now - Duration::hours(WINDOW_HOURS),
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.cutoff
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingTitle,
    MissingLink,
    Undated,
    TooOld,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingest {
    Inserted,
    Replaced,
    /// Duplicate of an article already held with an equal or newer timestamp.
    Superseded,
    Rejected(Rejection),
}

pub struct Deduplicator {
    window: RecencyWindow,
    articles: HashMap<Identity, Article>,
}

impl Deduplicator {
    pub fn new(window: RecencyWindow) -> Self {
        Self {
            window,
            articles: HashMap::new(),
        }
    }

    pub fn ingest(&mut self, source: &str, entry: &RawEntry) -> Ingest {
        let title = entry.title.as_deref().unwrap_or_default().trim();
        if title.is_empty() {
            return Ingest::Rejected(Rejection::MissingTitle);
        }
        let link = entry.link.as_deref().unwrap_or_default().trim();
        // A bare query string ("?utm=1") leaves nothing to link to.
        let url = canonicalize_url(link);
        if url.is_empty() {
            return Ingest::Rejected(Rejection::MissingLink);
        }

        let Some(published_at) = entry.timestamp() else {
            return Ingest::Rejected(Rejection::Undated);
        };
        if !self.window.contains(published_at) {
            return Ingest::Rejected(Rejection::TooOld);
        }

        let identity = Identity::generate(title, link);
        let outcome = match self.articles.get(&identity) {
            None => Ingest::Inserted,
            Some(existing) if published_at > existing.published_at => Ingest::Replaced,
            Some(_) => return Ingest::Superseded,
        };

        self.articles.insert(
            identity,
            Article {
                title: title.to_string(),
                url,
                published_at,
                source: source.to_string(),
            },
        );
        outcome
    }

    pub fn ingest_feed(&mut self, feed: &FeedEntries) {
        let mut rejected = 0;
        for entry in &feed.entries {
            match self.ingest(&feed.source, entry) {
                Ingest::Rejected(reason) => {
                    rejected += 1;
                    tracing::debug!("Dropped entry from {}: {:?}", feed.source, reason);
                }
                Ingest::Replaced => {
                    tracing::debug!("Newer duplicate from {} replaced stored article", feed.source);
                }
                Ingest::Inserted | Ingest::Superseded => {}
            }
        }
        tracing::debug!(
            "{}: {} entries, {} rejected",
            feed.source,
            feed.entries.len(),
            rejected
        );
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn into_articles(self) -> HashMap<Identity, Article> {
        self.articles
    }
}

/// Run every feed's entries through a fresh [`Deduplicator`].
pub fn deduplicate(feeds: &[FeedEntries], window: RecencyWindow) -> HashMap<Identity, Article> {
    let mut dedup = Deduplicator::new(window);
    for feed in feeds {
        dedup.ingest_feed(feed);
    }
    dedup.into_articles()
}
