use std::fmt;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the SHA-256 digest.
pub const IDENTITY_LEN: usize = 16;

/// Deduplication key for an article, derived from its title and canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(String);

impl Identity {
    /// Generate a deterministic identity from a title and a (raw or canonical) link.
    ///
    /// The title is trimmed and lowercased, the link is canonicalized, and the
    /// two are joined with `|` before hashing.
    pub fn generate(title: &str, link: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(title.trim().to_lowercase().as_bytes());
        hasher.update(b"|");
        hasher.update(canonicalize_url(link).as_bytes());
        let mut hex = hex::encode(hasher.finalize());
        hex.truncate(IDENTITY_LEN);
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip everything from the first `?` onward and trim surrounding whitespace.
pub fn canonicalize_url(url: &str) -> String {
    url.split('?').next().unwrap_or_default().trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub source: String,
}

impl Article {
    pub fn identity(&self) -> Identity {
        Identity::generate(&self.title, &self.url)
    }

    /// Timestamp as rendered in prompts, e.g. `2024-01-01 08:30 UTC`.
    pub fn display_timestamp(&self) -> String {
        self.published_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}
