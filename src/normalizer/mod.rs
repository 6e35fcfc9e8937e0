pub mod timestamp;

use feed_rs::model::Link;
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{DigestError, Result};
use crate::domain::{FeedEntries, RawEntry};

pub use timestamp::parse_timestamp;

/// Turns a fetched feed document into raw entries plus the feed's display name.
#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, body: &[u8]) -> Result<FeedEntries> {
        let feed = parser::Builder::new()
            .timestamp_parser(parse_timestamp)
            .build()
            .parse(body)
            .map_err(|e| DigestError::FeedParse(e.to_string()))?;

        let title = feed
            .title
            .map(|t| decode_html_entities(&t.content).to_string());

        let entries = feed
            .entries
            .into_iter()
            .map(|entry| RawEntry {
                title: entry
                    .title
                    .map(|t| decode_html_entities(&t.content).to_string()),
                link: article_link(&entry.links).map(|l| l.href.clone()),
                published: entry.published,
                updated: entry.updated,
                // feed-rs folds creation dates into `published`
                created: None,
            })
            .collect();

        Ok(FeedEntries::new(title, entries))
    }
}

/// The link pointing at the article itself. Atom entries may also carry
/// `self`, `enclosure` or `related` links, and an absent `rel` means
/// `alternate`.
fn article_link(links: &[Link]) -> Option<&Link> {
    links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| links.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const RSS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Feed</title>
    <description>A test feed</description>
    <item>
      <title>Apple &amp; Google team up</title>
      <link>https://example.com/item1?utm_source=rss</link>
      <guid>item-1</guid>
      <pubDate>Mon, 01 Jan 2024 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Undated item</title>
      <link>https://example.com/item2</link>
      <guid>item-2</guid>
    </item>
    <item>
      <title>Broken date</title>
      <link>https://example.com/item3</link>
      <pubDate>not a date</pubDate>
    </item>
  </channel>
</rss>"#;

    const ATOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Test Feed</title>
  <entry>
    <title>Atom Entry 1</title>
    <link href="https://example.com/atom1"/>
    <id>atom-entry-1</id>
    <updated>2024-01-01T00:00:00Z</updated>
  </entry>
</feed>"#;

    const RSS_DATE_VARIANTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Date Variants</title>
    <item>
      <title>Zone spelled UTC</title>
      <link>https://example.com/utc</link>
      <pubDate>Mon, 01 Jan 2024 10:00:00 UTC</pubDate>
    </item>
    <item>
      <title>Wrong weekday</title>
      <link>https://example.com/weekday</link>
      <pubDate>Tue, 01 Jan 2024 10:00:00 +0000</pubDate>
    </item>
    <item>
      <title>Long weekday</title>
      <link>https://example.com/long</link>
      <pubDate>Monday, 01 Jan 2024 10:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    const ATOM_MULTI_LINK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Multi Link Feed</title>
  <entry>
    <title>Linked Entry</title>
    <link rel="self" href="https://example.com/feed/entry/1"/>
    <link rel="alternate" type="text/html" href="https://example.com/article"/>
    <id>multi-1</id>
    <updated>2024-01-01T00:00:00Z</updated>
  </entry>
  <entry>
    <title>Only Self</title>
    <link rel="self" href="https://example.com/feed/entry/2"/>
    <id>multi-2</id>
    <updated>2024-01-01T00:00:00Z</updated>
  </entry>
</feed>"#;

    const UNTITLED_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <item>
      <title>Lonely item</title>
      <link>https://example.com/lonely</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_rss() {
        let feed = Normalizer::new().normalize(RSS_SAMPLE.as_bytes()).unwrap();

        assert_eq!(feed.source, "Test Feed");
        assert_eq!(feed.entries.len(), 3);
        assert_eq!(feed.entries[0].title.as_deref(), Some("Apple & Google team up"));
        assert_eq!(
            feed.entries[0].link.as_deref(),
            Some("https://example.com/item1?utm_source=rss")
        );
        assert_eq!(
            feed.entries[0].timestamp(),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_missing_and_malformed_dates_are_none() {
        let feed = Normalizer::new().normalize(RSS_SAMPLE.as_bytes()).unwrap();

        assert_eq!(feed.entries[1].timestamp(), None);
        assert_eq!(feed.entries[2].timestamp(), None);
    }

    #[test]
    fn test_parse_atom_uses_updated() {
        let feed = Normalizer::new().normalize(ATOM_SAMPLE.as_bytes()).unwrap();

        assert_eq!(feed.source, "Atom Test Feed");
        assert_eq!(feed.entries.len(), 1);
        assert_eq!(feed.entries[0].link.as_deref(), Some("https://example.com/atom1"));
        assert_eq!(
            feed.entries[0].timestamp(),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_rss_date_variants_are_dated() {
        let feed = Normalizer::new()
            .normalize(RSS_DATE_VARIANTS.as_bytes())
            .unwrap();

        assert_eq!(feed.entries.len(), 3);
        for entry in &feed.entries {
            assert_eq!(
                entry.timestamp(),
                Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()),
                "{:?}",
                entry.title
            );
        }
    }

    #[test]
    fn test_prefers_alternate_link() {
        let feed = Normalizer::new()
            .normalize(ATOM_MULTI_LINK.as_bytes())
            .unwrap();

        assert_eq!(feed.entries[0].link.as_deref(), Some("https://example.com/article"));
        assert_eq!(
            feed.entries[1].link.as_deref(),
            Some("https://example.com/feed/entry/2")
        );
    }

    #[test]
    fn test_untitled_feed_is_unknown() {
        let feed = Normalizer::new().normalize(UNTITLED_RSS.as_bytes()).unwrap();
        assert_eq!(feed.source, "Unknown");
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let result = Normalizer::new().normalize(b"this is not a feed");
        assert!(matches!(result, Err(DigestError::FeedParse(_))));
    }
}
