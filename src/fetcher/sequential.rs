use crate::app::Result;
use crate::domain::FeedEntries;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

/// Fetch and parse each feed in turn.
///
/// A feed that fails to download or parse contributes nothing; the error is
/// logged and the remaining feeds are still processed.
pub async fn fetch_all<F>(fetcher: &F, feed_urls: &[&str], normalizer: &Normalizer) -> Vec<FeedEntries>
where
    F: Fetcher + ?Sized,
{
    let mut feeds = Vec::with_capacity(feed_urls.len());

    for url in feed_urls {
        match fetch_single_feed(fetcher, url, normalizer).await {
            Ok(feed) => {
                tracing::info!("Fetched {} entries from {}", feed.entries.len(), feed.source);
                feeds.push(feed);
            }
            Err(e) => {
                tracing::warn!("Skipping feed {}: {}", url, e);
            }
        }
    }

    feeds
}

async fn fetch_single_feed<F>(fetcher: &F, url: &str, normalizer: &Normalizer) -> Result<FeedEntries>
where
    F: Fetcher + ?Sized,
{
    let body = fetcher.fetch(url).await?;
    normalizer.normalize(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::app::DigestError;

    struct StaticFetcher {
        bodies: HashMap<&'static str, &'static str>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.requested.lock().unwrap().push(url.to_string());
            self.bodies
                .get(url)
                .map(|b| b.as_bytes().to_vec())
                .ok_or_else(|| DigestError::FeedParse(format!("no such feed: {}", url)))
        }
    }

    const FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>Good Feed</title>
<item><title>Hello</title><link>https://good.com/1</link></item>
</channel></rss>"#;

    #[tokio::test]
    async fn test_failing_feeds_are_skipped() {
        let fetcher = StaticFetcher {
            bodies: HashMap::from([
                ("https://good.com/feed", FEED),
                ("https://garbage.com/feed", "<html>not a feed"),
            ]),
            requested: Mutex::new(Vec::new()),
        };

        let feeds = fetch_all(
            &fetcher,
            &[
                "https://missing.com/feed",
                "https://garbage.com/feed",
                "https://good.com/feed",
            ],
            &Normalizer::new(),
        )
        .await;

        assert_eq!(feeds.len(), 1);
        assert_eq!(feeds[0].source, "Good Feed");
        assert_eq!(feeds[0].entries.len(), 1);
        // every feed is attempted, in order
        assert_eq!(
            *fetcher.requested.lock().unwrap(),
            vec![
                "https://missing.com/feed",
                "https://garbage.com/feed",
                "https://good.com/feed",
            ]
        );
    }
}
