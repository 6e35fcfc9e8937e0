/// Feeds polled on every run.
pub const DEFAULT_FEEDS: &[&str] = &[
    "https://www.theverge.com/rss/index.xml",
    "https://techcrunch.com/feed/",
    "https://www.wired.com/feed/rss",
    "https://arstechnica.com/feed/",
    "https://www.engadget.com/rss.xml",
    "https://www.technologyreview.com/feed/",
];
