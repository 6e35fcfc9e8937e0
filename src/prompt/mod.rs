//! Prompt construction for the digest model.
//!
//! The article enumeration at the end of the prompt is the only factual
//! material the model is given; everything above it is fixed formatting
//! instructions for a Telegram HTML post.

use chrono::{DateTime, Utc};

use crate::domain::Article;

/// Instruction sent as the system message alongside every prompt.
pub const SYSTEM_INSTRUCTION: &str = "You write crisp tech digests for busy readers.";

pub const DIGEST_HEADING: &str = "📰 Tech News Digest (Last 24h)";

/// Date label used in the digest title, e.g. `Jan 05, 2024`.
pub fn today_label(now: DateTime<Utc>) -> String {
    now.format("%b %d, %Y").to_string()
}

pub fn digest_title(now: DateTime<Utc>) -> String {
    format!("{} — {}", DIGEST_HEADING, today_label(now))
}

/// One numbered line per article, with its URL indented on the next line.
pub fn enumerate_articles(articles: &[Article]) -> String {
    articles
        .iter()
        .enumerate()
        .map(|(i, a)| {
            format!(
                "{}. [{}] {} ({})\n   {}",
                i + 1,
                a.source,
                a.title,
                a.display_timestamp(),
                a.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(articles: &[Article], now: DateTime<Utc>) -> String {
    let title = digest_title(now);
    let joined = enumerate_articles(articles);

    format!(
        r#"You are a professional tech news editor writing for a Telegram channel.

Rules:
- Output using TELEGRAM HTML formatting.
- Write EXACTLY 5 news items.
- For EACH news item:
  - Start with an emoji
  - Use <b>bold</b> for the headline title
  - On the next line, include ONE plain URL (clickable)
  - Then write ONE paragraph of 4–6 sentences
- Do NOT use Markdown.
- Do NOT invent URLs.
- Do NOT include URLs inside paragraphs.
- Merge duplicate stories.
- Tone: professional, informative.

Required format:

<b>{title}</b>

🚀 <b>Headline title</b>
https://example.com/article

Paragraph summary text with 4–6 sentences.

(Repeat until 5 items)

—
🤖 Auto-generated AI summary
📡 Sources: TechCrunch, The Verge, Wired, Ars Technica
⏰ Updated daily at 08:00 (Jakarta time)

Articles:
{joined}"#
    )
    .trim()
    .to_string()
}
