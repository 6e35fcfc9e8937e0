pub mod telegram;

use async_trait::async_trait;
use serde::Serialize;

use crate::app::Result;

pub use telegram::TelegramPublisher;

/// Telegram `parse_mode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
    MarkdownV2,
}

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Deliver `text` as-is with the given parse mode.
    async fn publish(&self, text: &str, mode: ParseMode) -> Result<()>;

    async fn publish_html(&self, text: &str) -> Result<()> {
        self.publish(text, ParseMode::Html).await
    }

    /// Escape every MarkdownV2 control character, then deliver as MarkdownV2.
    async fn publish_markdown(&self, text: &str) -> Result<()> {
        let escaped = escape_markdown_v2(text);
        self.publish(&escaped, ParseMode::MarkdownV2).await
    }
}

const MARKDOWN_V2_SPECIAL: &str = r"_*[]()~`>#+-=|{}.!\";

pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_V2_SPECIAL.contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown_v2() {
        assert_eq!(escape_markdown_v2("plain text"), "plain text");
        assert_eq!(
            escape_markdown_v2("v1.2 (beta)!"),
            r"v1\.2 \(beta\)\!"
        );
        assert_eq!(escape_markdown_v2(r"a_b*c\d"), r"a\_b\*c\\d");
        assert_eq!(escape_markdown_v2("📰 #1"), r"📰 \#1");
    }

    #[test]
    fn test_parse_mode_serialization() {
        assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), "HTML");
        assert_eq!(
            serde_json::to_value(ParseMode::MarkdownV2).unwrap(),
            "MarkdownV2"
        );
    }
}
