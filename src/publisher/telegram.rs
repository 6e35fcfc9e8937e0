use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::app::{DigestError, Result};
use crate::publisher::{ParseMode, Publisher};

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: ParseMode,
    pub disable_web_page_preview: bool,
}

/// Posts messages to one channel through the Bot API `sendMessage` method.
pub struct TelegramPublisher {
    client: Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl fmt::Debug for TelegramPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramPublisher")
            .field("api_base", &self.api_base)
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramPublisher {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Result<Self> {
        Self::with_api_base(DEFAULT_API_BASE, bot_token, chat_id)
    }

    pub fn with_api_base(
        api_base: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder().timeout(SEND_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }

    pub fn message<'a>(&'a self, text: &'a str, mode: ParseMode) -> SendMessage<'a> {
        SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: mode,
            disable_web_page_preview: true,
        }
    }
}

#[async_trait]
impl Publisher for TelegramPublisher {
    async fn publish(&self, text: &str, mode: ParseMode) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&self.message(text, mode))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DigestError::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("Delivered {} characters to {}", text.len(), self.chat_id);
        Ok(())
    }
}
