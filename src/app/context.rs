use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::normalizer::Normalizer;
use crate::publisher::{Publisher, TelegramPublisher};
use crate::summarizer::{ChatCompletionsClient, Summarizer};

/// Everything one run needs, built once from the [`Config`].
pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher>,
    pub normalizer: Normalizer,
    pub summarizer: Arc<dyn Summarizer>,
    pub publisher: Arc<dyn Publisher>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new()?);
        let summarizer: Arc<dyn Summarizer> = Arc::new(ChatCompletionsClient::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        )?);
        let publisher: Arc<dyn Publisher> = Arc::new(TelegramPublisher::new(
            config.telegram_bot_token.clone(),
            config.telegram_channel_id.clone(),
        )?);

        Ok(Self::with_components(config, fetcher, summarizer, publisher))
    }

    pub fn with_components(
        config: Config,
        fetcher: Arc<dyn Fetcher>,
        summarizer: Arc<dyn Summarizer>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            config,
            fetcher,
            normalizer: Normalizer::new(),
            summarizer,
            publisher,
        }
    }
}
