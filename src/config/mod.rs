//! Run configuration.
//!
//! Every setting comes from the environment and is read exactly once at
//! start-up into a [`Config`] that is then handed to each component. A
//! `.env` file may supply values the real environment does not set.

pub mod feeds;

pub use feeds::DEFAULT_FEEDS;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::prompt::DIGEST_HEADING;
use crate::selector::DEFAULT_MAX_ARTICLES;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHANNEL_ID: &str = "TELEGRAM_CHANNEL_ID";
pub const DIGEST_TITLE: &str = "DIGEST_TITLE";
pub const MAX_ARTICLES: &str = "MAX_ARTICLES";

#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Passed through verbatim, even when empty.
    pub openai_model: String,
    pub telegram_bot_token: String,
    pub telegram_channel_id: String,
    /// Heading of the "nothing found" message.
    pub digest_title: String,
    pub max_articles: usize,
    pub feeds: Vec<&'static str>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("openai_model", &self.openai_model)
            .field("telegram_bot_token", &redact(&self.telegram_bot_token))
            .field("telegram_channel_id", &self.telegram_channel_id)
            .field("digest_title", &self.digest_title)
            .field("max_articles", &self.max_articles)
            .field("feeds", &self.feeds)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration from the process environment, falling back to the
    /// values in `path` for anything the environment does not set.
    ///
    /// The file is not exported into the process environment.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let file_values = read_env_file(path)?;
        Self::from_lookup(|name| {
            std::env::var(name)
                .ok()
                .or_else(|| file_values.get(name).cloned())
        })
    }

    /// Build a configuration from an arbitrary name → value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).unwrap_or_default();

        let max_articles = match lookup(MAX_ARTICLES) {
            None => DEFAULT_MAX_ARTICLES,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: MAX_ARTICLES,
                value: raw.clone(),
            })?,
        };

        Ok(Self {
            openai_api_key: get(OPENAI_API_KEY),
            openai_model: get(OPENAI_MODEL),
            telegram_bot_token: get(TELEGRAM_BOT_TOKEN),
            telegram_channel_id: get(TELEGRAM_CHANNEL_ID),
            digest_title: lookup(DIGEST_TITLE).unwrap_or_else(|| DIGEST_HEADING.to_string()),
            max_articles,
            feeds: DEFAULT_FEEDS.to_vec(),
        })
    }

    /// Names of the required settings that are unset or empty, in a fixed order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (OPENAI_API_KEY, &self.openai_api_key),
            (TELEGRAM_BOT_TOKEN, &self.telegram_bot_token),
            (TELEGRAM_CHANNEL_ID, &self.telegram_channel_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Pre-flight check run before any network traffic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |e: dotenv::Error| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source: e,
    };

    dotenv::from_path_iter(path)
        .map_err(to_error)?
        .map(|item| item.map_err(to_error))
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing env vars: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Failed to read env file at {path}: {source}")]
    EnvFile {
        path: PathBuf,
        source: dotenv::Error,
    },
}
