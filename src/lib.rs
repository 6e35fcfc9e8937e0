//! # techdigest
//!
//! A once-a-day batch job that turns the last 24 hours of tech news into a
//! short Telegram digest.
//!
//! ## Architecture
//!
//! The run is a straight pipeline, one stage after another:
//!
//! ```text
//! Fetcher → Normalizer → Dedup → Selector → Prompt → Summarizer → Publisher
//! ```
//!
//! - [`fetcher`]: downloads each configured feed, skipping any that fail
//! - [`normalizer`]: parses RSS/Atom/JSON Feed documents into raw entries
//! - [`dedup`]: drops invalid or stale entries and collapses duplicates
//! - [`selector`]: keeps the newest articles up to the configured cap
//! - [`prompt`]: renders the model instructions and article list
//! - [`summarizer`]: calls an OpenAI-compatible chat completions endpoint
//! - [`publisher`]: posts the result through the Telegram Bot API
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY=... OPENAI_MODEL=openai/gpt-4o-mini
//! export TELEGRAM_BOT_TOKEN=... TELEGRAM_CHANNEL_ID=@my_channel
//!
//! # Inspect what would be summarized
//! techdigest articles
//!
//! # Fetch, summarize and post
//! techdigest
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the fetcher,
/// normalizer, summarizer and publisher for one run.
pub mod app;

/// Command-line interface using clap.
///
/// - `run` - Fetch, summarize and publish (default)
/// - `articles` - Print the selected articles
/// - `prompt` - Print the model prompt
pub mod cli;

/// Environment-sourced settings and the fixed feed list.
pub mod config;

/// Recency filtering and "latest wins" deduplication.
pub mod dedup;

/// Core domain models.
///
/// - [`RawEntry`](domain::RawEntry): an item exactly as a feed supplied it
/// - [`Article`](domain::Article): a validated, canonicalized entry
/// - [`Identity`](domain::Identity): SHA-256 based deduplication key
pub mod domain;

/// Sequential feed fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for feed retrieval
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Feed parsing and timestamp normalization.
pub mod normalizer;

/// The end-to-end run.
pub mod pipeline;

/// Prompt construction for the digest model.
pub mod prompt;

/// Message delivery.
///
/// - [`Publisher`](publisher::Publisher): Async trait with HTML and MarkdownV2 modes
/// - [`TelegramPublisher`](publisher::TelegramPublisher): Bot API implementation
pub mod publisher;

/// Ordering and truncation of deduplicated articles.
pub mod selector;

/// Digest generation.
///
/// - [`Summarizer`](summarizer::Summarizer): Async trait for digest generation
/// - [`ChatCompletionsClient`](summarizer::ChatCompletionsClient): OpenAI-compatible client
pub mod summarizer;

#[cfg(test)]
mod test_support;
