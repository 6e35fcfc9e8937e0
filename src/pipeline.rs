//! The end-to-end run.
//!
//! ```text
//! Fetch → Normalize/Dedup → Select ─┬─ empty → publish fallback
//!                                   └─ BuildPrompt → Summarize → publish digest
//! ```
//!
//! Every stage runs to completion before the next one starts. Feed failures
//! are absorbed by the fetch stage; any later failure ends the run.

use chrono::{DateTime, Utc};
use html_escape::encode_text;

use crate::app::{AppContext, Result};
use crate::dedup::{deduplicate, RecencyWindow};
use crate::domain::Article;
use crate::fetcher::fetch_all;
use crate::prompt::build_prompt;
use crate::selector::select;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing qualified; the fallback notice was posted.
    NothingFound,
    /// A digest built from this many articles was posted.
    Published { articles: usize },
}

pub fn fallback_message(digest_title: &str) -> String {
    format!(
        "**{}**\n\nNo notable tech items found in the last 24 hours.",
        encode_text(digest_title)
    )
}

/// Fetch every feed and return the selected articles, newest first.
pub async fn collect_articles(ctx: &AppContext, window: RecencyWindow) -> Vec<Article> {
    let feeds = fetch_all(ctx.fetcher.as_ref(), &ctx.config.feeds, &ctx.normalizer).await;
    let unique = deduplicate(&feeds, window);
    tracing::info!(
        "{} unique articles since {}",
        unique.len(),
        window.cutoff.format("%Y-%m-%d %H:%M UTC")
    );

    select(unique.into_values(), ctx.config.max_articles)
}

pub async fn run(ctx: &AppContext, now: DateTime<Utc>) -> Result<RunOutcome> {
    let window = RecencyWindow::ending_at(now);
    let articles = collect_articles(ctx, window).await;

    if articles.is_empty() {
        tracing::info!("No articles in the last 24 hours, posting fallback notice");
        ctx.publisher
            .publish_html(&fallback_message(&ctx.config.digest_title))
            .await?;
        return Ok(RunOutcome::NothingFound);
    }

    tracing::info!("Summarizing {} articles", articles.len());
    let prompt = build_prompt(&articles, now);
    let digest = ctx.summarizer.summarize(&prompt).await?;

    ctx.publisher.publish_html(&digest).await?;
    tracing::info!("Digest published");

    Ok(RunOutcome::Published {
        articles: articles.len(),
    })
}
