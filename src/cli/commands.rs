use chrono::Utc;

use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::dedup::RecencyWindow;
use crate::pipeline::{self, RunOutcome};
use crate::prompt::build_prompt;

/// Full run: pre-flight check, then fetch → summarize → publish.
pub async fn run_digest(config: Config) -> Result<()> {
    config.validate()?;

    let ctx = AppContext::new(config)?;
    match pipeline::run(&ctx, Utc::now()).await? {
        RunOutcome::NothingFound => println!("No recent articles; posted fallback notice"),
        RunOutcome::Published { articles } => {
            println!("Published digest of {} articles", articles)
        }
    }

    Ok(())
}

pub async fn list_articles(config: Config) -> Result<()> {
    let ctx = AppContext::new(config)?;
    let articles = pipeline::collect_articles(&ctx, RecencyWindow::ending_at(Utc::now())).await;

    if articles.is_empty() {
        println!("No articles in the last 24 hours");
        return Ok(());
    }

    for article in articles {
        println!(
            "{} [{}] {}\n  {}",
            article.display_timestamp(),
            article.source,
            article.title,
            article.url
        );
    }

    Ok(())
}

pub async fn print_prompt(config: Config) -> Result<()> {
    let ctx = AppContext::new(config)?;
    let now = Utc::now();
    let articles = pipeline::collect_articles(&ctx, RecencyWindow::ending_at(now)).await;

    if articles.is_empty() {
        println!("No articles in the last 24 hours; the fallback notice would be posted");
        return Ok(());
    }

    println!("{}", build_prompt(&articles, now));
    Ok(())
}
