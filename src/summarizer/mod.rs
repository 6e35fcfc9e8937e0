pub mod openai;

use async_trait::async_trait;

use crate::app::Result;

pub use openai::ChatCompletionsClient;

/// Turns a digest prompt into finished digest text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String>;
}
