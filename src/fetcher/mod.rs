pub mod http_fetcher;
pub mod sequential;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;
pub use sequential::fetch_all;

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieve the raw feed document at `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
