use async_trait::async_trait;

use crate::error::EnchantError;

mod request;

pub use request::{RequestFetcher, DEFAULT_USER_AGENT};

/// Retrieves the raw markup of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, EnchantError>;
}
