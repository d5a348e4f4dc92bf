pub mod aggregate;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod service;
pub mod store;

use std::time::Duration;

use log::debug;

pub use aggregate::aggregate;
pub use error::EnchantError;
pub use extractors::{extract, NotFound};
pub use fetchers::{Fetcher, RequestFetcher};
pub use model::{AggregatedReagent, Reagent, Recipe, StoredEnchant};
pub use service::EnchantService;
pub use store::EnchantStore;

/// Fetch `url` and extract the enchant recipe on it without storing it.
pub async fn fetch_recipe(url: &str) -> Result<Recipe, EnchantError> {
    fetch_recipe_with_timeout(url, None).await
}

pub async fn fetch_recipe_with_timeout(
    url: &str,
    timeout: Option<Duration>,
) -> Result<Recipe, EnchantError> {
    let fetcher = RequestFetcher::new(timeout, None)?;
    let markup = fetcher.fetch(url).await?;
    let recipe = extractors::extract_from(url, &markup)?;
    debug!("{:#?}", recipe);
    Ok(recipe)
}
