use log::{info, warn};

use crate::aggregate::aggregate;
use crate::error::EnchantError;
use crate::extractors::extract_from;
use crate::fetchers::Fetcher;
use crate::model::{AggregatedReagent, StoredEnchant};
use crate::store::EnchantStore;

/// Create, list, delete and total enchants on top of a store and a fetcher.
pub struct EnchantService<F> {
    store: EnchantStore,
    fetcher: F,
}

impl<F: Fetcher> EnchantService<F> {
    pub fn new(store: EnchantStore, fetcher: F) -> Self {
        Self { store, fetcher }
    }

    pub fn store(&self) -> &EnchantStore {
        &self.store
    }

    /// Scrape `url` and store the recipe found there.
    ///
    /// The URL is checked against the store before anything is fetched.
    pub async fn create_from_url(&self, url: &str) -> Result<StoredEnchant, EnchantError> {
        if self.store.exists_by_url(url) {
            return Err(EnchantError::AlreadyExists(url.to_string()));
        }

        let markup = self.fetcher.fetch(url).await?;
        let recipe = extract_from(url, &markup).map_err(|err| {
            warn!("Could not extract enchant from {}: {}", url, err);
            err
        })?;

        info!(
            "Extracted {} with {} reagents from {}",
            recipe.title(),
            recipe.reagents.len(),
            url
        );
        self.store.insert(url, recipe)
    }

    pub fn list(&self) -> Vec<StoredEnchant> {
        self.store.list()
    }

    pub fn delete(&self, id: u64) -> Result<(), EnchantError> {
        if self.store.delete(id)? {
            Ok(())
        } else {
            Err(EnchantError::UnknownEnchant(id))
        }
    }

    /// Reagent totals for `ids`, where an id repeated n times means n crafts.
    pub fn calculate(&self, ids: &[u64]) -> Vec<AggregatedReagent> {
        aggregate(&self.store.list(), ids)
    }
}
