use thiserror::Error;

use crate::extractors::NotFound;

/// Errors that can occur while importing, storing or totalling enchants
#[derive(Error, Debug)]
pub enum EnchantError {
    /// Failed to fetch the page (network error or timeout)
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page answered with a non-success status
    #[error("Fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The page did not contain a recognizable enchant recipe
    #[error("Failed to parse enchant data: {0}")]
    RecipeNotFound(#[from] NotFound),

    /// An enchant scraped from this URL is already stored
    #[error("Enchant already exists: {0}")]
    AlreadyExists(String),

    /// No stored enchant has this id
    #[error("Enchant not found: {0}")]
    UnknownEnchant(u64),

    /// Reading or writing the store file failed
    #[error("Store I/O error: {0}")]
    StoreError(#[from] std::io::Error),

    /// The store file could not be encoded or decoded
    #[error("Store serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The store file was written by an incompatible version
    #[error("Unsupported store version {found} (expected {expected})")]
    UnsupportedStoreVersion { found: u32, expected: u32 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
