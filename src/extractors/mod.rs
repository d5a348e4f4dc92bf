use crate::model::Recipe;
use scraper::Html;
use thiserror::Error;

mod enchant;
pub mod query;
mod reagent;
mod rows;

pub use enchant::EnchantExtractor;
pub use rows::{ReagentHeadingRows, ReagentIdRows, RowStrategy};

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, markup: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(markup),
        }
    }
}

/// The page holds no enchant recipe we can recognize.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    #[error("page has no title heading")]
    Title,
    #[error("no reagents found on page")]
    Reagents,
}

pub trait Extractor {
    fn parse(&self, context: &ParsingContext) -> Result<Recipe, NotFound>;
}

/// Extract a recipe from raw page markup.
///
/// Pure and reentrant; malformed markup degrades to skipped rows or
/// [`NotFound`], never a panic.
pub fn extract(markup: &str) -> Result<Recipe, NotFound> {
    extract_from(String::new(), markup)
}

/// Like [`extract`], with the source URL recorded for logging.
pub fn extract_from(url: impl Into<String>, markup: &str) -> Result<Recipe, NotFound> {
    let context = ParsingContext::new(url, markup);
    EnchantExtractor::default().parse(&context)
}
