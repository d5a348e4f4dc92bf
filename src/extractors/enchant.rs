use log::debug;
use scraper::{ElementRef, Html};

use super::query::{find_first, Predicate};
use super::reagent::reagent_from_row;
use super::rows::{ReagentHeadingRows, ReagentIdRows, RowStrategy};
use super::{Extractor, NotFound, ParsingContext};
use crate::model::Recipe;

/// Extracts an enchant's title and reagents from a wiki spell page.
pub struct EnchantExtractor {
    strategies: Vec<Box<dyn RowStrategy + Send + Sync>>,
}

impl Default for EnchantExtractor {
    fn default() -> Self {
        Self {
            strategies: vec![Box::new(ReagentIdRows), Box::new(ReagentHeadingRows)],
        }
    }
}

impl EnchantExtractor {
    /// Rows from the first strategy that matches anything at all.
    ///
    /// A later strategy is only consulted when every earlier one found zero
    /// rows, even if the rows that were found turn out to hold no items.
    fn find_rows<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        for strategy in &self.strategies {
            let rows = strategy.find_rows(document);
            if !rows.is_empty() {
                debug!("Found {} reagent rows using {} layout", rows.len(), strategy.name());
                return rows;
            }
            debug!("No reagent rows found using {} layout", strategy.name());
        }
        Vec::new()
    }
}

impl Extractor for EnchantExtractor {
    fn parse(&self, context: &ParsingContext) -> Result<Recipe, NotFound> {
        let (title_part1, title_part2) =
            extract_title(&context.document).ok_or(NotFound::Title)?;

        let reagents: Vec<_> = self
            .find_rows(&context.document)
            .into_iter()
            .filter_map(reagent_from_row)
            .collect();

        if reagents.is_empty() {
            debug!("No reagents found for {}", context.url);
            return Err(NotFound::Reagents);
        }

        Ok(Recipe {
            title_part1,
            title_part2,
            reagents,
        })
    }
}

fn extract_title(document: &Html) -> Option<(String, String)> {
    let heading = find_first(
        document.root_element(),
        &[Predicate::Tag("h1"), Predicate::Class("heading-size-1")],
    )?;
    let text = heading.text().collect::<String>();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    Some(split_title(&text))
}

/// Split "Enchant Bracer - Major Strength" on the first dash.
fn split_title(title: &str) -> (String, String) {
    match title.split_once('-') {
        Some((first, second)) => (first.trim().to_string(), second.trim().to_string()),
        None => (title.to_string(), String::new()),
    }
}
