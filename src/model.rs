use serde::{Deserialize, Serialize};

/// A crafting material required by a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reagent {
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// The title and reagent list scraped from one enchant page.
///
/// Only the extractor builds these, and it never builds one with an empty
/// reagent list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "name_part1")]
    pub title_part1: String,
    #[serde(rename = "name_part2")]
    pub title_part2: String,
    pub reagents: Vec<Reagent>,
}

impl Recipe {
    /// Full title as it appeared on the page, re-joined with a dash.
    pub fn title(&self) -> String {
        if self.title_part2.is_empty() {
            self.title_part1.clone()
        } else {
            format!("{} - {}", self.title_part1, self.title_part2)
        }
    }
}

/// A recipe persisted under the URL it was scraped from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEnchant {
    pub id: u64,
    pub url: String,
    #[serde(flatten)]
    pub recipe: Recipe,
}

/// A reagent total across several requested recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedReagent {
    pub name: String,
    #[serde(rename = "quantity")]
    pub total_quantity: u64,
    pub icon_url: Option<String>,
}
