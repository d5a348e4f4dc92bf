use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::ElementRef;

use super::query::{find_all, find_first, Predicate};
use crate::model::Reagent;

const QUANTITY_ATTR: &str = "data-icon-list-quantity";

/// Item rarity classes; an anchor carrying one of them is an item name link.
const QUALITY_CLASSES: &[&str] = &["q1", "q2", "q3", "q4"];

// Tied to the source site's current icon markup:
// style="background-image: url(&quot;https://.../icon.jpg&quot;)"
static ICON_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\("([^"]*)"\)"#).expect("icon url pattern is valid"));

/// Turn a matched table row into a reagent.
///
/// Returns `None` when the row has no quality-tier name link, which is how
/// the source marks rows that are not items.
pub fn reagent_from_row(row: ElementRef) -> Option<Reagent> {
    let Some(link) = find_first(row, &[Predicate::Tag("a"), Predicate::AnyClass(QUALITY_CLASSES)])
    else {
        debug!("Skipping row without a quality-tier name link");
        return None;
    };

    let name = link.text().collect::<String>().trim().to_string();
    if name.is_empty() {
        debug!("Skipping row with an empty item name");
        return None;
    }

    Some(Reagent {
        name,
        quantity: quantity(row),
        icon_url: icon_url(row),
    })
}

fn quantity(row: ElementRef) -> u32 {
    row.value()
        .attr(QUANTITY_ATTR)
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|&q| q > 0)
        .unwrap_or(1)
}

fn icon_url(row: ElementRef) -> Option<String> {
    // First `ins` under any icon container, not just the first container
    let ins = find_all(row, &[Predicate::Tag("div"), Predicate::Class("iconsmall")])
        .into_iter()
        .find_map(|icon| find_first(icon, &[Predicate::Tag("ins")]))?;
    let style = ins.value().attr("style")?;
    if !style.contains("background-image") {
        return None;
    }
    ICON_URL
        .captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
