use scraper::{ElementRef, Html};

use super::query::{find_all, find_first, find_next, Predicate};

/// One known layout of the reagent table.
pub trait RowStrategy {
    fn name(&self) -> &'static str;
    fn find_rows<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>>;
}

/// Flat layout: every reagent row carries an `icon-list-reagents*` id.
/// Rows hidden with an inline `display:none` belong to alternate ranks and
/// are ignored.
pub struct ReagentIdRows;

impl RowStrategy for ReagentIdRows {
    fn name(&self) -> &'static str {
        "reagent-id"
    }

    fn find_rows<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        find_all(
            document.root_element(),
            &[
                Predicate::Tag("tr"),
                Predicate::IdPrefix("icon-list-reagents"),
                Predicate::Visible,
            ],
        )
    }
}

/// Sectioned layout: a "Reagents" heading followed somewhere later by an
/// `icon-list` table whose item rows carry a quantity attribute.
pub struct ReagentHeadingRows;

impl RowStrategy for ReagentHeadingRows {
    fn name(&self) -> &'static str {
        "reagent-heading"
    }

    fn find_rows<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        let Some(heading) = find_first(
            document.root_element(),
            &[Predicate::Tag("h2"), Predicate::Id("icon-list-heading-reagents")],
        ) else {
            return Vec::new();
        };

        let Some(table) = find_next(heading, &[Predicate::Tag("table"), Predicate::Class("icon-list")])
        else {
            return Vec::new();
        };

        find_all(
            table,
            &[Predicate::Tag("tr"), Predicate::HasAttr("data-icon-list-quantity")],
        )
    }
}
