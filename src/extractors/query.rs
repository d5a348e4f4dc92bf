//! A small typed query layer over a parsed document.
//!
//! Extractors describe what they are looking for as a list of [`Predicate`]s
//! that must all hold for an element, instead of building selector strings
//! at runtime.

use scraper::node::Element;
use scraper::ElementRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Element has this tag name (lowercase).
    Tag(&'static str),
    /// Element `id` equals the value.
    Id(&'static str),
    /// Element `id` starts with the value.
    IdPrefix(&'static str),
    /// Element carries this class.
    Class(&'static str),
    /// Element carries at least one of these classes.
    AnyClass(&'static [&'static str]),
    /// Element has the attribute, whatever its value.
    HasAttr(&'static str),
    /// Attribute is present and equal to the value.
    AttrEquals(&'static str, &'static str),
    /// Inline style does not contain `display:none`.
    Visible,
}

impl Predicate {
    pub fn matches(&self, element: &Element) -> bool {
        match *self {
            Predicate::Tag(name) => element.name() == name,
            Predicate::Id(id) => element.id() == Some(id),
            Predicate::IdPrefix(prefix) => element.id().is_some_and(|id| id.starts_with(prefix)),
            Predicate::Class(class) => element.classes().any(|c| c == class),
            Predicate::AnyClass(classes) => element.classes().any(|c| classes.contains(&c)),
            Predicate::HasAttr(name) => element.attr(name).is_some(),
            Predicate::AttrEquals(name, value) => element.attr(name) == Some(value),
            Predicate::Visible => !element.attr("style").is_some_and(is_hidden_style),
        }
    }
}

fn matches_all(element: &ElementRef, predicates: &[Predicate]) -> bool {
    predicates.iter().all(|p| p.matches(element.value()))
}

fn is_hidden_style(style: &str) -> bool {
    let compact: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    compact.contains("display:none")
}

/// First descendant of `scope` (excluding `scope` itself) in document order.
pub fn find_first<'a>(scope: ElementRef<'a>, predicates: &[Predicate]) -> Option<ElementRef<'a>> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| matches_all(el, predicates))
}

/// All descendants of `scope` (excluding `scope` itself) in document order.
pub fn find_all<'a>(scope: ElementRef<'a>, predicates: &[Predicate]) -> Vec<ElementRef<'a>> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| matches_all(el, predicates))
        .collect()
}

/// First element that comes after `from` in document order.
///
/// Like walking forward through the source text: `from`'s own children
/// come first, then everything after its closing tag.
pub fn find_next<'a>(from: ElementRef<'a>, predicates: &[Predicate]) -> Option<ElementRef<'a>> {
    let start = from.id();
    let root = from.ancestors().last().unwrap_or(*from);
    root.descendants()
        .skip_while(|node| node.id() != start)
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| matches_all(el, predicates))
}

/// First later sibling of `from` that matches.
pub fn find_next_sibling<'a>(
    from: ElementRef<'a>,
    predicates: &[Predicate],
) -> Option<ElementRef<'a>> {
    from.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| matches_all(el, predicates))
}
