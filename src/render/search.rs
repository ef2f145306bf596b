//! Search filtering as the page applies it.
//!
//! The rendered document stores [`search_text`] in each item's
//! `data-search-text` attribute; `assets/search.js` hides items whose text
//! does not contain the query (case-insensitive) and hides sections left
//! without visible items. The functions here implement the same rule so it
//! can be tested without a browser.

use super::sections::Section;
use crate::types::Entry;

/// Haystack for one entry: name, description and the scheme-less URL.
pub fn search_text(entry: &Entry) -> String {
    format!(
        "{} {} {}",
        entry.display_name,
        entry.description,
        entry.url_display()
    )
}

/// Case-insensitive containment. An empty query matches everything.
pub fn matches(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}

pub fn filter<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| matches(&search_text(entry), query))
        .collect()
}

/// Letters of the sections that still have at least one matching entry.
pub fn visible_sections(sections: &[Section], query: &str) -> Vec<char> {
    sections
        .iter()
        .filter(|section| !filter(&section.entries, query).is_empty())
        .map(|section| section.letter)
        .collect()
}
