use crate::constants::{CATCH_ALL_ANCHOR, CATCH_ALL_SECTION};
use crate::types::Entry;
use std::collections::BTreeMap;

/// Entries sharing a first letter. `letter` is `A`–`Z` or `#`.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub letter: char,
    pub entries: Vec<Entry>,
}

impl Section {
    /// Anchor id used by the navigation links.
    pub fn anchor(&self) -> String {
        anchor_for(self.letter)
    }

    pub fn columns(&self, count: usize) -> Vec<Vec<&Entry>> {
        distribute_round_robin(&self.entries, count)
    }
}

/// One item in the A–Z navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: char,
    pub anchor: String,
    pub enabled: bool,
}

pub fn anchor_for(letter: char) -> String {
    if letter == CATCH_ALL_SECTION {
        CATCH_ALL_ANCHOR.to_string()
    } else {
        letter.to_string()
    }
}

/// Uppercased first character of `label`, or `#` when it is not an ASCII
/// letter (digits, punctuation, umlauts, empty labels).
pub fn section_letter(label: &str) -> char {
    match label.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => CATCH_ALL_SECTION,
    }
}

/// Groups entries into sections ordered `A`–`Z` then `#`. Within a section
/// entries are sorted case-insensitively by label; the sort is stable, so
/// already sorted input keeps its order.
pub fn group_sections(entries: &[Entry]) -> Vec<Section> {
    let mut letters: BTreeMap<(bool, char), Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        let letter = section_letter(entry.label());
        letters
            .entry((letter == CATCH_ALL_SECTION, letter))
            .or_default()
            .push(entry.clone());
    }

    letters
        .into_iter()
        .map(|((_, letter), mut entries)| {
            entries.sort_by_cached_key(Entry::sort_key);
            Section { letter, entries }
        })
        .collect()
}

/// All 26 letters, enabled when the section exists, followed by `#` when
/// the catch-all section is populated.
pub fn navigation(sections: &[Section]) -> Vec<NavLink> {
    let used = |letter: char| sections.iter().any(|s| s.letter == letter);
    let mut links: Vec<NavLink> = ('A'..='Z')
        .map(|letter| NavLink {
            label: letter,
            anchor: anchor_for(letter),
            enabled: used(letter),
        })
        .collect();
    if used(CATCH_ALL_SECTION) {
        links.push(NavLink {
            label: CATCH_ALL_SECTION,
            anchor: anchor_for(CATCH_ALL_SECTION),
            enabled: true,
        });
    }
    links
}

/// Deals items into `count` columns round-robin: item `i` lands in column
/// `i % count`, so reading the columns row by row follows the input order.
pub fn distribute_round_robin<T>(items: &[T], count: usize) -> Vec<Vec<&T>> {
    let count = count.max(1);
    let mut columns: Vec<Vec<&T>> = (0..count).map(|_| Vec::new()).collect();
    for (index, item) in items.iter().enumerate() {
        columns[index % count].push(item);
    }
    columns
}
