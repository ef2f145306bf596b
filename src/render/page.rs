use super::search::search_text;
use super::sections::{navigation, NavLink, Section};
use crate::types::Entry;
use askama::Template;

pub const STYLES: &str = include_str!("../../assets/directory.css");
pub const SCRIPT: &str = include_str!("../../assets/search.js");

/// The whole HTML document. All entry text is escaped by askama.
#[derive(Template)]
#[template(path = "directory.html")]
pub struct DirectoryPage<'a> {
    pub title: &'a str,
    pub styles: &'a str,
    pub script: &'a str,
    pub logout_url: &'a str,
    pub nav: Vec<NavLink>,
    pub sections: Vec<SectionView<'a>>,
    pub columns: usize,
    pub generated_at: String,
    pub total_entries: usize,
}

pub struct SectionView<'a> {
    pub letter: char,
    pub anchor: String,
    pub columns: Vec<ColumnView<'a>>,
}

pub struct ColumnView<'a> {
    pub entries: Vec<EntryView<'a>>,
}

pub struct EntryView<'a> {
    pub label: &'a str,
    pub href: String,
    pub has_url: bool,
    pub meta: String,
    pub owner: &'a str,
    pub search_text: String,
}

impl<'a> EntryView<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        let meta = [entry.description.as_str(), entry.url_display()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            label: entry.label(),
            href: entry.href(),
            has_url: !entry.url.is_empty(),
            meta,
            owner: &entry.owner,
            search_text: search_text(entry),
        }
    }
}

impl<'a> SectionView<'a> {
    pub fn new(section: &'a Section, columns: usize) -> Self {
        Self {
            letter: section.letter,
            anchor: section.anchor(),
            columns: section
                .columns(columns)
                .into_iter()
                .map(|column| ColumnView {
                    entries: column.into_iter().map(EntryView::new).collect(),
                })
                .collect(),
        }
    }
}

impl<'a> DirectoryPage<'a> {
    pub fn new(
        title: &'a str,
        logout_url: &'a str,
        sections: &'a [Section],
        columns: usize,
        generated_at: String,
    ) -> Self {
        Self {
            title,
            styles: STYLES,
            script: SCRIPT,
            logout_url,
            nav: navigation(sections),
            sections: sections
                .iter()
                .map(|section| SectionView::new(section, columns))
                .collect(),
            columns,
            generated_at,
            total_entries: sections.iter().map(|s| s.entries.len()).sum(),
        }
    }
}
