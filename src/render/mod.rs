//! Delimited export → static HTML page with search and A–Z navigation.

pub mod page;
pub mod search;
pub mod sections;

use crate::config::RenderConfig;
use crate::constants::TIMESTAMP_FORMAT;
use crate::error::{DirectoryError, Result};
use crate::output::write_atomic;
use crate::record;
use crate::types::Entry;
use askama::Template;
use page::DirectoryPage;
use std::fs;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Summary of one renderer run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub entries_rendered: usize,
    pub sections: usize,
    pub skipped_lines: usize,
    pub output_file: PathBuf,
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    #[instrument(skip(self), fields(input = %self.config.input.display()))]
    pub fn run(&self) -> Result<RenderReport> {
        let entries = self.read_entries()?;
        let generated_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();

        let (html, sections) = self.render_document(&entries.entries, generated_at)?;
        write_atomic(&self.config.output, html.as_bytes())?;

        if entries.skipped > 0 {
            warn!("Skipped {} malformed lines", entries.skipped);
        }
        info!("HTML file created: {}", self.config.output.display());
        info!("{} entries processed", entries.entries.len());

        Ok(RenderReport {
            entries_rendered: entries.entries.len(),
            sections,
            skipped_lines: entries.skipped,
            output_file: self.config.output.clone(),
        })
    }

    /// Reads and parses the delimited export.
    pub fn read_entries(&self) -> Result<record::ParsedRecords> {
        let path = &self.config.input;
        if !path.exists() {
            return Err(DirectoryError::not_found(path));
        }
        let bytes = fs::read(path).map_err(|e| DirectoryError::io(path, e))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| DirectoryError::format(path, format!("not valid UTF-8: {e}")))?;

        let parsed = record::parse_document(&text);
        info!("Parsed {} entries from {}", parsed.entries.len(), path.display());
        Ok(parsed)
    }

    /// Renders `entries` to a complete HTML document. Returns the document
    /// and the number of non-empty sections.
    pub fn render_document(&self, entries: &[Entry], generated_at: String) -> Result<(String, usize)> {
        let sections = sections::group_sections(entries);
        let page = DirectoryPage::new(
            &self.config.title,
            &self.config.logout_url,
            &sections,
            self.config.columns,
            generated_at,
        );
        let html = page.render()?;
        Ok((html, sections.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> Renderer {
        Renderer::new(RenderConfig::default())
    }

    fn render(entries: &[Entry]) -> String {
        renderer()
            .render_document(entries, "01.02.2026 03:04:05".to_string())
            .unwrap()
            .0
    }

    #[test]
    fn empty_input_renders_empty_state() {
        let html = render(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Keine Einträge vorhanden."));
        assert!(html.contains("Anzahl Einträge: 0"));
        assert!(html.contains("Datei erstellt am: 01.02.2026 03:04:05"));
        assert!(!html.contains("<section>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render(&[Entry::new(
            "<script>alert(1)</script>",
            "\"quoted\" & more",
            "x.socialweb.ch/login/support/",
            "<b>Owner</b>",
        )]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;"));
        assert!(!html.contains("<b>Owner</b>"));
        assert!(!html.contains("\"quoted\" & more"));
    }

    #[test]
    fn sections_and_navigation_follow_entries() {
        let entries = vec![
            Entry::new("Alice Corp", "Kita", "alice.socialweb.ch/login/support/", "Bob"),
            Entry::new("Bergheim", "", "berg.socialweb.ch/login/support/", ""),
            Entry::new("3 Linden", "", "linden.socialweb.ch/login/support/", ""),
        ];
        let (html, sections) = renderer()
            .render_document(&entries, "now".to_string())
            .unwrap();

        assert_eq!(sections, 3);
        assert!(html.contains(r##"<a href="#A">A</a>"##));
        assert!(html.contains(r##"<a href="#B">B</a>"##));
        assert!(html.contains("<span>C</span>"));
        assert!(html.contains(r##"<a href="#num">#</a>"##));
        assert!(html.contains(r#"<h2 id="num">#</h2>"#));
        assert!(html.contains("Anzahl Einträge: 3"));
        assert!(html.contains(">Bob</div>"));
        assert!(!html.contains("Keine Einträge vorhanden."));
        // Section order: A, B, then the catch-all.
        let a = html.find(r#"<h2 id="A">"#).unwrap();
        let b = html.find(r#"<h2 id="B">"#).unwrap();
        let num = html.find(r#"<h2 id="num">"#).unwrap();
        assert!(a < b && b < num);
    }

    #[test]
    fn catch_all_is_not_navigable_when_unused() {
        let html = render(&[Entry::new("Alice", "", "a.socialweb.ch/login/support/", "")]);
        assert!(!html.contains(r##"href="#num""##));
    }

    #[test]
    fn each_section_gets_configured_column_count() {
        let entries: Vec<Entry> = (0..5)
            .map(|i| Entry::new(format!("Alpha {i}"), "", format!("a{i}.socialweb.ch/login/support/"), ""))
            .collect();
        let html = render(&entries);
        assert_eq!(html.matches(r#"<ul class="column">"#).count(), 3);
        assert_eq!(html.matches("<li ").count(), 5);

        let narrow = Renderer::new(RenderConfig {
            columns: 2,
            ..RenderConfig::default()
        });
        let (html, _) = narrow.render_document(&entries, "now".to_string()).unwrap();
        assert_eq!(html.matches(r#"<ul class="column">"#).count(), 2);
    }

    #[test]
    fn search_text_attribute_matches_search_module() {
        let entry = Entry::new("Zeta Heim", "Wohngruppe", "zeta.socialweb.ch/login/support/", "");
        let html = render(std::slice::from_ref(&entry));
        assert!(html.contains("data-search-text=\"Zeta Heim Wohngruppe "));
        assert!(html.contains("class=\"search-box\""));
        assert!(html.contains("e.key === \"Escape\""));
    }
}
