//! Spreadsheet → delimited export.
//!
//! Rows are filtered on the URL marker, multi-URL cells are split, URLs are
//! normalized to carry the support path, the fixed custom links are merged
//! in, and the result is deduplicated and sorted before being written.

pub mod columns;
pub mod custom;
pub mod sheet;
pub mod url;

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::output::write_atomic;
use crate::record;
use crate::types::Entry;
use columns::ColumnMap;
use custom::{CustomEntry, CUSTOM_ENTRIES};
use sheet::Sheet;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Summary of one extractor run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExtractReport {
    pub rows_read: usize,
    pub rows_without_marker: usize,
    pub candidates_dropped: usize,
    pub custom_merged: usize,
    pub duplicates_removed: usize,
    pub entries: Vec<Entry>,
    pub output_file: PathBuf,
}

impl ExtractReport {
    pub fn entries_written(&self) -> usize {
        self.entries.len()
    }
}

pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Reads the spreadsheet, builds the entry list and replaces the export
    /// file. Nothing is written unless every step before it succeeded.
    #[instrument(skip(self), fields(input = %self.config.input.display()))]
    pub fn run(&self) -> Result<ExtractReport> {
        let sheet = sheet::load_sheet(&self.config.input, self.config.sheet_index)?;
        let mut report = self.process(&sheet)?;

        let contents = record::serialize_all(&report.entries);
        write_atomic(&self.config.output, contents.as_bytes())?;
        report.output_file = self.config.output.clone();

        info!(
            "File saved: {} ({} bytes, {} entries)",
            self.config.output.display(),
            contents.len(),
            report.entries_written()
        );
        Ok(report)
    }

    /// Everything between loading the sheet and writing the file.
    pub fn process(&self, sheet: &Sheet) -> Result<ExtractReport> {
        let columns = ColumnMap::resolve(&sheet.headers)?;
        info!("All required columns mapped successfully");

        let mut report = ExtractReport::default();
        let mut entries = self.entries_from_rows(&columns, &sheet.rows, &mut report);
        info!(
            "Processed {} rows, {} without a {} URL",
            report.rows_read, report.rows_without_marker, self.config.marker
        );

        report.custom_merged = self.merge_custom(&mut entries, CUSTOM_ENTRIES);

        let (entries, duplicates) = dedup_and_sort(entries);
        report.duplicates_removed = duplicates;
        report.entries = entries;
        Ok(report)
    }

    /// Turns spreadsheet rows into candidate entries, in row order.
    pub fn entries_from_rows(
        &self,
        columns: &ColumnMap,
        rows: &[Vec<String>],
        report: &mut ExtractReport,
    ) -> Vec<Entry> {
        let mut entries = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            report.rows_read += 1;
            let raw_urls = Sheet::cell(row, columns.url);
            if !url::has_marker(raw_urls, &self.config.marker) {
                debug!(row = index + 2, "No {} URL, skipping", self.config.marker);
                report.rows_without_marker += 1;
                continue;
            }

            let name = Sheet::cell(row, columns.display_name);
            let description = Sheet::cell(row, columns.description);
            let owner = match Sheet::cell(row, columns.owner).trim() {
                "" => self.config.default_owner.as_str(),
                owner => owner,
            };

            for candidate in raw_urls.split(',').map(str::trim) {
                if candidate.is_empty() || !url::has_marker(candidate, &self.config.marker) {
                    report.candidates_dropped += 1;
                    continue;
                }
                let entry = self.build_entry(name, description, candidate, owner);
                if entry.display_name.is_empty() {
                    debug!(row = index + 2, url = %entry.url, "Empty display name, dropping");
                    report.candidates_dropped += 1;
                    continue;
                }
                debug!("Extracted: {} - {}", entry.display_name, entry.url);
                entries.push(entry);
            }
        }
        entries
    }

    /// Appends the custom links after the spreadsheet entries, so that a
    /// spreadsheet row wins over a custom link with the same key.
    pub fn merge_custom(&self, entries: &mut Vec<Entry>, custom: &[CustomEntry]) -> usize {
        for item in custom {
            let entry = self.build_entry(item.display_name, item.description, item.url, item.owner);
            debug!("Custom URL: {} - {}", entry.display_name, entry.url);
            entries.push(entry);
        }
        custom.len()
    }

    /// Fields are sanitized here so that deduplication sees the values that
    /// end up in the export.
    fn build_entry(&self, name: &str, description: &str, raw_url: &str, owner: &str) -> Entry {
        let url = url::normalize_support_url(raw_url, &self.config.support_path);
        Entry::new(
            record::sanitize_field(name),
            record::sanitize_field(description),
            record::sanitize_field(&url),
            record::sanitize_field(owner),
        )
    }
}

/// Drops later duplicates by (`display_name` ignoring case, `url`) and sorts
/// the survivors case-insensitively by name. The sort is stable, so equal
/// names keep their encounter order. Returns the entries and the number of
/// duplicates removed.
pub fn dedup_and_sort(entries: Vec<Entry>) -> (Vec<Entry>, usize) {
    let before = entries.len();
    let mut seen = HashSet::with_capacity(before);
    let mut unique: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.dedup_key()))
        .collect();
    unique.sort_by_cached_key(|entry| entry.display_name.to_lowercase());
    let removed = before - unique.len();
    (unique, removed)
}
