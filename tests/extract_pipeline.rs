use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use support_directory::config::ExtractConfig;
use support_directory::constants::EXPORT_HEADER;
use support_directory::{DirectoryError, Extractor};
use tempfile::tempdir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tenants.xlsx")
}

fn config(input: PathBuf, output: PathBuf) -> ExtractConfig {
    ExtractConfig {
        input,
        output,
        ..ExtractConfig::default()
    }
}

#[test]
fn test_extracts_fixture_workbook() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("socialweb_export.txt");

    let report = Extractor::new(config(fixture(), output.clone())).run()?;

    assert_eq!(report.rows_read, 6);
    assert_eq!(report.rows_without_marker, 1);
    assert_eq!(report.candidates_dropped, 1);
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(report.custom_merged, 11);
    assert_eq!(report.entries_written(), 15);
    assert_eq!(report.output_file, output);

    let text = fs::read_to_string(&output)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], EXPORT_HEADER);
    assert_eq!(lines.len(), 16);
    assert!(text.ends_with('\n'));

    // First-seen row wins over the lowercase duplicate.
    assert!(lines.contains(&"Alice Corp;;socialweb.ch/x/login/support/;Bob"));
    assert!(!text.contains("alice corp;"));
    // No marker, no line.
    assert!(!text.contains("nope.com"));
    // Multi-URL cell, embedded delimiter substituted, default owner.
    assert!(lines.contains(
        &"Bergheim;Wohngruppe, Tagesstätte;berg.socialweb.ch/login/support/;Unbekannt"
    ));
    assert!(lines.contains(
        &"Bergheim;Wohngruppe, Tagesstätte;berg2.socialweb.ch/app/login/support/;Unbekannt"
    ));
    assert!(!text.contains("ghost.socialweb.ch"));

    for line in &lines[1..] {
        assert_eq!(line.matches(';').count(), 3, "line {line}");
        let url = line.split(';').nth(2).unwrap_or_default();
        assert_eq!(url.matches("/login/support/").count(), 1, "line {line}");
    }

    let names: Vec<String> = lines[1..]
        .iter()
        .map(|l| l.split(';').next().unwrap_or_default().to_lowercase())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    Ok(())
}

#[test]
fn test_rerun_is_stable() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("export.txt");
    let extractor = Extractor::new(config(fixture(), output.clone()));

    extractor.run()?;
    let first = fs::read_to_string(&output)?;
    extractor.run()?;
    let second = fs::read_to_string(&output)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_missing_workbook_leaves_output_untouched() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("export.txt");
    fs::write(&output, "previous run")?;

    let err = Extractor::new(config(temp_dir.path().join("input.xlsx"), output.clone()))
        .run()
        .unwrap_err();

    assert!(matches!(err, DirectoryError::NotFound { .. }));
    assert_ne!(err.exit_code(), 0);
    assert_eq!(fs::read_to_string(&output)?, "previous run");
    Ok(())
}

#[test]
fn test_corrupt_workbook_is_a_format_error() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = temp_dir.path().join("input.xlsx");
    let output = temp_dir.path().join("export.txt");
    fs::write(&input, "Anzeigename;Webadresse\n")?;

    let err = Extractor::new(config(input, output.clone())).run().unwrap_err();

    assert!(matches!(err, DirectoryError::Format { .. }));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_missing_sheet_is_a_format_error() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("export.txt");
    let mut cfg = config(fixture(), output.clone());
    cfg.sheet_index = 4;

    let err = Extractor::new(cfg).run().unwrap_err();

    assert!(matches!(err, DirectoryError::Format { .. }));
    assert!(!output.exists());
    Ok(())
}
