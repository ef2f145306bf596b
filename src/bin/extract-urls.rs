//! Extracts support links from the tenant spreadsheet into the delimited
//! export read by `render-html`.
//!
//! Usage:
//!   extract-urls                      # input.xlsx -> socialweb_export.txt
//!   extract-urls --input other.xlsx   # override the spreadsheet

use clap::Parser;
use std::process::ExitCode;
use support_directory::cli::CommonArgs;
use support_directory::config::LoggingConfig;
use support_directory::{logging, DirectoryError, ExtractReport, Extractor};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "extract-urls")]
#[command(about = "Extract socialweb support links from the tenant spreadsheet")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Worksheet index to read
    #[arg(long)]
    sheet: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.common.load_config() {
        Ok(config) => config,
        Err(e) => {
            let _guard = logging::init_logging(&LoggingConfig::default());
            return fail(&e);
        }
    };
    let _guard = logging::init_logging(&config.logging);

    let mut extract = config.extract;
    if let Some(input) = cli.common.input {
        extract.input = input;
    }
    if let Some(output) = cli.common.output {
        extract.output = output;
    }
    if let Some(sheet) = cli.sheet {
        extract.sheet_index = sheet;
    }

    println!("🔄 Extracting support links...");
    println!("   Input file:  {}", extract.input.display());
    println!("   Output file: {}", extract.output.display());

    match Extractor::new(extract).run() {
        Ok(report) => {
            print_summary(&report);
            println!("\n✅ Success! File ready for render-html");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn print_summary(report: &ExtractReport) {
    println!("\n📊 Extraction Results:");
    println!("   Rows read: {}", report.rows_read);
    println!("   Rows without marker: {}", report.rows_without_marker);
    println!("   Candidates dropped: {}", report.candidates_dropped);
    println!("   Custom entries merged: {}", report.custom_merged);
    println!("   Duplicates removed: {}", report.duplicates_removed);
    println!("   Unique entries: {}", report.entries_written());
    println!("   Output file: {}", report.output_file.display());

    if !report.entries.is_empty() {
        info!("First 5 entries:");
        for (i, entry) in report.entries.iter().take(5).enumerate() {
            info!(
                "{}. {} | {} | {} | {}",
                i + 1,
                entry.display_name,
                entry.description,
                entry.url,
                entry.owner
            );
        }
    }
}

fn fail(e: &DirectoryError) -> ExitCode {
    error!("Extraction failed: {}", e);
    eprintln!("❌ Extraction failed: {e}");
    ExitCode::from(e.exit_code())
}
