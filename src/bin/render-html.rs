//! Renders the delimited export into the searchable support-link page.
//!
//! Usage:
//!   render-html                                  # socialweb_export.txt -> soc-support-tenant-liste.html
//!   render-html --output /var/www/links.html     # override the destination

use clap::Parser;
use std::process::ExitCode;
use support_directory::cli::CommonArgs;
use support_directory::config::LoggingConfig;
use support_directory::{logging, DirectoryError, Renderer};
use tracing::error;

#[derive(Parser)]
#[command(name = "render-html")]
#[command(about = "Render the support-link export as a static HTML page")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
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

    let mut render = config.render;
    if let Some(input) = cli.common.input {
        render.input = input;
    }
    if let Some(output) = cli.common.output {
        render.output = output;
    }

    println!("🔨 Rendering support page...");
    println!("   Input file:  {}", render.input.display());
    println!("   Output file: {}", render.output.display());

    match Renderer::new(render).run() {
        Ok(report) => {
            println!("\n📊 Render Results:");
            println!("   Entries: {}", report.entries_rendered);
            println!("   Sections: {}", report.sections);
            if report.skipped_lines > 0 {
                println!("   ⚠️  Skipped malformed lines: {}", report.skipped_lines);
            }
            println!("   Output file: {}", report.output_file.display());
            println!("\n✅ HTML file successfully created!");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &DirectoryError) -> ExitCode {
    error!("Rendering failed: {}", e);
    eprintln!("❌ Rendering failed: {e}");
    ExitCode::from(e.exit_code())
}
