pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod logging;
pub mod output;
pub mod record;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{DirectoryError, Result};
pub use extract::{ExtractReport, Extractor};
pub use render::{RenderReport, Renderer};
pub use types::Entry;
