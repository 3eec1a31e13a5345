//! Tailwind safelist generation for Rust frontends.
//!
//! Class names built at runtime (for example inside `classes!` or from string
//! constants) are invisible to Tailwind's own content scanner. This crate finds
//! candidates lexically and writes them to a JSON safelist:
//! - Walking a source tree for files with the configured extensions
//! - Extracting class-like tokens with a fixed set of patterns
//! - Merging them into one sorted, deduplicated set
//! - Writing the set as a pretty-printed JSON array
//!
//! # Examples
//!
//! ```no_run
//! use safelist_core::{Config, run_safelist_generation};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: std::path::PathBuf::from("frontend/src"),
//!     ..Config::default()
//! };
//!
//! let result = run_safelist_generation(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! safelist_core::print_summary(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod constants;
mod error;
mod extractor;
mod generator;
mod output;
mod reporter;
mod types;
mod walker;

// Re-export public API
pub use config::Config;
pub use constants::{DEFAULT_EXTENSION, DEFAULT_OUTPUT, DEFAULT_ROOT};
pub use error::SafelistError;
pub use extractor::{extract_classes, extract_classes_into};
pub use generator::{run_safelist_generation, scan_directory};
pub use output::{render_safelist, write_safelist};
pub use reporter::print_summary;
pub use types::{ClassSet, GenerateResult, IoWarning, ScanResult};
pub use walker::{WalkOptions, WalkOutcome, collect_source_files};
