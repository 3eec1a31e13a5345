use clap::Parser;
use log::{debug, trace};
use path_clean::PathClean;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    constants::{DEFAULT_EXTENSION, DEFAULT_OUTPUT, DEFAULT_ROOT},
    error::SafelistError,
    walker::WalkOptions,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "generate")]
#[command(about = "Scan source files for Tailwind class names and write a safelist")]
pub struct Config {
    /// Directory to scan, relative to the current directory unless absolute
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Where to write the JSON safelist (overwritten if present)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Source file extension to scan; repeat to scan several
    #[arg(long = "ext", value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extensions: Vec<String>,

    /// Honour .gitignore/.ignore files and skip hidden entries
    #[arg(long)]
    pub respect_ignore: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            respect_ignore: false,
        }
    }
}

impl Config {
    /// Resolve the scan root against the process working directory.
    pub fn resolve_root(&self) -> Result<PathBuf, SafelistError> {
        let cwd = env::current_dir().map_err(SafelistError::CurrentDir)?;
        Ok(self.resolve_root_from(&cwd))
    }

    /// Resolve the scan root against `cwd` and normalize `.`/`..` lexically.
    /// The result is not required to exist.
    pub fn resolve_root_from(&self, cwd: &Path) -> PathBuf {
        let joined = if self.root.is_absolute() { self.root.clone() } else { cwd.join(&self.root) };
        let root = joined.clean();
        trace!("Resolved root {:?} to {:?}", self.root, root);
        root
    }

    pub fn walk_options(&self) -> WalkOptions {
        let extensions = normalize_extensions(&self.extensions);
        debug!("Scanning extensions: {:?}", extensions);
        WalkOptions { extensions, respect_ignore: self.respect_ignore }
    }
}

/// Strip leading dots and drop blanks so `.rs`, `rs` and ` rs ` all mean the same.
fn normalize_extensions(raw: &[String]) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();
    for ext in raw {
        let ext = ext.trim().trim_start_matches('.');
        if ext.is_empty() || extensions.iter().any(|e| e == ext) {
            continue;
        }
        extensions.push(ext.to_string());
    }
    if extensions.is_empty() {
        extensions.push(DEFAULT_EXTENSION.to_string());
    }
    extensions
}
