use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};

use crate::types::IoWarning;

#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Bare extensions (no leading dot) a file name must end with
    pub extensions: Vec<String>,
    pub respect_ignore: bool,
}

#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<IoWarning>,
}

/// Recursively collect every regular file under `root` whose name ends with
/// one of the configured extensions.
///
/// Entries that cannot be read are reported as warnings and skipped; the walk
/// itself never fails.
pub fn collect_source_files(root: &Path, opts: &WalkOptions) -> WalkOutcome {
    debug!("Walking directory tree from root: {}", root.display());
    let suffixes: Vec<String> = opts.extensions.iter().map(|ext| format!(".{ext}")).collect();

    let mut builder = WalkBuilder::new(root);
    builder.follow_links(false).sort_by_file_name(|a, b| a.cmp(b));
    if opts.respect_ignore {
        builder.standard_filters(true).require_git(false);
    } else {
        builder.standard_filters(false);
    }

    let mut outcome = WalkOutcome::default();
    for res in builder.build() {
        let dent = match res {
            Ok(dent) => dent,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                let warning = match error_path(&err) {
                    Some((path, inner)) => IoWarning::for_path(path, inner.to_string()),
                    None => IoWarning::unattributed(err.to_string()),
                };
                outcome.warnings.push(warning);
                continue;
            }
        };

        // Symlinks and special files report a non-file type here
        if !dent.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let p = dent.path();
        let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
            trace!("Skipping file with non UTF-8 name: {}", p.display());
            continue;
        };

        if suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())) {
            trace!("Found source file: {}", p.display());
            outcome.files.push(p.to_path_buf());
        }
    }

    debug!(
        "Collected {} source files ({} entries skipped)",
        outcome.files.len(),
        outcome.warnings.len()
    );
    outcome
}

/// Find the path a walk error refers to, along with the error beneath it.
fn error_path(err: &ignore::Error) -> Option<(&Path, &ignore::Error)> {
    match err {
        ignore::Error::WithPath { path, err } => Some((path.as_path(), err.as_ref())),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
