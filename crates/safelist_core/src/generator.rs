use log::{debug, info, trace, warn};
use std::{fs, path::Path};

use crate::{
    config::Config,
    error::SafelistError,
    extractor::extract_classes_into,
    output::write_safelist,
    types::{ClassSet, GenerateResult, IoWarning, ScanResult},
    walker::{WalkOptions, collect_source_files},
};

/// Walk `root`, read every matching file and collect the union of their classes.
///
/// Unreadable or non UTF-8 files are skipped and reported in
/// [`ScanResult::warnings`].
pub fn scan_directory(root: &Path, opts: &WalkOptions) -> ScanResult {
    let walk = collect_source_files(root, opts);
    let mut warnings = walk.warnings;
    let mut classes = ClassSet::new();
    let mut files_scanned = 0;

    for file in &walk.files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                warn!("Skipping {}: {}", file.display(), err);
                warnings.push(IoWarning::for_path(file, err.to_string()));
                continue;
            }
        };
        let added = extract_classes_into(&content, &mut classes);
        trace!("{} new classes from {}", added, file.display());
        files_scanned += 1;
    }

    debug!("Scanned {} files, {} skipped", files_scanned, warnings.len());
    ScanResult { classes, files_scanned, warnings }
}

pub fn run_safelist_generation(cfg: &Config) -> Result<GenerateResult, SafelistError> {
    info!("Starting safelist generation");

    let root = cfg.resolve_root()?;
    if !root.exists() {
        return Err(SafelistError::MissingRoot(root));
    }
    if !root.is_dir() {
        return Err(SafelistError::NotADirectory(root));
    }
    info!("Using root directory: {}", root.display());

    let scan = scan_directory(&root, &cfg.walk_options());
    info!("Found {} classes in {} files", scan.classes.len(), scan.files_scanned);

    write_safelist(&cfg.output, &scan.classes)?;
    info!("Wrote safelist to {}", cfg.output.display());

    Ok(GenerateResult {
        root,
        output: cfg.output.clone(),
        class_count: scan.classes.len(),
        files_scanned: scan.files_scanned,
        warnings: scan.warnings,
    })
}
