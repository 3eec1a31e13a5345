use log::debug;
use std::{fs, path::Path};

use crate::{error::SafelistError, types::ClassSet};

/// Render the safelist as a pretty-printed JSON array (2-space indent).
pub fn render_safelist(classes: &ClassSet) -> Result<String, SafelistError> {
    let list: Vec<&str> = classes.iter().collect();
    Ok(serde_json::to_string_pretty(&list)?)
}

/// Write the safelist to `path` in a single write, replacing any existing file.
pub fn write_safelist(path: &Path, classes: &ClassSet) -> Result<(), SafelistError> {
    let json = render_safelist(classes)?;
    debug!("Writing {} classes ({} bytes) to {}", classes.len(), json.len(), path.display());
    fs::write(path, json)
        .map_err(|source| SafelistError::WriteOutput { path: path.to_path_buf(), source })
}
