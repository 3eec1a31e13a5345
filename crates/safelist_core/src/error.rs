use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SafelistError {
    #[error("Target directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("Target path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Could not determine the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Failed to serialize safelist: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write safelist to {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SafelistError {
    /// Whether the run was aborted before any file was read because the
    /// configured root could not be used.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SafelistError::MissingRoot(_)
                | SafelistError::NotADirectory(_)
                | SafelistError::CurrentDir(_)
        )
    }
}
