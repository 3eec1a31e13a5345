use std::{
    collections::BTreeSet,
    fmt,
    path::{Path, PathBuf},
};

/// Deduplicated collection of candidate class names.
///
/// Backed by a `BTreeSet` so iteration and serialization are always sorted,
/// which keeps the safelist byte-identical across runs over the same tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: BTreeSet<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token after trimming it. Empty tokens are rejected.
    ///
    /// Returns `true` if the token was not already present.
    pub fn insert(&mut self, token: &str) -> bool {
        let token = token.trim_matches(is_token_whitespace);
        if token.is_empty() {
            return false;
        }
        if self.classes.contains(token) {
            return false;
        }
        self.classes.insert(token.to_string())
    }

    /// Unions `other` into this set.
    pub fn merge(&mut self, other: ClassSet) {
        self.classes.extend(other.classes);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        self.classes.into_iter().collect()
    }
}

impl<'a> Extend<&'a str> for ClassSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl<'a> FromIterator<&'a str> for ClassSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = ClassSet::new();
        set.extend(iter);
        set
    }
}

/// Whitespace as ECMAScript's `\s` defines it: Unicode `White_Space` plus
/// U+FEFF, minus U+0085.
pub(crate) fn is_token_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// A non-fatal problem encountered while walking or reading the source tree.
/// The affected entry is skipped and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoWarning {
    /// Entry the warning refers to, when the walker could attribute it
    pub path: Option<PathBuf>,
    pub message: String,
}

impl IoWarning {
    pub(crate) fn for_path(path: &Path, message: impl Into<String>) -> Self {
        Self { path: Some(path.to_path_buf()), message: message.into() }
    }

    pub(crate) fn unattributed(message: impl Into<String>) -> Self {
        Self { path: None, message: message.into() }
    }
}

impl fmt::Display for IoWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub classes: ClassSet,
    pub files_scanned: usize,
    pub warnings: Vec<IoWarning>,
}

#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Absolute, normalized directory that was scanned
    pub root: PathBuf,
    pub output: PathBuf,
    pub class_count: usize,
    pub files_scanned: usize,
    pub warnings: Vec<IoWarning>,
}
