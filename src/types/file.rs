//! Source file types for the dependency engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::scan::extract_includes;

/// Unique identifier for a file under analysis.
///
/// Wraps the slash-separated, repository-relative path and implements
/// `Ord` for deterministic ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId(String);

impl FileId {
    /// Create a new FileId from a path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the inner path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment (the file name).
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Containing directory: everything before the final segment.
    ///
    /// Empty string for top-level files.
    pub fn dir(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A source file under analysis.
///
/// Immutable once constructed: `includes` is derived from `content` at
/// creation and never mutated directly. A simulated move constructs a
/// *new* value with a different path (see [`SourceFile::with_path`])
/// rather than mutating in place.
#[derive(Debug, Clone, Serialize)]
pub struct SourceFile {
    /// Repository-relative path (primary key).
    pub path: FileId,
    /// Full raw text.
    pub content: String,
    /// Byte length of `content`, used only for derived display size.
    pub size: u64,
    /// Literal include targets extracted from `content`, in order.
    pub includes: Vec<String>,
    /// Recent-revision count, set by an external commit-history
    /// collaborator. Absent until computed; display-only.
    pub churn: Option<u64>,
}

impl SourceFile {
    /// Create a source file, deriving `size` and `includes` from content.
    pub fn new(path: impl Into<FileId>, content: impl Into<String>) -> Self {
        let content = content.into();
        let size = content.len() as u64;
        let includes = extract_includes(&content);
        Self {
            path: path.into(),
            content,
            size,
            includes,
            churn: None,
        }
    }

    /// Attach a churn count.
    pub fn with_churn(mut self, churn: u64) -> Self {
        self.churn = Some(churn);
        self
    }

    /// Rebuild this file at a different path.
    ///
    /// Content is unchanged, so `includes` is retained verbatim; only the
    /// file's position in the tree moves.
    pub fn with_path(&self, path: impl Into<FileId>) -> Self {
        Self {
            path: path.into(),
            content: self.content.clone(),
            size: self.size,
            includes: self.includes.clone(),
            churn: self.churn,
        }
    }

    /// Final path segment.
    pub fn name(&self) -> &str {
        self.path.name()
    }

    /// Containing directory (empty for top-level files).
    pub fn dir(&self) -> &str {
        self.path.dir()
    }
}

/// Error type for file set operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileSetError {
    /// A file with this path is already present.
    #[error("Duplicate file path: {0}")]
    DuplicatePath(FileId),
}

/// Insertion-ordered collection of source files keyed by path.
///
/// Iteration order is insertion order; it is the documented tie-break
/// order for filename-match resolution, so two builds over the same set
/// always resolve ambiguous includes identically.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<SourceFile>,
    index: HashMap<FileId, usize>,
}

impl FileSet {
    /// Create a new empty file set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the set.
    ///
    /// Returns an error if a file with the same path is already present;
    /// `path` is the primary key.
    pub fn insert(&mut self, file: SourceFile) -> Result<(), FileSetError> {
        if self.index.contains_key(&file.path) {
            return Err(FileSetError::DuplicatePath(file.path));
        }
        self.index.insert(file.path.clone(), self.files.len());
        self.files.push(file);
        Ok(())
    }

    /// Build a file set from a list of files.
    pub fn from_files(
        files: impl IntoIterator<Item = SourceFile>,
    ) -> Result<Self, FileSetError> {
        let mut set = Self::new();
        for file in files {
            set.insert(file)?;
        }
        Ok(set)
    }

    /// Look up a file by path.
    pub fn get(&self, path: &FileId) -> Option<&SourceFile> {
        self.index.get(path).map(|&i| &self.files[i])
    }

    /// Check whether a path is present.
    pub fn contains(&self, path: &FileId) -> bool {
        self.index.contains_key(path)
    }

    /// Iterate files in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
