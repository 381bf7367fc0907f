//! Include target resolution.
//!
//! Maps one literal include target, plus the declaring file's
//! directory, to a concrete file in a known file set. Resolution is a
//! total function: an unresolved include is a normal outcome (system
//! and external headers are not in the set), never an error.
//!
//! ## Strategy order
//!
//! 1. Relative-path match against the normalized join of directory and
//!    target (also accepts the target verbatim, or a path ending in the
//!    normalized join at a segment boundary)
//! 2. Filename match on the final path segment, ties broken by file-set
//!    iteration order
//! 3. Case-insensitive suffix match
//!
//! The first strategy to produce a candidate wins; each strategy scans
//! the file set in iteration order, so repeated runs over the same set
//! resolve identically.

use serde::{Deserialize, Serialize};

use crate::types::{FileId, FileSet};

/// Which strategy produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Normalized relative-path match from the declaring directory.
    Relative,
    /// Final-segment filename match.
    Filename,
    /// Case-insensitive suffix match.
    CaseInsensitive,
}

/// A successful resolution of one include target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Path of the matched file.
    pub path: FileId,
    /// Strategy that matched.
    pub strategy: Strategy,
}

/// Textually normalize `.` and `..` segments in a slash-separated path.
///
/// Token-based, not filesystem-aware: empty and `.` segments drop, `..`
/// pops the previous segment when one exists and drops otherwise (a
/// path cannot climb above the repository root).
pub fn normalize_segments(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }
    stack.join("/")
}

/// Resolve one include target against a file set.
///
/// `dir` is the declaring file's directory (empty for top-level files).
/// Returns the best match per the strategy order, or `None` when the
/// target names nothing in the set.
pub fn resolve(target: &str, dir: &str, files: &FileSet) -> Option<Resolution> {
    let resolution = resolve_relative(target, dir, files)
        .or_else(|| resolve_filename(target, files))
        .or_else(|| resolve_suffix(target, files));

    match &resolution {
        Some(r) => {
            tracing::trace!(include = target, dir, path = %r.path, strategy = ?r.strategy, "resolved include")
        }
        None => tracing::trace!(include = target, dir, "unresolved include"),
    }

    resolution
}

fn resolve_relative(target: &str, dir: &str, files: &FileSet) -> Option<Resolution> {
    let joined = if dir.is_empty() {
        normalize_segments(target)
    } else {
        normalize_segments(&format!("{dir}/{target}"))
    };
    let suffix = format!("/{joined}");

    files
        .iter()
        .find(|f| {
            let path = f.path.as_str();
            path == joined || path == target || path.ends_with(&suffix)
        })
        .map(|f| Resolution {
            path: f.path.clone(),
            strategy: Strategy::Relative,
        })
}

fn resolve_filename(target: &str, files: &FileSet) -> Option<Resolution> {
    let target_name = target.rsplit('/').next().unwrap_or(target);

    files
        .iter()
        .find(|f| f.name() == target_name)
        .map(|f| Resolution {
            path: f.path.clone(),
            strategy: Strategy::Filename,
        })
}

fn resolve_suffix(target: &str, files: &FileSet) -> Option<Resolution> {
    let lowered = target.to_lowercase();

    files
        .iter()
        .find(|f| f.path.as_str().to_lowercase().ends_with(&lowered))
        .map(|f| Resolution {
            path: f.path.clone(),
            strategy: Strategy::CaseInsensitive,
        })
}
