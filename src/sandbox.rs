//! Move simulation ("breakage prediction").
//!
//! Rebuilds the graph for a hypothetical file move and flags every node
//! whose includes stop resolving the way they did before. Pure and
//! idempotent: neither the input file set nor any live graph is
//! touched; the caller diffs the returned snapshot against the current
//! graph.
//!
//! ## What counts as breakage
//!
//! An include breaks when it resolved against the original set and,
//! after the move, either resolves against nothing or loses its
//! relative-path resolution. The downgrade case matters: a quoted
//! include like `"b.h"` that matched relative to the declaring file
//! still *names* a file after that file moves away (the filename
//! fallback finds it elsewhere), but the declared relative path no
//! longer matches, so the directive would not survive the refactor.
//! Includes that never resolved (system headers) never flag breakage.

use crate::builder::build_graph;
use crate::resolve::{resolve, Strategy};
use crate::types::{DependencyGraph, FileId, FileSet};

/// Simulate moving one file to a new path and predict breakage.
///
/// Returns the graph of the renamed file set with `is_broken` set on
/// every affected node. Degenerate inputs are no-ops, not errors: an
/// `old_path` absent from the set, a `new_path` colliding with a
/// different existing file, or a move onto the same path all yield a
/// graph equal to `build_graph(files)` with nothing flagged.
pub fn simulate_move(
    files: &FileSet,
    old_path: &FileId,
    new_path: &FileId,
) -> DependencyGraph {
    if !files.contains(old_path) || (files.contains(new_path) && new_path != old_path) {
        tracing::debug!(%old_path, %new_path, "move simulation is a no-op");
        return build_graph(files);
    }

    // Snapshot with the moved file rebuilt at its new identity, same
    // position in iteration order, includes retained.
    let moved = FileSet::from_files(files.iter().map(|f| {
        if &f.path == old_path {
            f.with_path(new_path.clone())
        } else {
            f.clone()
        }
    }))
    .expect("renamed snapshot has unique paths");

    let mut graph = build_graph(&moved);

    for file in files.iter() {
        let new_identity = if &file.path == old_path {
            new_path.clone()
        } else {
            file.path.clone()
        };
        let new_dir = new_identity.dir().to_string();

        for target in &file.includes {
            let Some(before) = resolve(target, file.dir(), files) else {
                continue;
            };
            let after = resolve(target, &new_dir, &moved);

            let broken = match after {
                None => true,
                Some(after) => {
                    before.strategy == Strategy::Relative && after.strategy != Strategy::Relative
                }
            };

            if broken {
                tracing::debug!(
                    node = %new_identity,
                    include = target,
                    "include no longer resolves after simulated move"
                );
                graph.mark_broken(&new_identity);
                break;
            }
        }
    }

    graph
}
