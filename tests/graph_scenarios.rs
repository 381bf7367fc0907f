//! Scenario tests for the dependency engine.
//!
//! These tests exercise the engine end-to-end through the public API:
//! extraction, resolution, graph shape, reachability, and move
//! simulation over small, hand-built repositories.

use include_graph::{
    build_graph, reachability, resolve, simulate_move, Direction, FileId, FileSet, GraphEdge,
    SourceFile, Strategy, ROOT_GROUP,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Install a log subscriber once, so `RUST_LOG=include_graph=trace`
/// surfaces resolution decisions while a test runs.
fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn id(s: &str) -> FileId {
    FileId::new(s)
}

fn make_set(files: &[(&str, &str)]) -> FileSet {
    init_logging();
    FileSet::from_files(files.iter().map(|(p, c)| SourceFile::new(*p, *c))).unwrap()
}

/// A small but realistic repository:
///
/// ```text
/// main.cpp ─→ app/app.h ─→ app/config.h
///                 │            │
///                 └──→ lib/log.h ←┘
/// ```
fn make_repo() -> FileSet {
    make_set(&[
        (
            "main.cpp",
            "#include \"app/app.h\"\n#include <iostream>\nint main() { return run(); }\n",
        ),
        (
            "app/app.h",
            "#pragma once\n#include \"config.h\"\n#include \"../lib/log.h\"\nint run();\n",
        ),
        (
            "app/config.h",
            "#pragma once\n#include \"../lib/log.h\"\n#define LEVEL 3\n",
        ),
        ("lib/log.h", "#pragma once\nvoid log_line(const char*);\n"),
    ])
}

// ─────────────────────────────────────────────────────────────────────────────
// DETERMINISM
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_same_files_same_fingerprint_100_runs() {
    let files = make_repo();

    let first = build_graph(&files).fingerprint();
    for run in 1..100 {
        let fp = build_graph(&files).fingerprint();
        assert_eq!(first, fp, "graph must be deterministic (run {} differs)", run);
    }
}

#[test]
fn test_graph_shape() {
    let graph = build_graph(&make_repo());

    assert_eq!(graph.node_count(), 4);
    assert!(graph.has_edge(&id("main.cpp"), &id("app/app.h")));
    assert!(graph.has_edge(&id("app/app.h"), &id("app/config.h")));
    assert!(graph.has_edge(&id("app/app.h"), &id("lib/log.h")));
    assert!(graph.has_edge(&id("app/config.h"), &id("lib/log.h")));
    // <iostream> is external: present as an include, absent as an edge.
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(
        graph.file(&id("main.cpp")).unwrap().includes,
        vec!["app/app.h", "iostream"]
    );

    let main = graph.node(&id("main.cpp")).unwrap();
    assert_eq!(main.group, ROOT_GROUP);
    let config = graph.node(&id("app/config.h")).unwrap();
    assert_eq!(config.group, "app");
}

// ─────────────────────────────────────────────────────────────────────────────
// RESOLUTION
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_parent_traversal_normalization() {
    let files = make_set(&[
        ("src/x/y.cpp", "#include \"../common/util.h\"\n"),
        ("src/common/util.h", ""),
    ]);
    let graph = build_graph(&files);

    assert!(graph.has_edge(&id("src/x/y.cpp"), &id("src/common/util.h")));
}

#[test]
fn test_resolution_priority_relative_over_filename() {
    let files = make_set(&[
        ("other/conf.h", ""),
        ("app/conf.h", ""),
        ("app/main.cpp", "#include \"conf.h\"\n"),
    ]);

    let r = resolve("conf.h", "app", &files).unwrap();
    assert_eq!(r.strategy, Strategy::Relative);
    assert_eq!(r.path, id("app/conf.h"));

    let graph = build_graph(&files);
    assert!(graph.has_edge(&id("app/main.cpp"), &id("app/conf.h")));
    assert!(!graph.has_edge(&id("app/main.cpp"), &id("other/conf.h")));
}

#[test]
fn test_ambiguous_filename_stable_across_rebuilds() {
    let files = make_set(&[
        ("foo/types.h", ""),
        ("bar/types.h", ""),
        ("src/main.cpp", "#include \"types.h\"\n"),
    ]);

    let chosen = resolve("types.h", "src", &files).unwrap().path;
    assert_eq!(chosen, id("foo/types.h"));

    for _ in 0..20 {
        let graph = build_graph(&files);
        assert!(graph.has_edge(&id("src/main.cpp"), &chosen));
        assert_eq!(graph.edge_count(), 1);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// REACHABILITY
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_outbound_impact_of_main() {
    let graph = build_graph(&make_repo());

    let one = reachability(&graph, &id("main.cpp"), Direction::Outbound, 1);
    assert_eq!(one.nodes.len(), 2);
    assert!(one.contains(&id("app/app.h")));

    let full = reachability(&graph, &id("main.cpp"), Direction::Outbound, 3);
    assert_eq!(full.nodes.len(), 4);
    assert!(full.edges.contains(&GraphEdge::new(id("app/config.h"), id("lib/log.h"))));
}

#[test]
fn test_inbound_impact_of_header() {
    let graph = build_graph(&make_repo());

    let dependents = reachability(&graph, &id("lib/log.h"), Direction::Inbound, 10);
    // Everything in the repo transitively includes lib/log.h.
    assert_eq!(dependents.nodes.len(), 4);
}

#[test]
fn test_monotonic_in_depth() {
    let graph = build_graph(&make_repo());

    let mut previous = reachability(&graph, &id("main.cpp"), Direction::Both, 0);
    for depth in 1..6 {
        let current = reachability(&graph, &id("main.cpp"), Direction::Both, depth);
        assert!(
            previous.nodes.is_subset(&current.nodes),
            "reachable set must grow monotonically with depth"
        );
        previous = current;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MOVE SIMULATION
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_moving_shared_header_breaks_relative_includers() {
    let files = make_repo();

    let graph = simulate_move(&files, &id("lib/log.h"), &id("support/log.h"));

    // Both app/app.h and app/config.h reach the header through a
    // relative "../lib/log.h"; the move invalidates that path.
    assert!(graph.node(&id("app/app.h")).unwrap().is_broken);
    assert!(graph.node(&id("app/config.h")).unwrap().is_broken);
    // main.cpp only includes app/app.h, which did not move.
    assert!(!graph.node(&id("main.cpp")).unwrap().is_broken);
    // The moved file has no includes of its own to break.
    assert!(!graph.node(&id("support/log.h")).unwrap().is_broken);
}

#[test]
fn test_breakage_scenario_relative_vs_angle() {
    let files = make_set(&[
        ("a/a.cpp", "#include \"b.h\"\n"),
        ("a/b.h", ""),
        ("x/z.cpp", "#include <b.h>\n"),
    ]);

    let before = build_graph(&files);
    assert!(before.has_edge(&id("a/a.cpp"), &id("a/b.h")));

    let after = simulate_move(&files, &id("a/b.h"), &id("lib/b.h"));
    assert!(after.node(&id("a/a.cpp")).unwrap().is_broken);
    assert!(!after.node(&id("x/z.cpp")).unwrap().is_broken);
}

#[test]
fn test_move_to_same_path_is_isomorphic_and_unbroken() {
    let files = make_repo();

    let plain = build_graph(&files);
    let simulated = simulate_move(&files, &id("app/app.h"), &id("app/app.h"));

    assert_eq!(plain.fingerprint(), simulated.fingerprint());
    assert_eq!(simulated.broken_nodes().count(), 0);
}

#[test]
fn test_simulation_leaves_live_graph_alone() {
    let files = make_repo();
    let live = build_graph(&files);
    let live_fp = live.fingerprint();

    let _ = simulate_move(&files, &id("lib/log.h"), &id("elsewhere/log.h"));

    assert_eq!(live.fingerprint(), live_fp);
    assert_eq!(live.broken_nodes().count(), 0);
}
