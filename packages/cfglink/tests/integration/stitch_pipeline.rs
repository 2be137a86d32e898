//! End-to-end tests for the resolve-and-stitch half of the pipeline
//!
//! Runs LinkService then StitchService over real files, mirroring the
//! cfg-ld | cfg-stitch toolchain flow.

use std::fs;
use std::path::{Path, PathBuf};

use cfglink::{
    CfgLinkError, FixedEdgeCount, LayoutMismatch, LinkService, StitchRequest, StitchService,
};
use pretty_assertions::assert_eq;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn stitch(cfg: PathBuf, guards: PathBuf, output: PathBuf, strict: bool) -> StitchService {
    StitchService::new(StitchRequest {
        cfg,
        guards,
        output,
        strict,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Whole-pipeline scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_single_function_scenario_produces_edge_then_sentinel() {
    // One fragment: f with two blocks and the edge 0->1. One guard, one
    // record. The introspector reports a 32-byte pc-table of 16-byte
    // entries, so the sentinel is 2.
    let dir = tempfile::tempdir().unwrap();
    let fragment = write(
        dir.path(),
        "a.o.cfg",
        r#"{"calls": {"f": {"0": [], "1": []}}, "edges": {"f": [[1], []]}, "entries": {"f": 0}}"#,
    );
    let merged = dir.path().join("a.out.cfg");
    LinkService::new(vec![fragment], merged.clone())
        .execute()
        .unwrap();

    let guards = write(dir.path(), "a.csv", "g0\ng0, 0\n");
    let out = dir.path().join("a.out_cfg");

    let summary = stitch(merged, guards, out.clone(), false)
        .execute(&FixedEdgeCount(32 / 16))
        .unwrap();
    assert_eq!(summary.edges, 1);
    assert_eq!(summary.sentinel, 2);

    assert_eq!(fs::read_to_string(&out).unwrap(), "0 1\n2 2\n");
}

#[test]
fn test_two_functions_renumber_into_one_flat_space() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(
        dir.path(),
        "a.o.cfg",
        r#"{"calls": {"f": {"0": ["g"], "1": []}}, "edges": {"f": [[1], []]}, "entries": {"f": 0}}"#,
    );
    let b = write(
        dir.path(),
        "b.o.cfg",
        r#"{"calls": {"g": {"0": []}}, "edges": {"g": [[0]]}, "entries": {"g": 0}}"#,
    );
    let merged = dir.path().join("prog.cfg");
    LinkService::new(vec![a, b], merged.clone()).execute().unwrap();

    // f consumes records 0..2, g consumes record 2.
    let guards = write(
        dir.path(),
        "prog.csv",
        "0x10, 0x20\n0x10, 0\n0x10, 4\n0x20, 0\n",
    );
    let out = dir.path().join("prog_cfg");

    let summary = stitch(merged, guards, out.clone(), true)
        .execute(&FixedEdgeCount(3))
        .unwrap();
    assert_eq!(summary.mismatch, None);

    // g's self-loop lands at global index 2 (f's two blocks come first).
    assert_eq!(fs::read_to_string(&out).unwrap(), "0 1\n2 2\n3 3\n");
}

#[test]
fn test_unresolved_guard_emits_no_edges_and_run_continues() {
    let dir = tempfile::tempdir().unwrap();
    let fragment = write(
        dir.path(),
        "a.o.cfg",
        r#"{"calls": {"f": {"0": []}}, "edges": {"f": [[]]}, "entries": {"f": 0}}"#,
    );
    let merged = dir.path().join("a.out.cfg");
    LinkService::new(vec![fragment], merged.clone())
        .execute()
        .unwrap();

    // Header names a stale guard that no record layout reaches.
    let guards = write(dir.path(), "a.csv", "g_stale, g_f\ng_f, 0\n");
    let out = dir.path().join("a.out_cfg");

    let summary = stitch(merged, guards, out.clone(), false)
        .execute(&FixedEdgeCount(1))
        .unwrap();
    assert_eq!(summary.unresolved, 1);
    assert_eq!(summary.edges, 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), "1 1\n");
}

// ═══════════════════════════════════════════════════════════════════════════
// Layout precondition
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_leftover_records_warn_by_default_but_fail_strict() {
    let dir = tempfile::tempdir().unwrap();
    let fragment = write(
        dir.path(),
        "a.o.cfg",
        r#"{"calls": {"f": {"0": []}}, "edges": {"f": [[]]}, "entries": {"f": 0}}"#,
    );
    let merged = dir.path().join("a.out.cfg");
    LinkService::new(vec![fragment], merged.clone())
        .execute()
        .unwrap();

    // Two records, but the store's one function only consumes one.
    let guards = write(dir.path(), "a.csv", "g_f, g_x\ng_f, 0\ng_x, 0\n");
    let out = dir.path().join("a.out_cfg");

    let summary = stitch(merged.clone(), guards.clone(), out.clone(), false)
        .execute(&FixedEdgeCount(2))
        .unwrap();
    assert_eq!(summary.mismatch, Some(LayoutMismatch::Undershoot { leftover: 1 }));
    assert!(out.exists());

    let strict_out = dir.path().join("strict_cfg");
    let err = stitch(merged, guards, strict_out.clone(), true)
        .execute(&FixedEdgeCount(2))
        .unwrap_err();
    assert!(matches!(err, CfgLinkError::GuardLayout(_)));
    assert!(
        !strict_out.exists(),
        "strict failure must not leave an artifact"
    );
}

#[test]
fn test_missing_store_or_table_is_fatal_without_an_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("a.out_cfg");

    let err = stitch(
        dir.path().join("gone.cfg"),
        dir.path().join("gone.csv"),
        out.clone(),
        false,
    )
    .execute(&FixedEdgeCount(1))
    .unwrap_err();
    assert!(err.to_string().contains("gone.cfg"));
    assert!(!out.exists());
}
