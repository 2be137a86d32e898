//! End-to-end tests for the fragment linking half of the pipeline
//!
//! Drives LinkService over real files in a temp directory, the way cfg-ld
//! does, and checks the merged artifact plus the failure discipline.

use std::fs;
use std::path::Path;

use cfglink::{GraphStore, LinkService, StoreMap};
use pretty_assertions::assert_eq;

fn write_fragment(dir: &Path, name: &str, doc: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, doc).unwrap();
    path
}

fn read_store(path: &Path) -> GraphStore {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Merging
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_links_two_disjoint_fragments() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fragment(
        dir.path(),
        "a.o.cfg",
        r#"{"calls": {"f": {"0": ["g"]}}, "edges": {"f": [[1], []]}, "entries": {"f": 0}}"#,
    );
    let b = write_fragment(
        dir.path(),
        "b.o.cfg",
        r#"{"calls": {"g": {"0": []}}, "edges": {"g": [[]]}, "entries": {"g": 0}}"#,
    );
    let out = dir.path().join("a.out.cfg");

    let summary = LinkService::new(vec![a, b], out.clone()).execute().unwrap();
    assert_eq!(summary.functions, 2);
    assert_eq!(summary.entries, 2);
    assert!(summary.report.is_clean());

    let store = read_store(&out);
    let names: Vec<&str> = store.calls.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["f", "g"]);
}

#[test]
fn test_later_fragment_wins_and_conflict_is_reported_once_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fragment(
        dir.path(),
        "a.o.cfg",
        r#"{"calls": {"f": {"0": ["old"]}}, "edges": {"f": [[]]}, "entries": {"f": 0}}"#,
    );
    let b = write_fragment(
        dir.path(),
        "b.o.cfg",
        r#"{"calls": {"f": {"0": ["new"], "1": ["newer"]}}, "edges": {"f": [[1], []]}, "entries": {"f": 7}}"#,
    );
    let out = dir.path().join("a.out.cfg");

    let summary = LinkService::new(vec![a, b], out.clone()).execute().unwrap();

    let calls_conflicts = summary
        .report
        .conflicts
        .iter()
        .filter(|c| c.map == StoreMap::Calls && c.function == "f")
        .count();
    assert_eq!(calls_conflicts, 1);

    let store = read_store(&out);
    assert_eq!(store.calls["f"]["0"], vec!["new".to_string()]);
    assert_eq!(store.edges["f"].len(), 2);
    // entries keep the first-seen value, silently
    assert_eq!(store.entries["f"], 0);
}

#[test]
fn test_null_and_empty_documents_link_as_empty_units() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fragment(dir.path(), "null.o.cfg", "null");
    let b = write_fragment(dir.path(), "empty.o.cfg", "{}");
    let c = write_fragment(dir.path(), "real.o.cfg", r#"{"entries": {"main": 0}}"#);
    let out = dir.path().join("a.out.cfg");

    let summary = LinkService::new(vec![a, b, c], out.clone()).execute().unwrap();
    assert_eq!(summary.entries, 1);
    assert!(summary.report.is_clean());
    assert_eq!(read_store(&out).entries["main"], 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Failure discipline
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_fragment_aborts_without_an_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_fragment(dir.path(), "good.o.cfg", r#"{"entries": {"f": 0}}"#);
    let missing = dir.path().join("gone.o.cfg");
    let out = dir.path().join("a.out.cfg");

    let err = LinkService::new(vec![good, missing], out.clone())
        .execute()
        .unwrap_err();
    assert!(err.to_string().contains("gone.o.cfg"));
    assert!(!out.exists(), "fatal link must not leave a partial artifact");
}

#[test]
fn test_unparsable_fragment_aborts_without_an_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write_fragment(dir.path(), "bad.o.cfg", "{ calls: nope");
    let out = dir.path().join("a.out.cfg");

    let err = LinkService::new(vec![bad], out.clone()).execute().unwrap_err();
    assert!(err.to_string().contains("bad.o.cfg"));
    assert!(!out.exists());
}

#[test]
fn test_relink_of_the_merged_artifact_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_fragment(
        dir.path(),
        "a.o.cfg",
        r#"{"calls": {"f": {"0": ["g"]}}, "edges": {"f": [[1], []]}, "entries": {"f": 0}}"#,
    );
    let b = write_fragment(
        dir.path(),
        "b.o.cfg",
        r#"{"calls": {"f": {"0": ["h"]}}, "edges": {"g": [[]]}, "entries": {"g": 0}}"#,
    );
    let first = dir.path().join("first.cfg");
    let second = dir.path().join("second.cfg");

    LinkService::new(vec![a, b], first.clone()).execute().unwrap();
    LinkService::new(vec![first.clone()], second.clone())
        .execute()
        .unwrap();

    assert_eq!(read_store(&first), read_store(&second));
}
