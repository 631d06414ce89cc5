//! Collection loader behavior over the shared declaration fixtures and over
//! throwaway trees built with `tempfile`.

use std::fs;
use std::path::Path;

use routecase_core::load_test_cases;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../test-vectors/declarations");

const ONE_CASE: &str = r#"
testCases:
  - description: first
    request: { authority: ["a"], method: ["GET"], uri: ["/"] }
    destination: { host: one, port: { number: 1 } }
"#;

const TWO_CASES: &str = r#"
testCases:
  - description: second
    request: { authority: ["b"], method: ["GET"], uri: ["/"] }
    destination: { host: two, port: { number: 2 } }
  - description: third
    request: { authority: ["c"], method: ["GET"], uri: ["/"] }
    destination: { host: three, port: { number: 3 } }
"#;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn descriptions(root: &Path) -> Vec<String> {
    load_test_cases(root)
        .unwrap()
        .into_iter()
        .map(|c| c.description)
        .collect()
}

#[test]
fn fixtures_load_in_traversal_order() {
    let cases = load_test_cases(FIXTURES).unwrap();
    let got: Vec<&str> = cases.iter().map(|c| c.description.as_str()).collect();
    assert_eq!(
        got,
        vec![
            "storefront pages are served by the web pool",
            "checkout goes to the payments service",
            "legacy host is still pinned to the old cluster",
            "versioned api traffic goes to the api gateway",
        ]
    );
}

#[test]
fn file_with_zero_cases_contributes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.yaml", TWO_CASES);
    write(dir.path(), "b.yaml", "testCases: []\n");

    assert_eq!(descriptions(dir.path()), vec!["second", "third"]);
}

#[test]
fn files_are_visited_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "z.yaml", ONE_CASE);
    write(dir.path(), "m.yaml", TWO_CASES);

    assert_eq!(descriptions(dir.path()), vec!["second", "third", "first"]);
}

#[test]
fn subdirectories_are_visited_at_their_sorted_position() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.yaml", ONE_CASE);
    write(dir.path(), "b/inner.yaml", TWO_CASES);
    write(dir.path(), "c.yaml", ONE_CASE);

    assert_eq!(descriptions(dir.path()), vec!["first", "second", "third", "first"]);
}

#[test]
fn empty_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.yaml", "");
    write(dir.path(), "b.yaml", ONE_CASE);

    assert_eq!(descriptions(dir.path()), vec!["first"]);
}

#[test]
fn files_are_read_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "cases.txt", ONE_CASE);

    assert_eq!(descriptions(dir.path()), vec!["first"]);
}

#[test]
fn malformed_file_aborts_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.yaml", TWO_CASES);
    write(dir.path(), "b.yaml", "testCases: [unclosed");
    write(dir.path(), "c.yaml", ONE_CASE);

    let err = load_test_cases(dir.path()).unwrap_err();
    assert_eq!(err.path(), dir.path().join("b.yaml"));
}

#[test]
fn schema_mismatch_aborts_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.yaml", ONE_CASE);
    write(dir.path(), "nested/b.yaml", "testCases:\n  - description: [not, a, string]\n");

    let err = load_test_cases(dir.path()).unwrap_err();
    assert_eq!(err.path(), dir.path().join("nested").join("b.yaml"));
    assert!(err.to_string().contains("b.yaml"));
}

#[cfg(unix)]
#[test]
fn unreadable_entry_after_good_file_aborts_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    write(dir.path(), "a.yaml", ONE_CASE);
    std::os::unix::fs::symlink(target.path(), dir.path().join("b")).unwrap();

    let err = load_test_cases(dir.path()).unwrap_err();
    assert_eq!(err.path(), dir.path().join("b"));
}
