#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;
use tempfile::TempDir;
use ymldiff_core::core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use ymldiff_core::errors::ExErrorKind;
use ymldiff_core::logging_facility::test_capture::init_test_capture;
use ymldiff_core::render::{render_report, RenderOptions};
use ymldiff_core::ChangeKind;
use ymldiff_engine::{compare_files, CompareOptions};

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_identical_files_have_no_changes() {
    let dir = TempDir::new().unwrap();
    let old = write(&dir, "old.yaml", "a: 1\nlist: [x, y]\n");
    let new = write(&dir, "new.yaml", "list: [y, x]\na: 1\n");

    let comparison = compare_files(&CompareOptions::new(&old, &new)).unwrap();

    assert!(!comparison.has_changes());
    assert_eq!(comparison.total_documents, 1);
    assert_eq!(
        render_report(&comparison, &RenderOptions::default()),
        "No changes found.\n"
    );
}

#[test]
fn test_documents_pair_by_index() {
    let dir = TempDir::new().unwrap();
    let old = write(&dir, "old.yaml", "---\nname: a\n---\nname: b\nport: 80\n");
    let new = write(
        &dir,
        "new.yaml",
        "---\nname: a\n---\nname: b\nport: 8080\n---\nname: c\n",
    );

    let comparison = compare_files(&CompareOptions::new(&old, &new)).unwrap();

    assert_eq!(comparison.total_documents, 3);
    let indexes: Vec<usize> = comparison.documents.iter().map(|d| d.index).collect();
    assert_eq!(indexes, vec![2, 3]);
    assert_eq!(comparison.documents[0].changes[0].path, ".port");
    assert_eq!(comparison.documents[1].changes[0].kind, ChangeKind::Addition);
}

#[test]
fn test_report_for_kubernetes_like_input() {
    let dir = TempDir::new().unwrap();
    let old = write(
        &dir,
        "old.yaml",
        r#"# zookeeper statefulset
spec:
  containers:
    - name: zookeeper
      image: zookeeper:3.8
      env:
        - name: ZOO_HEAP_SIZE
          value: "512"
        - name: ZOO_TICK_TIME
          value: "2000"
"#,
    );
    let new = write(
        &dir,
        "new.yaml",
        r#"# zookeeper statefulset
spec:
  containers:
    - name: zookeeper
      image: zookeeper:3.9
      env:
        - name: ZOO_TICK_TIME
          value: "2000"
        - name: ZOO_HEAP_SIZE
          value: "1024"
"#,
    );

    let comparison = compare_files(&CompareOptions::new(&old, &new)).unwrap();
    let out = render_report(&comparison, &RenderOptions::default());

    assert_eq!(
        out,
        "--- # YAML Document: 1/1\n\
         # zookeeper statefulset\n\
         ~ .spec.containers[zookeeper].env[ZOO_HEAP_SIZE].value: 512 → 1024\n\
         ~ .spec.containers[zookeeper].image: zookeeper:3.8 → zookeeper:3.9\n\
         \n"
    );
}

#[test]
fn test_first_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let old = write(&dir, "old.yaml", "a: [1\n");
    let new = dir.path().join("missing.yaml");

    let err = compare_files(&CompareOptions::new(&old, &new)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Parse);
    assert!(err.to_string().contains("old.yaml"));
}

#[test]
fn test_comparison_serializes_to_json() {
    let dir = TempDir::new().unwrap();
    let old = write(&dir, "old.yaml", "replicas: 1\n");
    let new = write(&dir, "new.yaml", "replicas: 2\n");

    let comparison = compare_files(&CompareOptions::new(&old, &new)).unwrap();
    let json = serde_json::to_value(&comparison).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "total_documents": 1,
            "documents": [{
                "index": 1,
                "total": 1,
                "comments": [],
                "changes": [{
                    "kind": "modification",
                    "path": ".replicas",
                    "old_value": 1,
                    "new_value": 2
                }]
            }]
        })
    );
}

#[test]
fn test_lifecycle_events_are_logged() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let old = write(&dir, "old.yaml", "a: 1\n");
    let new = write(&dir, "new.yaml", "a: 2\n");
    let old_display = old.display().to_string();

    compare_files(&CompareOptions::new(&old, &new)).unwrap();

    let ours = |event: &str| {
        capture.count_events(|e| {
            e.op.as_deref() == Some("compare_files")
                && e.event.as_deref() == Some(event)
                && (event != EVENT_START || e.field("old_path") == Some(old_display.as_str()))
        })
    };
    assert_eq!(ours(EVENT_START), 1);
    assert!(ours(EVENT_END) >= 1);

    let loads = capture.count_events(|e| {
        e.op.as_deref() == Some("load_documents") && e.field("path") == Some(old_display.as_str())
    });
    assert_eq!(loads, 2, "expected start and end for the old file");
}

#[test]
fn test_failure_logs_end_error() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let old = write(&dir, "binary.yaml", "a\0b");
    let new = write(&dir, "new.yaml", "a: 1\n");
    let old_display = old.display().to_string();

    let err = compare_files(&CompareOptions::new(&old, &new)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotText);

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("load_documents")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("path") == Some(old_display.as_str())
            && e.field("err_code") == Some("ERR_NOT_TEXT")
    });
    assert_eq!(errors, 1);
}
