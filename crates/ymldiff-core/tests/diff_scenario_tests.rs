#![allow(clippy::unwrap_used, clippy::expect_used)]

use ymldiff_core::render::{render_changes, RenderOptions};
use ymldiff_core::{canonicalize, diff_values, ChangeKind, Value};

fn yaml(src: &str) -> Value {
    let raw: serde_yaml::Value = serde_yaml::from_str(src).unwrap();
    canonicalize(&Value::from(raw))
}

#[test]
fn test_scenario_01_scalar_kind_change() {
    let old = yaml("key: string_value");
    let new = yaml("key: 123");

    let changes = diff_values(Some(&old), Some(&new), "");

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Modification);
    assert_eq!(changes[0].path, ".key");
    assert_eq!(changes[0].old_value, Some(Value::string("string_value")));
    assert_eq!(changes[0].new_value, Some(Value::int(123)));
}

#[test]
fn test_scenario_02_nested_changes() {
    let old = yaml(
        r#"
config:
  database:
    host: localhost
    port: 5432
  cache:
    enabled: true
    ttl: 300
"#,
    );
    let new = yaml(
        r#"
config:
  database:
    host: remotehost
    port: 5432
  cache:
    enabled: false
    ttl: 600
"#,
    );

    let mut paths: Vec<String> = diff_values(Some(&old), Some(&new), "")
        .into_iter()
        .inspect(|c| assert_eq!(c.kind, ChangeKind::Modification))
        .map(|c| c.path)
        .collect();
    paths.sort();

    assert_eq!(
        paths,
        vec![
            ".config.cache.enabled",
            ".config.cache.ttl",
            ".config.database.host",
        ]
    );
}

#[test]
fn test_scenario_03_records_match_across_reordering() {
    let old = yaml("people:\n  - {name: Alice, age: 30}\n  - {name: Bob, age: 25}\n");
    let new = yaml("people:\n  - {name: Bob, age: 26}\n  - {name: Alice, age: 30}\n");

    let changes = diff_values(Some(&old), Some(&new), "");

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Modification);
    assert_eq!(changes[0].path, ".people[Bob].age");
}

#[test]
fn test_scenario_04_addition_and_deletion() {
    let value = Value::string("value");

    let added = diff_values(None, Some(&value), "");
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].kind, ChangeKind::Addition);

    let deleted = diff_values(Some(&value), None, "");
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].kind, ChangeKind::Deletion);

    assert!(diff_values(None, None, "").is_empty());
}

#[test]
fn test_scenario_05_empty_change_list() {
    assert_eq!(
        render_changes(&[], &RenderOptions::default()),
        "No changes found.\n"
    );
}

#[test]
fn test_string_and_integer_are_not_coerced() {
    let changes = diff_values(Some(&yaml("port: '123'")), Some(&yaml("port: 123")), "");
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Modification);
}

#[test]
fn test_deep_record_path() {
    let old = yaml(
        r#"
containers:
  - name: zookeeper
    env:
      - {name: ZOO_HEAP_SIZE, value: "512"}
      - {name: ZOO_PORT, value: "2181"}
"#,
    );
    let new = yaml(
        r#"
containers:
  - name: zookeeper
    env:
      - {name: ZOO_PORT, value: "2181"}
      - {name: ZOO_HEAP_SIZE, value: "1024"}
"#,
    );

    let changes = diff_values(Some(&old), Some(&new), "");
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0].path,
        ".containers[zookeeper].env[ZOO_HEAP_SIZE].value"
    );
}

#[test]
fn test_plain_list_reorder_is_not_a_change() {
    let old = yaml("ports: [443, 80, 8080]");
    let new = yaml("ports: [8080, 443, 80]");
    assert!(diff_values(Some(&old), Some(&new), "").is_empty());
}

#[test]
fn test_rendered_nested_report() {
    let old = yaml("service:\n  image: nginx:1.24\n  replicas: 2\n");
    let new = yaml("service:\n  image: nginx:1.25\n  replicas: 2\n  debug: true\n");

    let changes = diff_values(Some(&old), Some(&new), "");
    let out = render_changes(&changes, &RenderOptions::default());

    assert_eq!(
        out,
        "+ .service.debug: true\n~ .service.image: nginx:1.24 → nginx:1.25\n"
    );
}
