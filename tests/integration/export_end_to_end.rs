//! End-to-end export runs over on-disk dataset fixtures

use super::test_utils::{init_dataset, write_asset, write_frame};
use remat::export::Exporter;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_two_frame_client_export() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    let out = temp.path().join("export");
    init_dataset(&dataset, 3);
    write_frame(
        &dataset,
        "a",
        0,
        ".dat",
        &[r#"{"_id":"x","_type":"Doc","_v":1,"title":"Hello"}"#],
        100.0,
    );
    write_frame(
        &dataset,
        "a",
        1,
        ".dat",
        &[r#"{"_id":"x","_v":2,"title":"World","body":null}"#],
        101.0,
    );

    let (store, summary) = Exporter::new(&dataset, &out).run().unwrap();
    assert_eq!(summary.clients, 1);
    assert_eq!(summary.transactions, 2);
    assert_eq!(summary.objects, 1);
    assert_eq!(summary.assets, 0);

    let object = &store["x"];
    assert_eq!(
        Value::Object(object.state.clone()),
        json!({"_id": "x", "_type": "Doc", "title": "World"})
    );
    assert_eq!(object.history.leaf_time("title"), Some(2.0));

    let written: Value =
        serde_json::from_str(&fs::read_to_string(out.join("Doc").join("x.json")).unwrap())
            .unwrap();
    assert_eq!(written["title"], "World");
    assert_eq!(written.get("body"), None);
}

#[test]
fn test_multi_client_replay_merges_into_one_store() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    init_dataset(&dataset, 3);
    write_frame(
        &dataset,
        "a",
        0,
        ".dat",
        &[r#"{"_id":"x","_type":"Doc","_v":1,"title":"from a"}"#],
        1.0,
    );
    write_frame(
        &dataset,
        "b",
        0,
        ".dat",
        &[r#"{"_id":"x","_v":5,"title":"from b"}"#],
        2.0,
    );

    let (store, summary) = Exporter::new(&dataset, temp.path().join("export"))
        .run()
        .unwrap();
    assert_eq!(summary.clients, 2);
    assert_eq!(store["x"].state.get("title"), Some(&json!("from b")));
}

#[test]
fn test_legacy_dataset_without_extension() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    init_dataset(&dataset, 2);
    write_frame(
        &dataset,
        "a",
        0,
        "",
        &[r#"{"_id":"x","_type":"Doc","_v":1,"title":"legacy"}"#],
        1.0,
    );

    let (store, summary) = Exporter::new(&dataset, temp.path().join("export"))
        .run()
        .unwrap();
    assert_eq!(summary.transactions, 1);
    assert_eq!(store["x"].state.get("title"), Some(&json!("legacy")));
}

#[test]
fn test_empty_frame_continues_sequence() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    init_dataset(&dataset, 3);
    write_frame(&dataset, "a", 0, ".dat", &[], 1.0);
    write_frame(
        &dataset,
        "a",
        1,
        ".dat",
        &[r#"{"_id":"x","_type":"Doc","_v":1,"title":"after empty"}"#],
        2.0,
    );

    let (store, summary) = Exporter::new(&dataset, temp.path().join("export"))
        .run()
        .unwrap();
    assert_eq!(summary.transactions, 2);
    assert!(store.contains_key("x"));
}

#[test]
fn test_asset_exported_under_object_folder() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    let out = temp.path().join("export");
    init_dataset(&dataset, 3);
    write_asset(&dataset, "cid42", 0, ".dat", b"pdf bytes");
    write_frame(
        &dataset,
        "a",
        0,
        ".dat",
        &[concat!(
            r#"{"_id":"x","_type":"Receipt","_v":1,"#,
            r#""asset":"https://h.example/cid42/0/receipt.pdf?sig=abc"}"#
        )],
        1.0,
    );

    let (_, summary) = Exporter::new(&dataset, &out).run().unwrap();
    assert_eq!(summary.assets, 1);
    assert_eq!(
        fs::read(out.join("Receipt").join("x").join("receipt.pdf")).unwrap(),
        b"pdf bytes"
    );
}

#[test]
fn test_unresolvable_asset_is_skipped_not_fatal() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    let out = temp.path().join("export");
    init_dataset(&dataset, 3);
    write_frame(
        &dataset,
        "a",
        0,
        ".dat",
        &[r#"{"_id":"x","_type":"Doc","_v":1,"asset":"https://h.example/short"}"#],
        1.0,
    );

    let (_, summary) = Exporter::new(&dataset, &out).run().unwrap();
    assert_eq!(summary.objects, 1);
    assert_eq!(summary.assets, 0);
    assert!(out.join("Doc").join("x.json").exists());
}

#[test]
fn test_missing_info_is_fatal_before_replay() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    fs::create_dir_all(&dataset).unwrap();

    let result = Exporter::new(&dataset, temp.path().join("export")).run();
    assert!(result.is_err());
}

#[test]
fn test_repeat_run_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    init_dataset(&dataset, 3);
    write_frame(
        &dataset,
        "a",
        0,
        ".dat",
        &[
            r#"{"_id":"x","_type":"Doc","_v":1,"title":"one","meta":{"lang":"en"}}"#,
            r#"{"_id":"y","_type":"Tag","_v":4,"label":"t"}"#,
        ],
        1.0,
    );

    let (first, _) = Exporter::new(&dataset, temp.path().join("out1"))
        .run()
        .unwrap();
    let (second, _) = Exporter::new(&dataset, temp.path().join("out2"))
        .run()
        .unwrap();
    assert_eq!(first, second);
}
