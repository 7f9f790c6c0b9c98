//! Corrupt frames must abort the whole run; no partial export is
//! trustworthy once integrity checks fail.

use super::test_utils::{encode_frame, init_dataset, write_frame, write_frame_bytes};
use remat::error::ExportError;
use remat::export::Exporter;
use tempfile::TempDir;

#[test]
fn test_tampered_frame_content_aborts_run() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    init_dataset(&dataset, 3);

    let mut bytes = encode_frame(&[r#"{"_id":"x","_type":"Doc","_v":1,"title":"ok"}"#], 1.0);
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    write_frame_bytes(&dataset, "a", 0, ".dat", &bytes);

    let err = Exporter::new(&dataset, temp.path().join("export"))
        .run()
        .unwrap_err();
    assert!(matches!(
        err,
        ExportError::FrameInvalid { ref client, index: 0, .. } if client == "a"
    ));
}

#[test]
fn test_truncated_frame_aborts_run() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    init_dataset(&dataset, 3);

    let bytes = encode_frame(&[r#"{"_id":"x","_v":1,"title":"ok"}"#], 1.0);
    write_frame_bytes(&dataset, "a", 0, ".dat", &bytes[..bytes.len() - 3]);

    assert!(Exporter::new(&dataset, temp.path().join("export"))
        .run()
        .is_err());
}

#[test]
fn test_corrupt_later_frame_aborts_after_earlier_clients() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    init_dataset(&dataset, 3);
    write_frame(
        &dataset,
        "a",
        0,
        ".dat",
        &[r#"{"_id":"x","_type":"Doc","_v":1,"title":"fine"}"#],
        1.0,
    );
    write_frame_bytes(&dataset, "b", 0, ".dat", b"garbage without structure");

    let err = Exporter::new(&dataset, temp.path().join("export"))
        .run()
        .unwrap_err();
    assert!(matches!(
        err,
        ExportError::FrameInvalid { ref client, .. } if client == "b"
    ));
}

#[test]
fn test_reserved_field_suffix_aborts_run() {
    let temp = TempDir::new().unwrap();
    let dataset = temp.path().join("dataset");
    init_dataset(&dataset, 3);
    write_frame(
        &dataset,
        "a",
        0,
        ".dat",
        &[r#"{"_id":"x","_type":"Doc","_v":1,"title$":"bad"}"#],
        1.0,
    );

    let err = Exporter::new(&dataset, temp.path().join("export"))
        .run()
        .unwrap_err();
    assert!(matches!(err, ExportError::Merge(_)));
}
