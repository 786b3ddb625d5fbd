// mediaprobe-core/tests/image_backend_tests.rs
//
// Probing and orientation over real PNG files decoded by the in-process
// image backend.

use image::RgbImage;
use mediaprobe_core::external::{ImageBackend, Probe};
use mediaprobe_core::{BackendRegistry, Orientation, classify_orientation, get_info_with};
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn write_png(path: &Path, width: u32, height: u32) {
    RgbImage::new(width, height)
        .save(path)
        .expect("Failed to write fixture PNG");
}

fn image_registry() -> BackendRegistry {
    let mut registry = BackendRegistry::empty();
    registry.register(ImageBackend);
    registry
        .set_defaults(["image"])
        .expect("image backend is registered");
    registry
}

#[test]
fn test_image_backend_reads_dimensions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tall.png");
    write_png(&path, 20, 40);

    let outcome = ImageBackend.probe(path.to_str().unwrap());
    assert_eq!(outcome.status, 200);
    let meta = outcome.metadata.unwrap();
    assert_eq!(meta.get("width"), Some(&json!(20)));
    assert_eq!(meta.get("height"), Some(&json!(40)));
    assert_eq!(meta.get("format_name"), Some(&json!("png")));
    assert!(!meta.contains("rotate"));
}

#[test]
fn test_non_image_is_unsupported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "just some text").unwrap();

    let outcome = ImageBackend.probe(path.to_str().unwrap());
    assert_eq!(outcome.status, 415);
    assert!(outcome.metadata.is_none());
}

#[test]
fn test_batch_with_missing_file() {
    let dir = tempdir().unwrap();
    let tall = dir.path().join("tall.png");
    let wide = dir.path().join("wide.png");
    write_png(&tall, 10, 30);
    write_png(&wide, 30, 10);
    let missing = dir.path().join("missing.png");

    let media: Vec<String> = [&tall, &missing, &wide]
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let batch = get_info_with(&image_registry(), &media, None).unwrap();

    assert_eq!(batch.items.len(), 2);
    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].status, 404);

    let orientations: Vec<Orientation> = batch
        .items
        .iter()
        .map(|m| classify_orientation(m).unwrap().orientation)
        .collect();
    assert_eq!(orientations, vec![Orientation::Portrait, Orientation::Landscape]);

    assert_eq!(batch.items[0].get_str("info_backend"), Some("image"));
    assert_eq!(batch.items[0].get_str("type_from_name"), Some("image"));
}
