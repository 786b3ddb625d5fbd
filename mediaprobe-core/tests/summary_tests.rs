// mediaprobe-core/tests/summary_tests.rs

use mediaprobe_core::error::CoreError;
use mediaprobe_core::external::StdFsMetadataProvider;
use mediaprobe_core::summary::{SummaryPolicy, TypeSummaryRow, summarize_by_type};
use std::fs;
use tempfile::tempdir;

fn row(label: &str, count: u64, total_size: u64) -> TypeSummaryRow {
    TypeSummaryRow {
        label: label.to_string(),
        count,
        total_size,
    }
}

#[test]
fn test_summarize_real_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let video = dir.path().join("a.mp4");
    let image = dir.path().join("b.jpg");
    let other = dir.path().join("c.txt");
    fs::write(&video, vec![0u8; 100])?;
    fs::write(&image, vec![0u8; 50])?;
    fs::write(&other, vec![0u8; 10])?;

    let media: Vec<String> = [&video, &image, &other]
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let rows = summarize_by_type(&media, &StdFsMetadataProvider, SummaryPolicy::Abort)?;

    assert_eq!(
        rows,
        vec![
            row("ALL", 3, 160),
            row("audio+image+video", 2, 150),
            row("image", 1, 50),
            row("image+video", 2, 150),
            row("unknown", 1, 10),
            row("video", 1, 100),
        ]
    );

    dir.close()?;
    Ok(())
}

#[test]
fn test_missing_file_aborts_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let present = dir.path().join("present.mkv");
    fs::write(&present, b"1234")?;
    let missing = dir.path().join("missing.mkv");

    let media = vec![
        present.to_string_lossy().into_owned(),
        missing.to_string_lossy().into_owned(),
    ];
    let result = summarize_by_type(&media, &StdFsMetadataProvider, SummaryPolicy::Abort);

    match result {
        Err(CoreError::FilesystemAccess { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected FilesystemAccess, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_missing_file_skipped_when_lenient() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let present = dir.path().join("song.flac");
    fs::write(&present, b"12345678")?;
    let missing = dir.path().join("missing.png");

    let media = vec![
        missing.to_string_lossy().into_owned(),
        present.to_string_lossy().into_owned(),
    ];
    let rows = summarize_by_type(&media, &StdFsMetadataProvider, SummaryPolicy::SkipInaccessible)?;

    assert_eq!(
        rows,
        vec![
            row("ALL", 1, 8),
            row("audio", 1, 8),
            row("audio+image+video", 1, 8),
        ]
    );
    Ok(())
}
