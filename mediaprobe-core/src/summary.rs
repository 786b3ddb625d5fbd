//! Batch summaries of media grouped by name-derived type.
//!
//! Only the filename and the file size are consulted; nothing is probed.
//! Besides one row per observed type, every batch contributes to the
//! synthetic groups `audio+image+video`, `image+video` and `ALL`.

use crate::classify::{MediaType, classify};
use crate::error::CoreResult;
use crate::external::FileMetadataProvider;

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Label of the group containing every summarized file.
pub const ALL_LABEL: &str = "ALL";

/// Label of the group of audio, image and video files.
pub const AUDIO_IMAGE_VIDEO_LABEL: &str = "audio+image+video";

/// Label of the group of image and video files.
pub const IMAGE_VIDEO_LABEL: &str = "image+video";

/// One line of a type summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSummaryRow {
    pub label: String,
    pub count: u64,
    pub total_size: u64,
}

/// What to do when a file size cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryPolicy {
    /// Stop at the first inaccessible file and return its error.
    #[default]
    Abort,
    /// Log a warning and leave the file out of every row.
    SkipInaccessible,
}

#[derive(Default)]
struct Totals {
    count: u64,
    total_size: u64,
}

/// Summarizes media references by type.
///
/// Rows are sorted by label in ascending byte order, so `ALL` comes first.
///
/// # Errors
///
/// With `SummaryPolicy::Abort`, the first size lookup failure is returned
/// (usually `CoreError::FilesystemAccess`).
///
/// # Examples
///
/// ```rust,no_run
/// use mediaprobe_core::external::StdFsMetadataProvider;
/// use mediaprobe_core::summary::{SummaryPolicy, summarize_by_type};
///
/// let rows = summarize_by_type(
///     &["a.mp4", "b.jpg"],
///     &StdFsMetadataProvider,
///     SummaryPolicy::Abort,
/// )
/// .unwrap();
/// for row in rows {
///     println!("{} {} {}", row.label, row.count, row.total_size);
/// }
/// ```
pub fn summarize_by_type<S: AsRef<str>>(
    media: &[S],
    sizes: &dyn FileMetadataProvider,
    policy: SummaryPolicy,
) -> CoreResult<Vec<TypeSummaryRow>> {
    let mut totals: BTreeMap<&'static str, Totals> = BTreeMap::new();

    for reference in media {
        let reference = reference.as_ref();
        let media_type = classify(reference);

        let size = match sizes.get_size(Path::new(reference)) {
            Ok(size) => size,
            Err(e) if policy == SummaryPolicy::SkipInaccessible => {
                log::warn!("Skipping {}: {}", reference, e);
                continue;
            }
            Err(e) => return Err(e),
        };

        for label in labels_for(media_type) {
            let entry = totals.entry(label).or_default();
            entry.count += 1;
            entry.total_size += size;
        }
    }

    Ok(totals
        .into_iter()
        .map(|(label, t)| TypeSummaryRow {
            label: label.to_string(),
            count: t.count,
            total_size: t.total_size,
        })
        .collect())
}

/// Every label a file of the given type is counted under.
fn labels_for(media_type: MediaType) -> Vec<&'static str> {
    let mut labels = vec![media_type.as_str(), ALL_LABEL];
    match media_type {
        MediaType::Image | MediaType::Video => {
            labels.push(AUDIO_IMAGE_VIDEO_LABEL);
            labels.push(IMAGE_VIDEO_LABEL);
        }
        MediaType::Audio => labels.push(AUDIO_IMAGE_VIDEO_LABEL),
        MediaType::Unknown => {}
    }
    labels
}
