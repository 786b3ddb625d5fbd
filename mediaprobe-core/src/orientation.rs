// ============================================================================
// mediaprobe-core/src/orientation.rs
// ============================================================================
//
// ORIENTATION ANALYSIS: Rotation-Aware Portrait/Landscape Classification
//
// This module derives the display orientation of a media item from its
// effective dimensions and rotation metadata.
//
// ALGORITHM:
// - rotated: the rotation is exactly 90 or 270 degrees
// - wide:    effective width <= effective height (tall or square frame
//            before rotation is applied; the name is historical)
// - portrait = rotated XOR wide
//
// Square frames land on the "wide" side of the comparison and are therefore
// portrait unless rotated by a quarter turn.

use crate::error::{CoreError, CoreResult};
use crate::metadata::{MediaMetadata, fields};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display orientation of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationReport {
    pub is_portrait: bool,
    pub is_landscape: bool,
    pub orientation: Orientation,
}

impl OrientationReport {
    fn from_portrait(is_portrait: bool) -> Self {
        Self {
            is_portrait,
            is_landscape: !is_portrait,
            orientation: if is_portrait {
                Orientation::Portrait
            } else {
                Orientation::Landscape
            },
        }
    }
}

/// Classifies metadata as portrait or landscape.
///
/// # Errors
///
/// Returns `CoreError::MissingDimensions` when the effective width or height
/// cannot be resolved. The error names the `media` field when present.
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::metadata::MediaMetadata;
/// use mediaprobe_core::orientation::{Orientation, classify_orientation};
///
/// let meta = MediaMetadata::new()
///     .with("width", 1920)
///     .with("height", 1080)
///     .with("rotate", 90);
/// let report = classify_orientation(&meta).unwrap();
/// assert_eq!(report.orientation, Orientation::Portrait);
/// assert!(report.is_portrait);
/// ```
pub fn classify_orientation(metadata: &MediaMetadata) -> CoreResult<OrientationReport> {
    let (Some(width), Some(height)) = (metadata.effective_width(), metadata.effective_height())
    else {
        let media = metadata
            .get_str(fields::MEDIA)
            .unwrap_or("media")
            .to_string();
        return Err(CoreError::MissingDimensions(media));
    };

    let rotate = metadata.rotation();
    let rotated = rotate == 90.0 || rotate == 270.0;
    let wide = width <= height;

    log::debug!(
        "Orientation inputs: width={}, height={}, rotate={}, rotated={}, wide={}",
        width,
        height,
        rotate,
        rotated,
        wide
    );

    Ok(OrientationReport::from_portrait(rotated ^ wide))
}

/// Convenience predicate over [`classify_orientation`].
pub fn is_portrait(metadata: &MediaMetadata) -> CoreResult<bool> {
    classify_orientation(metadata).map(|r| r.is_portrait)
}

/// Convenience predicate over [`classify_orientation`].
pub fn is_landscape(metadata: &MediaMetadata) -> CoreResult<bool> {
    classify_orientation(metadata).map(|r| r.is_landscape)
}
