//! Filename-based media type classification.
//!
//! Classification looks only at the extension of the name (case-insensitive).
//! For URLs the query string and fragment are ignored, so
//! `https://host/clip.mp4?token=1` is still a video.

use crate::utils::is_url;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

const VIDEO_EXTENSIONS: &[&str] = &[
    "3g2", "3gp", "avi", "divx", "f4v", "flv", "h264", "hevc", "m2ts", "m4v", "mkv", "mov",
    "mp4", "mpeg", "mpg", "mts", "mxf", "ogv", "rm", "rmvb", "ts", "vob", "webm", "wmv",
];

const AUDIO_EXTENSIONS: &[&str] = &[
    "aac", "ac3", "aif", "aiff", "alac", "amr", "ape", "dts", "eac3", "flac", "m4a", "m4b",
    "mka", "mp2", "mp3", "mpc", "oga", "ogg", "opus", "ra", "wav", "weba", "wma", "wv",
];

const IMAGE_EXTENSIONS: &[&str] = &[
    "avif", "bmp", "cr2", "dng", "gif", "heic", "heif", "ico", "jfif", "jpe", "jpeg", "jpg",
    "jxl", "nef", "png", "psd", "raw", "svg", "tga", "tif", "tiff", "webp",
];

/// Broad kind of a media file, as guessed from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Audio,
    Video,
    Unknown,
}

impl MediaType {
    /// Lowercase label used in metadata and summaries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Audio => "audio",
            MediaType::Video => "video",
            MediaType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a media reference by its extension.
#[must_use]
pub fn classify(filename: &str) -> MediaType {
    let name = if is_url(filename) {
        filename
            .split(['?', '#'])
            .next()
            .unwrap_or(filename)
    } else {
        filename
    };

    let Some(ext) = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
    else {
        return MediaType::Unknown;
    };

    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        MediaType::Video
    } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        MediaType::Audio
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        MediaType::Image
    } else {
        MediaType::Unknown
    }
}
