//! In-process still image probing.
//!
//! Reads image headers with the `image` crate and the EXIF Orientation tag
//! with `kamadak-exif`, so still images can be probed without any external
//! tool installed. Only local paths are supported.

use crate::config::{STATUS_BAD_REQUEST, STATUS_UNSUPPORTED_MEDIA};
use crate::error::{CoreError, CoreResult};
use crate::external::{Probe, ProbeOutcome, ensure_exists};
use crate::metadata::{MediaMetadata, fields};
use crate::utils::is_url;

use image::ImageReader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Backend that decodes still image headers in-process.
#[derive(Debug, Clone, Default)]
pub struct ImageBackend;

impl ImageBackend {
    pub const NAME: &'static str = "image";

    fn probe_media(&self, media: &str) -> CoreResult<MediaMetadata> {
        if is_url(media) {
            return Err(unsupported(
                media,
                STATUS_BAD_REQUEST,
                "image backend only reads local files".to_string(),
            ));
        }
        ensure_exists(media)?;

        let path = Path::new(media);
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let Some(format) = reader.format() else {
            return Err(unsupported(
                media,
                STATUS_UNSUPPORTED_MEDIA,
                "unrecognized image format".to_string(),
            ));
        };
        let (width, height) = reader.into_dimensions().map_err(|e| {
            unsupported(media, STATUS_UNSUPPORTED_MEDIA, format!("cannot decode image: {e}"))
        })?;

        let mut meta = MediaMetadata::new()
            .with(fields::WIDTH, width)
            .with(fields::HEIGHT, height)
            .with("format_name", format!("{format:?}").to_ascii_lowercase())
            .with("size", std::fs::metadata(path)?.len());

        if let Some(orientation) = read_exif_orientation(path) {
            meta.insert("exif_orientation", orientation);
            meta.insert(fields::ROTATE, rotation_for_exif_orientation(orientation));
        }

        Ok(meta)
    }
}

impl Probe for ImageBackend {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn probe(&self, media: &str) -> ProbeOutcome {
        log::debug!("Reading image header for: {}", media);
        ProbeOutcome::from_result(Self::NAME, self.probe_media(media))
    }
}

fn unsupported(media: &str, status: u16, message: String) -> CoreError {
    CoreError::BackendProbe {
        media: media.to_string(),
        message,
        status,
    }
}

/// Reads the primary EXIF Orientation value, if the file carries one.
fn read_exif_orientation(path: &Path) -> Option<u32> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif
            .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|field| field.value.get_uint(0)),
        Err(e) => {
            log::debug!("No EXIF data in {}: {}", path.display(), e);
            None
        }
    }
}

/// Clockwise display rotation implied by an EXIF Orientation value.
/// Mirrored variants rotate the same way as their unmirrored counterparts.
#[must_use]
pub fn rotation_for_exif_orientation(orientation: u32) -> u32 {
    match orientation {
        3 | 4 => 180,
        5 | 6 => 90,
        7 | 8 => 270,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exif_rotation_mapping() {
        assert_eq!(rotation_for_exif_orientation(1), 0);
        assert_eq!(rotation_for_exif_orientation(2), 0);
        assert_eq!(rotation_for_exif_orientation(3), 180);
        assert_eq!(rotation_for_exif_orientation(6), 90);
        assert_eq!(rotation_for_exif_orientation(5), 90);
        assert_eq!(rotation_for_exif_orientation(8), 270);
        assert_eq!(rotation_for_exif_orientation(0), 0);
    }

    #[test]
    fn test_url_is_bad_request() {
        let outcome = ImageBackend.probe("https://example.com/a.png");
        assert_eq!(outcome.status, 400);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let outcome = ImageBackend.probe("surely/not/here.png");
        assert_eq!(outcome.status, 404);
    }
}
