//! MediaInfo integration for media metadata extraction
//!
//! This module runs `mediainfo --Output=JSON` and flattens its track list into
//! a `MediaMetadata` mapping. Video tracks report `video_width` and
//! `video_height`; still images report plain `width` and `height`, which the
//! orientation logic uses as its fallback.

use crate::config::{DEFAULT_MEDIAINFO_COMMAND, STATUS_UNSUPPORTED_MEDIA};
use crate::error::{CoreError, CoreResult};
use crate::external::{
    Probe, ProbeOutcome, check_dependency, ensure_exists, normalize_rotation, number_value,
    run_json_command,
};
use crate::metadata::{MediaMetadata, fields};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Command;

/// A single MediaInfo track. MediaInfo reports every value as a string.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MediaInfoTrack {
    #[serde(rename = "@type")]
    pub track_type: String,
    #[serde(rename = "Format")]
    pub format: Option<String>,
    #[serde(rename = "Width")]
    pub width: Option<String>,
    #[serde(rename = "Height")]
    pub height: Option<String>,
    #[serde(rename = "Rotation")]
    pub rotation: Option<String>,
    #[serde(rename = "Duration")]
    pub duration: Option<String>,
    #[serde(rename = "FileSize")]
    pub file_size: Option<String>,
    #[serde(rename = "OverallBitRate")]
    pub overall_bit_rate: Option<String>,
    #[serde(rename = "FrameRate")]
    pub frame_rate: Option<String>,
    #[serde(rename = "Channels")]
    pub channels: Option<String>,
    #[serde(rename = "SamplingRate")]
    pub sampling_rate: Option<String>,
}

/// MediaInfo media container
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaInfoMedia {
    #[serde(default)]
    pub track: Vec<MediaInfoTrack>,
}

/// Root MediaInfo response structure. `media` is null for unreadable input.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaInfoResponse {
    pub media: Option<MediaInfoMedia>,
}

/// Backend that shells out to `mediainfo`.
#[derive(Debug, Clone)]
pub struct MediaInfoBackend {
    command: PathBuf,
}

impl Default for MediaInfoBackend {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIAINFO_COMMAND)
    }
}

impl MediaInfoBackend {
    pub const NAME: &'static str = "mediainfo";

    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn probe_media(&self, media: &str) -> CoreResult<MediaMetadata> {
        ensure_exists(media)?;

        let mut cmd = Command::new(&self.command);
        cmd.arg("--Output=JSON").arg(media);

        let output = run_json_command(&mut cmd, Self::NAME)?;
        let response: MediaInfoResponse = serde_json::from_value(output).map_err(|e| {
            CoreError::JsonParse(format!("mediainfo output for {media}: {e}"))
        })?;
        flatten_mediainfo_response(media, &response)
    }
}

impl Probe for MediaInfoBackend {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn probe(&self, media: &str) -> ProbeOutcome {
        log::debug!("Running mediainfo for media info on: {}", media);
        ProbeOutcome::from_result(Self::NAME, self.probe_media(media))
    }

    fn is_available(&self) -> bool {
        check_dependency(&self.command, "--version").is_ok()
    }
}

fn parse_number(value: Option<&String>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}

/// Flattens a parsed MediaInfo response.
pub fn flatten_mediainfo_response(
    media: &str,
    response: &MediaInfoResponse,
) -> CoreResult<MediaMetadata> {
    let tracks = response
        .media
        .as_ref()
        .map(|m| m.track.as_slice())
        .unwrap_or_default();

    let find = |track_type: &str| tracks.iter().find(|t| t.track_type == track_type);

    let general = find("General");
    let video = find("Video");
    let image = find("Image");
    let audio = find("Audio");

    if video.is_none() && image.is_none() && audio.is_none() {
        return Err(CoreError::BackendProbe {
            media: media.to_string(),
            message: "mediainfo found no video, image or audio track".to_string(),
            status: STATUS_UNSUPPORTED_MEDIA,
        });
    }

    let mut meta = MediaMetadata::new();

    if let Some(general) = general {
        meta.insert_opt("duration", parse_number(general.duration.as_ref()).map(number_value));
        meta.insert_opt("size", parse_number(general.file_size.as_ref()).map(number_value));
        meta.insert_opt(
            "bit_rate",
            parse_number(general.overall_bit_rate.as_ref()).map(number_value),
        );
        meta.insert_opt("format_name", general.format.clone());
    }

    if let Some(video) = video {
        meta.insert_opt(
            fields::VIDEO_WIDTH,
            parse_number(video.width.as_ref()).map(number_value),
        );
        meta.insert_opt(
            fields::VIDEO_HEIGHT,
            parse_number(video.height.as_ref()).map(number_value),
        );
        meta.insert_opt(
            fields::ROTATE,
            parse_number(video.rotation.as_ref())
                .map(normalize_rotation)
                .map(number_value),
        );
        meta.insert_opt("video_codec", video.format.clone());
        meta.insert_opt(
            "frame_rate",
            parse_number(video.frame_rate.as_ref()).map(number_value),
        );
    }

    if let Some(image) = image {
        meta.insert_opt(fields::WIDTH, parse_number(image.width.as_ref()).map(number_value));
        meta.insert_opt(fields::HEIGHT, parse_number(image.height.as_ref()).map(number_value));
        meta.insert_opt("image_format", image.format.clone());
    }

    if let Some(audio) = audio {
        meta.insert_opt("audio_codec", audio.format.clone());
        meta.insert_opt(
            "audio_channels",
            parse_number(audio.channels.as_ref()).map(number_value),
        );
        meta.insert_opt(
            "sample_rate",
            parse_number(audio.sampling_rate.as_ref()).map(number_value),
        );
    }

    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> MediaInfoResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flatten_video() {
        let resp = response(json!({
            "media": {
                "@ref": "clip.mov",
                "track": [
                    {"@type": "General", "Format": "MPEG-4", "Duration": "12.512",
                     "FileSize": "2048", "OverallBitRate": "1309"},
                    {"@type": "Video", "Format": "AVC", "Width": "1920", "Height": "1080",
                     "Rotation": "90.000", "FrameRate": "29.970"},
                    {"@type": "Audio", "Format": "AAC", "Channels": "2", "SamplingRate": "44100"}
                ]
            }
        }));
        let meta = flatten_mediainfo_response("clip.mov", &resp).unwrap();
        assert_eq!(meta.get("video_width"), Some(&json!(1920)));
        assert_eq!(meta.get("video_height"), Some(&json!(1080)));
        assert_eq!(meta.get("rotate"), Some(&json!(90)));
        assert!(!meta.contains("width"));
        assert_eq!(meta.get("format_name"), Some(&json!("MPEG-4")));
        assert_eq!(meta.get("duration"), Some(&json!(12.512)));
        assert_eq!(meta.get("size"), Some(&json!(2048)));
        assert_eq!(meta.get("audio_channels"), Some(&json!(2)));
        assert_eq!(meta.effective_width(), Some(1920.0));
    }

    #[test]
    fn test_flatten_image() {
        let resp = response(json!({
            "media": {
                "track": [
                    {"@type": "General", "Format": "JPEG", "FileSize": "51234"},
                    {"@type": "Image", "Format": "JPEG", "Width": "3000", "Height": "4000"}
                ]
            }
        }));
        let meta = flatten_mediainfo_response("photo.jpg", &resp).unwrap();
        assert_eq!(meta.get("width"), Some(&json!(3000)));
        assert_eq!(meta.get("height"), Some(&json!(4000)));
        assert!(!meta.contains("rotate"));
    }

    #[test]
    fn test_negative_rotation_is_normalized() {
        let resp = response(json!({
            "media": {"track": [{"@type": "Video", "Width": "10", "Height": "20", "Rotation": "-90.000"}]}
        }));
        let meta = flatten_mediainfo_response("x.mp4", &resp).unwrap();
        assert_eq!(meta.get("rotate"), Some(&json!(270)));
    }

    #[test]
    fn test_null_media_is_unsupported() {
        let err = flatten_mediainfo_response("x.bin", &response(json!({"media": null}))).unwrap_err();
        assert_eq!(err.status_code(), 415);
    }

    #[test]
    fn test_general_only_is_unsupported() {
        let resp = response(json!({"media": {"track": [{"@type": "General", "FileSize": "10"}]}}));
        let err = flatten_mediainfo_response("notes.txt", &resp).unwrap_err();
        assert_eq!(err.status_code(), 415);
    }
}
