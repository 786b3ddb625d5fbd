//! FFprobe integration for media metadata extraction
//!
//! This module runs `ffprobe` with JSON output and flattens the stream and
//! format sections into a single `MediaMetadata` mapping: dimensions and
//! rotation of the first video stream, codecs, duration and container facts.
use crate::config::{DEFAULT_FFPROBE_COMMAND, STATUS_UNSUPPORTED_MEDIA};
use crate::error::{CoreError, CoreResult};
use crate::external::{
    Probe, ProbeOutcome, check_dependency, ensure_exists, normalize_rotation, number_value,
    run_json_command,
};
use crate::metadata::{MediaMetadata, fields, value_as_f64};

use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;

/// Backend that shells out to `ffprobe`.
#[derive(Debug, Clone)]
pub struct FfprobeBackend {
    command: PathBuf,
}

impl Default for FfprobeBackend {
    fn default() -> Self {
        Self::new(DEFAULT_FFPROBE_COMMAND)
    }
}

impl FfprobeBackend {
    pub const NAME: &'static str = "ffprobe";

    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn probe_media(&self, media: &str) -> CoreResult<MediaMetadata> {
        ensure_exists(media)?;

        let mut cmd = Command::new(&self.command);
        cmd.args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(media);

        let output = run_json_command(&mut cmd, Self::NAME)?;
        flatten_ffprobe_output(media, &output)
    }
}

impl Probe for FfprobeBackend {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn probe(&self, media: &str) -> ProbeOutcome {
        log::debug!("Running ffprobe for media info on: {}", media);
        ProbeOutcome::from_result(Self::NAME, self.probe_media(media))
    }

    fn is_available(&self) -> bool {
        check_dependency(&self.command, "-version").is_ok()
    }
}

/// Flattens parsed `ffprobe -print_format json` output.
pub fn flatten_ffprobe_output(media: &str, output: &Value) -> CoreResult<MediaMetadata> {
    let streams = output
        .get("streams")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let format = output.get("format");

    if streams.is_empty() {
        return Err(CoreError::BackendProbe {
            media: media.to_string(),
            message: "ffprobe found no streams".to_string(),
            status: STATUS_UNSUPPORTED_MEDIA,
        });
    }

    let first_of = |codec_type: &str| {
        streams
            .iter()
            .find(|s| s.get("codec_type").and_then(Value::as_str) == Some(codec_type))
    };

    let mut meta = MediaMetadata::new();
    meta.insert("stream_count", streams.len());

    if let Some(video) = first_of("video") {
        meta.insert_opt(fields::WIDTH, video.get("width").and_then(Value::as_u64));
        meta.insert_opt(fields::HEIGHT, video.get("height").and_then(Value::as_u64));
        meta.insert_opt("video_codec", video.get("codec_name").and_then(Value::as_str));
        meta.insert_opt("pix_fmt", video.get("pix_fmt").and_then(Value::as_str));
        meta.insert_opt(
            "frame_rate",
            video
                .get("avg_frame_rate")
                .and_then(Value::as_str)
                .and_then(parse_frame_rate)
                .map(number_value),
        );
        meta.insert_opt(fields::ROTATE, stream_rotation(video).map(number_value));
    }

    if let Some(audio) = first_of("audio") {
        meta.insert_opt("audio_codec", audio.get("codec_name").and_then(Value::as_str));
        meta.insert_opt("audio_channels", audio.get("channels").and_then(Value::as_u64));
        meta.insert_opt(
            "sample_rate",
            audio.get("sample_rate").and_then(value_as_f64).map(number_value),
        );
    }

    if let Some(format) = format {
        meta.insert_opt(
            "duration",
            format.get("duration").and_then(value_as_f64).map(number_value),
        );
        meta.insert_opt("size", format.get("size").and_then(value_as_f64).map(number_value));
        meta.insert_opt(
            "bit_rate",
            format.get("bit_rate").and_then(value_as_f64).map(number_value),
        );
        meta.insert_opt("format_name", format.get("format_name").and_then(Value::as_str));
        if let Some(tags) = format.get("tags").filter(|t| t.is_object()) {
            meta.insert("tags", tags.clone());
        }
    }

    Ok(meta)
}

/// Clockwise rotation of a stream in degrees.
///
/// The legacy `rotate` tag is already clockwise. Display matrix side data
/// reports counter-clockwise rotation and is negated.
fn stream_rotation(stream: &Value) -> Option<f64> {
    let from_tag = stream
        .get("tags")
        .and_then(|t| t.get("rotate"))
        .and_then(value_as_f64);

    let from_side_data = || {
        stream
            .get("side_data_list")
            .and_then(Value::as_array)?
            .iter()
            .find_map(|sd| sd.get("rotation").and_then(value_as_f64))
            .map(|r| -r)
    };

    from_tag.or_else(from_side_data).map(normalize_rotation)
}

/// Parses an ffprobe rational frame rate such as `30000/1001`.
fn parse_frame_rate(rate: &str) -> Option<f64> {
    let (num, den) = rate.split_once('/')?;
    let num = num.parse::<f64>().ok()?;
    let den = den.parse::<f64>().ok()?;
    if den == 0.0 || num == 0.0 {
        return None;
    }
    Some((num / den * 1000.0).round() / 1000.0)
}
