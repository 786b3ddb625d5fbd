// ============================================================================
// mediaprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Probing Backends and File System Access
//
// This module encapsulates interactions with external command-line tools
// (ffprobe, mediainfo), the in-process still image reader, and file system
// metadata. Each backend implements the `Probe` trait and always answers with
// a structured `ProbeOutcome`, never a panic or an `Err`.
//
// KEY COMPONENTS:
// - Probe trait and ProbeOutcome result type
// - Concrete backends: FfprobeBackend, MediaInfoBackend, ImageBackend
// - Dependency checking for external tools
// - File metadata access abstraction

// ---- Internal crate imports ----
use crate::config::{STATUS_NOT_FOUND, STATUS_OK};
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::metadata::MediaMetadata;
use crate::utils::is_missing_local_file;

// ---- External crate imports ----
use serde_json::Value;

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// ffprobe-backed metadata probing
pub mod ffprobe_executor;

/// In-process still image header and EXIF reading
pub mod image_reader;

/// mediainfo-backed metadata probing
pub mod mediainfo_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::FfprobeBackend;
pub use image_reader::ImageBackend;
pub use mediainfo_executor::MediaInfoBackend;

// ============================================================================
// PROBE ABSTRACTION
// ============================================================================

/// Structured result of a single backend call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    /// 200 on success, an HTTP-like failure status otherwise
    pub status: u16,
    /// Name of the backend that serviced the call
    pub backend: String,
    /// Metadata, present on success
    pub metadata: Option<MediaMetadata>,
    /// Human-readable diagnostic, present on failure
    pub message: Option<String>,
}

impl ProbeOutcome {
    pub fn success(backend: impl Into<String>, metadata: MediaMetadata) -> Self {
        Self {
            status: STATUS_OK,
            backend: backend.into(),
            metadata: Some(metadata),
            message: None,
        }
    }

    pub fn failure(backend: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            backend: backend.into(),
            metadata: None,
            message: Some(message.into()),
        }
    }

    /// Converts a core error into a failed outcome carrying its status.
    pub fn from_error(backend: impl Into<String>, err: &CoreError) -> Self {
        let message = match err {
            CoreError::BackendProbe { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Self::failure(backend, err.status_code(), message)
    }

    /// Wraps the result of a fallible probe into an outcome.
    pub fn from_result(backend: &str, result: CoreResult<MediaMetadata>) -> Self {
        match result {
            Ok(metadata) => Self::success(backend, metadata),
            Err(err) => Self::from_error(backend, &err),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK && self.metadata.is_some()
    }
}

/// A pluggable implementation of the metadata-probing capability.
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::external::{Probe, ProbeOutcome};
/// use mediaprobe_core::metadata::MediaMetadata;
///
/// struct FixedProbe;
///
/// impl Probe for FixedProbe {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn probe(&self, _media: &str) -> ProbeOutcome {
///         ProbeOutcome::success("fixed", MediaMetadata::new().with("width", 640))
///     }
/// }
///
/// assert!(FixedProbe.probe("anything").is_success());
/// ```
pub trait Probe {
    /// Registry key of this backend.
    fn name(&self) -> &str;

    /// Probes one media reference.
    fn probe(&self, media: &str) -> ProbeOutcome;

    /// Whether the backend can run on this machine at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// Fails with a 404 probe error when a local reference does not exist.
pub(crate) fn ensure_exists(media: &str) -> CoreResult<()> {
    if is_missing_local_file(media) {
        return Err(CoreError::BackendProbe {
            media: media.to_string(),
            message: format!("File not found: {media}"),
            status: STATUS_NOT_FOUND,
        });
    }
    Ok(())
}

/// Runs a tool that prints JSON on stdout and parses its output.
pub(crate) fn run_json_command(cmd: &mut Command, tool: &str) -> CoreResult<Value> {
    log::debug!("Running {}: {:?}", tool, cmd);

    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|e| command_start_error(tool, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(command_failed_error(tool, output.status, stderr.to_string()));
    }

    serde_json::from_slice(&output.stdout)
        .map_err(|e| CoreError::JsonParse(format!("{tool} output: {e}")))
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if an external command is available and executable by running it
/// with `version_arg`.
pub(crate) fn check_dependency(cmd: &Path, version_arg: &str) -> CoreResult<()> {
    let result = Command::new(cmd)
        .arg(version_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Dependency '{}' not found.", cmd.display());
            Err(command_start_error(cmd.display().to_string(), e))
        }
        Err(e) => {
            log::warn!(
                "Failed to start dependency check command '{}': {}",
                cmd.display(),
                e
            );
            Err(command_start_error(cmd.display().to_string(), e))
        }
    }
}

// ============================================================================
// FILE METADATA ACCESS
// ============================================================================

/// Abstraction over file size lookups, so summaries can be computed without
/// touching the real file system.
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::external::FileMetadataProvider;
/// use mediaprobe_core::CoreResult;
/// use std::path::Path;
///
/// struct FixedSize;
///
/// impl FileMetadataProvider for FixedSize {
///     fn get_size(&self, _path: &Path) -> CoreResult<u64> {
///         Ok(1_000_000)
///     }
/// }
///
/// assert_eq!(FixedSize.get_size(Path::new("/fake/path")).unwrap(), 1_000_000);
/// ```
pub trait FileMetadataProvider {
    /// Gets the size of the file at the given path in bytes.
    fn get_size(&self, path: &Path) -> CoreResult<u64>;
}

/// Standard implementation of FileMetadataProvider using `std::fs::metadata`.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|source| CoreError::FilesystemAccess {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Converts a float to a JSON number, preferring an integer representation
/// when the value has no fractional part.
pub(crate) fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Normalizes a rotation in degrees into `[0, 360)`.
pub(crate) fn normalize_rotation(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}
