// ============================================================================
// mediaprobe-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structures and Constants
//
// This module defines the constants and configuration structure used by the
// probing backends. Status codes follow HTTP semantics so that a probe result
// can be reported the same way regardless of which tool produced it.
//
// USAGE:
// A ProbeConfig is built by the consumer (usually the CLI, via `from_env`) and
// handed to `BackendRegistry::with_defaults`.

// ---- Standard library imports ----
use std::env;
use std::path::PathBuf;

// ============================================================================
// STATUS CODES
// ============================================================================

/// Probe succeeded.
pub const STATUS_OK: u16 = 200;

/// The reference cannot be handled by the backend (e.g. a URL for a
/// local-only backend).
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Local media path does not exist.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Orientation cannot be computed because dimensions are unavailable.
pub const STATUS_PRECONDITION_FAILED: u16 = 412;

/// The backend could not decode the media or found nothing usable in it.
pub const STATUS_UNSUPPORTED_MEDIA: u16 = 415;

/// The backend tool failed or produced output that could not be parsed.
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// The backend tool is not installed.
pub const STATUS_UNAVAILABLE: u16 = 503;

// ============================================================================
// BACKEND DEFAULTS
// ============================================================================

/// Backends tried, in order, when the caller does not name one.
pub const DEFAULT_BACKENDS: [&str; 3] = ["ffprobe", "mediainfo", "image"];

/// Default executable name for the ffprobe backend.
pub const DEFAULT_FFPROBE_COMMAND: &str = "ffprobe";

/// Default executable name for the mediainfo backend.
pub const DEFAULT_MEDIAINFO_COMMAND: &str = "mediainfo";

/// Environment variable overriding the ffprobe executable.
pub const ENV_FFPROBE: &str = "MEDIAPROBE_FFPROBE";

/// Environment variable overriding the mediainfo executable.
pub const ENV_MEDIAINFO: &str = "MEDIAPROBE_MEDIAINFO";

// ============================================================================
// PROBE CONFIGURATION
// ============================================================================

/// Settings for the built-in probing backends.
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::config::ProbeConfig;
/// use std::path::PathBuf;
///
/// let config = ProbeConfig {
///     ffprobe_path: PathBuf::from("/opt/ffmpeg/bin/ffprobe"),
///     ..ProbeConfig::default()
/// };
/// assert_eq!(config.mediainfo_path, PathBuf::from("mediainfo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Executable used by the `ffprobe` backend
    pub ffprobe_path: PathBuf,

    /// Executable used by the `mediainfo` backend
    pub mediainfo_path: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE_COMMAND),
            mediainfo_path: PathBuf::from(DEFAULT_MEDIAINFO_COMMAND),
        }
    }
}

impl ProbeConfig {
    /// Builds a configuration from defaults overridden by the
    /// `MEDIAPROBE_FFPROBE` and `MEDIAPROBE_MEDIAINFO` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = env::var_os(ENV_FFPROBE).filter(|p| !p.is_empty()) {
            log::debug!("Using ffprobe from {}: {:?}", ENV_FFPROBE, path);
            config.ffprobe_path = PathBuf::from(path);
        }
        if let Some(path) = env::var_os(ENV_MEDIAINFO).filter(|p| !p.is_empty()) {
            log::debug!("Using mediainfo from {}: {:?}", ENV_MEDIAINFO, path);
            config.mediainfo_path = PathBuf::from(path);
        }
        config
    }
}
