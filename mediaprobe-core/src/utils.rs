//! Utility functions for formatting and media reference handling.
//!
//! This module provides general-purpose helpers used throughout the
//! mediaprobe-core library: human-readable byte formatting, and
//! telling URLs apart from local paths.

use std::path::Path;

/// Returns true when the reference looks like a URL (`scheme://...`).
#[must_use]
pub fn is_url(media: &str) -> bool {
    match media.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Returns true for local references whose path does not exist.
/// URLs are never reported missing.
#[must_use]
pub fn is_missing_local_file(media: &str) -> bool {
    !is_url(media) && !Path::new(media).exists()
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/a.mp4"));
        assert!(is_url("rtsp://camera.local/stream"));
        assert!(is_url("s3+http://bucket/key"));
        assert!(!is_url("/home/user/a.mp4"));
        assert!(!is_url("relative/a.mp4"));
        assert!(!is_url("://nothing"));
        assert!(!is_url("weird dir://a.mp4"));
    }

    #[test]
    fn test_is_missing_local_file() {
        assert!(is_missing_local_file("surely/this/does/not/exist.mp4"));
        assert!(!is_missing_local_file("https://example.com/missing.mp4"));
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KiB");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MiB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.00 GiB");
    }
}
