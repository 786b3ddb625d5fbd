//! Core library for probing media metadata and deriving simple facts from it.
//!
//! This crate provides pluggable probing backends (ffprobe, mediainfo and an
//! in-process image reader), batch probing with per-item failure tolerance,
//! rotation-aware portrait/landscape classification, and type summaries over
//! batches of files.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediaprobe_core::{classify_orientation, get_info};
//!
//! let batch = get_info(&["clip.mp4", "photo.jpg"], None).unwrap();
//! for item in &batch.items {
//!     match classify_orientation(item) {
//!         Ok(report) => println!("{:?}: {}", item.get("media"), report.orientation),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! for failure in &batch.failures {
//!     eprintln!("skipped {}: {}", failure.media, failure.message);
//! }
//! ```

pub mod accessor;
pub mod classify;
pub mod config;
pub mod error;
pub mod external;
pub mod metadata;
pub mod orientation;
pub mod registry;
pub mod summary;
pub mod utils;

// Re-exports for public API
pub use accessor::{BatchResult, ProbeFailure, get_info, get_info_with};
pub use classify::{MediaType, classify};
pub use config::ProbeConfig;
pub use error::{CoreError, CoreResult};
pub use external::{FileMetadataProvider, Probe, ProbeOutcome, StdFsMetadataProvider};
pub use metadata::MediaMetadata;
pub use orientation::{Orientation, OrientationReport, classify_orientation};
pub use registry::{BackendRegistry, validate_backend_name};
pub use summary::{SummaryPolicy, TypeSummaryRow, summarize_by_type};
pub use utils::format_bytes;
