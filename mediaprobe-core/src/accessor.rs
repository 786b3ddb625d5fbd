// ============================================================================
// mediaprobe-core/src/accessor.rs
// ============================================================================
//
// MEDIA INFO ACCESSOR: Batch Probing With Per-Item Failure Tolerance
//
// This module probes a sequence of media references through the backend
// registry, strictly in input order. A failed item is logged and recorded as
// a ProbeFailure but never aborts the batch.
//
// KEY COMPONENTS:
// - BatchResult: successful items plus recorded failures
// - get_info / get_info_with: the batch operation (always sequence-in,
//   sequence-out; single-item unwrapping is a presentation concern)

use crate::classify::classify;
use crate::error::{CoreError, CoreResult};
use crate::external::{Probe, ProbeOutcome};
use crate::metadata::{MediaMetadata, fields};
use crate::registry::BackendRegistry;

use serde::Serialize;

/// A media reference that no backend could probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeFailure {
    pub media: String,
    pub message: String,
    pub status: u16,
}

impl From<ProbeFailure> for CoreError {
    fn from(failure: ProbeFailure) -> Self {
        CoreError::BackendProbe {
            media: failure.media,
            message: failure.message,
            status: failure.status,
        }
    }
}

/// Outcome of probing a batch of media references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    /// Successful items, in input order
    pub items: Vec<MediaMetadata>,
    /// Failed items, in input order
    pub failures: Vec<ProbeFailure>,
}

impl BatchResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.failures.is_empty()
    }
}

/// Probes media references with the built-in backends.
///
/// # Errors
///
/// Fails only on an invalid or unknown backend name, before any probing.
/// Per-item failures are recorded in `BatchResult::failures`.
pub fn get_info<S: AsRef<str>>(media: &[S], backend: Option<&str>) -> CoreResult<BatchResult> {
    get_info_with(&BackendRegistry::default(), media, backend)
}

/// Probes media references with the backends of `registry`.
///
/// # Errors
///
/// See [`get_info`].
pub fn get_info_with<S: AsRef<str>>(
    registry: &BackendRegistry,
    media: &[S],
    backend: Option<&str>,
) -> CoreResult<BatchResult> {
    let probes = registry.resolve(backend)?;
    let mut batch = BatchResult::default();

    for reference in media {
        let reference = reference.as_ref();
        match probe_one(&probes, reference) {
            Ok(metadata) => batch.items.push(metadata),
            Err(failure) => {
                log::error!(
                    "{}: {} (status {})",
                    failure.media,
                    failure.message,
                    failure.status
                );
                batch.failures.push(failure);
            }
        }
    }

    log::debug!(
        "Probed {} reference(s): {} succeeded, {} failed",
        media.len(),
        batch.items.len(),
        batch.failures.len()
    );

    Ok(batch)
}

/// Probes a single reference with the given backends, first success wins.
fn probe_one(probes: &[&dyn Probe], media: &str) -> Result<MediaMetadata, ProbeFailure> {
    let mut attempts: Vec<ProbeOutcome> = Vec::with_capacity(probes.len());

    for probe in probes {
        let outcome = probe.probe(media);
        if outcome.is_success() {
            let backend = outcome.backend;
            let Some(metadata) = outcome.metadata else {
                continue;
            };
            log::debug!("{} probed by {}", media, backend);
            return Ok(annotate(metadata, media, &backend));
        }
        log::debug!(
            "{} failed for {} with status {}: {}",
            probe.name(),
            media,
            outcome.status,
            outcome.message.as_deref().unwrap_or("no message")
        );
        attempts.push(outcome);
    }

    let Some(last) = attempts.last() else {
        return Err(ProbeFailure {
            media: media.to_string(),
            message: "no backend available".to_string(),
            status: crate::config::STATUS_UNAVAILABLE,
        });
    };

    let message = if attempts.len() == 1 {
        last.message.clone().unwrap_or_default()
    } else {
        attempts
            .iter()
            .map(|a| format!("{}: {}", a.backend, a.message.as_deref().unwrap_or("failed")))
            .collect::<Vec<_>>()
            .join("; ")
    };

    Err(ProbeFailure {
        media: media.to_string(),
        message,
        status: last.status,
    })
}

/// Adds the reference, backend name and name-based type to the metadata.
fn annotate(mut metadata: MediaMetadata, media: &str, backend: &str) -> MediaMetadata {
    metadata.insert(fields::MEDIA, media);
    metadata.insert(fields::INFO_BACKEND, backend);
    metadata.insert(fields::TYPE_FROM_NAME, classify(media).as_str());
    metadata
}
