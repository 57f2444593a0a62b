//! # IssTracker: environment, feed source, and the live snapshot
//!
//! This module defines the [`IssTracker`] struct, the central façade that
//! wires together:
//!
//! 1. **Environment state** ([`TrackerEnv`](crate::env_state::TrackerEnv)) —
//!    the persistent HTTP client.
//! 2. **Feed source** ([`EphemSource`]) — where the OEM document comes from,
//!    the NASA public URL or a local file.
//! 3. **Ephemeris snapshot** — the current [`EphemerisSet`], held behind an
//!    atomically swappable shared reference.
//!
//! ## Snapshot discipline
//!
//! [`refresh`](IssTracker::refresh) builds a complete new set before taking
//! the write lock, so the swap is a pointer exchange and in-flight queries
//! keep reading the old `Arc` until they drop it. Queries never observe a
//! partially rebuilt collection.
//!
//! ## Typical usage
//!
//! ```rust,no_run
//! use iss_tracker::tracker::IssTracker;
//!
//! let tracker = IssTracker::new("url:https://nasa-public-data.s3.amazonaws.com/iss-coords/current/ISS_OEM/ISS.OEM_J2K_EPH.xml").unwrap();
//! let loaded = tracker.refresh().unwrap();
//! let report = tracker.query().now().unwrap();
//! println!("{loaded} records, currently near {}", report.epoch);
//! ```

use std::sync::{Arc, RwLock};

use camino::Utf8PathBuf;
use tracing::info;

use crate::constants::ISS_OEM_URL;
use crate::env_state::TrackerEnv;
use crate::ephemeris::{oem_reader::parse_oem, EphemerisSet};
use crate::query::QueryService;
use crate::tracker_errors::TrackerError;

/// Where the OEM document is fetched from.
///
/// Parsed from a descriptor string: `"url:https://…"` for a remote document,
/// `"file:/path/to/doc.xml"` for a local one. A bare `http(s)://` URL is
/// accepted as a convenience.
#[derive(Debug, Clone, PartialEq)]
pub enum EphemSource {
    Url(String),
    File(Utf8PathBuf),
}

impl Default for EphemSource {
    fn default() -> Self {
        EphemSource::Url(ISS_OEM_URL.to_string())
    }
}

impl TryFrom<&str> for EphemSource {
    type Error = TrackerError;

    fn try_from(descriptor: &str) -> Result<Self, Self::Error> {
        if let Some(url) = descriptor.strip_prefix("url:") {
            return Ok(EphemSource::Url(url.to_string()));
        }
        if let Some(path) = descriptor.strip_prefix("file:") {
            return Ok(EphemSource::File(Utf8PathBuf::from(path)));
        }
        if descriptor.starts_with("http://") || descriptor.starts_with("https://") {
            return Ok(EphemSource::Url(descriptor.to_string()));
        }
        Err(TrackerError::InvalidSource(descriptor.to_string()))
    }
}

#[derive(Debug)]
pub struct IssTracker {
    env_state: TrackerEnv,
    source: EphemSource,
    ephemeris: RwLock<Arc<EphemerisSet>>,
}

impl IssTracker {
    /// Construct a tracker from a source descriptor string.
    ///
    /// The snapshot starts empty; call [`refresh`](IssTracker::refresh) to
    /// load data.
    pub fn new(source: &str) -> Result<Self, TrackerError> {
        Ok(Self::with_source(source.try_into()?))
    }

    /// Construct a tracker from an already-resolved [`EphemSource`].
    pub fn with_source(source: EphemSource) -> Self {
        IssTracker {
            env_state: TrackerEnv::new(),
            source,
            ephemeris: RwLock::new(Arc::new(EphemerisSet::default())),
        }
    }

    /// Fetch the OEM document, parse it, and swap in the new snapshot.
    ///
    /// Return
    /// ------
    /// * The number of loaded records, or a [`TrackerError`] if the fetch or
    ///   the document-level parse failed. On error the previous snapshot is
    ///   left in place.
    pub fn refresh(&self) -> Result<usize, TrackerError> {
        info!(source = ?self.source, "refreshing ephemeris");
        let document = self.fetch_document()?;
        let vectors = parse_oem(&document)?;
        let set = Arc::new(EphemerisSet::from_vectors(vectors));
        let loaded = set.len();

        *self.ephemeris.write().expect("ephemeris lock poisoned") = set;
        info!(records = loaded, "ephemeris refreshed");
        Ok(loaded)
    }

    /// The current snapshot. Cheap: clones the `Arc`, never blocks on a
    /// concurrent refresh beyond the pointer swap.
    pub fn snapshot(&self) -> Arc<EphemerisSet> {
        self.ephemeris
            .read()
            .expect("ephemeris lock poisoned")
            .clone()
    }

    /// A query service over the current snapshot.
    pub fn query(&self) -> QueryService {
        QueryService::new(self.snapshot())
    }

    fn fetch_document(&self) -> Result<String, TrackerError> {
        match &self.source {
            EphemSource::Url(url) => self.env_state.get_from_url(url),
            EphemSource::File(path) => Ok(std::fs::read_to_string(path)?),
        }
    }
}

#[cfg(test)]
mod tracker_test {
    use super::*;

    #[test]
    fn test_source_descriptor_parsing() {
        assert_eq!(
            EphemSource::try_from("url:https://example.com/iss.xml").unwrap(),
            EphemSource::Url("https://example.com/iss.xml".to_string())
        );
        assert_eq!(
            EphemSource::try_from("file:/tmp/iss.xml").unwrap(),
            EphemSource::File(Utf8PathBuf::from("/tmp/iss.xml"))
        );
        assert_eq!(
            EphemSource::try_from("https://example.com/iss.xml").unwrap(),
            EphemSource::Url("https://example.com/iss.xml".to_string())
        );
        assert_eq!(
            EphemSource::try_from("redis:iss").unwrap_err(),
            TrackerError::InvalidSource("redis:iss".to_string())
        );
    }

    #[test]
    fn test_empty_tracker_serves_empty_snapshot() {
        let tracker = IssTracker::with_source(EphemSource::default());
        assert!(tracker.snapshot().is_empty());
        assert_eq!(
            tracker.query().now().unwrap_err(),
            TrackerError::EmptyEphemeris
        );
    }

    #[test]
    fn test_refresh_from_missing_file_keeps_previous_snapshot() {
        let tracker =
            IssTracker::with_source(EphemSource::File(Utf8PathBuf::from("/nonexistent/iss.xml")));
        assert!(tracker.refresh().is_err());
        assert!(tracker.snapshot().is_empty());
    }
}
