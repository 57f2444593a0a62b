//! # Tracker environment state
//!
//! This module defines [`TrackerEnv`], the shared environment object holding
//! the persistent HTTP client used to fetch the upstream ephemeris document.
//! It is cheaply cloneable and passed to the components that need network
//! access.

use std::time::Duration;

use ureq::Agent;

use crate::tracker_errors::TrackerError;

/// Global HTTP timeout for upstream fetches.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct TrackerEnv {
    pub http_client: Agent,
}

impl Default for TrackerEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerEnv {
    /// Create a new environment with an HTTP client using default settings
    /// and a global request timeout.
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(HTTP_TIMEOUT))
            .build();

        TrackerEnv {
            http_client: config.into(),
        }
    }

    /// Perform a GET request and return the response body as text.
    ///
    /// Arguments
    /// ---------
    /// * `url`: the URL to fetch
    ///
    /// Return
    /// ------
    /// * The response body, or a [`TrackerError`] if the request or the body
    ///   read failed.
    pub(crate) fn get_from_url(&self, url: &str) -> Result<String, TrackerError> {
        let body = self
            .http_client
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?;
        Ok(body)
    }
}
