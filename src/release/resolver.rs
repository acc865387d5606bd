//! Latest-version resolution against the release index.

use std::time::Duration;

use serde::Deserialize;

/// GitHub API URL for the latest PocketBase release.
const RELEASE_INDEX_URL: &str =
    "https://api.github.com/repos/pocketbase/pocketbase/releases/latest";

/// Bounded timeout for the single index read. The resolver must never
/// hang the run when the index is unreachable.
const RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

/// The slice of the release descriptor the resolver cares about.
#[derive(Debug, Deserialize)]
struct ReleaseDescriptor {
    tag_name: String,
}

/// Read-only client for the release index.
pub struct ReleaseClient {
    client: reqwest::blocking::Client,
    index_url: String,
}

impl ReleaseClient {
    /// Create a client pointed at the PocketBase release index.
    pub fn new() -> Self {
        Self::with_index_url(RELEASE_INDEX_URL)
    }

    /// Create a client with a custom index URL (for tests).
    pub fn with_index_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("pocketstack")
                .timeout(RESOLVE_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            index_url: url.into(),
        }
    }

    /// Fetch the latest published version, without the leading `v`.
    ///
    /// Returns `None` on network failure, timeout, non-success status, or
    /// a descriptor without a tag field. Callers fall back to the pinned
    /// supported version; absence is not an error here.
    pub fn latest(&self) -> Option<String> {
        match self.fetch_latest() {
            Ok(version) => Some(version),
            Err(err) => {
                tracing::debug!(url = %self.index_url, error = %err, "latest-version lookup failed");
                None
            }
        }
    }

    fn fetch_latest(&self) -> anyhow::Result<String> {
        let response = self.client.get(&self.index_url).send()?;
        if !response.status().is_success() {
            anyhow::bail!("HTTP {} from release index", response.status());
        }
        let descriptor: ReleaseDescriptor = response.json()?;
        Ok(descriptor.tag_name.trim_start_matches('v').to_string())
    }
}

impl Default for ReleaseClient {
    fn default() -> Self {
        Self::new()
    }
}
