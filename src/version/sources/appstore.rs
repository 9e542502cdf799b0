//! App Store lookup API version source

use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::ValidationError;
use crate::version::mapper::parse_version;
use crate::version::number::VersionNumber;
use crate::version::source::VersionSource;

/// Default base URL for the App Store lookup API
const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Response from the lookup API
#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

/// Catalog entry for an app; only the published version is of interest
#[derive(Debug, Deserialize)]
struct LookupResult {
    version: String,
}

/// Version source backed by the App Store lookup API
pub struct AppStoreVersionSource {
    client: reqwest::Client,
    base_url: String,
    bundle_id: Option<String>,
}

impl AppStoreVersionSource {
    /// Creates a new source with a custom base URL
    pub fn new(base_url: &str, bundle_id: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("app-version-check")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            bundle_id,
        }
    }

    /// Creates a source against the production lookup endpoint
    pub fn for_bundle_id(bundle_id: Option<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, bundle_id)
    }
}

#[async_trait::async_trait]
impl VersionSource for AppStoreVersionSource {
    async fn load_version_number(&self) -> Result<VersionNumber, ValidationError> {
        let bundle_id = self
            .bundle_id
            .as_deref()
            .ok_or(ValidationError::MissingBundleId)?;
        let url = format!("{}/lookup?bundleId={}", self.base_url, bundle_id);
        debug!("Fetching published version: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Lookup API returned status {}: {}", status, url);
            return Err(ValidationError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let lookup: LookupResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse lookup response: {}", e);
            ValidationError::InvalidResponse(e.to_string())
        })?;

        let Some(entry) = lookup.results.first() else {
            return Err(ValidationError::InvalidResponse(format!(
                "No catalog entry for bundle id {}",
                bundle_id
            )));
        };

        parse_version(&entry.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn load_version_number_parses_the_published_version() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lookup?bundleId=com.example.app")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "resultCount": 1,
                    "results": [
                        {
                            "version": "2.4.1",
                            "trackName": "Example App"
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let source =
            AppStoreVersionSource::new(&server.url(), Some("com.example.app".to_string()));
        let version = source.load_version_number().await.unwrap();

        mock.assert_async().await;
        assert_eq!(version, VersionNumber::new(2, 4, 1));
    }

    #[tokio::test]
    async fn load_version_number_fails_without_a_bundle_id() {
        let server = Server::new_async().await;

        let source = AppStoreVersionSource::new(&server.url(), None);
        let result = source.load_version_number().await;

        assert!(matches!(result, Err(ValidationError::MissingBundleId)));
    }

    #[tokio::test]
    async fn load_version_number_fails_on_unexpected_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lookup?bundleId=com.example.app")
            .with_status(500)
            .create_async()
            .await;

        let source =
            AppStoreVersionSource::new(&server.url(), Some("com.example.app".to_string()));
        let result = source.load_version_number().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ValidationError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn load_version_number_fails_when_no_catalog_entry_matches() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lookup?bundleId=com.example.unknown")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"resultCount": 0, "results": []}"#)
            .create_async()
            .await;

        let source =
            AppStoreVersionSource::new(&server.url(), Some("com.example.unknown".to_string()));
        let result = source.load_version_number().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ValidationError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn load_version_number_fails_on_undecodable_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lookup?bundleId=com.example.app")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        let source =
            AppStoreVersionSource::new(&server.url(), Some("com.example.app".to_string()));
        let result = source.load_version_number().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ValidationError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn load_version_number_rejects_malformed_published_versions() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lookup?bundleId=com.example.app")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": [{"version": "2.0.0-rc1"}]}"#)
            .create_async()
            .await;

        let source =
            AppStoreVersionSource::new(&server.url(), Some("com.example.app".to_string()));
        let result = source.load_version_number().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ValidationError::MalformedVersion(_))));
    }
}
