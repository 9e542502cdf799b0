//! Self-hosted update feed

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::ValidationError;
use crate::version::mapper::parse_version;
use crate::version::update::UpdateInfo;

/// Feed document as published, before the version string is parsed
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedDocument {
    version: String,
    release_notes: Option<String>,
    update_url: Option<String>,
}

/// Trait for fetching the published update descriptor
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait UpdateFeed: Send + Sync {
    /// Loads the published update descriptor
    ///
    /// # Returns
    /// * `Ok(UpdateInfo)` - the published version with its release metadata
    /// * `Err(ValidationError)` - if the feed is unreachable or undecodable
    async fn load_update_info(&self) -> Result<UpdateInfo, ValidationError>;
}

/// Feed implementation reading a JSON document over HTTP
pub struct HttpUpdateFeed {
    client: reqwest::Client,
    url: Option<String>,
}

impl HttpUpdateFeed {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("app-version-check")
                .build()
                .expect("Failed to create HTTP client"),
            url,
        }
    }
}

#[async_trait::async_trait]
impl UpdateFeed for HttpUpdateFeed {
    async fn load_update_info(&self) -> Result<UpdateInfo, ValidationError> {
        let url = self.url.as_deref().ok_or(ValidationError::MissingFeedUrl)?;
        debug!("Fetching update feed: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Update feed returned status {}: {}", status, url);
            return Err(ValidationError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let document: FeedDocument = response.json().await.map_err(|e| {
            warn!("Failed to parse update feed document: {}", e);
            ValidationError::InvalidResponse(e.to_string())
        })?;

        Ok(UpdateInfo {
            version: parse_version(&document.version)?,
            release_notes: document.release_notes,
            update_url: document.update_url,
        })
    }
}
