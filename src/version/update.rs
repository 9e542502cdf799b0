//! Available-update check against a self-hosted feed

use crate::version::error::ValidationError;
use crate::version::feed::UpdateFeed;
use crate::version::number::VersionNumber;
use crate::version::policy::{VersionGranularity, update_required};
use crate::version::source::VersionSource;

/// Published update descriptor from the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    pub version: VersionNumber,
    pub release_notes: Option<String>,
    pub update_url: Option<String>,
}

/// Checks a self-hosted update feed against the installed version
///
/// Unlike [`crate::version::validator::VersionValidator`], which answers a
/// bare yes/no, this returns the full update descriptor so callers can show
/// release notes and a download link in their prompt.
pub struct UpdateChecker {
    local: Box<dyn VersionSource>,
    feed: Box<dyn UpdateFeed>,
    granularity: VersionGranularity,
}

impl UpdateChecker {
    pub fn new(
        local: Box<dyn VersionSource>,
        feed: Box<dyn UpdateFeed>,
        granularity: VersionGranularity,
    ) -> Self {
        Self {
            local,
            feed,
            granularity,
        }
    }

    /// The published update, when one is warranted at the configured
    /// granularity; `None` when the installed version is current.
    pub async fn available_update(&self) -> Result<Option<UpdateInfo>, ValidationError> {
        let device = self.local.load_version_number().await?;
        let info = self.feed.load_update_info().await?;

        if update_required(device, info.version, self.granularity) {
            Ok(Some(info))
        } else {
            Ok(None)
        }
    }
}
