//! Update validation against the two configured version sources

use crate::version::error::ValidationError;
use crate::version::number::VersionNumber;
use crate::version::policy::{VersionGranularity, update_required};
use crate::version::source::VersionSource;

/// Compares the installed device version against the published reference
/// version at a configured granularity.
///
/// Holds no state beyond the injected sources and the granularity, so a
/// single validator may serve concurrent callers.
pub struct VersionValidator {
    local: Box<dyn VersionSource>,
    remote: Box<dyn VersionSource>,
    granularity: VersionGranularity,
}

impl VersionValidator {
    pub fn new(
        local: Box<dyn VersionSource>,
        remote: Box<dyn VersionSource>,
        granularity: VersionGranularity,
    ) -> Self {
        Self {
            local,
            remote,
            granularity,
        }
    }

    /// Whether the published version warrants an update at the configured
    /// granularity.
    ///
    /// Source failures propagate unchanged; no default verdict is
    /// manufactured on failure.
    pub async fn check_update_required(&self) -> Result<bool, ValidationError> {
        let (device, reference) = self.version_numbers().await?;

        Ok(update_required(device, reference, self.granularity))
    }

    /// Both version numbers in (device, reference) order, without applying
    /// the policy, for callers who want to compare manually.
    ///
    /// The local source is consulted first; its failure surfaces before the
    /// remote lookup is attempted.
    pub async fn version_numbers(
        &self,
    ) -> Result<(VersionNumber, VersionNumber), ValidationError> {
        let device = self.local.load_version_number().await?;
        let reference = self.remote.load_version_number().await?;

        Ok((device, reference))
    }
}
