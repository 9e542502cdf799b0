//! Source trait for loading version numbers

#[cfg(test)]
use mockall::automock;

use crate::version::error::ValidationError;
use crate::version::number::VersionNumber;

/// Trait for producing a version number from an external collaborator
///
/// The local metadata source and the App Store lookup source both implement
/// this; the validator only ever sees the trait.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Loads the version number this source knows about
    ///
    /// # Returns
    /// * `Ok(VersionNumber)` - the parsed version
    /// * `Err(ValidationError)` - if the collaborator fails or the raw
    ///   version string is malformed
    async fn load_version_number(&self) -> Result<VersionNumber, ValidationError>;
}
