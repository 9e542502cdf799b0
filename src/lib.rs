//! Checks whether an installed app should prompt the user to update.
//!
//! The installed version is read from a metadata dictionary supplied by the
//! host application and compared, at a configurable granularity, against the
//! version published in the App Store catalog (or in a self-hosted update
//! feed). The comparison treats a version as three plain non-negative
//! integers; there are no range operators or pre-release semantics.
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use app_version_check::make_validator;
//! use app_version_check::version::policy::VersionGranularity;
//! use app_version_check::version::sources::local::VERSION_KEY;
//!
//! # async fn check() -> Result<(), app_version_check::version::error::ValidationError> {
//! let metadata = HashMap::from([(VERSION_KEY.to_string(), "1.2.0".into())]);
//! let validator = make_validator(
//!     Some(metadata),
//!     Some("com.example.app".to_string()),
//!     VersionGranularity::Minor,
//! );
//!
//! if validator.check_update_required().await? {
//!     // prompt the user
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod version;

use std::collections::HashMap;

use serde_json::Value;

pub use crate::config::ValidationConfig;
pub use crate::version::error::ValidationError;
pub use crate::version::number::VersionNumber;
pub use crate::version::policy::VersionGranularity;
pub use crate::version::update::{UpdateChecker, UpdateInfo};
pub use crate::version::validator::VersionValidator;

use crate::version::feed::HttpUpdateFeed;
use crate::version::sources::{AppStoreVersionSource, LocalVersionSource};

/// Wires a validator from the local metadata dictionary and a bundle id.
///
/// The device version comes from the metadata, the reference version from the
/// App Store lookup for `bundle_id`.
pub fn make_validator(
    metadata: Option<HashMap<String, Value>>,
    bundle_id: Option<String>,
    granularity: VersionGranularity,
) -> VersionValidator {
    let local = LocalVersionSource::new(metadata);
    let remote = AppStoreVersionSource::for_bundle_id(bundle_id);

    VersionValidator::new(Box::new(local), Box::new(remote), granularity)
}

/// Wires a validator from a [`ValidationConfig`].
pub fn make_validator_from_config(config: ValidationConfig) -> VersionValidator {
    make_validator(config.metadata, config.bundle_id, config.granularity)
}

/// Wires an [`UpdateChecker`] against a self-hosted update feed.
pub fn make_update_checker(
    metadata: Option<HashMap<String, Value>>,
    feed_url: Option<String>,
    granularity: VersionGranularity,
) -> UpdateChecker {
    let local = LocalVersionSource::new(metadata);
    let feed = HttpUpdateFeed::new(feed_url);

    UpdateChecker::new(Box::new(local), Box::new(feed), granularity)
}
