use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::version::policy::VersionGranularity;

/// Validation configuration supplied by the host application
///
/// Everything the validator needs is passed in explicitly; nothing is read
/// from ambient process state.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Stable application identifier used for the App Store lookup
    pub bundle_id: Option<String>,
    /// Local metadata dictionary, typically the app's Info.plist contents
    pub metadata: Option<HashMap<String, Value>>,
    /// Granularity at which version numbers are compared
    pub granularity: VersionGranularity,
}
