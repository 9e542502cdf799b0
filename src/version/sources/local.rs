//! Local metadata version source

use std::collections::HashMap;

use serde_json::Value;

use crate::version::error::ValidationError;
use crate::version::mapper::parse_version;
use crate::version::number::VersionNumber;
use crate::version::source::VersionSource;

/// Metadata key carrying the marketing version of the installed app
pub const VERSION_KEY: &str = "CFBundleShortVersionString";

/// Metadata key carrying the build number
pub const BUILD_KEY: &str = "CFBundleVersion";

/// Version source backed by the app's local metadata dictionary
///
/// The dictionary is supplied by the host application (typically its
/// Info.plist contents); nothing is read from ambient process state.
pub struct LocalVersionSource {
    metadata: Option<HashMap<String, Value>>,
}

impl LocalVersionSource {
    pub fn new(metadata: Option<HashMap<String, Value>>) -> Self {
        Self { metadata }
    }

    fn metadata_string(&self, key: &str) -> Option<&str> {
        self.metadata.as_ref()?.get(key)?.as_str()
    }

    /// Human-readable version line for display, e.g. "Version 1.2.0, Build: 42".
    ///
    /// Returns an empty string when the metadata carries no version entry.
    pub fn device_version_details(&self) -> String {
        let Some(version) = self.metadata_string(VERSION_KEY) else {
            return String::new();
        };

        match self.metadata_string(BUILD_KEY) {
            Some(build) => format!("Version {version}, Build: {build}"),
            None => format!("Version {version}"),
        }
    }
}

#[async_trait::async_trait]
impl VersionSource for LocalVersionSource {
    async fn load_version_number(&self) -> Result<VersionNumber, ValidationError> {
        let raw = self
            .metadata_string(VERSION_KEY)
            .ok_or(ValidationError::MissingDeviceVersion)?;

        parse_version(raw)
    }
}
