use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Malformed version number: {0:?}")]
    MalformedVersion(String),

    #[error("No bundle id configured for the App Store lookup")]
    MissingBundleId,

    #[error("Device version string missing from local metadata")]
    MissingDeviceVersion,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No update feed URL configured")]
    MissingFeedUrl,
}
