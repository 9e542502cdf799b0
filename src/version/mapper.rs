//! Version string parsing

use crate::version::error::ValidationError;
use crate::version::number::VersionNumber;

/// Parse a dot-delimited version string into a [`VersionNumber`].
///
/// Missing components default to zero and components beyond the patch
/// position are ignored:
/// - "1" -> 1.0.0
/// - "1.2" -> 1.2.0
/// - "1.2.3.4" -> 1.2.3
///
/// Every dot-delimited component must be an unsigned integer; anything else
/// (e.g. "1.0.0-beta") rejects the whole string.
pub fn parse_version(raw: &str) -> Result<VersionNumber, ValidationError> {
    let components: Vec<&str> = raw.split('.').collect();
    let numbers: Vec<u64> = components
        .iter()
        .filter_map(|part| part.parse().ok())
        .collect();

    if numbers.len() != components.len() {
        return Err(ValidationError::MalformedVersion(raw.to_string()));
    }

    Ok(VersionNumber::new(
        component(&numbers, 0),
        component(&numbers, 1),
        component(&numbers, 2),
    ))
}

fn component(numbers: &[u64], index: usize) -> u64 {
    numbers.get(index).copied().unwrap_or(0)
}
