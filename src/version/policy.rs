//! Update decision policy

use serde::{Deserialize, Serialize};

use crate::version::number::VersionNumber;

/// Granularity at which two version numbers are compared to decide whether
/// an update is warranted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionGranularity {
    #[default]
    Major,
    Minor,
    Patch,
}

/// Decide whether the reference version warrants an update at the given
/// granularity.
///
/// Each component is compared independently with `<`; this is not a
/// lexicographic version ordering. A device at 2.0.0 checked against a
/// reference 1.9.9 at minor granularity reports an update, because the minor
/// component alone increased. Existing consumers depend on this behavior.
pub fn update_required(
    device: VersionNumber,
    reference: VersionNumber,
    granularity: VersionGranularity,
) -> bool {
    let major_update = device.major < reference.major;
    let minor_update = device.minor < reference.minor;
    let patch_update = device.patch < reference.patch;

    match granularity {
        VersionGranularity::Major => major_update,
        VersionGranularity::Minor => major_update || minor_update,
        VersionGranularity::Patch => major_update || minor_update || patch_update,
    }
}
