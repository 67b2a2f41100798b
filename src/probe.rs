//! Legacy QuickTime probe for hosts without a plugin registry.
//!
//! Some hosts cannot enumerate plugins but can instantiate a platform
//! check object that answers "is QuickTime installed?" and reports the
//! installed version as a packed integer. [`VersionProbe`] models that
//! bridge. Hosts that have no such bridge simply return `None` from
//! [`Host::version_probe`](crate::Host::version_probe).

use thiserror::Error;

/// Errors a probe can report.
///
/// The detector never surfaces these to its callers: a failed probe is
/// logged and treated as "not installed" / version `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProbeError {
    /// The check object could not be created.
    #[error("QuickTime check object unavailable: {0}")]
    Unavailable(String),

    /// The check object exists but the query failed.
    #[error("QuickTime probe query failed: {0}")]
    QueryFailed(String),
}

/// A host bridge able to query QuickTime without a plugin registry.
pub trait VersionProbe: Send + Sync {
    /// Whether the QuickTime check object reports an installation.
    fn is_installed(&self) -> Result<bool, ProbeError>;

    /// The packed QuickTime version, e.g. `0x76208000` for 7.6.2.
    ///
    /// `Ok(None)` means the object answered but reported no version.
    fn packed_version(&self) -> Result<Option<u32>, ProbeError>;
}

/// Decode a packed QuickTime version into a dotted string.
///
/// The packed value is rendered in hexadecimal and its first three digits
/// become the major, minor and patch components. Zero means "no version".
///
/// ```rust
/// use ua_detector::probe::unpack_version;
///
/// assert_eq!(unpack_version(0x7620_8000).as_deref(), Some("7.6.2"));
/// assert_eq!(unpack_version(0), None);
/// ```
pub fn unpack_version(packed: u32) -> Option<String> {
    if packed == 0 {
        return None;
    }
    let hex = format!("{packed:x}");
    let digits: Vec<String> = hex.chars().take(3).map(String::from).collect();
    Some(digits.join("."))
}
