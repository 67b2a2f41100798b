//! Capability enum naming every boolean query the detector answers.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A yes/no question the [`Detector`](crate::Detector) can answer.
///
/// Agent-based capabilities look at the user-agent string; plugin-based
/// ones (`QuickTime`) look at the host's plugin registry instead.
///
/// # Extensibility
///
/// This enum is marked `#[non_exhaustive]` so new patterns can be added
/// without breaking callers. Include a wildcard arm when matching:
///
/// ```rust
/// use ua_detector::Capability;
///
/// fn label(cap: Capability) -> &'static str {
///     match cap {
///         Capability::Mac => "mac",
///         Capability::Win => "windows",
///         _ => "other",
///     }
/// }
/// ```
///
/// # Example
///
/// ```rust
/// use ua_detector::Capability;
///
/// for cap in Capability::all() {
///     println!("{}", cap.display_name());
/// }
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum Capability {
    /// Any Mac platform.
    Mac,
    /// Mac OS X 10.6.
    SnowLeopard,
    /// Any Windows platform.
    Win,
    /// Windows 2000 (NT 5.x).
    Win2k,
    /// Windows Vista (NT 6.x).
    WinVista,
    /// WebKit rendering engine.
    WebKit,
    /// Safari 2 or later (build 419+).
    Safari2,
    /// Google Chrome.
    Chrome,
    /// Opera.
    Opera,
    /// Anything reporting itself as IE, including masqueraders.
    Ie,
    /// Genuine IE, excluding Opera masquerading as IE.
    IeStrict,
    /// Firefox.
    Firefox,
    /// iPad.
    IPad,
    /// iPhone or iPod touch.
    Mobile,
    /// Platform able to run iTunes.
    ITunesOk,
    /// QuickTime plugin present.
    QuickTime,
}

impl Capability {
    /// Human-readable name for the capability.
    ///
    /// ```rust
    /// use ua_detector::Capability;
    ///
    /// assert_eq!(Capability::IeStrict.display_name(), "Internet Explorer (strict)");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mac => "Mac",
            Self::SnowLeopard => "Mac OS X Snow Leopard",
            Self::Win => "Windows",
            Self::Win2k => "Windows 2000",
            Self::WinVista => "Windows Vista",
            Self::WebKit => "WebKit",
            Self::Safari2 => "Safari 2+",
            Self::Chrome => "Chrome",
            Self::Opera => "Opera",
            Self::Ie => "Internet Explorer",
            Self::IeStrict => "Internet Explorer (strict)",
            Self::Firefox => "Firefox",
            Self::IPad => "iPad",
            Self::Mobile => "iPhone / iPod touch",
            Self::ITunesOk => "iTunes compatible",
            Self::QuickTime => "QuickTime",
        }
    }

    /// Whether the answer comes from the plugin registry rather than the
    /// user-agent string.
    pub fn is_plugin(&self) -> bool {
        matches!(self, Self::QuickTime)
    }

    /// Whether the detector caches the first answer for this capability.
    pub fn is_memoized(&self) -> bool {
        matches!(
            self,
            Self::WebKit | Self::Safari2 | Self::Chrome | Self::QuickTime
        )
    }

    /// Iterator over every known capability.
    ///
    /// ```rust
    /// use ua_detector::Capability;
    ///
    /// assert_eq!(Capability::all().count(), 16);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
