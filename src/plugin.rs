//! Plugin registry records and QuickTime scanning.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Version reported when no QuickTime version can be determined.
pub const UNKNOWN_VERSION: &str = "0";

/// One entry of a host's plugin registry.
///
/// Only `name` takes part in detection; the other fields are carried so
/// hosts can hand over their registry as-is.
///
/// # Example
///
/// ```rust
/// use ua_detector::Plugin;
///
/// let qt = Plugin::new("QuickTime Plug-in 7.6.2")
///     .with_filename("QuickTime Plugin.plugin");
/// assert_eq!(qt.name, "QuickTime Plug-in 7.6.2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Plugin {
    /// Display name, e.g. `QuickTime Plug-in 7.6.2`.
    pub name: String,

    /// Free-form description, if the host reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// File the plugin was loaded from, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Plugin {
    /// A plugin with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the filename.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Whether this plugin's name mentions QuickTime, in any case.
    pub fn is_quicktime(&self) -> bool {
        self.name.to_ascii_lowercase().contains("quicktime")
    }
}

fn quicktime_version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i-u:quicktime)[^0-9]*([.0-9]*)").expect("Invalid regex pattern")
    })
}

/// Whether any plugin in the registry is QuickTime.
pub(crate) fn has_quicktime(plugins: &[Plugin]) -> bool {
    plugins.iter().any(Plugin::is_quicktime)
}

/// The QuickTime version advertised by the registry.
///
/// Scans every plugin name for `quicktime` followed by a version; the
/// last plugin with a non-empty version wins. `None` when no plugin
/// advertises one.
pub(crate) fn quicktime_version(plugins: &[Plugin]) -> Option<String> {
    plugins
        .iter()
        .filter_map(|plugin| {
            quicktime_version_re()
                .captures(&plugin.name)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .filter(|v| !v.is_empty())
        })
        .last()
        .map(str::to_owned)
}
