//! iPhone OS version extraction.

use regex::Regex;
use std::sync::OnceLock;

/// Version reported for mobile agents that predate the `CPU ... like`
/// token (iPhone OS 1.x).
pub const LEGACY_OS_VERSION: &str = "1";

fn cpu_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r".*(?i-u:CPU) ([A-Za-z0-9_|\s]+) (?i-u:like)").expect("Invalid regex pattern")
    })
}

/// Extract the OS version components from a mobile agent.
///
/// Reads the text between `CPU` and `like`, takes its third word and
/// splits it on `_`:
///
/// - `CPU iPhone OS 2_0 like Mac OS X` -> `["2", "0"]`
/// - `CPU iPhone OS 2_2_1 like Mac OS X` -> `["2", "2", "1"]`
/// - `CPU like Mac OS X` -> `["1"]`
///
/// This does not check that the agent is mobile; the detector does that
/// before calling it.
pub(crate) fn os_version_components(agent: &str) -> Vec<String> {
    let version = cpu_re()
        .captures(agent)
        .and_then(|caps| caps.get(1))
        .and_then(|group| group.as_str().split_whitespace().nth(2));

    match version {
        Some(v) => v.split('_').map(str::to_owned).collect(),
        None => vec![LEGACY_OS_VERSION.to_owned()],
    }
}
