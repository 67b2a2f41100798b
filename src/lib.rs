//! # ua-detector
//!
//! User-agent capability detection for browsers, platforms and plugins.
//!
//! This crate answers point-in-time questions such as "is this Safari?",
//! "is QuickTime installed?" or "does the installed version satisfy 7.6.2?"
//! by matching the user-agent string and the plugin registry against a
//! fixed, hand-maintained list of patterns. Reach for it only when real
//! feature detection is not an option.
//!
//! ## Features
//!
//! - `Detector` exposing every query, with optional per-call agent overrides
//! - `Host` trait supplying the ambient agent, plugins and legacy probe
//! - `Capability` enum naming every boolean query, for `check()`/`report()`
//! - `matching` and `version` modules with the pure, uncached predicates
//! - `global()` for a process-wide detector reading `HTTP_USER_AGENT`
//!
//! ## Example
//!
//! ```rust
//! use ua_detector::{Capability, Detector, Plugin, StaticHost};
//!
//! let host = StaticHost::new(
//!     "Mozilla/5.0 (Windows; U; Windows NT 5.1; en-US; rv:1.9.2) Gecko/20100115 Firefox/3.6",
//! )
//! .with_plugin(Plugin::new("QuickTime Plug-in 7.6.2"));
//! let detector = Detector::new(host);
//!
//! assert!(detector.is_win2k(None));
//! assert!(detector.is_firefox(None));
//! assert!(detector.is_valid_qt_available("7.6"));
//!
//! // Any agent can be checked explicitly
//! assert!(detector.is_opera(Some("Opera/9.80 (Macintosh; Intel Mac OS X; U; en)")));
//!
//! for cap in Capability::all() {
//!     println!("{}: {}", cap.display_name(), detector.check(cap, None));
//! }
//! ```

mod cache;
mod capability;
mod detector;
mod host;
mod ios;
pub mod matching;
mod options;
mod plugin;
pub mod probe;
pub mod version;

pub use capability::Capability;
pub use detector::{global, Detector, Report};
pub use host::{EnvHost, Host, StaticHost, DEFAULT_AGENT_VAR};
pub use options::DetectOptions;
pub use plugin::{Plugin, UNKNOWN_VERSION};
pub use probe::{ProbeError, VersionProbe};
