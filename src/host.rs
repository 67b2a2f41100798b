//! Hosts supply the ambient user agent, plugin registry and probe.
//!
//! The detector never reaches for global state directly; everything
//! ambient flows through a [`Host`]. [`EnvHost`] reads the agent from the
//! process environment, [`StaticHost`] serves fixed values.

use crate::probe::VersionProbe;
use crate::Plugin;

/// Environment variable [`EnvHost`] reads by default (CGI convention).
pub const DEFAULT_AGENT_VAR: &str = "HTTP_USER_AGENT";

/// Source of ambient detection inputs.
pub trait Host {
    /// The raw ambient user-agent string. Empty when unknown.
    fn user_agent(&self) -> String;

    /// Snapshot of the plugin registry. Empty when unavailable.
    fn plugins(&self) -> Vec<Plugin>;

    /// Legacy QuickTime probe, consulted only when the registry is empty.
    fn version_probe(&self) -> Option<&dyn VersionProbe> {
        None
    }
}

/// Host backed by the process environment.
///
/// The agent is read from an environment variable on every call. There is
/// no plugin registry and no probe.
///
/// ```rust
/// use ua_detector::EnvHost;
///
/// let host = EnvHost::with_var("MY_APP_USER_AGENT");
/// assert_eq!(host.var(), "MY_APP_USER_AGENT");
/// ```
#[derive(Debug, Clone)]
pub struct EnvHost {
    var: String,
}

impl EnvHost {
    /// Host reading [`DEFAULT_AGENT_VAR`].
    pub fn new() -> Self {
        Self::with_var(DEFAULT_AGENT_VAR)
    }

    /// Host reading a custom variable.
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this host reads.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for EnvHost {
    fn user_agent(&self) -> String {
        std::env::var(&self.var).unwrap_or_default()
    }

    fn plugins(&self) -> Vec<Plugin> {
        Vec::new()
    }
}

/// Host serving fixed values.
///
/// # Example
///
/// ```rust
/// use ua_detector::{Detector, Plugin, StaticHost};
///
/// let host = StaticHost::new("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_6_2)")
///     .with_plugin(Plugin::new("QuickTime Plug-in 7.6.2"));
/// let detector = Detector::new(host);
///
/// assert!(detector.is_mac(None));
/// assert_eq!(detector.qt_version(), "7.6.2");
/// ```
#[derive(Default)]
pub struct StaticHost {
    agent: String,
    plugins: Vec<Plugin>,
    probe: Option<Box<dyn VersionProbe>>,
}

impl StaticHost {
    /// Host with the given agent, no plugins and no probe.
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            ..Default::default()
        }
    }

    /// Append a plugin to the registry.
    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Replace the registry.
    pub fn with_plugins(mut self, plugins: impl IntoIterator<Item = Plugin>) -> Self {
        self.plugins = plugins.into_iter().collect();
        self
    }

    /// Install a legacy probe.
    pub fn with_probe(mut self, probe: impl VersionProbe + 'static) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }
}

impl std::fmt::Debug for StaticHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticHost")
            .field("agent", &self.agent)
            .field("plugins", &self.plugins)
            .field("probe", &self.probe.is_some())
            .finish()
    }
}

impl Host for StaticHost {
    fn user_agent(&self) -> String {
        self.agent.clone()
    }

    fn plugins(&self) -> Vec<Plugin> {
        self.plugins.clone()
    }

    fn version_probe(&self) -> Option<&dyn VersionProbe> {
        self.probe.as_deref()
    }
}
