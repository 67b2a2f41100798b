//! The detector facade.

use crate::cache::{memoized, MemoCache};
use crate::plugin::{self, UNKNOWN_VERSION};
use crate::probe::unpack_version;
use crate::{ios, matching, version, Capability, DetectOptions, EnvHost, Host};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Answers capability questions about a user agent and its plugins.
///
/// Every agent-based query takes an optional agent override. `None` (or an
/// empty string) means "ask the host", in which case the ambient agent is
/// lowercased first. Matching is case-insensitive either way.
///
/// # Memoization
///
/// [`is_webkit`], [`is_safari2`], [`is_chrome`] and [`is_qt_installed`]
/// remember their first answer. Later calls return that answer even when
/// given a different agent. [`is_ipad`] and [`is_mobile`] go through
/// [`is_webkit`], so they are affected too. Use [`reset_cache`] to start
/// over, or disable memoization through [`DetectOptions`].
///
/// [`is_webkit`]: Detector::is_webkit
/// [`is_safari2`]: Detector::is_safari2
/// [`is_chrome`]: Detector::is_chrome
/// [`is_qt_installed`]: Detector::is_qt_installed
/// [`is_ipad`]: Detector::is_ipad
/// [`is_mobile`]: Detector::is_mobile
/// [`reset_cache`]: Detector::reset_cache
///
/// # Example
///
/// ```rust
/// use ua_detector::{Detector, StaticHost};
///
/// let detector = Detector::new(StaticHost::new(
///     "Mozilla/5.0 (iPhone; U; CPU iPhone OS 2_0 like Mac OS X; en-us) \
///      AppleWebKit/525.18.1 (KHTML, like Gecko) Version/3.1.1 Mobile/5A347 Safari/525.20",
/// ));
///
/// assert!(detector.is_mobile(None));
/// assert_eq!(
///     detector.iphone_os_version(None),
///     Some(vec!["2".to_string(), "0".to_string()])
/// );
/// assert!(!detector.is_win(None));
/// ```
#[derive(Debug)]
pub struct Detector<H = EnvHost> {
    host: H,
    options: DetectOptions,
    cache: MemoCache,
}

impl Default for Detector<EnvHost> {
    fn default() -> Self {
        Self::new(EnvHost::default())
    }
}

impl<H: Host> Detector<H> {
    /// Detector over `host` with default options.
    pub fn new(host: H) -> Self {
        Self::with_options(host, DetectOptions::default())
    }

    /// Detector over `host` with custom options.
    pub fn with_options(host: H, options: DetectOptions) -> Self {
        Self {
            host,
            options,
            cache: MemoCache::default(),
        }
    }

    /// The host this detector reads from.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The options this detector was built with.
    pub fn options(&self) -> &DetectOptions {
        &self.options
    }

    /// Forget every memoized answer.
    pub fn reset_cache(&mut self) {
        self.cache.reset();
    }

    /// The ambient user agent, lowercased. Read from the host every call.
    pub fn agent(&self) -> String {
        self.host.user_agent().to_lowercase()
    }

    fn resolve<'a>(&self, agent: Option<&'a str>) -> Cow<'a, str> {
        match agent {
            Some(agent) if !agent.is_empty() => Cow::Borrowed(agent),
            _ => Cow::Owned(self.agent()),
        }
    }

    /// Any Mac platform.
    pub fn is_mac(&self, agent: Option<&str>) -> bool {
        matching::is_mac(&self.resolve(agent))
    }

    /// Mac OS X 10.6.
    pub fn is_snow_leopard(&self, agent: Option<&str>) -> bool {
        matching::is_snow_leopard(&self.resolve(agent))
    }

    /// Any Windows platform.
    pub fn is_win(&self, agent: Option<&str>) -> bool {
        matching::is_win(&self.resolve(agent))
    }

    /// Windows 2000 (NT 5.x).
    pub fn is_win2k(&self, agent: Option<&str>) -> bool {
        matching::is_win2k(&self.resolve(agent))
    }

    /// Windows Vista (NT 6.x).
    pub fn is_win_vista(&self, agent: Option<&str>) -> bool {
        matching::is_win_vista(&self.resolve(agent))
    }

    /// WebKit engine. Memoized: the first answer sticks.
    pub fn is_webkit(&self, agent: Option<&str>) -> bool {
        memoized(&self.cache.webkit, self.options.memoize, "webkit", || {
            matching::is_webkit(&self.resolve(agent))
        })
    }

    /// Safari 2 or later. Memoized.
    ///
    /// The build number is always read from the ambient agent; `agent` is
    /// accepted for symmetry with the other queries and ignored.
    pub fn is_safari2(&self, _agent: Option<&str>) -> bool {
        memoized(&self.cache.safari2, self.options.memoize, "safari2", || {
            if !self.is_webkit(None) {
                return false;
            }
            matching::safari_build(&self.agent())
                .is_some_and(|build| build >= matching::SAFARI2_MIN_BUILD)
        })
    }

    /// Chrome. Memoized.
    pub fn is_chrome(&self, agent: Option<&str>) -> bool {
        memoized(&self.cache.chrome, self.options.memoize, "chrome", || {
            matching::is_chrome(&self.resolve(agent))
        })
    }

    /// Opera.
    pub fn is_opera(&self, agent: Option<&str>) -> bool {
        matching::is_opera(&self.resolve(agent))
    }

    /// Anything claiming to be IE.
    pub fn is_ie(&self, agent: Option<&str>) -> bool {
        matching::is_ie(&self.resolve(agent))
    }

    /// IE, excluding Opera masquerading as IE.
    pub fn is_ie_strict(&self, agent: Option<&str>) -> bool {
        matching::is_ie_strict(&self.resolve(agent))
    }

    /// Firefox.
    pub fn is_firefox(&self, agent: Option<&str>) -> bool {
        matching::is_firefox(&self.resolve(agent))
    }

    /// iPhone or iPod touch.
    #[deprecated(note = "use `is_mobile`")]
    pub fn is_iphone(&self, agent: Option<&str>) -> bool {
        self.is_mobile(agent)
    }

    /// iPad. Goes through the memoized WebKit check.
    pub fn is_ipad(&self, agent: Option<&str>) -> bool {
        let agent = self.resolve(agent);
        self.is_webkit(Some(&*agent)) && matching::has_ipad_token(&agent)
    }

    /// iPhone or iPod touch: WebKit, a `Mobile` token, and not an iPad.
    pub fn is_mobile(&self, agent: Option<&str>) -> bool {
        let agent = self.resolve(agent);
        self.is_webkit(Some(&*agent))
            && matching::has_mobile_token(&agent)
            && !self.is_ipad(Some(&*agent))
    }

    /// iPhone OS version components, e.g. `["2", "2", "1"]`.
    ///
    /// `None` when the agent is not mobile. Mobile agents from before the
    /// `CPU ... like` token existed report `["1"]`.
    pub fn iphone_os_version(&self, agent: Option<&str>) -> Option<Vec<String>> {
        let agent = self.resolve(agent);
        if !self.is_mobile(Some(&*agent)) {
            return None;
        }
        Some(ios::os_version_components(&agent))
    }

    /// Platforms that can run iTunes.
    pub fn is_itunes_ok(&self, agent: Option<&str>) -> bool {
        matching::is_itunes_ok(&self.resolve(agent))
    }

    /// Whether the QuickTime plugin is installed. Memoized.
    ///
    /// The plugin registry is consulted first. When it is empty the host's
    /// legacy probe answers instead, if there is one. Probe failures count
    /// as "not installed".
    pub fn is_qt_installed(&self) -> bool {
        memoized(
            &self.cache.qt_installed,
            self.options.memoize,
            "qt_installed",
            || {
                let plugins = self.host.plugins();
                if !plugins.is_empty() {
                    tracing::trace!(count = plugins.len(), "scanning plugin registry for QuickTime");
                    return plugin::has_quicktime(&plugins);
                }
                let Some(probe) = self.host.version_probe() else {
                    tracing::trace!("no plugin registry and no legacy probe");
                    return false;
                };
                probe.is_installed().unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "QuickTime probe failed");
                    false
                })
            },
        )
    }

    /// The installed QuickTime version, `"0"` when unknown. Not memoized.
    pub fn qt_version(&self) -> String {
        let plugins = self.host.plugins();
        if !plugins.is_empty() {
            return plugin::quicktime_version(&plugins)
                .unwrap_or_else(|| UNKNOWN_VERSION.to_owned());
        }

        let Some(probe) = self.host.version_probe() else {
            return UNKNOWN_VERSION.to_owned();
        };
        match probe.packed_version() {
            Ok(packed) => packed
                .and_then(unpack_version)
                .unwrap_or_else(|| UNKNOWN_VERSION.to_owned()),
            Err(e) => {
                tracing::debug!(error = %e, "QuickTime version probe failed");
                UNKNOWN_VERSION.to_owned()
            }
        }
    }

    /// Whether `actual` (default: [`qt_version`]) meets `required`.
    ///
    /// See [`version::is_compatible`] for the comparison rules.
    ///
    /// [`qt_version`]: Detector::qt_version
    pub fn is_qt_compatible(&self, required: &str, actual: Option<&str>) -> bool {
        match actual {
            Some(actual) if !actual.is_empty() => version::is_compatible(required, actual),
            _ => version::is_compatible(required, &self.qt_version()),
        }
    }

    /// QuickTime is installed and at least `required`.
    pub fn is_valid_qt_available(&self, required: &str) -> bool {
        self.is_qt_installed() && self.is_qt_compatible(required, None)
    }

    /// SBVDP plugin check. Never implemented; always `false`.
    pub fn is_sbvdp_available(&self, _required: Option<&str>) -> bool {
        false
    }

    /// Answer any [`Capability`] by name.
    ///
    /// `agent` is ignored for plugin capabilities.
    pub fn check(&self, capability: Capability, agent: Option<&str>) -> bool {
        match capability {
            Capability::Mac => self.is_mac(agent),
            Capability::SnowLeopard => self.is_snow_leopard(agent),
            Capability::Win => self.is_win(agent),
            Capability::Win2k => self.is_win2k(agent),
            Capability::WinVista => self.is_win_vista(agent),
            Capability::WebKit => self.is_webkit(agent),
            Capability::Safari2 => self.is_safari2(agent),
            Capability::Chrome => self.is_chrome(agent),
            Capability::Opera => self.is_opera(agent),
            Capability::Ie => self.is_ie(agent),
            Capability::IeStrict => self.is_ie_strict(agent),
            Capability::Firefox => self.is_firefox(agent),
            Capability::IPad => self.is_ipad(agent),
            Capability::Mobile => self.is_mobile(agent),
            Capability::ITunesOk => self.is_itunes_ok(agent),
            Capability::QuickTime => self.is_qt_installed(),
        }
    }

    /// Snapshot every capability for `agent`.
    ///
    /// Memoized queries fill their cache slots as a side effect.
    pub fn report(&self, agent: Option<&str>) -> Report {
        let agent = self.resolve(agent);
        let capabilities = Capability::all()
            .map(|cap| (cap, self.check(cap, Some(&*agent))))
            .collect();
        let iphone_os_version = self.iphone_os_version(Some(&*agent));

        Report {
            agent: agent.into_owned(),
            capabilities,
            iphone_os_version,
            qt_version: self.qt_version(),
        }
    }
}

/// A point-in-time snapshot produced by [`Detector::report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The agent the report was computed for.
    pub agent: String,

    /// Answer for every [`Capability`].
    pub capabilities: HashMap<Capability, bool>,

    /// iPhone OS version components, when mobile.
    pub iphone_os_version: Option<Vec<String>>,

    /// Installed QuickTime version, `"0"` when unknown.
    pub qt_version: String,
}

impl Report {
    /// Answer for a single capability.
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.get(&capability).copied().unwrap_or(false)
    }
}

/// Process-wide detector over the environment host.
///
/// Built on first use; its memoized answers live for the rest of the
/// process.
pub fn global() -> &'static Detector<EnvHost> {
    static GLOBAL: OnceLock<Detector<EnvHost>> = OnceLock::new();
    GLOBAL.get_or_init(Detector::<EnvHost>::default)
}
