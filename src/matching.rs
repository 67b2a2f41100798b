//! Pure pattern predicates over a user-agent string.
//!
//! These functions never consult the host and never cache. They are the
//! fixed, hand-maintained pattern list the [`Detector`](crate::Detector)
//! builds on; use them directly when you already hold the agent string and
//! do not want first-call-wins caching.
//!
//! All matching is case-insensitive over ASCII letters only: a non-ASCII
//! character never stands in for its ASCII look-alike.

use regex::Regex;
use std::sync::OnceLock;

/// Minimum Safari build number reported by Safari 2.
pub const SAFARI2_MIN_BUILD: u32 = 419;

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($re).expect("Invalid regex pattern"))
        }
    };
}

pattern!(mac_re, r"(?i-u)mac");
pattern!(snow_leopard_re, r"(?i-u)mac os x 10_6");
pattern!(win_re, r"(?i-u)win");
pattern!(nt5_re, r"(?i-u:nt)\s*5");
pattern!(nt6_re, r"(?i-u:nt)\s*6");
pattern!(webkit_re, r"(?i-u)AppleWebKit");
pattern!(chrome_re, r"(?i-u)Chrome");
pattern!(opera_re, r"(?i-u)opera");
pattern!(msie_re, r"(?i-u)msie");
pattern!(firefox_re, r"(?i-u)firefox");
pattern!(ipad_re, r"(?i-u)ipad");
pattern!(mobile_re, r"(?i-u)Mobile");
pattern!(safari_build_re, r"(?i-u:safari/)([0-9]*)");

/// Any Mac platform.
pub fn is_mac(agent: &str) -> bool {
    mac_re().is_match(agent)
}

/// Mac OS X 10.6 (Snow Leopard).
pub fn is_snow_leopard(agent: &str) -> bool {
    snow_leopard_re().is_match(agent)
}

/// Any Windows platform, regardless of version.
pub fn is_win(agent: &str) -> bool {
    win_re().is_match(agent)
}

/// Windows 2000 and other NT 5.x releases.
pub fn is_win2k(agent: &str) -> bool {
    is_win(agent) && nt5_re().is_match(agent)
}

/// Windows Vista and other NT 6.x releases.
pub fn is_win_vista(agent: &str) -> bool {
    is_win(agent) && nt6_re().is_match(agent)
}

/// WebKit rendering engine.
pub fn is_webkit(agent: &str) -> bool {
    webkit_re().is_match(agent)
}

/// Chrome.
pub fn is_chrome(agent: &str) -> bool {
    chrome_re().is_match(agent)
}

/// Opera.
pub fn is_opera(agent: &str) -> bool {
    opera_re().is_match(agent)
}

/// Anything reporting itself as IE.
pub fn is_ie(agent: &str) -> bool {
    msie_re().is_match(agent)
}

/// IE that is not Opera masquerading as IE.
pub fn is_ie_strict(agent: &str) -> bool {
    is_ie(agent) && !is_opera(agent)
}

/// Firefox.
pub fn is_firefox(agent: &str) -> bool {
    firefox_re().is_match(agent)
}

pub(crate) fn has_ipad_token(agent: &str) -> bool {
    ipad_re().is_match(agent)
}

pub(crate) fn has_mobile_token(agent: &str) -> bool {
    mobile_re().is_match(agent)
}

/// iPad. Requires WebKit.
pub fn is_ipad(agent: &str) -> bool {
    is_webkit(agent) && has_ipad_token(agent)
}

/// iPhone or iPod touch: a WebKit agent with a `Mobile` token that is not
/// an iPad.
pub fn is_mobile(agent: &str) -> bool {
    is_webkit(agent) && has_mobile_token(agent) && !is_ipad(agent)
}

/// Platforms iTunes runs on: any Mac, or Windows 2000.
pub fn is_itunes_ok(agent: &str) -> bool {
    is_mac(agent) || is_win2k(agent)
}

/// Safari build number following the last `safari/` token.
///
/// Only the integer part counts: `safari/419.3` yields `419`. Returns
/// `None` when there is no `safari/` token or no digits follow it.
///
/// ```rust
/// use ua_detector::matching::safari_build;
///
/// assert_eq!(safari_build("Version/3.0 Mobile/1A543 Safari/419.3"), Some(419));
/// assert_eq!(safari_build("Firefox/3.6"), None);
/// ```
pub fn safari_build(agent: &str) -> Option<u32> {
    safari_build_re()
        .captures_iter(agent)
        .last()
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Safari 2 or later, judged by build number.
pub fn is_safari2(agent: &str) -> bool {
    is_webkit(agent) && safari_build(agent).is_some_and(|build| build >= SAFARI2_MIN_BUILD)
}
