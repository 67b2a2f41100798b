//! Integration tests for the detector.
//!
//! These drive the public API through `StaticHost` with real-world agent
//! strings, so they do not depend on the environment the tests run in.

use ua_detector::{
    Capability, DetectOptions, Detector, Plugin, ProbeError, StaticHost, VersionProbe,
};

const IPAD: &str = "mozilla/5.0 (ipad; u; cpu os 3_2 like mac os x; en-us) applewebkit/531.21.10 (khtml, like gecko) version/4.0.4 mobile/7b334b safari/531.21.10";
const IPHONE_2_0: &str = "Mozilla/5.0 (iPhone; U; CPU iPhone OS 2_0 like Mac OS X; en-us) AppleWebKit/525.18.1 (KHTML, like Gecko) Version/3.1.1 Mobile/5A347 Safari/525.20";
const IPOD_1_1_3: &str = "Mozilla/5.0 (iPod; U; CPU like Mac OS X; en) AppleWebKit/420.1 (KHTML, like Gecko) Version/3.0 Mobile/4A93 Safari/419.3";
const SAFARI_SNOW_LEOPARD: &str = "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10_6_2; en-us) AppleWebKit/531.21.8 (KHTML, like Gecko) Version/4.0.4 Safari/531.21.10";
const CHROME_WIN7: &str = "Mozilla/5.0 (Windows; U; Windows NT 6.1; en-US) AppleWebKit/532.5 (KHTML, like Gecko) Chrome/4.0.249.89 Safari/532.5";
const IE6_WIN2K: &str = "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.0)";
const OPERA_AS_IE: &str = "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; en) Opera 8.50";

struct PackedProbe(u32);

impl VersionProbe for PackedProbe {
    fn is_installed(&self) -> Result<bool, ProbeError> {
        Ok(self.0 != 0)
    }

    fn packed_version(&self) -> Result<Option<u32>, ProbeError> {
        Ok(Some(self.0))
    }
}

struct BrokenProbe;

impl VersionProbe for BrokenProbe {
    fn is_installed(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable("scripting bridge disabled".to_string()))
    }

    fn packed_version(&self) -> Result<Option<u32>, ProbeError> {
        Err(ProbeError::Unavailable("scripting bridge disabled".to_string()))
    }
}

#[test]
fn test_ipad_end_to_end() {
    let detector = Detector::new(StaticHost::new(IPAD));

    assert!(detector.is_ipad(None));
    assert!(!detector.is_mobile(None));
    assert!(detector.is_webkit(None));
    assert!(detector.is_mac(None));
    assert_eq!(detector.iphone_os_version(None), None);
}

#[test]
fn test_iphone_end_to_end() {
    let detector = Detector::new(StaticHost::new(IPHONE_2_0));

    assert!(detector.is_mobile(None));
    assert!(!detector.is_ipad(None));
    assert!(detector.is_safari2(None));
    assert!(detector.is_itunes_ok(None));
    assert_eq!(
        detector.iphone_os_version(None),
        Some(vec!["2".to_string(), "0".to_string()])
    );
}

#[test]
fn test_ipod_without_cpu_token_reports_legacy_version() {
    let detector = Detector::new(StaticHost::new(IPOD_1_1_3));

    assert!(detector.is_mobile(None));
    assert_eq!(detector.iphone_os_version(None), Some(vec!["1".to_string()]));
}

#[test]
fn test_desktop_safari() {
    let detector = Detector::new(StaticHost::new(SAFARI_SNOW_LEOPARD));

    assert!(detector.is_snow_leopard(None));
    assert!(detector.is_safari2(None));
    assert!(!detector.is_chrome(None));
    assert!(!detector.is_mobile(None));
    assert!(!detector.is_win(None));
}

#[test]
fn test_chrome_on_windows() {
    let detector = Detector::new(StaticHost::new(CHROME_WIN7));

    assert!(detector.is_chrome(None));
    assert!(detector.is_webkit(None));
    assert!(detector.is_win(None));
    assert!(detector.is_win_vista(None));
    assert!(!detector.is_itunes_ok(None));
}

#[test]
fn test_ie_and_opera() {
    let detector = Detector::new(StaticHost::new(IE6_WIN2K));
    assert!(detector.is_ie(None));
    assert!(detector.is_ie_strict(None));
    assert!(detector.is_win2k(None));
    assert!(detector.is_itunes_ok(None));

    assert!(detector.is_ie(Some(OPERA_AS_IE)));
    assert!(!detector.is_ie_strict(Some(OPERA_AS_IE)));
}

#[test]
fn test_webkit_memoization_is_first_call_wins() {
    let mut detector = Detector::new(StaticHost::new(""));

    let first = detector.is_webkit(Some("Mozilla/5.0 AppleWebKit/531.21.8"));
    let second = detector.is_webkit(Some("Mozilla/4.0 (compatible; MSIE 6.0)"));
    assert!(first);
    assert_eq!(first, second);

    detector.reset_cache();
    assert!(!detector.is_webkit(Some("Mozilla/4.0 (compatible; MSIE 6.0)")));
}

#[test]
fn test_quicktime_registry() {
    let host = StaticHost::new(SAFARI_SNOW_LEOPARD).with_plugins(vec![
        Plugin::new("Shockwave Flash"),
        Plugin::new("QuickTime Plug-in 7.6.2").with_filename("QuickTime Plugin.plugin"),
        Plugin::new("Java Plug-In 2 for NPAPI Browsers"),
    ]);
    let detector = Detector::new(host);

    assert!(detector.is_qt_installed());
    assert_eq!(detector.qt_version(), "7.6.2");
    assert!(detector.is_qt_compatible("7.6.2", None));
    assert!(detector.is_valid_qt_available("7"));
    assert!(!detector.is_valid_qt_available("7.6.3"));
}

#[test]
fn test_quicktime_via_probe() {
    let detector = Detector::new(StaticHost::new(IE6_WIN2K).with_probe(PackedProbe(0x7620_8000)));

    assert!(detector.is_qt_installed());
    assert_eq!(detector.qt_version(), "7.6.2");
    assert!(detector.is_valid_qt_available("7.6.2"));
}

#[test]
fn test_broken_probe_is_not_an_error() {
    let detector = Detector::new(StaticHost::new(IE6_WIN2K).with_probe(BrokenProbe));

    assert!(!detector.is_qt_installed());
    assert_eq!(detector.qt_version(), "0");
    assert!(!detector.is_valid_qt_available("7"));
}

#[test]
fn test_quicktime_absent_everywhere() {
    let detector = Detector::new(StaticHost::new(IE6_WIN2K));

    assert!(!detector.is_qt_installed());
    assert_eq!(detector.qt_version(), "0");
    assert!(detector.is_qt_compatible("0", None));
}

#[test]
fn test_qt_compatibility_examples() {
    let detector = Detector::new(StaticHost::new(""));

    assert!(detector.is_qt_compatible("7.6.2", Some("7.6.5")));
    assert!(!detector.is_qt_compatible("7.6.2", Some("7.5.0")));
    assert!(detector.is_qt_compatible("7", Some("7.0.0")));
    assert!(detector.is_qt_compatible("7.0.0", Some("7")));
    assert!(!detector.is_qt_compatible("7.0.1", Some("7")));
}

#[test]
fn test_sbvdp_is_a_stub() {
    let detector = Detector::new(StaticHost::new(SAFARI_SNOW_LEOPARD));
    assert!(!detector.is_sbvdp_available(None));
    assert!(!detector.is_sbvdp_available(Some("9.0.115")));
}

#[test]
fn test_report_covers_every_capability() {
    let detector = Detector::with_options(
        StaticHost::new(CHROME_WIN7).with_plugin(Plugin::new("QuickTime Plug-in 7.5.5")),
        DetectOptions { memoize: false },
    );
    let report = detector.report(None);

    for cap in Capability::all() {
        assert!(
            report.capabilities.contains_key(&cap),
            "{} missing from report",
            cap.display_name()
        );
        assert_eq!(report.has(cap), detector.check(cap, None), "{cap}");
    }
    assert_eq!(report.agent, CHROME_WIN7.to_lowercase());
    assert_eq!(report.qt_version, "7.5.5");
    assert_eq!(report.iphone_os_version, None);
}

#[test]
fn test_detector_is_shareable_across_threads() {
    let detector = std::sync::Arc::new(Detector::new(StaticHost::new(IPHONE_2_0)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let detector = detector.clone();
            std::thread::spawn(move || detector.is_webkit(None))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
