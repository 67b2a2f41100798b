//! Dotted version compatibility checks.
//!
//! Versions here are loose dot-delimited strings such as `7.6.2` or `7`,
//! not semantic versions. Components are compared left to right as
//! integers, with an optional leading sign. Anything that does not start
//! with a number counts as `0`, as does a component that is missing
//! altogether.

use std::cmp::Ordering;

/// Parse the leading integer of a version component.
///
/// An optional `+` or `-` may precede the digits. `"6"` -> 6, `"2b"` -> 2,
/// `"-1"` -> -1, `"+3"` -> 3, `"beta"` -> 0, `""` -> 0. Values outside
/// `i64` saturate.
pub(crate) fn component_value(component: &str) -> i64 {
    let component = component.trim_start();
    let (negative, unsigned) = match component.as_bytes().first() {
        Some(b'-') => (true, &component[1..]),
        Some(b'+') => (false, &component[1..]),
        _ => (false, component),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return 0;
    }

    let sign_and_digits = &component[..component.len() - unsigned.len() + end];
    sign_and_digits
        .parse()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX })
}

/// Whether `actual` satisfies the minimum version `required`.
///
/// The first component that differs decides the outcome. When every
/// component of `required` matches, the versions are compatible, whatever
/// extra components `actual` carries. Components missing from `actual`
/// count as `0`.
///
/// ```rust
/// use ua_detector::version::is_compatible;
///
/// assert!(is_compatible("7.6.2", "7.6.5"));
/// assert!(!is_compatible("7.6.2", "7.5.0"));
/// assert!(is_compatible("7", "7.0.0"));
/// assert!(!is_compatible("7.0.1", "7"));
/// ```
pub fn is_compatible(required: &str, actual: &str) -> bool {
    let mut actual_parts = actual.split('.');

    for required_part in required.split('.') {
        let wanted = component_value(required_part);
        let have = actual_parts.next().map(component_value).unwrap_or(0);

        match wanted.cmp(&have) {
            Ordering::Equal => continue,
            Ordering::Less => return true,
            Ordering::Greater => return false,
        }
    }

    true
}
