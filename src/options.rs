//! Detector options configuration.
//!
//! This module provides the [`DetectOptions`] struct for configuring
//! detector behavior.

/// Configuration options for a [`Detector`](crate::Detector).
///
/// # Default Behavior
///
/// By default the detector memoizes the WebKit, Safari 2, Chrome and
/// QuickTime-installed answers: the first call computes the answer and
/// every later call returns it, whatever agent it is given. Turning
/// memoization off makes those queries behave like every other one.
///
/// # Example
///
/// ```rust
/// use ua_detector::DetectOptions;
///
/// // Default options (memoization enabled)
/// let opts = DetectOptions::default();
/// assert!(opts.memoize);
///
/// // Recompute every query
/// let opts = DetectOptions {
///     memoize: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Cache the first answer of memoized queries.
    ///
    /// Default: `true`
    pub memoize: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self { memoize: true }
    }
}
