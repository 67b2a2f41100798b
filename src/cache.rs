//! Write-once cache for memoized detection flags.

use std::sync::OnceLock;

/// One slot per memoized query.
///
/// Slots are filled on first use and never change until [`reset`] is
/// called. Concurrent first calls block on the slot while one of them
/// computes the answer; the others read that answer.
///
/// [`reset`]: MemoCache::reset
#[derive(Debug, Default)]
pub(crate) struct MemoCache {
    pub(crate) webkit: OnceLock<bool>,
    pub(crate) safari2: OnceLock<bool>,
    pub(crate) chrome: OnceLock<bool>,
    pub(crate) qt_installed: OnceLock<bool>,
}

impl MemoCache {
    /// Empty every slot.
    pub(crate) fn reset(&mut self) {
        self.webkit.take();
        self.safari2.take();
        self.chrome.take();
        self.qt_installed.take();
    }

    /// Number of filled slots.
    #[cfg(test)]
    pub(crate) fn filled(&self) -> usize {
        [&self.webkit, &self.safari2, &self.chrome, &self.qt_installed]
            .iter()
            .filter(|slot| slot.get().is_some())
            .count()
    }
}

/// Read `slot`, filling it with `compute` on first use.
///
/// With `memoize` off the slot is bypassed entirely.
pub(crate) fn memoized(
    slot: &OnceLock<bool>,
    memoize: bool,
    name: &'static str,
    compute: impl FnOnce() -> bool,
) -> bool {
    if !memoize {
        return compute();
    }
    *slot.get_or_init(|| {
        let value = compute();
        tracing::debug!(flag = name, value, "memoized detection flag");
        value
    })
}
