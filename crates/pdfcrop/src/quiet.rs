//! Call-scoped suppression of diagnostic output.
//!
//! Opening and rasterizing a PDF can produce a burst of backend diagnostics
//! that callers rarely want. [`QuietGuard`] installs a no-op `tracing`
//! dispatcher as the default for the current thread and restores the previous
//! one when dropped, including during unwinding. Other threads are never
//! affected, and stdout and stderr are left alone.

use tracing::subscriber::{DefaultGuard, NoSubscriber};

/// Keeps diagnostics silenced on the current thread while alive.
#[must_use = "diagnostics are restored as soon as the guard is dropped"]
pub struct QuietGuard {
    _default: DefaultGuard,
}

impl QuietGuard {
    /// Silence diagnostics on this thread until the guard is dropped.
    pub fn engage() -> Self {
        Self {
            _default: tracing::subscriber::set_default(NoSubscriber::default()),
        }
    }
}

impl std::fmt::Debug for QuietGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuietGuard").finish_non_exhaustive()
    }
}

/// Run `f`, silenced when `enabled` is true, and return its result unchanged.
///
/// ```
/// use pdfcrop::quiet::quietly;
///
/// let answer: Result<u32, String> = quietly(true, || {
///     tracing::warn!("never shown");
///     Ok(42)
/// });
/// assert_eq!(answer, Ok(42));
/// ```
pub fn quietly<T>(enabled: bool, f: impl FnOnce() -> T) -> T {
    let _guard = enabled.then(QuietGuard::engage);
    f()
}
