//! Logging shims.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros; without it, the same macro names are exported at the crate root as
//! no-ops. Call sites import `tabstrip_core::{debug, warn}` and never carry
//! their own `cfg` attributes.
//!
//! Events use dotted message names (`drag.shift`, `gesture.transition`) with
//! structured fields so a subscriber can filter on them.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, info_span, trace, trace_span, warn, warn_span};

/// No-op `trace!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

/// No-op `debug!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

/// No-op `info!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{}};
}

/// No-op `warn!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{}};
}

/// No-op span constructor; the returned value supports `.entered()`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}

/// No-op span constructor; the returned value supports `.entered()`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}

/// No-op span constructor; the returned value supports `.entered()`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}

/// No-op span constructor; the returned value supports `.entered()`.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn_span {
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan
    };
}

/// Stand-in for `tracing::Span` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `tracing::Span::entered`.
    #[inline]
    #[must_use]
    pub fn entered(self) -> Self {
        self
    }
}
