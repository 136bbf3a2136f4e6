#![forbid(unsafe_code)]

//! Touch gesture arbitration between scrolling and dragging.
//!
//! On touch platforms a finger that lands on a tab is ambiguous: it may be
//! the start of a scroll of the whole strip or the start of a drag of one
//! item. [`GestureModeController`] resolves this with a long-press:
//!
//! ```text
//!            touch_down                 long-press timer / long_press()
//!   Scroll ─────────────► PotentialDrag ────────────────────────────► Drag
//!     ▲                        │                                       │
//!     └──────── touch_up ──────┴──────────────── touch_up ─────────────┘
//! ```
//!
//! Pointer platforms stay in [`GestureMode::Auto`], where both gestures are
//! eligible and the host pointer framework picks one.
//!
//! # Invariants
//!
//! 1. Only [`GestureMode::Auto`] and [`GestureMode::Drag`] forward drag samples.
//! 2. The strip may scroll in every mode except [`GestureMode::Drag`].
//! 3. The long-press timer is cancelled whenever the controller leaves
//!    [`GestureMode::PotentialDrag`]; a stale timer never promotes a later
//!    touch sequence.
//! 4. After `touch_up()` or `reset()` the mode is the platform default.

use web_time::{Duration, Instant};

use crate::schedule::{ScheduledTask, TaskId};
use crate::{debug, trace};

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Input class of the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Finger input; scroll wins until a long-press promotes a drag.
    Touch,
    /// Mouse or trackpad; the pointer framework disambiguates.
    Pointer,
}

impl Platform {
    /// The platform this crate was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "android")) {
            Self::Touch
        } else {
            Self::Pointer
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

// ---------------------------------------------------------------------------
// GestureMode
// ---------------------------------------------------------------------------

/// Which gesture currently owns a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureMode {
    /// Both scroll and drag are eligible (pointer platforms).
    Auto,
    /// The scroll container owns the touch.
    Scroll,
    /// A touch landed on an item; waiting for the long-press timer.
    PotentialDrag,
    /// Movement is forwarded to the reorder engine.
    Drag,
}

impl GestureMode {
    /// The idle mode for `platform`.
    #[must_use]
    pub const fn default_for(platform: Platform) -> Self {
        match platform {
            Platform::Touch => Self::Scroll,
            Platform::Pointer => Self::Auto,
        }
    }

    /// Whether drag samples should reach the reorder engine.
    #[inline]
    #[must_use]
    pub const fn can_drag(self) -> bool {
        matches!(self, Self::Auto | Self::Drag)
    }

    /// Whether the surrounding scroll container may scroll.
    #[inline]
    #[must_use]
    pub const fn can_scroll(self) -> bool {
        matches!(self, Self::Auto | Self::Scroll | Self::PotentialDrag)
    }
}

impl Default for GestureMode {
    fn default() -> Self {
        Self::default_for(Platform::current())
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Timing for touch gesture arbitration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureConfig {
    /// How long a touch must rest before it becomes a drag (default: 500ms).
    pub long_press_threshold: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_threshold: Duration::from_millis(500),
        }
    }
}

impl GestureConfig {
    /// Override the long-press threshold.
    #[must_use]
    pub fn with_long_press_threshold(mut self, threshold: Duration) -> Self {
        self.long_press_threshold = threshold;
        self
    }
}

// ---------------------------------------------------------------------------
// GestureModeController
// ---------------------------------------------------------------------------

/// Per-strip state machine deciding whether touches scroll or drag.
///
/// Drive it with [`touch_down`](Self::touch_down), [`tick`](Self::tick) (or
/// [`fire`](Self::fire) from a host timer), [`long_press`](Self::long_press)
/// and [`touch_up`](Self::touch_up). Read [`can_drag`](Self::can_drag) before
/// forwarding drag samples and [`can_scroll`](Self::can_scroll) to enable the
/// scroll container.
#[derive(Debug, Clone)]
pub struct GestureModeController {
    platform: Platform,
    config: GestureConfig,
    mode: GestureMode,
    long_press_timer: ScheduledTask,
}

impl GestureModeController {
    /// Create a controller in the platform's idle mode.
    #[must_use]
    pub fn new(platform: Platform, config: GestureConfig) -> Self {
        Self {
            platform,
            config,
            mode: GestureMode::default_for(platform),
            long_press_timer: ScheduledTask::new(),
        }
    }

    /// Current mode.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Platform the controller arbitrates for.
    #[inline]
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration. A pending timer keeps its original deadline.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Whether drag samples should be forwarded to the engine.
    #[inline]
    #[must_use]
    pub fn can_drag(&self) -> bool {
        self.mode.can_drag()
    }

    /// Whether the scroll container may scroll.
    #[inline]
    #[must_use]
    pub fn can_scroll(&self) -> bool {
        self.mode.can_scroll()
    }

    /// Whether the long-press timer is armed.
    #[inline]
    #[must_use]
    pub fn is_timer_pending(&self) -> bool {
        self.long_press_timer.is_pending()
    }

    /// A finger landed on an item.
    ///
    /// On touch platforms an idle controller moves to
    /// [`GestureMode::PotentialDrag`] and arms the long-press timer. The
    /// returned id lets a host timer call [`fire`](Self::fire); pointer
    /// platforms return `None` and stay in [`GestureMode::Auto`].
    pub fn touch_down(&mut self, now: Instant) -> Option<TaskId> {
        if self.platform != Platform::Touch || self.mode != GestureMode::Scroll {
            return None;
        }
        self.transition(GestureMode::PotentialDrag, "touch_down");
        let id = self
            .long_press_timer
            .arm(now, self.config.long_press_threshold);
        trace!(
            message = "gesture.timer_armed",
            threshold_ms = self.config.long_press_threshold.as_millis() as u64
        );
        Some(id)
    }

    /// A long-press was recognized by the host before the timer elapsed.
    ///
    /// Returns `true` if the controller moved to [`GestureMode::Drag`].
    pub fn long_press(&mut self) -> bool {
        if self.platform != Platform::Touch {
            return false;
        }
        match self.mode {
            GestureMode::Scroll | GestureMode::PotentialDrag => {
                self.promote("long_press");
                true
            }
            GestureMode::Auto | GestureMode::Drag => false,
        }
    }

    /// Check the long-press timer. Call periodically (e.g., on tick).
    ///
    /// Returns `true` if the controller was promoted to [`GestureMode::Drag`].
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.long_press_timer.poll(now).is_none() {
            return false;
        }
        self.on_timer_elapsed()
    }

    /// Deliver a host timer callback for the arming identified by `id`.
    ///
    /// Stale ids (from an earlier touch sequence) are ignored.
    pub fn fire(&mut self, id: TaskId) -> bool {
        if !self.long_press_timer.fire(id) {
            trace!(message = "gesture.stale_timer", task = id.get());
            return false;
        }
        self.on_timer_elapsed()
    }

    /// The touch sequence ended; return to the platform default.
    pub fn touch_up(&mut self) {
        self.long_press_timer.cancel();
        let idle = GestureMode::default_for(self.platform);
        if self.mode != idle {
            self.transition(idle, "touch_up");
        }
    }

    /// Drop any in-flight sequence (focus loss, strip teardown).
    pub fn reset(&mut self) {
        self.long_press_timer.cancel();
        self.mode = GestureMode::default_for(self.platform);
    }

    fn on_timer_elapsed(&mut self) -> bool {
        if self.mode != GestureMode::PotentialDrag {
            return false;
        }
        self.promote("timer");
        true
    }

    fn promote(&mut self, reason: &'static str) {
        self.long_press_timer.cancel();
        self.transition(GestureMode::Drag, reason);
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn transition(&mut self, to: GestureMode, reason: &'static str) {
        debug!(
            message = "gesture.transition",
            reason,
            from = ?self.mode,
            to = ?to
        );
        self.mode = to;
    }
}

impl Default for GestureModeController {
    fn default() -> Self {
        Self::new(Platform::current(), GestureConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
