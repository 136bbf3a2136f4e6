#![forbid(unsafe_code)]

//! Core: axis primitives, deferred tasks, and touch gesture arbitration.
//!
//! # Role in tabstrip
//! `tabstrip-core` is the input layer. It owns the small vocabulary every
//! other crate speaks: the layout [`Axis`](geometry::Axis), raw pointer
//! displacement ([`DragDelta`](geometry::DragDelta)), cancellable deadlines
//! ([`ScheduledTask`](schedule::ScheduledTask)), and the touch-platform state
//! machine that decides whether a touch scrolls the strip or drags an item
//! ([`GestureModeController`](gesture::GestureModeController)).
//!
//! # How it fits in the system
//! `tabstrip-layout` measures items along an axis, `tabstrip-engine` turns
//! drag deltas into reorder moves. Neither knows about any UI toolkit; the
//! host view translates its own pointer events into the types defined here.

pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod schedule;

pub use geometry::{Axis, DragDelta};
pub use gesture::{GestureConfig, GestureMode, GestureModeController, Platform};
pub use schedule::{ScheduledTask, TaskId};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, info_span, trace, trace_span, warn, warn_span};
