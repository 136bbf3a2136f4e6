#![forbid(unsafe_code)]

//! Reorderable tab strips.
//!
//! This crate is the public facade. It re-exports the layout model, the
//! drag-to-reorder engine and the gesture controller, and offers a prelude
//! plus [`strip`] and [`reorder_engine`] for building validated state in one call.
//!
//! ```
//! use tabstrip::prelude::*;
//!
//! let mut tabs = tabstrip::strip(
//!     vec!["inbox", "drafts", "sent"],
//!     Some("inbox"),
//!     LayoutConfig::fixed(120.0).spacing(0.0),
//!     Platform::Pointer,
//! )?;
//!
//! tabs.drag_changed(&"inbox", DragDelta::new(181.0, 0.0));
//! tabs.drag_ended(&"inbox", Instant::now());
//! assert_eq!(tabs.ids(), &["drafts", "inbox", "sent"]);
//! # Ok::<(), tabstrip::Error>(())
//! ```

use std::hash::Hash;

pub mod error;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use tabstrip_core::{
    Axis, DragDelta, GestureConfig, GestureMode, GestureModeController, Platform, ScheduledTask,
    TaskId,
};
pub use web_time::{Duration, Instant};

// --- Layout re-exports -----------------------------------------------------

pub use tabstrip_layout::{
    DEFAULT_SPACING, DEFAULT_TAB_LENGTH, LayoutConfig, LayoutConfigError, LayoutModel,
    StripGeometry, default_thickness,
};

// --- Engine re-exports -----------------------------------------------------

pub use tabstrip_engine::{
    DragActivation, DragReorderEngine, DragUpdate, EngineConfig, ItemValue, ReorderMove,
    TabStripState, TabsInteraction, apply_move,
};

/// Build a strip over `ids` after validating `layout`.
pub fn strip<Id: Clone + Eq + Hash>(
    ids: Vec<Id>,
    active: Option<Id>,
    layout: LayoutConfig,
    platform: Platform,
) -> Result<TabStripState<Id>> {
    let layout = LayoutModel::new(layout)?;
    Ok(TabStripState::new(ids, active, layout, platform))
}

/// Build a bare reorder engine after validating `layout`.
pub fn reorder_engine<Id: Clone + Eq + Hash>(
    layout: LayoutConfig,
    config: EngineConfig,
) -> Result<DragReorderEngine<Id>> {
    Ok(DragReorderEngine::new(LayoutModel::new(layout)?, config))
}

pub mod prelude {
    pub use crate::{
        Axis, DragActivation, DragDelta, DragReorderEngine, DragUpdate, EngineConfig, Error,
        GestureConfig, GestureMode, Instant, ItemValue, LayoutConfig, LayoutModel, Platform,
        ReorderMove, Result, TabStripState, TabsInteraction,
    };

    pub use crate::{core, engine, layout};
}

pub use tabstrip_core as core;
pub use tabstrip_engine as engine;
pub use tabstrip_layout as layout;
