#![forbid(unsafe_code)]

//! Drag-to-reorder for tab strips.
//!
//! # Role in tabstrip
//! `tabstrip-engine` turns raw drag displacement into two things a renderer
//! needs: a per-item offset every frame, and a single `(from, to)` move when
//! the drag ends. [`DragReorderEngine`] is the bare state machine;
//! [`TabStripState`] wraps it with an owned order, selection, closing, and
//! touch gesture arbitration.
//!
//! ```
//! use tabstrip_core::DragDelta;
//! use tabstrip_engine::{DragReorderEngine, EngineConfig};
//! use tabstrip_layout::{LayoutConfig, LayoutModel};
//! use web_time::Instant;
//!
//! let layout = LayoutModel::new(LayoutConfig::fixed(100.0).spacing(0.0)).unwrap();
//! let mut engine = DragReorderEngine::new(layout, EngineConfig::default());
//! let order = ["a", "b", "c", "d"];
//!
//! engine.on_changed(&"a", &order, DragDelta::new(151.0, 0.0));
//! assert_eq!(engine.shift(), 1);
//! assert_eq!(engine.offset(&"b"), -100.0);
//!
//! let mut moves = Vec::new();
//! engine.on_ended(&"a", &order, Instant::now(), |from, to| moves.push((from, to)));
//! assert_eq!(moves, [(0, 2)]);
//! ```

pub mod interaction;
pub mod reorder;
pub mod strip;

pub use interaction::{DragActivation, TabsInteraction};
pub use reorder::{DragReorderEngine, DragUpdate, EngineConfig, ReorderMove, apply_move};
pub use strip::{ItemValue, TabStripState};
