#![forbid(unsafe_code)]

//! Item lengths and cumulative geometry along a strip.
//!
//! A strip is an ordered run of items laid out along one [`Axis`], separated
//! by a constant spacing and inset by a constant padding. Every item either
//! shares a fixed length or reports its own measured length; until an item is
//! measured its length is *unknown* and every query that depends on it
//! returns `None`. Substituting zero would silently corrupt drag-shift
//! computation, so unknown always propagates.
//!
//! ```
//! use tabstrip_layout::{LayoutConfig, LayoutModel};
//!
//! let layout = LayoutModel::new(LayoutConfig::fixed(100.0).spacing(0.0)).unwrap();
//! let order = ["a", "b", "c"];
//! let geometry = layout.geometry(&order);
//! assert_eq!(geometry.cumulative_length_below(2), Some(200.0));
//! assert_eq!(geometry.center(1), Some(150.0));
//! assert_eq!(geometry.length(3), None);
//! ```

pub mod config;
pub mod model;

pub use config::{
    DEFAULT_SPACING, DEFAULT_TAB_LENGTH, LayoutConfig, LayoutConfigError, default_thickness,
};
pub use model::{LayoutModel, StripGeometry};
pub use tabstrip_core::geometry::Axis;
