#![forbid(unsafe_code)]

//! Axis and pointer displacement primitives.

/// The dimension along which strip items are laid out and drags are projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Pick the component of `(x, y)` that lies along this axis.
    #[inline]
    #[must_use]
    pub const fn select(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }

    /// Expand a scalar along this axis into an `(x, y)` pair.
    ///
    /// Useful for hosts that position items with a 2D offset.
    #[inline]
    #[must_use]
    pub const fn expand(self, value: f64) -> (f64, f64) {
        match self {
            Self::Horizontal => (value, 0.0),
            Self::Vertical => (0.0, value),
        }
    }
}

/// Total pointer displacement since the gesture started.
///
/// This is the toolkit-neutral form of a drag gesture's translation; hosts
/// build one from whatever their pointer API reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragDelta {
    pub x: f64,
    pub y: f64,
}

impl DragDelta {
    /// Create a delta from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A delta that only moves along `axis`.
    #[must_use]
    pub const fn along_axis(axis: Axis, value: f64) -> Self {
        let (x, y) = axis.expand(value);
        Self { x, y }
    }

    /// Project the displacement onto `axis`.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        axis.select(self.x, self.y)
    }
}

impl From<(f64, f64)> for DragDelta {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
