#![forbid(unsafe_code)]

//! Item length bookkeeping and cumulative-length queries.
//!
//! # Invariants
//!
//! 1. `length_of(id)` is the fixed length when one is configured, otherwise
//!    the measured length, otherwise `None`.
//! 2. Any query whose sum includes an item of unknown length is `None`.
//! 3. Indices below zero or at/after the end of the order have unknown length.
//! 4. `cumulative_length_through(i) == cumulative_length_below(i + 1)` for
//!    every in-range `i`.
//! 5. The model never invents keys: measurements are added and removed only
//!    by the host.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use tabstrip_core::geometry::Axis;
use tabstrip_core::{trace, warn};

use crate::config::{LayoutConfig, LayoutConfigError};

/// Lengths of the items in one strip.
#[derive(Debug, Clone)]
pub struct LayoutModel<Id> {
    config: LayoutConfig,
    measured: FxHashMap<Id, f64>,
}

impl<Id: Eq + Hash> LayoutModel<Id> {
    /// Create a model after validating `config`.
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            measured: FxHashMap::default(),
        })
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration. Measurements are kept.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<(), LayoutConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.config.axis
    }

    #[inline]
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.config.spacing
    }

    #[inline]
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.config.padding
    }

    #[inline]
    #[must_use]
    pub fn fixed_length(&self) -> Option<f64> {
        self.config.fixed_length
    }

    /// Record the measured length of `id`.
    ///
    /// Ignored (returns `false`) when a fixed length is configured or when
    /// `length` is negative or not finite.
    pub fn set_measured(&mut self, id: Id, length: f64) -> bool {
        if self.config.fixed_length.is_some() {
            return false;
        }
        if !(length.is_finite() && length >= 0.0) {
            warn!(message = "layout.measure_rejected", length);
            return false;
        }
        self.measured.insert(id, length);
        trace!(message = "layout.measured", length, count = self.measured.len());
        true
    }

    /// Forget the measurement of `id` (the item unmounted).
    pub fn remove_measured(&mut self, id: &Id) -> Option<f64> {
        self.measured.remove(id)
    }

    /// Forget every measurement.
    pub fn clear_measured(&mut self) {
        self.measured.clear();
    }

    /// Whether `id` has a measured length.
    #[must_use]
    pub fn is_measured(&self, id: &Id) -> bool {
        self.measured.contains_key(id)
    }

    /// Number of measured items.
    #[must_use]
    pub fn measured_count(&self) -> usize {
        self.measured.len()
    }

    /// Length of `id`, or `None` if it has not been measured.
    #[must_use]
    pub fn length_of(&self, id: &Id) -> Option<f64> {
        match self.config.fixed_length {
            Some(length) => Some(length),
            None => self.measured.get(id).copied(),
        }
    }

    /// Evaluate geometry queries against `order`.
    #[must_use]
    pub fn geometry<'a>(&'a self, order: &'a [Id]) -> StripGeometry<'a, Id> {
        StripGeometry { model: self, order }
    }
}

/// Cumulative-length queries over one ordering of a strip.
///
/// Indices are signed so callers can probe neighbours (`index - 1`) without
/// wrapping; out-of-range indices have unknown length.
#[derive(Debug, Clone, Copy)]
pub struct StripGeometry<'a, Id> {
    model: &'a LayoutModel<Id>,
    order: &'a [Id],
}

impl<Id: Eq + Hash> StripGeometry<'_, Id> {
    /// Number of items in the ordering.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of `id` in the ordering.
    #[must_use]
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.order.iter().position(|candidate| candidate == id)
    }

    /// Identifier at `index`.
    #[must_use]
    pub fn id_at(&self, index: isize) -> Option<&Id> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.order.get(index))
    }

    /// Length of the item at `index`.
    #[must_use]
    pub fn length(&self, index: isize) -> Option<f64> {
        self.id_at(index).and_then(|id| self.model.length_of(id))
    }

    /// Length plus spacing of the item at `index`.
    #[must_use]
    pub fn slot(&self, index: isize) -> Option<f64> {
        self.length(index)
            .map(|length| length + self.model.config.spacing)
    }

    /// Sum of `length + spacing` over every item strictly before `index`.
    #[must_use]
    pub fn cumulative_length_below(&self, index: isize) -> Option<f64> {
        if index < 0 {
            return None;
        }
        (0..index).try_fold(0.0, |sum, i| self.slot(i).map(|slot| sum + slot))
    }

    /// Sum of `length + spacing` over every item up to and including `index`.
    #[must_use]
    pub fn cumulative_length_through(&self, index: isize) -> Option<f64> {
        let below = self.cumulative_length_below(index)?;
        self.slot(index).map(|slot| below + slot)
    }

    /// Midpoint of the item at `index`, relative to the first item's edge.
    #[must_use]
    pub fn center(&self, index: isize) -> Option<f64> {
        let below = self.cumulative_length_below(index)?;
        self.length(index).map(|length| below + length / 2.0)
    }

    /// Absolute position of the item's leading edge, including padding.
    #[must_use]
    pub fn leading_edge(&self, index: isize) -> Option<f64> {
        self.length(index)?;
        self.cumulative_length_below(index)
            .map(|below| self.model.config.padding + below)
    }

    /// Total extent of the strip: padding on both ends, spacing between items.
    #[must_use]
    pub fn content_length(&self) -> Option<f64> {
        let padding = self.model.config.padding * 2.0;
        let Some(count) = isize::try_from(self.order.len()).ok().filter(|&n| n > 0) else {
            return Some(padding);
        };
        self.cumulative_length_below(count)
            .map(|sum| sum - self.model.config.spacing + padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(length: f64, spacing: f64) -> LayoutModel<&'static str> {
        LayoutModel::new(LayoutConfig::fixed(length).spacing(spacing)).expect("valid config")
    }

    fn measured(spacing: f64) -> LayoutModel<&'static str> {
        LayoutModel::new(LayoutConfig::default().spacing(spacing)).expect("valid config")
    }

    const ABCD: [&str; 4] = ["a", "b", "c", "d"];

    #[test]
    fn new_rejects_invalid_config() {
        let result = LayoutModel::<u32>::new(LayoutConfig::default().spacing(-2.0));
        assert!(result.is_err());
    }

    #[test]
    fn fixed_length_applies_to_every_item() {
        let layout = fixed(100.0, 0.0);
        assert_eq!(layout.length_of(&"anything"), Some(100.0));
        let geometry = layout.geometry(&ABCD);
        for i in 0..4 {
            assert_eq!(geometry.length(i), Some(100.0));
        }
    }

    #[test]
    fn fixed_length_ignores_measurements() {
        let mut layout = fixed(100.0, 0.0);
        assert!(!layout.set_measured("a", 40.0));
        assert!(!layout.is_measured(&"a"));
        assert_eq!(layout.length_of(&"a"), Some(100.0));
    }

    #[test]
    fn unmeasured_item_is_unknown() {
        let layout = measured(0.0);
        assert_eq!(layout.length_of(&"a"), None);
        assert_eq!(layout.geometry(&ABCD).length(0), None);
    }

    #[test]
    fn measurement_lifecycle() {
        let mut layout = measured(0.0);
        assert!(layout.set_measured("a", 80.0));
        assert_eq!(layout.length_of(&"a"), Some(80.0));
        assert!(layout.set_measured("a", 90.0));
        assert_eq!(layout.length_of(&"a"), Some(90.0));
        assert_eq!(layout.measured_count(), 1);
        assert_eq!(layout.remove_measured(&"a"), Some(90.0));
        assert_eq!(layout.length_of(&"a"), None);
        layout.set_measured("b", 10.0);
        layout.clear_measured();
        assert_eq!(layout.measured_count(), 0);
    }

    #[test]
    fn invalid_measurements_rejected() {
        let mut layout = measured(0.0);
        assert!(!layout.set_measured("a", -1.0));
        assert!(!layout.set_measured("a", f64::NAN));
        assert!(!layout.set_measured("a", f64::INFINITY));
        assert!(!layout.is_measured(&"a"));
        assert!(layout.set_measured("a", 0.0));
    }

    #[test]
    fn cumulative_below_sums_slots() {
        let layout = fixed(100.0, 10.0);
        let geometry = layout.geometry(&ABCD);
        assert_eq!(geometry.cumulative_length_below(0), Some(0.0));
        assert_eq!(geometry.cumulative_length_below(1), Some(110.0));
        assert_eq!(geometry.cumulative_length_below(3), Some(330.0));
        assert_eq!(geometry.cumulative_length_below(4), Some(440.0));
    }

    #[test]
    fn cumulative_through_includes_index() {
        let layout = fixed(100.0, 0.0);
        let geometry = layout.geometry(&ABCD);
        assert_eq!(geometry.cumulative_length_through(0), Some(100.0));
        assert_eq!(geometry.cumulative_length_through(1), Some(200.0));
        assert_eq!(geometry.cumulative_length_through(3), Some(400.0));
    }

    #[test]
    fn out_of_range_indices_are_unknown() {
        let layout = fixed(100.0, 0.0);
        let geometry = layout.geometry(&ABCD);
        assert_eq!(geometry.length(-1), None);
        assert_eq!(geometry.length(4), None);
        assert_eq!(geometry.cumulative_length_below(-1), None);
        assert_eq!(geometry.cumulative_length_below(5), None);
        assert_eq!(geometry.cumulative_length_through(-1), None);
        assert_eq!(geometry.cumulative_length_through(4), None);
        assert_eq!(geometry.center(4), None);
    }

    #[test]
    fn center_is_midpoint() {
        let mut layout = measured(4.0);
        layout.set_measured("a", 50.0);
        layout.set_measured("b", 120.0);
        let geometry = layout.geometry(&ABCD);
        assert_eq!(geometry.center(0), Some(25.0));
        assert_eq!(geometry.center(1), Some(54.0 + 60.0));
    }

    #[test]
    fn unknown_length_propagates_past_gap() {
        let mut layout = measured(0.0);
        layout.set_measured("a", 50.0);
        layout.set_measured("b", 60.0);
        layout.set_measured("d", 70.0);
        let geometry = layout.geometry(&ABCD);
        assert_eq!(geometry.cumulative_length_through(1), Some(110.0));
        assert_eq!(geometry.cumulative_length_below(2), Some(110.0));
        assert_eq!(geometry.cumulative_length_through(2), None);
        assert_eq!(geometry.cumulative_length_below(3), None);
        assert_eq!(geometry.center(3), None);
    }

    #[test]
    fn leading_edge_adds_padding() {
        let layout = LayoutModel::new(LayoutConfig::fixed(100.0).spacing(2.0).padding(8.0))
            .expect("valid config");
        let geometry = layout.geometry(&ABCD);
        assert_eq!(geometry.leading_edge(0), Some(8.0));
        assert_eq!(geometry.leading_edge(2), Some(8.0 + 204.0));
        assert_eq!(geometry.leading_edge(4), None);
    }

    #[test]
    fn content_length_excludes_trailing_spacing() {
        let layout = LayoutModel::new(LayoutConfig::fixed(100.0).spacing(2.0).padding(8.0))
            .expect("valid config");
        assert_eq!(layout.geometry(&ABCD).content_length(), Some(16.0 + 400.0 + 6.0));
        let empty: [&str; 0] = [];
        assert_eq!(layout.geometry(&empty).content_length(), Some(16.0));
    }

    #[test]
    fn index_lookup() {
        let layout = fixed(100.0, 0.0);
        let geometry = layout.geometry(&ABCD);
        assert_eq!(geometry.index_of(&"c"), Some(2));
        assert_eq!(geometry.index_of(&"z"), None);
        assert_eq!(geometry.id_at(1), Some(&"b"));
        assert_eq!(geometry.id_at(-1), None);
        assert_eq!(geometry.len(), 4);
        assert!(!geometry.is_empty());
    }

    #[test]
    fn set_config_validates() {
        let mut layout = measured(0.0);
        assert!(layout.set_config(LayoutConfig::default().padding(-1.0)).is_err());
        assert_eq!(layout.padding(), 0.0);
        layout
            .set_config(LayoutConfig::default().axis(Axis::Vertical))
            .expect("valid config");
        assert_eq!(layout.axis(), Axis::Vertical);
    }
}
