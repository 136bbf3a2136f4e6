#![forbid(unsafe_code)]

//! Tab strip state: open items, the active item, and their drag plumbing.
//!
//! [`TabStripState`] owns the order a host renders, routes pointer input
//! through the [`GestureModeController`] to the [`DragReorderEngine`], and
//! applies committed moves to its own order. Hosts that keep the order
//! elsewhere can drive the engine directly instead.
//!
//! # Invariants
//!
//! 1. `active` is `None` or an id present in the order.
//! 2. Selection is ignored while the engine is active, so the pointer release
//!    that ends a drag never doubles as a click.
//! 3. Closing the dragged item cancels its session.

use std::hash::Hash;

use tabstrip_core::geometry::DragDelta;
use tabstrip_core::gesture::{GestureConfig, GestureModeController, Platform};
use tabstrip_core::schedule::TaskId;
use tabstrip_core::{debug, trace};
use tabstrip_layout::LayoutModel;
use web_time::Instant;

use crate::interaction::TabsInteraction;
use crate::reorder::{DragReorderEngine, DragUpdate, EngineConfig, ReorderMove, apply_move};

/// Render snapshot of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemValue<Id> {
    pub id: Id,
    /// Position in the current order.
    pub index: usize,
    pub is_active: bool,
    /// Being dragged; draw above its neighbours.
    pub is_moving: bool,
    /// Main-axis length, if known.
    pub length: Option<f64>,
    /// Cross-axis size of the strip.
    pub thickness: f64,
    /// Drag offset along the axis.
    pub offset: f64,
}

/// State of one tab strip.
#[derive(Debug, Clone)]
pub struct TabStripState<Id> {
    ids: Vec<Id>,
    active: Option<Id>,
    engine: DragReorderEngine<Id>,
    gesture: GestureModeController,
    interaction: TabsInteraction,
}

impl<Id: Clone + Eq + Hash> TabStripState<Id> {
    /// Create a strip showing `ids` in order.
    ///
    /// An `active` id that is not in `ids` is dropped.
    #[must_use]
    pub fn new(
        ids: Vec<Id>,
        active: Option<Id>,
        layout: LayoutModel<Id>,
        platform: Platform,
    ) -> Self {
        let active = active.filter(|id| ids.contains(id));
        Self {
            ids,
            active,
            engine: DragReorderEngine::new(layout, EngineConfig::default()),
            gesture: GestureModeController::new(platform, GestureConfig::default()),
            interaction: TabsInteraction::default(),
        }
    }

    #[must_use]
    pub fn interaction(mut self, interaction: TabsInteraction) -> Self {
        self.interaction = interaction;
        self
    }

    #[must_use]
    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine.set_config(config);
        self
    }

    #[must_use]
    pub fn gesture_config(mut self, config: GestureConfig) -> Self {
        self.gesture.set_config(config);
        self
    }

    // --- Accessors ---

    /// Current order.
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<&Id> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    #[inline]
    #[must_use]
    pub fn engine(&self) -> &DragReorderEngine<Id> {
        &self.engine
    }

    #[inline]
    #[must_use]
    pub fn gesture(&self) -> &GestureModeController {
        &self.gesture
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> &LayoutModel<Id> {
        self.engine.layout()
    }

    /// Report the measured main-axis length of `id`.
    pub fn set_measured(&mut self, id: Id, length: f64) -> bool {
        self.engine.layout_mut().set_measured(id, length)
    }

    /// Forget the measurement of `id` (item no longer on screen).
    pub fn remove_measured(&mut self, id: &Id) {
        self.engine.layout_mut().remove_measured(id);
    }

    // --- Selection ---

    /// Make `id` the active item.
    ///
    /// Returns `false` while a drag is active or settling, for unknown ids,
    /// and when `id` is already active.
    pub fn select(&mut self, id: &Id) -> bool {
        if self.engine.is_active() {
            trace!(message = "tabs.select_ignored", reason = "drag active");
            return false;
        }
        if !self.ids.contains(id) || self.active.as_ref() == Some(id) {
            return false;
        }
        self.set_active(id.clone(), "select");
        true
    }

    /// Append `id` to the strip. Already-open ids are left in place.
    pub fn open(&mut self, id: Id) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Close `id`. See [`close_with`](Self::close_with).
    pub fn close(&mut self, id: &Id) -> Option<usize> {
        self.close_with(id, |_| true)
    }

    /// Close `id` if `confirm` agrees; returns the index it was removed from.
    ///
    /// If `id` was active, the item that slides into its index becomes
    /// active, or the new last item when it was last.
    pub fn close_with<F>(&mut self, id: &Id, confirm: F) -> Option<usize>
    where
        F: FnOnce(&Id) -> bool,
    {
        let index = self.index_of(id)?;
        if !confirm(id) {
            trace!(message = "tabs.close_declined", index);
            return None;
        }
        if self.engine.is_dragging(id) {
            self.engine.cancel();
        }
        let removed = self.ids.remove(index);
        self.engine.layout_mut().remove_measured(&removed);

        if self.active.as_ref() == Some(&removed) {
            self.active = self.ids.get(index).or_else(|| self.ids.last()).cloned();
        }
        debug!(
            message = "tabs.close",
            index,
            remaining = self.ids.len(),
            active = ?self.active.as_ref().and_then(|active| self.index_of(active))
        );
        Some(index)
    }

    // --- Drag ---

    /// Forward a drag sample for `id` if the gesture mode allows dragging.
    pub fn drag_changed(&mut self, id: &Id, delta: DragDelta) -> DragUpdate {
        if !self.gesture.can_drag() {
            return DragUpdate::Ignored;
        }
        let starting = self.engine.dragging_id().is_none();
        let update = self.engine.on_changed(id, &self.ids, delta);
        if starting && update.is_accepted() && self.interaction.activates_on_begin() {
            self.set_active(id.clone(), "drag_begin");
        }
        update
    }

    /// End the drag of `id` and apply any resulting move to the order.
    ///
    /// The end is delivered whenever `id` owns the session, even if the
    /// gesture mode has since left drag, so a session cannot outlive its
    /// pointer.
    ///
    /// The returned move indexes the order as it stood at release, which
    /// differs from the engine's drag-start snapshot when items were closed
    /// mid-drag.
    pub fn drag_ended(&mut self, id: &Id, now: Instant) -> Option<ReorderMove> {
        if !self.engine.is_dragging(id) {
            return None;
        }
        let shift = self.engine.shift();
        let committed = match self.engine.on_ended(id, &self.ids, now, |_, _| {}) {
            Some(_) => self.rebase_move(id, shift),
            None => None,
        };
        if let Some(mv) = committed {
            apply_move(&mut self.ids, mv.from, mv.to);
        }
        if self.interaction.activates_on_end() && self.ids.contains(id) {
            self.set_active(id.clone(), "drag_end");
        }
        committed
    }

    /// Abandon any drag in progress.
    pub fn cancel_drag(&mut self) -> bool {
        self.engine.cancel()
    }

    /// Render offset of `id` along the axis.
    #[must_use]
    pub fn offset(&self, id: &Id) -> f64 {
        self.engine.offset(id)
    }

    #[must_use]
    pub fn is_dragging(&self, id: &Id) -> bool {
        self.engine.is_dragging(id)
    }

    /// Whether the surrounding scroll container may scroll.
    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        self.gesture.can_scroll()
    }

    // --- Touch ---

    pub fn touch_down(&mut self, now: Instant) -> Option<TaskId> {
        self.gesture.touch_down(now)
    }

    pub fn long_press(&mut self) -> bool {
        self.gesture.long_press()
    }

    /// Deliver a host long-press timer callback.
    pub fn fire(&mut self, id: TaskId) -> bool {
        self.gesture.fire(id)
    }

    pub fn touch_up(&mut self) {
        self.gesture.touch_up();
    }

    /// Advance both deadlines. Returns `true` if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let promoted = self.gesture.tick(now);
        let settled = self.engine.tick(now);
        promoted || settled
    }

    // --- Rendering ---

    /// Per-item render snapshot in the current order.
    #[must_use]
    pub fn values(&self) -> Vec<ItemValue<Id>> {
        let layout = self.engine.layout();
        let thickness = layout.config().thickness;
        self.ids
            .iter()
            .enumerate()
            .map(|(index, id)| ItemValue {
                id: id.clone(),
                index,
                is_active: self.active.as_ref() == Some(id),
                is_moving: self.engine.is_dragging(id),
                length: layout.length_of(id),
                thickness,
                offset: self.engine.offset(id),
            })
            .collect()
    }

    /// Resolve `shift` against the current order.
    fn rebase_move(&self, id: &Id, shift: isize) -> Option<ReorderMove> {
        let from = self.index_of(id)?;
        let last = self.ids.len() as isize - 1;
        let raw = (from as isize + shift).clamp(0, last) as usize;
        if raw == from {
            return None;
        }
        let to = if raw > from { raw + 1 } else { raw };
        Some(ReorderMove { from, to })
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn set_active(&mut self, id: Id, reason: &'static str) {
        if self.active.as_ref() == Some(&id) {
            return;
        }
        debug!(
            message = "tabs.select",
            reason,
            from = ?self.active.as_ref().and_then(|active| self.index_of(active)),
            to = ?self.index_of(&id)
        );
        self.active = Some(id);
    }
}
