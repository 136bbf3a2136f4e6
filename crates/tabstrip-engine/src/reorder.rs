#![forbid(unsafe_code)]

//! Drag-to-reorder engine.
//!
//! [`DragReorderEngine`] tracks one in-progress drag across a strip. The host
//! feeds it the total pointer displacement on every move sample
//! ([`on_changed`](DragReorderEngine::on_changed)) and a terminal event on
//! release ([`on_ended`](DragReorderEngine::on_ended)). In between it answers
//! two per-frame questions for every item: how far to offset it
//! ([`offset`](DragReorderEngine::offset)) and whether it is the one being
//! dragged ([`is_dragging`](DragReorderEngine::is_dragging)).
//!
//! # Shift
//!
//! The *shift* is the signed number of slots the dragged item has displaced.
//! It is recomputed from scratch on every sample by walking outwards from the
//! dragged item's origin and comparing the item's translated center against
//! the trailing edge of each neighbour:
//!
//! - forward (`translation > 0`): step while `center + translation` is past
//!   `cumulative_length_through(idx + shift + 1)`;
//! - backward: step while it is before `cumulative_length_through(idx + shift - 1)`.
//!
//! The walk stops at the first neighbour of unknown length and at both ends
//! of the strip, so a partially measured strip under-shifts instead of
//! guessing.
//!
//! # Invariants
//!
//! 1. `shift` is a pure function of `translation`, the session snapshot and
//!    the measured lengths; repeated samples with the same translation are
//!    no-ops.
//! 2. `shift` is non-decreasing in `translation` for positive translations
//!    and non-increasing for negative ones.
//! 3. With no session, every offset is zero and nothing is dragging.
//! 4. The commit callback runs at most once per session, and never when the
//!    final shift is zero.
//! 5. Only the item that started a session can move or end it.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Unmeasured neighbour | Item not laid out yet | Shift stops before it; its offset is 0 |
//! | Dragged id missing from snapshot | Host passed an inconsistent order | Index 0 is used |
//! | Second item starts dragging | Interleaved gesture recognizers | Sample ignored until the first ends |
//! | Commit target out of range | Items closed mid-drag | Target clamped to the current order |

use std::hash::Hash;

use tabstrip_core::geometry::DragDelta;
use tabstrip_core::schedule::ScheduledTask;
use tabstrip_core::{debug, info, trace};
use tabstrip_layout::{LayoutModel, StripGeometry};
use web_time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Engine timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long [`DragReorderEngine::is_active`] stays true after a drag ends
    /// (default: 1ms). Keeps the release of a drag from also reading as a
    /// tap on the item underneath.
    pub deactivation_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deactivation_delay: Duration::from_millis(1),
        }
    }
}

impl EngineConfig {
    /// Override the deactivation delay.
    #[must_use]
    pub fn with_deactivation_delay(mut self, delay: Duration) -> Self {
        self.deactivation_delay = delay;
        self
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// A committed reorder.
///
/// `to` uses insert-before semantics against the order as it was before the
/// move: `(0, 2)` on `[A, B, C]` places `A` between `B` and `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReorderMove {
    pub from: usize,
    pub to: usize,
}

impl ReorderMove {
    /// Index the moved item occupies once the move is applied.
    #[must_use]
    pub const fn destination(self) -> usize {
        if self.to > self.from {
            self.to - 1
        } else {
            self.to
        }
    }
}

/// Result of feeding a move sample to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragUpdate {
    /// Another item owns the session; nothing changed.
    Ignored,
    /// The translation changed; the shift did not.
    Moved,
    /// The shift changed; displaced items should animate to new offsets.
    Shifted { from: isize, to: isize },
}

impl DragUpdate {
    /// Whether the sample was applied.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Move the element at `from` so it lands before the element originally at
/// `to`.
///
/// This applies a [`ReorderMove`] to the host's order. Returns `false` (and
/// leaves `items` untouched) when the move is out of range or would not
/// change the order.
pub fn apply_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to > items.len() {
        return false;
    }
    let destination = ReorderMove { from, to }.destination();
    if destination == from {
        return false;
    }
    let item = items.remove(from);
    items.insert(destination, item);
    true
}

// ---------------------------------------------------------------------------
// DragReorderEngine
// ---------------------------------------------------------------------------

/// Drag session state for one strip.
#[derive(Debug, Clone)]
pub struct DragReorderEngine<Id> {
    layout: LayoutModel<Id>,
    config: EngineConfig,

    active: bool,
    dragging_id: Option<Id>,
    snapshot: Vec<Id>,
    translation: f64,
    shift: isize,

    deactivation: ScheduledTask,
}

impl<Id: Clone + Eq + Hash> DragReorderEngine<Id> {
    /// Create an idle engine over `layout`.
    #[must_use]
    pub fn new(layout: LayoutModel<Id>, config: EngineConfig) -> Self {
        Self {
            layout,
            config,
            active: false,
            dragging_id: None,
            snapshot: Vec::new(),
            translation: 0.0,
            shift: 0,
            deactivation: ScheduledTask::new(),
        }
    }

    /// Item lengths used for shift and offset computation.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &LayoutModel<Id> {
        &self.layout
    }

    /// Mutable access for measurement updates.
    #[inline]
    pub fn layout_mut(&mut self) -> &mut LayoutModel<Id> {
        &mut self.layout
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    /// True from the first sample of a drag until shortly after it ends.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Item that owns the current session.
    #[inline]
    #[must_use]
    pub fn dragging_id(&self) -> Option<&Id> {
        self.dragging_id.as_ref()
    }

    /// Whether `id` is being dragged (raise it above its neighbours).
    #[must_use]
    pub fn is_dragging(&self, id: &Id) -> bool {
        self.dragging_id.as_ref() == Some(id)
    }

    /// Signed displacement along the axis since the drag started.
    #[inline]
    #[must_use]
    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Signed number of slots the dragged item has displaced.
    #[inline]
    #[must_use]
    pub fn shift(&self) -> isize {
        self.shift
    }

    /// Order captured when the current session started.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &[Id] {
        &self.snapshot
    }

    /// When the pending deactivation is due, if one is pending.
    #[inline]
    #[must_use]
    pub fn pending_deactivation(&self) -> Option<Instant> {
        self.deactivation.deadline()
    }

    /// Feed a move sample for `id`.
    ///
    /// The first sample while no item is dragging starts a session and
    /// captures `current_order`. `delta` is the total displacement since the
    /// gesture began; only its component along the layout axis is used.
    pub fn on_changed(&mut self, id: &Id, current_order: &[Id], delta: DragDelta) -> DragUpdate {
        match &self.dragging_id {
            Some(owner) if owner != id => {
                debug!(message = "drag.ignored", reason = "session owned by another item");
                return DragUpdate::Ignored;
            }
            Some(_) => {}
            None => self.begin(id, current_order),
        }

        self.translation = delta.along(self.layout.axis());
        let shift = self.compute_shift();
        if shift == self.shift {
            return DragUpdate::Moved;
        }

        let previous = self.shift;
        self.shift = shift;
        debug!(
            message = "drag.shift",
            from = previous,
            to = shift,
            translation = self.translation
        );
        DragUpdate::Shifted {
            from: previous,
            to: shift,
        }
    }

    /// End the drag of `id` and resolve it into a reorder.
    ///
    /// When the final shift is non-zero, `commit(from, to)` is called exactly
    /// once with insert-before semantics and the move is returned. The session
    /// is reset immediately; [`is_active`](Self::is_active) clears on the first
    /// [`tick`](Self::tick) after the deactivation delay unless a new session
    /// has started by then.
    ///
    /// An end event from an item that does not own the session is ignored.
    pub fn on_ended<F>(
        &mut self,
        id: &Id,
        current_order: &[Id],
        now: Instant,
        commit: F,
    ) -> Option<ReorderMove>
    where
        F: FnOnce(usize, usize),
    {
        match &self.dragging_id {
            None => return None,
            Some(owner) if owner != id => {
                debug!(message = "drag.ignored", reason = "end from non-owner");
                return None;
            }
            Some(_) => {}
        }

        let committed = self.resolve_move(id, current_order);
        if let Some(mv) = committed {
            info!(message = "drag.commit", from = mv.from, to = mv.to, shift = self.shift);
            commit(mv.from, mv.to);
        }
        self.end_session(now);
        committed
    }

    /// Abandon the current session without committing.
    ///
    /// Unlike [`on_ended`](Self::on_ended) there is no pointer release to
    /// debounce, so [`is_active`](Self::is_active) clears immediately.
    pub fn cancel(&mut self) -> bool {
        if self.dragging_id.is_none() {
            return false;
        }
        debug!(message = "drag.cancel", shift = self.shift);
        self.reset_session();
        self.deactivation.cancel();
        self.active = false;
        true
    }

    /// Run the deferred deactivation if it is due.
    ///
    /// Returns `true` if [`is_active`](Self::is_active) went from true to false.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.deactivation.poll(now).is_none() {
            return false;
        }
        if self.dragging_id.is_some() || !self.active {
            return false;
        }
        self.active = false;
        trace!(message = "drag.deactivated");
        true
    }

    /// Offset to render `id` at for the current session.
    ///
    /// The dragged item follows the pointer exactly. Items inside the swept
    /// window hop by one slot (the dragged item's length plus spacing) towards
    /// the dragged item's origin; everything else stays put.
    #[must_use]
    pub fn offset(&self, id: &Id) -> f64 {
        if !self.active {
            return 0.0;
        }
        let Some(dragging) = &self.dragging_id else {
            return 0.0;
        };
        if dragging == id {
            return self.translation;
        }

        let geometry = self.layout.geometry(&self.snapshot);
        let Some(index) = geometry.index_of(id) else {
            return 0.0;
        };
        let Some(length) = self.layout.length_of(dragging) else {
            return 0.0;
        };
        let slot = length + self.layout.spacing();

        let index = index as isize;
        let tab_index = self.dragged_index() as isize;
        let current_index = tab_index + self.shift;

        if index < tab_index && index >= current_index {
            slot * (-self.shift).min(1) as f64
        } else if index > tab_index && index <= current_index {
            slot * (-self.shift).max(-1) as f64
        } else {
            0.0
        }
    }

    fn begin(&mut self, id: &Id, current_order: &[Id]) {
        self.active = true;
        self.dragging_id = Some(id.clone());
        self.snapshot.clear();
        self.snapshot.extend_from_slice(current_order);
        self.translation = 0.0;
        self.shift = 0;
        self.deactivation.cancel();
        debug!(message = "drag.start", items = current_order.len());
    }

    fn end_session(&mut self, now: Instant) {
        self.reset_session();
        self.deactivation.arm(now, self.config.deactivation_delay);
    }

    fn reset_session(&mut self) {
        self.dragging_id = None;
        self.snapshot.clear();
        self.translation = 0.0;
        self.shift = 0;
    }

    /// Index of the dragged item in the snapshot, falling back to 0.
    fn dragged_index(&self) -> usize {
        self.dragging_id
            .as_ref()
            .and_then(|id| self.snapshot.iter().position(|candidate| candidate == id))
            .unwrap_or(0)
    }

    fn compute_shift(&self) -> isize {
        let geometry = self.layout.geometry(&self.snapshot);
        scan_shift(&geometry, self.dragged_index(), self.translation)
    }

    fn resolve_move(&self, id: &Id, current_order: &[Id]) -> Option<ReorderMove> {
        if self.shift == 0 || current_order.is_empty() {
            return None;
        }
        let from = self
            .snapshot
            .iter()
            .position(|candidate| candidate == id)
            .unwrap_or(0);
        let last = current_order.len() as isize - 1;
        let raw = (from as isize + self.shift).clamp(0, last) as usize;
        let to = if raw > from { raw + 1 } else { raw };
        Some(ReorderMove { from, to })
    }
}

/// Count the trailing edges the dragged item's translated center has passed.
///
/// Edges are accumulated in one pass in the same order
/// [`StripGeometry::cumulative_length_through`] sums them, so the result is
/// identical to probing each edge from scratch.
fn scan_shift<Id: Eq + Hash>(
    geometry: &StripGeometry<'_, Id>,
    index: usize,
    translation: f64,
) -> isize {
    // edges[i] == cumulative_length_through(i) for every i before the dragged item.
    let mut edges = Vec::with_capacity(index);
    let mut below = 0.0;
    for i in 0..index {
        let Some(slot) = geometry.slot(i as isize) else {
            return 0;
        };
        below += slot;
        edges.push(below);
    }
    let index = index as isize;
    let (Some(length), Some(slot)) = (geometry.length(index), geometry.slot(index)) else {
        return 0;
    };
    let target = below + length / 2.0 + translation;

    let mut shift = 0isize;
    if translation > 0.0 {
        let mut edge = below + slot;
        loop {
            match geometry.slot(index + shift + 1) {
                Some(next) if target > edge + next => {
                    edge += next;
                    shift += 1;
                }
                _ => break,
            }
        }
    } else {
        loop {
            match usize::try_from(index + shift - 1)
                .ok()
                .and_then(|i| edges.get(i))
            {
                Some(&edge) if target < edge => shift -= 1,
                _ => break,
            }
        }
    }
    shift
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
