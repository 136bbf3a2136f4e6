#![forbid(unsafe_code)]

//! Interaction policy for a tab strip.

/// When a dragged item becomes the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragActivation {
    /// As soon as the drag session starts.
    OnBegin,
    /// When the drag ends, whether or not the item moved.
    OnEnd,
}

/// Host-selected interaction behaviour.
///
/// The default never activates an item because of a drag; only
/// [`TabStripState::select`](crate::TabStripState::select) does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabsInteraction {
    pub drag_activation: Option<DragActivation>,
}

impl TabsInteraction {
    /// Activate dragged items according to `activation`.
    #[must_use]
    pub const fn drag_activation(mut self, activation: DragActivation) -> Self {
        self.drag_activation = Some(activation);
        self
    }

    #[inline]
    #[must_use]
    pub(crate) fn activates_on_begin(self) -> bool {
        self.drag_activation == Some(DragActivation::OnBegin)
    }

    #[inline]
    #[must_use]
    pub(crate) fn activates_on_end(self) -> bool {
        self.drag_activation == Some(DragActivation::OnEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_never_activates() {
        let interaction = TabsInteraction::default();
        assert_eq!(interaction.drag_activation, None);
        assert!(!interaction.activates_on_begin());
        assert!(!interaction.activates_on_end());
    }

    #[test]
    fn builder_sets_policy() {
        let interaction = TabsInteraction::default().drag_activation(DragActivation::OnEnd);
        assert!(interaction.activates_on_end());
        assert!(!interaction.activates_on_begin());
    }
}
