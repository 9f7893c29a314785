//! Expandable-panel open/closed state.

/// Open/closed state for an expandable panel.
///
/// The host tree can alias two distinct panels onto the same element when
/// one replaces another in the same position, so the state re-initializes
/// whenever the label *or* the requested initial state changes; tracking
/// the label catches the aliasing case where the initial state happens to
/// match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpanderState {
    label: String,
    initial_expanded: bool,
    expanded: bool,
}

impl ExpanderState {
    pub fn new(label: impl Into<String>, expanded: bool) -> Self {
        let label = label.into();
        Self {
            label,
            initial_expanded: expanded,
            expanded,
        }
    }

    /// Re-apply the host's props; resets the open state when either input
    /// changed since the last sync.
    pub fn sync(&mut self, label: &str, expanded: bool) {
        if self.label != label || self.initial_expanded != expanded {
            self.label = label.to_string();
            self.initial_expanded = expanded;
            self.expanded = expanded;
        }
    }

    /// Flip the open state (user toggle).
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
