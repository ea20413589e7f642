//! Detail Panel State Machine
//!
//! Hidden -> Visible whenever a detail-targeted fetch completes, success or
//! failure. Visible -> Hidden only on a backdrop click.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}

/// Where a click inside the modal landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The outer overlay around the content box
    Backdrop,
    Content,
}

impl PanelState {
    pub fn is_visible(self) -> bool {
        self == PanelState::Visible
    }

    /// A detail fetch finished and its result was put in the panel
    pub fn on_fetch_complete(self) -> Self {
        PanelState::Visible
    }

    pub fn on_click(self, target: ClickTarget) -> Self {
        match (self, target) {
            (PanelState::Visible, ClickTarget::Backdrop) => PanelState::Hidden,
            (state, _) => state,
        }
    }
}
