//! Render Surface
//!
//! The output side of the coordinator. The browser implements it over
//! reactive state; tests record the calls.

use crate::view::{CardView, NavVisibility, PanelContent};

pub trait RenderSurface {
    /// Empty the list container
    fn clear_cards(&self);
    fn append_card(&self, card: CardView);
    fn set_nav(&self, nav: NavVisibility);
    /// Replace panel contents and make the panel visible
    fn show_panel(&self, content: PanelContent);
    fn hide_panel(&self);
}
