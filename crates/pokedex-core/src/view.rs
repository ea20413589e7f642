//! Card and Detail View Models
//!
//! What the list and the detail panel display for an item, independent of
//! how the UI draws it.

use crate::model::{ItemDetail, NavigationCursors};

/// Fixed text shown by the error presenter
pub const UNAVAILABLE_MESSAGE: &str = "Information not available";

/// Clickable summary card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Identifier used for the detail request when the card is clicked
    pub id: String,
    pub name: String,
    pub sprite_front: Option<String>,
    pub types: Vec<String>,
}

/// Expanded view of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub name: String,
    pub weight: u32,
    pub height: u32,
    pub abilities: Vec<String>,
    /// At most `move_display_limit` entries
    pub moves: Vec<String>,
    pub sprite_back: Option<String>,
}

/// Contents of the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Detail(DetailView),
    Unavailable,
}

/// Which navigation buttons are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavVisibility {
    pub previous: bool,
    pub next: bool,
}

impl From<&NavigationCursors> for NavVisibility {
    fn from(cursors: &NavigationCursors) -> Self {
        Self {
            previous: cursors.previous.is_some(),
            next: cursors.next.is_some(),
        }
    }
}

pub fn render_card(detail: &ItemDetail) -> CardView {
    CardView {
        id: detail.name.clone(),
        name: detail.name.clone(),
        sprite_front: detail.sprite_front.clone(),
        types: detail.types.clone(),
    }
}

pub fn render_detail(detail: &ItemDetail, move_limit: usize) -> DetailView {
    DetailView {
        name: detail.display_name().to_string(),
        weight: detail.weight,
        height: detail.height,
        abilities: detail.abilities.clone(),
        moves: detail.moves.iter().take(move_limit).cloned().collect(),
        sprite_back: detail.sprite_back.clone(),
    }
}
