//! UI Components
//!
//! Leptos components for the Pokedex page.

mod card_grid;
mod detail_modal;
mod nav_buttons;
mod search_box;

pub use card_grid::CardGrid;
pub use detail_modal::DetailModal;
pub use nav_buttons::NavButtons;
pub use search_box::SearchBox;
