//! Store-backed Render Surface

use pokedex_core::{CardView, NavVisibility, PanelContent, RenderSurface};

use crate::store::{
    store_clear_cards, store_hide_panel, store_push_card, store_set_nav, store_show_panel,
    PokedexStore,
};

/// Writes coordinator output into the view store
#[derive(Clone, Copy)]
pub struct StoreSurface {
    store: PokedexStore,
}

impl StoreSurface {
    pub fn new(store: PokedexStore) -> Self {
        Self { store }
    }
}

impl RenderSurface for StoreSurface {
    fn clear_cards(&self) {
        store_clear_cards(&self.store);
    }

    fn append_card(&self, card: CardView) {
        store_push_card(&self.store, card);
    }

    fn set_nav(&self, nav: NavVisibility) {
        store_set_nav(&self.store, nav);
    }

    fn show_panel(&self, content: PanelContent) {
        store_show_panel(&self.store, content);
    }

    fn hide_panel(&self) {
        store_hide_panel(&self.store);
    }
}
