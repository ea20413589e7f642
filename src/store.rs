//! View State Store
//!
//! Everything the page draws, held in a `reactive_stores` store so each
//! component only re-renders for the field it reads.

use leptos::prelude::*;
use pokedex_core::{CardView, NavVisibility, PanelContent};
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct PokedexState {
    /// Cards of the current page, in arrival order
    pub cards: Vec<CardView>,
    pub nav: NavVisibility,
    /// Last content put in the detail panel; kept while hidden
    pub panel: Option<PanelContent>,
    pub panel_visible: bool,
}

pub type PokedexStore = Store<PokedexState>;

pub fn use_pokedex_store() -> PokedexStore {
    expect_context::<PokedexStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_cards(store: &PokedexStore) -> Vec<CardView> {
    store.cards().get()
}

pub fn store_nav(store: &PokedexStore) -> NavVisibility {
    store.nav().get()
}

pub fn store_panel(store: &PokedexStore) -> Option<PanelContent> {
    store.panel().get()
}

pub fn store_panel_visible(store: &PokedexStore) -> bool {
    store.panel_visible().get()
}

pub fn store_clear_cards(store: &PokedexStore) {
    store.cards().write().clear();
}

pub fn store_push_card(store: &PokedexStore, card: CardView) {
    store.cards().write().push(card);
}

pub fn store_set_nav(store: &PokedexStore, nav: NavVisibility) {
    *store.nav().write() = nav;
}

pub fn store_show_panel(store: &PokedexStore, content: PanelContent) {
    *store.panel().write() = Some(content);
    *store.panel_visible().write() = true;
}

pub fn store_hide_panel(store: &PokedexStore) {
    *store.panel_visible().write() = false;
}
