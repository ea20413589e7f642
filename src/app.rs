//! Pokedex Frontend App
//!
//! Builds the store and the coordinator, then lays out search, card grid,
//! navigation and the detail modal.

use leptos::prelude::*;
use pokedex_core::{ClientConfig, PageCoordinator};
use reactive_stores::Store;

use crate::api::ReqwestTransport;
use crate::components::{CardGrid, DetailModal, NavButtons, SearchBox};
use crate::context::PokedexContext;
use crate::store::PokedexState;
use crate::surface::StoreSurface;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(PokedexState::default());
    provide_context(store);

    let coordinator = PageCoordinator::new(ReqwestTransport::default(), StoreSurface::new(store), config);
    let pokedex = PokedexContext::new(coordinator);
    provide_context(pokedex);

    // First page on mount
    Effect::new(move |_| {
        pokedex.load_first_page();
    });

    view! {
        <div class="app-layout">
            <header class="header">
                <h1>"Pokedex"</h1>
                <SearchBox />
            </header>

            <main class="main-content">
                <CardGrid />
                <NavButtons />
            </main>

            <DetailModal />
        </div>
    }
}
