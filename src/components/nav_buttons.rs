//! Prev/Next Navigation
//!
//! Each button carries `hideButton` while its cursor is absent.

use leptos::prelude::*;

use crate::context::use_pokedex;
use crate::store::{store_nav, use_pokedex_store};

#[component]
pub fn NavButtons() -> impl IntoView {
    let pokedex = use_pokedex();
    let store = use_pokedex_store();
    let nav = move || store_nav(&store);

    view! {
        <div class="nav-buttons">
            <button
                id="prev"
                class="navButton"
                class:hideButton=move || !nav().previous
                on:click=move |_| pokedex.prev_page()
            >
                "Prev"
            </button>
            <button
                id="next"
                class="navButton"
                class:hideButton=move || !nav().next
                on:click=move |_| pokedex.next_page()
            >
                "Next"
            </button>
        </div>
    }
}
