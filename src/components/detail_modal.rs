//! Detail Modal Component
//!
//! Backdrop plus content box. A click on the backdrop closes it; clicks on
//! the content stop there.

use leptos::prelude::*;
use pokedex_core::{ClickTarget, DetailView, PanelContent, UNAVAILABLE_MESSAGE};

use crate::context::use_pokedex;
use crate::store::{store_panel, store_panel_visible, use_pokedex_store};

#[component]
pub fn DetailModal() -> impl IntoView {
    let pokedex = use_pokedex();
    let store = use_pokedex_store();
    let display = move || if store_panel_visible(&store) { "block" } else { "none" };

    view! {
        <div
            id="modal"
            class="modal"
            style:display=display
            on:click=move |_| pokedex.panel_click(ClickTarget::Backdrop)
        >
            <div
                id="modalContent"
                class="modal-content"
                on:click=move |ev| {
                    ev.stop_propagation();
                    pokedex.panel_click(ClickTarget::Content);
                }
            >
                {move || match store_panel(&store) {
                    Some(PanelContent::Detail(detail)) => view! { <DetailRows detail=detail /> }.into_any(),
                    Some(PanelContent::Unavailable) => {
                        view! { <label class="title">{UNAVAILABLE_MESSAGE}</label> }.into_any()
                    }
                    None => view! { <div></div> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn DetailRows(detail: DetailView) -> impl IntoView {
    let DetailView { name, weight, height, abilities, moves, sprite_back } = detail;

    view! {
        <div class="data2">
            <label class="title">"Pokemon: "</label>
            <label>{name}</label>
        </div>
        <div class="data2">
            <label class="title">"Weight: "</label>
            <label>{weight}</label>
        </div>
        <div class="data2">
            <label class="title">"Height: "</label>
            <label>{height}</label>
        </div>
        <div class="data2">
            <label class="title">"Abilities: "</label>
            {abilities.into_iter().map(|ability| view! { <label>{ability}</label> }).collect_view()}
        </div>
        <div class="data2">
            <label class="title">"Moves: "</label>
            {moves.into_iter().map(|name| view! { <label>{name}</label> }).collect_view()}
        </div>
        <img src=sprite_back />
    }
}
