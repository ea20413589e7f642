//! Card Grid Component
//!
//! One button per loaded Pokemon: name, front shiny sprite and types.
//! Clicking a card opens its detail view.

use leptos::prelude::*;
use pokedex_core::CardView;

use crate::context::use_pokedex;
use crate::store::{store_cards, use_pokedex_store};

#[component]
pub fn CardGrid() -> impl IntoView {
    let store = use_pokedex_store();

    view! {
        <div id="grid" class="grid">
            <For
                each=move || store_cards(&store)
                key=|card| card.id.clone()
                children=move |card| view! { <PokemonCard card=card /> }
            />
        </div>
    }
}

#[component]
fn PokemonCard(card: CardView) -> impl IntoView {
    let pokedex = use_pokedex();
    let CardView { id, name, sprite_front, types } = card;
    let clicked_id = id.clone();

    view! {
        <button
            id=id
            class="cardButton"
            on:click=move |_| pokedex.open_item(clicked_id.clone())
        >
            <div class="card">
                <div class="data">
                    <label class="title">"Name:"</label>
                    <label>{name.clone()}</label>
                </div>
                <img src=sprite_front alt=name />
                <div class="data">
                    <label class="title">"Types:"</label>
                    {types.into_iter().map(|type_name| view! { <label>{type_name}</label> }).collect_view()}
                </div>
            </div>
        </button>
    }
}
