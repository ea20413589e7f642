//! Search Box Component
//!
//! Looks a Pokemon up by name when Enter is released in the input.

use leptos::prelude::*;

use crate::context::use_pokedex;

#[component]
pub fn SearchBox() -> impl IntoView {
    let pokedex = use_pokedex();

    let on_keyup = move |ev: web_sys::KeyboardEvent| {
        let input = event_target_value(&ev);
        pokedex.search(ev.key(), input);
    };

    view! {
        <input
            id="inputSearch"
            type="text"
            placeholder="Search a Pokemon by name..."
            autocomplete="off"
            on:keyup=on_keyup
        />
    }
}
