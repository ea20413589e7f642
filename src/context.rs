//! Application Context
//!
//! Hands the page coordinator to components. Every action spawns a local
//! task; results land in the view store through `StoreSurface`.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use pokedex_core::{ClickTarget, PageCoordinator};

use crate::api::ReqwestTransport;
use crate::surface::StoreSurface;

pub type AppCoordinator = PageCoordinator<ReqwestTransport, StoreSurface>;

#[derive(Clone, Copy)]
pub struct PokedexContext {
    coordinator: StoredValue<Rc<AppCoordinator>, LocalStorage>,
}

impl PokedexContext {
    pub fn new(coordinator: AppCoordinator) -> Self {
        Self {
            coordinator: StoredValue::new_local(Rc::new(coordinator)),
        }
    }

    fn coordinator(&self) -> Rc<AppCoordinator> {
        self.coordinator.get_value()
    }

    pub fn load_first_page(&self) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            coordinator.load_first_page().await;
        });
    }

    pub fn next_page(&self) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            coordinator.next_page().await;
        });
    }

    pub fn prev_page(&self) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            coordinator.prev_page().await;
        });
    }

    /// Card click
    pub fn open_item(&self, identifier: String) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            coordinator.open_item(&identifier).await;
        });
    }

    /// Key released in the search box
    pub fn search(&self, key: String, input: String) {
        let coordinator = self.coordinator();
        spawn_local(async move {
            coordinator.search(&key, &input).await;
        });
    }

    pub fn panel_click(&self, target: ClickTarget) {
        self.coordinator().panel_click(target);
    }
}

pub fn use_pokedex() -> PokedexContext {
    expect_context::<PokedexContext>()
}
