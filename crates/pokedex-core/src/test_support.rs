//! Fixtures shared by the unit tests: canned API bodies, a gated in-memory
//! transport and a surface that records what it was asked to draw.

use std::cell::RefCell;
use std::collections::HashMap;

use futures::channel::oneshot;
use serde_json::json;

use crate::error::{FetchError, FetchResult};
use crate::fetch::HttpGet;
use crate::model::ItemDetail;
use crate::surface::RenderSurface;
use crate::view::{CardView, NavVisibility, PanelContent};

pub const LIST_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";

/// Detail locator as the list endpoint hands it out
pub fn summary_url(name: &str) -> String {
    format!("{}/{}/", LIST_ENDPOINT, name)
}

pub fn detail_json(name: &str, move_count: usize) -> String {
    let moves: Vec<_> = (0..move_count)
        .map(|i| json!({ "move": { "name": format!("move-{}", i), "url": "https://pokeapi.co/api/v2/move/1/" } }))
        .collect();
    json!({
        "name": name,
        "height": 4,
        "weight": 60,
        "abilities": [
            { "ability": { "name": "static" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod" }, "is_hidden": true, "slot": 3 }
        ],
        "moves": moves,
        "sprites": {
            "front_shiny": format!("https://img.example/{}/front_shiny.png", name),
            "back_shiny": format!("https://img.example/{}/back_shiny.png", name)
        },
        "types": [{ "slot": 1, "type": { "name": "electric" } }],
        "forms": [{ "name": name }]
    })
    .to_string()
}

pub fn detail(name: &str, move_count: usize) -> ItemDetail {
    serde_json::from_str(&detail_json(name, move_count)).unwrap()
}

pub fn page_json(previous: Option<&str>, next: Option<&str>, names: &[&str]) -> String {
    let results: Vec<_> = names
        .iter()
        .map(|name| json!({ "name": name, "url": summary_url(name) }))
        .collect();
    json!({
        "count": 1302,
        "previous": previous,
        "next": next,
        "results": results
    })
    .to_string()
}

/// In-memory transport. Unknown URLs fail like a 404; gated URLs wait until
/// the test releases them.
#[derive(Default)]
pub struct MockHttp {
    responses: RefCell<HashMap<String, String>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    requests: RefCell<Vec<String>>,
}

impl MockHttp {
    pub fn respond(&self, url: &str, body: impl Into<String>) {
        self.responses.borrow_mut().insert(url.to_string(), body.into());
    }

    /// Hold the next request to `url` until the returned sender fires
    pub fn gate(&self, url: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(url.to_string(), rx);
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl HttpGet for MockHttp {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        self.requests.borrow_mut().push(url.to_string());
        let gate = self.gates.borrow_mut().remove(url);
        if let Some(gate) = gate {
            gate.await.map_err(|_| FetchError::new(url, "connection dropped"))?;
        }
        self.responses
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::new(url, "404 Not Found"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Clear,
    Card(CardView),
    Nav(NavVisibility),
    Show(PanelContent),
    Hide,
}

#[derive(Default)]
pub struct RecordingSurface {
    events: RefCell<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    /// Names of the cards currently in the list (after the last clear)
    pub fn cards(&self) -> Vec<String> {
        let mut cards = Vec::new();
        for event in self.events.borrow().iter() {
            match event {
                SurfaceEvent::Clear => cards.clear(),
                SurfaceEvent::Card(card) => cards.push(card.name.clone()),
                _ => {}
            }
        }
        cards
    }

    pub fn last_nav(&self) -> Option<NavVisibility> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            SurfaceEvent::Nav(nav) => Some(*nav),
            _ => None,
        })
    }

    pub fn last_panel(&self) -> Option<PanelContent> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            SurfaceEvent::Show(content) => Some(content.clone()),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_cards(&self) {
        self.events.borrow_mut().push(SurfaceEvent::Clear);
    }

    fn append_card(&self, card: CardView) {
        self.events.borrow_mut().push(SurfaceEvent::Card(card));
    }

    fn set_nav(&self, nav: NavVisibility) {
        self.events.borrow_mut().push(SurfaceEvent::Nav(nav));
    }

    fn show_panel(&self, content: PanelContent) {
        self.events.borrow_mut().push(SurfaceEvent::Show(content));
    }

    fn hide_panel(&self) {
        self.events.borrow_mut().push(SurfaceEvent::Hide);
    }
}
