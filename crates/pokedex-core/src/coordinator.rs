//! Page Coordinator
//!
//! Owns the navigation cursors and the detail panel state. Loads list pages,
//! fans out one detail fetch per summary and renders cards as responses
//! arrive, in arrival order.
//!
//! Every page load starts a new generation. Responses belonging to an older
//! generation (a page the user already navigated away from) are dropped
//! instead of being drawn into the current list.

use std::cell::RefCell;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::fetch::{fetch_detail, fetch_page, HttpGet};
use crate::model::NavigationCursors;
use crate::panel::{ClickTarget, PanelState};
use crate::surface::RenderSurface;
use crate::view::{render_card, render_detail, NavVisibility, PanelContent};

/// Key that submits the search box
pub const CONFIRM_KEY: &str = "Enter";

/// Outcome of one `load_page` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageReport {
    /// The list response arrived and was applied
    pub loaded: bool,
    /// Detail fetches issued
    pub requested: usize,
    pub rendered: usize,
    pub failed: usize,
    /// Responses dropped because a newer page load started
    pub stale: usize,
}

#[derive(Debug, Default)]
struct PageState {
    cursors: NavigationCursors,
    generation: u64,
    panel: PanelState,
}

/// Search identifier for a key event, if the event should trigger a lookup.
/// Blank input is still looked up and ends in the unavailable message.
pub fn search_identifier(key: &str, input: &str) -> Option<String> {
    (key == CONFIRM_KEY).then(|| input.to_lowercase())
}

pub struct PageCoordinator<H, R> {
    http: H,
    surface: R,
    config: ClientConfig,
    state: RefCell<PageState>,
}

impl<H: HttpGet, R: RenderSurface> PageCoordinator<H, R> {
    pub fn new(http: H, surface: R, config: ClientConfig) -> Self {
        Self {
            http,
            surface,
            config,
            state: RefCell::new(PageState::default()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Cursors of the most recently loaded page
    pub fn cursors(&self) -> NavigationCursors {
        self.state.borrow().cursors.clone()
    }

    pub fn panel(&self) -> PanelState {
        self.state.borrow().panel
    }

    // ========================
    // Navigation
    // ========================

    pub async fn load_first_page(&self) -> PageReport {
        self.load_page(None).await
    }

    /// Load the page behind the `next` cursor. `None` when on the last page.
    pub async fn next_page(&self) -> Option<PageReport> {
        let cursor = self.state.borrow().cursors.next.clone();
        match cursor {
            Some(url) => Some(self.load_page(Some(&url)).await),
            None => {
                log::debug!("no next page");
                None
            }
        }
    }

    pub async fn prev_page(&self) -> Option<PageReport> {
        let cursor = self.state.borrow().cursors.previous.clone();
        match cursor {
            Some(url) => Some(self.load_page(Some(&url)).await),
            None => {
                log::debug!("no previous page");
                None
            }
        }
    }

    /// Clear the list and load the page at `cursor`, or the first page.
    ///
    /// Cursors and button visibility are only updated once the list response
    /// arrives for the current generation, so a failed load leaves them as
    /// they were.
    pub async fn load_page(&self, cursor: Option<&str>) -> PageReport {
        let url = cursor.map_or_else(|| self.config.first_page_url(), str::to_owned);
        let generation = self.begin_generation();
        self.surface.clear_cards();
        log::debug!("loading {} (generation {})", url, generation);

        let mut report = PageReport::default();
        let page = match fetch_page(&self.http, &url).await {
            Ok(page) => page,
            Err(err) if self.is_current(generation) => {
                self.present_failure(&err);
                return report;
            }
            Err(err) => {
                log::debug!("dropping stale failure: {}", err);
                report.stale += 1;
                return report;
            }
        };
        if !self.is_current(generation) {
            log::debug!("dropping stale page {}", url);
            report.stale += 1;
            return report;
        }

        let cursors = page.cursors();
        self.surface.set_nav(NavVisibility::from(&cursors));
        self.state.borrow_mut().cursors = cursors;
        report.loaded = true;
        report.requested = page.results.len();

        let http = &self.http;
        let mut pending: FuturesUnordered<_> = page
            .results
            .iter()
            .map(|summary| async move {
                let outcome = fetch_detail(http, &summary.detail_locator).await;
                (summary, outcome)
            })
            .collect();

        while let Some((summary, outcome)) = pending.next().await {
            if !self.is_current(generation) {
                log::debug!("dropping stale detail for {}", summary.display_name);
                report.stale += 1;
                continue;
            }
            match outcome {
                Ok(detail) => {
                    log::debug!(
                        "card {} image={:?} types={:?}",
                        detail.name,
                        detail.sprite_front,
                        detail.types
                    );
                    self.surface.append_card(render_card(&detail));
                    report.rendered += 1;
                }
                Err(err) => {
                    report.failed += 1;
                    self.present_failure(&err);
                }
            }
        }

        log::info!(
            "page {}: {} of {} rendered, {} failed, {} stale",
            url,
            report.rendered,
            report.requested,
            report.failed,
            report.stale
        );
        report
    }

    // ========================
    // Detail panel
    // ========================

    /// Fetch one item by name or id and show it in the detail panel.
    /// Returns whether the detail could be shown.
    pub async fn open_item(&self, identifier: &str) -> bool {
        let url = self.config.detail_url(identifier);
        match fetch_detail(&self.http, &url).await {
            Ok(detail) => {
                let view = render_detail(&detail, self.config.move_display_limit);
                self.show_panel(PanelContent::Detail(view));
                true
            }
            Err(err) => {
                self.present_failure(&err);
                false
            }
        }
    }

    /// Handle a key released in the search box. Returns whether a lookup
    /// was issued.
    pub async fn search(&self, key: &str, input: &str) -> bool {
        match search_identifier(key, input) {
            Some(identifier) => {
                log::debug!("search {}", identifier);
                self.open_item(&identifier).await;
                true
            }
            None => false,
        }
    }

    pub fn panel_click(&self, target: ClickTarget) {
        let (before, after) = {
            let mut state = self.state.borrow_mut();
            let before = state.panel;
            state.panel = before.on_click(target);
            (before, state.panel)
        };
        if before != after {
            self.surface.hide_panel();
        }
    }

    /// Error presenter: every failure ends up as the same message
    fn present_failure(&self, err: &FetchError) {
        log::warn!("{}", err);
        self.show_panel(PanelContent::Unavailable);
    }

    fn show_panel(&self, content: PanelContent) {
        {
            let mut state = self.state.borrow_mut();
            state.panel = state.panel.on_fetch_complete();
        }
        self.surface.show_panel(content);
    }

    fn begin_generation(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.state.borrow().generation == generation
    }
}
