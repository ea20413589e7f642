//! Pokedex Core
//!
//! UI-independent half of the Pokedex frontend: catalog models, list/detail
//! fetchers, card and detail view models, the detail panel state machine and
//! the page coordinator that ties them together.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod fetch;
pub mod model;
pub mod panel;
pub mod surface;
pub mod view;

#[cfg(test)]
mod test_support;

pub use config::ClientConfig;
pub use coordinator::{PageCoordinator, PageReport, CONFIRM_KEY};
pub use error::{FetchError, FetchResult};
pub use fetch::HttpGet;
pub use model::{ItemDetail, ItemSummaryRef, NavigationCursors, PageResult};
pub use panel::{ClickTarget, PanelState};
pub use surface::RenderSurface;
pub use view::{CardView, DetailView, NavVisibility, PanelContent, UNAVAILABLE_MESSAGE};
