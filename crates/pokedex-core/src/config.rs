//! Client Configuration
//!
//! Endpoint and display settings. Everything has a default so an empty
//! configuration object is valid.

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_SIZE: u32 = 16;
pub const DEFAULT_MOVE_DISPLAY_LIMIT: usize = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Characters escaped in a path segment. Alphanumerics, `-`, `_` and `.` pass through.
const IDENTIFIER: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, without the `/pokemon` resource
    pub api_base: String,
    /// Items requested per list page
    pub page_size: u32,
    /// Moves shown in the detail view
    pub move_display_limit: usize,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            move_display_limit: DEFAULT_MOVE_DISPLAY_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// `{api_base}/pokemon`
    pub fn list_endpoint(&self) -> String {
        format!("{}/pokemon", self.api_base.trim_end_matches('/'))
    }

    /// The request used when no cursor is known yet
    pub fn first_page_url(&self) -> String {
        format!("{}?offset=0&limit={}", self.list_endpoint(), self.page_size)
    }

    pub fn detail_url(&self, identifier: &str) -> String {
        format!(
            "{}/{}",
            self.list_endpoint(),
            utf8_percent_encode(identifier, IDENTIFIER)
        )
    }

    /// Parsed `log_level`; unknown names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
