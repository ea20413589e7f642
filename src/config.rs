//! Runtime Configuration
//!
//! The page may define `window.__POKEDEX_CONFIG__` to override any
//! `ClientConfig` field. Missing or malformed objects fall back to defaults.

use pokedex_core::ClientConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__POKEDEX_CONFIG__";

pub fn load() -> ClientConfig {
    let Some(window) = web_sys::window() else {
        return ClientConfig::default();
    };
    let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return ClientConfig::default(),
    };
    // Logger is not installed yet
    match serde_wasm_bindgen::from_value(value) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("[config] ignoring {}: {}", CONFIG_GLOBAL, e).into());
            ClientConfig::default()
        }
    }
}
