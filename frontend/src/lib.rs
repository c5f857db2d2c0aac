pub mod app;
pub mod components;
pub mod controllers;
pub mod session;
pub mod utils;

use std::rc::Rc;

use cosmo_nav_shared::SiteConfig;
use leptos::logging::warn;
use wasm_bindgen::prelude::*;

use crate::session::LocalSessionStore;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let Ok(document) = utils::document() else {
        return;
    };
    let config = app::page_config(&document);
    if !config.auto_init {
        return;
    }
    if let Err(e) = app::when_ready(&document, move || app::start(&config)) {
        warn!("site setup not scheduled: {}", e);
    }
}

/// Manual setup for pages that set `auto_init` to false. Takes a JSON
/// [`SiteConfig`]; an empty string means the defaults.
#[wasm_bindgen]
pub fn init_site(config_json: &str) -> Result<(), JsValue> {
    let config: SiteConfig = if config_json.trim().is_empty() {
        SiteConfig::default()
    } else {
        serde_json::from_str(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    app::init(&config, Rc::new(LocalSessionStore)).map_err(|e| JsValue::from_str(&e.to_string()))
}
