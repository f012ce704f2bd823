#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod date;
pub mod dom;
pub mod error;
pub mod logging;
pub mod menu;
pub mod page;
pub mod scroll;
pub mod theme;

pub use error::DomError;
pub use page::{LoadState, PageBindings, activate, install, install_for};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    if let Err(err) = page::activate(&pagekit_core::PageConfig::default()) {
        log::error!("page helpers not installed: {err}");
    }
}

/// Re-bind the page helpers with custom ids and selectors.
///
/// `options` is a plain object using camelCase `PageConfig` field names;
/// omitted fields keep their defaults.
///
/// # Errors
/// Throws when the options are malformed or the page cannot be bound.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = configure)]
pub fn init(options: JsValue) -> Result<(), JsError> {
    logging::init();
    let config: pagekit_core::PageConfig = if options.is_undefined() || options.is_null() {
        pagekit_core::PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|err| DomError::Options(err.to_string()))?
    };
    page::activate(&config)?;
    Ok(())
}

/// Flip dark mode from script code; returns `"dark"` or `"light"`.
///
/// # Errors
/// Throws when the document root is unavailable.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() -> Result<String, JsError> {
    let mode = theme::toggle_dark_mode(&page::active_config())?;
    Ok(mode.label().to_string())
}
