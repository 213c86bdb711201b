//! Kids Gaming Site - WASM browser frontend
//!
//! Loads the three site documents (branding, theme, games) and imprints
//! them onto the host page: style variables, header branding, game card
//! grid, footer, and a release countdown. Load failures surface as a
//! transient error banner; missing optional fields and absent page
//! regions are silent no-ops.

mod branding;
mod countdown;
mod dom;
mod games;
mod loader;
mod theme;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::loader::{load_all_data, SiteData};

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Kids Gaming Site is loading...".into());

    spawn_local(async {
        match load_all_data().await {
            Ok(data) => {
                render_site(&data);
                web_sys::console::log_1(&"All data loaded successfully!".into());
            }
            Err(err) => {
                // All-or-nothing: no renderer runs after a load failure
                web_sys::console::error_1(&format!("LOAD: {err}").into());
                dom::show_error_message("Failed to load site data. Please refresh the page.");
            }
        }
    });

    Ok(())
}

/// Imprint the loaded documents onto the page, in dependency order.
fn render_site(data: &SiteData) {
    theme::apply_theme(&data.theme);
    branding::populate_branding(&data.branding);
    games::populate_games(&data.games);
    countdown::setup_countdown(&data.games);
}
