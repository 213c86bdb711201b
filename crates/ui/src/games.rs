use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent};

use kidsplay_content::documents::GamesDocument;
use kidsplay_content::games::{games_grid_html, LAUNCH_PLACEHOLDER};

use crate::dom::{self, show_notice};

/// Render the hero text and the game card grid. No-op when the games
/// sequence or the grid region is absent.
pub fn populate_games(games_doc: &GamesDocument) {
    let games = match &games_doc.games {
        Some(g) => g,
        None => return,
    };
    let grid = match dom::region("games-grid") {
        Some(g) => g,
        None => return,
    };

    if let Some(title) = &games_doc.title {
        if let Some(el) = dom::region("hero-title") {
            el.set_text_content(Some(title));
        }
    }
    if let Some(tagline) = &games_doc.tagline {
        if let Some(el) = dom::region("hero-tagline") {
            el.set_text_content(Some(tagline));
        }
    }

    // All cards in one atomic assignment, then wire up activation
    grid.set_inner_html(&games_grid_html(games));
    attach_card_handlers(&grid);

    web_sys::console::log_1(&format!("GAMES: {} cards rendered", games.len()).into());
}

fn attach_card_handlers(grid: &Element) {
    let cards = match grid.query_selector_all(".game-card") {
        Ok(c) => c,
        Err(_) => return,
    };
    for i in 0..cards.length() {
        let card: Element = match cards.get(i).and_then(|n| n.dyn_into().ok()) {
            Some(el) => el,
            None => continue,
        };
        let url = card
            .get_attribute("data-url")
            .unwrap_or_else(|| LAUNCH_PLACEHOLDER.to_string());

        let click_url = url.clone();
        let on_click = Closure::wrap(Box::new(move || {
            play_game(&click_url);
        }) as Box<dyn FnMut()>);
        let _ = card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        // Keyboard activation (Enter / Space)
        let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let key = e.key();
            if key == "Enter" || key == " " {
                e.prevent_default();
                play_game(&url);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = card.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
        on_key.forget();
    }
}

/// Launch a game in an isolated browsing context: no opener back-
/// reference, no referrer. The sentinel URL shows a notice instead.
fn play_game(url: &str) {
    if url.is_empty() || url == LAUNCH_PLACEHOLDER {
        show_notice("Game coming soon! Stay tuned for more exciting games.");
        return;
    }
    if let Some(win) = window() {
        let _ = win.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}
