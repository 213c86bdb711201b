use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

use kidsplay_content::countdown::{counting_html, tick, Tick, DEFAULT_TITLE, EXPIRED_HTML};
use kidsplay_content::documents::GamesDocument;

use crate::dom::get_document;

const COUNTDOWN_CSS: &str = "
.countdown-section {
    background: linear-gradient(135deg, var(--accent), var(--primary));
    color: white;
    padding: 2rem 0;
    text-align: center;
    margin-bottom: 2rem;
}
.countdown-timer {
    display: flex;
    justify-content: center;
    gap: 2rem;
    margin-top: 1rem;
}
.time-unit {
    display: flex;
    flex-direction: column;
    align-items: center;
}
.time-number {
    font-size: 2rem;
    font-weight: bold;
    display: block;
}
.time-label {
    font-size: 0.8rem;
    opacity: 0.8;
}
@media (max-width: 767px) {
    .countdown-timer { gap: 1rem; }
    .time-number { font-size: 1.5rem; }
}
";

/// Start the countdown, if configured.
///
/// The engine only enters when the target parses to a valid timestamp
/// and the games section exists; otherwise nothing starts and no timer
/// is created. Expiry is terminal: the interval is cancelled on the
/// tick that observes it.
pub fn setup_countdown(games: &GamesDocument) {
    let countdown = match &games.countdown {
        Some(c) => c,
        None => return,
    };
    let target = match &countdown.target {
        Some(t) => t,
        None => return,
    };

    let target_ms = js_sys::Date::new(&JsValue::from_str(target)).get_time();
    if target_ms.is_nan() {
        return;
    }

    let display = match create_countdown_element() {
        Some(el) => el,
        None => return,
    };
    let title = countdown
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // First tick runs immediately; a past target expires without ever
    // starting the interval
    if matches!(render_tick(&display, &title, target_ms), Tick::Expired) {
        return;
    }

    let win = match window() {
        Some(w) => w,
        None => return,
    };
    let interval_id = Rc::new(RefCell::new(None::<i32>));
    let interval_for_cb = interval_id.clone();
    let callback = Closure::wrap(Box::new(move || {
        if matches!(render_tick(&display, &title, target_ms), Tick::Expired) {
            // Terminal state: cancel the repeating timer
            if let Some(id) = interval_for_cb.borrow_mut().take() {
                if let Some(win) = window() {
                    win.clear_interval_with_handle(id);
                }
            }
        }
    }) as Box<dyn FnMut()>);

    if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        1000,
    ) {
        *interval_id.borrow_mut() = Some(id);
    }
    callback.forget();

    web_sys::console::log_1(&"COUNTDOWN: started".into());
}

fn render_tick(display: &Element, title: &str, target_ms: f64) -> Tick {
    #[allow(clippy::cast_possible_truncation)]
    let step = tick(target_ms as i64, js_sys::Date::now() as i64);
    match step {
        Tick::Expired => display.set_inner_html(EXPIRED_HTML),
        Tick::Counting(parts) => display.set_inner_html(&counting_html(title, parts)),
    }
    step
}

/// Create the display region, prepended into the games section, and
/// inject its styling once.
fn create_countdown_element() -> Option<Element> {
    let doc = get_document()?;
    let section = doc.get_element_by_id("games")?;

    let wrapper = doc.create_element("div").ok()?;
    wrapper.set_class_name("countdown-section");
    wrapper.set_inner_html("<div class=\"container\"><div id=\"countdown-timer\"></div></div>");
    section
        .insert_before(&wrapper, section.first_child().as_ref())
        .ok()?;

    inject_styles_once(&doc);

    doc.get_element_by_id("countdown-timer")
}

fn inject_styles_once(doc: &Document) {
    if doc.get_element_by_id("countdown-styles").is_some() {
        return;
    }
    if let Ok(style) = doc.create_element("style") {
        style.set_id("countdown-styles");
        style.set_text_content(Some(COUNTDOWN_CSS));
        if let Some(head) = doc.head() {
            let _ = head.append_child(&style);
        }
    }
}
