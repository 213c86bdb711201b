use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

const ERROR_BANNER_STYLE: &str = "background-color:#ff4757;color:white;padding:1rem;margin:1rem;border-radius:8px;text-align:center;position:fixed;top:20px;left:50%;transform:translateX(-50%);z-index:1000;box-shadow:0 4px 15px rgba(0,0,0,0.2)";

const NOTICE_STYLE: &str = "background-color:#2f3542;color:white;padding:0.75rem 1.5rem;border-radius:8px;text-align:center;position:fixed;bottom:20px;left:50%;transform:translateX(-50%);z-index:1000;box-shadow:0 4px 15px rgba(0,0,0,0.2)";

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Look up a named region. Absent regions are skipped by every caller.
pub fn region(id: &str) -> Option<Element> {
    get_document().and_then(|d| d.get_element_by_id(id))
}

/// Set the page title
pub fn set_page_title(title: &str) {
    if let Some(doc) = get_document() {
        doc.set_title(title);
    }
}

/// Install or replace the favicon link
pub fn set_favicon(href: &str) {
    if let Some(doc) = get_document() {
        let link = doc
            .query_selector("link[rel*='icon']")
            .ok()
            .flatten()
            .or_else(|| doc.create_element("link").ok());
        if let Some(link) = link {
            let _ = link.set_attribute("type", "image/x-icon");
            let _ = link.set_attribute("rel", "shortcut icon");
            let _ = link.set_attribute("href", href);
            if let Some(head) = doc.head() {
                let _ = head.append_child(&link);
            }
        }
    }
}

/// Show a user-facing error banner (auto-removes after 5 seconds)
pub fn show_error_message(message: &str) {
    show_transient(message, "error-message", ERROR_BANNER_STYLE, 5000);
}

/// Show a toast notice (auto-removes after 3 seconds)
pub fn show_notice(message: &str) {
    show_transient(message, "site-notice", NOTICE_STYLE, 3000);
}

fn show_transient(message: &str, class: &str, style: &str, timeout_ms: i32) {
    let doc = match get_document() {
        Some(d) => d,
        None => return,
    };
    if let Ok(el) = doc.create_element("div") {
        el.set_class_name(class);
        let _ = el.set_attribute("style", style);
        el.set_text_content(Some(message));
        if let Some(body) = doc.body() {
            let _ = body.append_child(&el);
        }

        // Removal is unconditional; the node may already be detached
        let callback = Closure::once(Box::new(move || {
            if el.is_connected() {
                el.remove();
            }
        }) as Box<dyn FnOnce()>);

        if let Some(win) = window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout_ms,
            );
        }
        callback.forget();
    }
}
