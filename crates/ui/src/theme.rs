use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use kidsplay_content::documents::ThemeDocument;
use kidsplay_content::theme::css_variables;

use crate::dom::get_document;

/// Apply theme colors and font to the page.
///
/// Returns immediately when the document has no `colors` block; each
/// variable and the font are applied independently, only if present.
pub fn apply_theme(theme: &ThemeDocument) {
    if theme.colors.is_none() {
        return;
    }
    let doc = match get_document() {
        Some(d) => d,
        None => return,
    };

    let vars = css_variables(theme);
    if let Some(root) = doc.document_element() {
        if let Ok(root) = root.dyn_into::<HtmlElement>() {
            for (name, value) in &vars {
                let _ = root.style().set_property(name, value);
            }
        }
    }

    if let Some(font) = &theme.font {
        if let Some(body) = doc.body() {
            let _ = body.style().set_property("font-family", font);
        }
    }

    web_sys::console::log_1(&format!("THEME: applied {} variables", vars.len()).into());
}
