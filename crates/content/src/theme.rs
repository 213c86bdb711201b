//! Theme document -> CSS custom property assignments.

use crate::documents::ThemeDocument;

/// Style variable assignments for a theme document.
///
/// Empty when the document has no `colors` block (the applier is a
/// no-op in that case, font included). Each variable is emitted only
/// when its field is present, so absent fields leave prior values
/// untouched.
pub fn css_variables(theme: &ThemeDocument) -> Vec<(&'static str, &str)> {
    let colors = match &theme.colors {
        Some(c) => c,
        None => return Vec::new(),
    };

    let mut vars = Vec::new();
    if let Some(v) = &colors.primary {
        vars.push(("--primary", v.as_str()));
    }
    if let Some(v) = &colors.accent {
        vars.push(("--accent", v.as_str()));
    }
    if let Some(v) = &colors.background {
        vars.push(("--bg", v.as_str()));
    }
    if let Some(v) = &colors.text {
        vars.push(("--text", v.as_str()));
    }
    vars
}
