//! Brand region markup and page title.

use crate::documents::Brand;
use crate::SITE_NAME;

/// Markup for the header brand region (logo image + name label).
///
/// `None` when the brand has no logo; the region is left untouched.
pub fn brand_html(brand: &Brand) -> Option<String> {
    let logo = brand.logo.as_ref()?;
    let src = logo.title.as_deref().unwrap_or_default();
    let name = brand.organization_name.as_deref().unwrap_or_default();
    Some(format!(
        "<img src=\"{src}\" alt=\"{name}\" class=\"brand-logo\"><span class=\"brand-name\">{name}</span>"
    ))
}

/// Page title for a known organization name.
pub fn page_title(organization_name: &str) -> String {
    format!("{organization_name} - {SITE_NAME}")
}
