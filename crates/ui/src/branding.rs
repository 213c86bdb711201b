use kidsplay_content::branding::{brand_html, page_title};
use kidsplay_content::documents::{Brand, BrandingDocument};
use kidsplay_content::footer::footer_html;

use crate::dom;

/// Imprint branding onto the page: brand region, favicon, title,
/// tagline, footer. No-op entirely when `brand` is absent.
pub fn populate_branding(branding: &BrandingDocument) {
    let brand = match &branding.brand {
        Some(b) => b,
        None => return,
    };

    // Brand region, one atomic assignment
    if let (Some(region), Some(html)) = (dom::region("brand"), brand_html(brand)) {
        region.set_inner_html(&html);
    }

    if let Some(favicon) = brand.logo.as_ref().and_then(|l| l.favicon.as_deref()) {
        dom::set_favicon(favicon);
    }

    if let Some(name) = &brand.organization_name {
        dom::set_page_title(&page_title(name));
    }

    if let Some(slogan) = &brand.slogan {
        if let Some(tagline) = dom::region("hero-tagline") {
            tagline.set_text_content(Some(slogan));
        }
    }

    populate_footer(brand);

    web_sys::console::log_1(&"BRANDING: populated".into());
}

/// Footer is built as a single string and committed in one assignment.
fn populate_footer(brand: &Brand) {
    let footer = match dom::region("footer-content") {
        Some(f) => f,
        None => return,
    };
    let year = js_sys::Date::new_0().get_full_year();
    footer.set_inner_html(&footer_html(brand, year));
}
