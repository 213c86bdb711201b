//! Footer markup: contact block, social links, copyright line.
//!
//! The footer is built as one string and committed to the page in a
//! single assignment so no partial state is ever visible.

use crate::documents::Brand;
use crate::SITE_NAME;

/// Display label for a social platform key; unknown keys label as-is.
pub fn platform_label(platform: &str) -> &str {
    match platform {
        "linkedin" => "LinkedIn",
        "instagram" => "Instagram",
        "github" => "GitHub",
        "x" => "X",
        "youtube" => "YouTube",
        "blog" => "Blog",
        other => other,
    }
}

/// Full footer markup for a brand at the given calendar year.
pub fn footer_html(brand: &Brand, year: u32) -> String {
    let mut html = String::new();

    if brand.email.is_some() || brand.mobile.is_some() {
        html.push_str("<div class=\"contact-info\">");
        if let Some(email) = &brand.email {
            html.push_str(&format!(
                "<p>Email: <a href=\"mailto:{email}\">{email}</a></p>"
            ));
        }
        if let Some(mobile) = &brand.mobile {
            html.push_str(&format!(
                "<p>Phone: <a href=\"tel:{mobile}\">{mobile}</a></p>"
            ));
        }
        html.push_str("</div>");
    }

    if let Some(social) = &brand.social_media {
        html.push_str("<div class=\"social-links\">");
        for (platform, url) in social {
            // Entries with an empty or non-string URL render no link
            let url = match url.as_str() {
                Some(u) if !u.is_empty() => u,
                _ => continue,
            };
            html.push_str(&format!(
                "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"social-link\" aria-label=\"{platform}\">{label}</a>",
                label = platform_label(platform)
            ));
        }
        html.push_str("</div>");
    }

    let name = brand.organization_name.as_deref().unwrap_or(SITE_NAME);
    html.push_str(&format!(
        "<p>&copy; {year} {name}. All rights reserved.</p>"
    ));
    html
}
