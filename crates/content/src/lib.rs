//! Shared content model for kidsplay-web
//!
//! Serde shapes of the three site documents plus the pure logic that
//! turns them into markup, style assignments and countdown ticks. The
//! UI crate owns every DOM side effect; nothing here touches `web-sys`.

pub mod branding;
pub mod countdown;
pub mod documents;
pub mod error;
pub mod footer;
pub mod games;
pub mod theme;

/// Fixed site name used in the page title and the copyright fallback.
pub const SITE_NAME: &str = "Kids Gaming Site";
