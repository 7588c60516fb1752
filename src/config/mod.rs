//! Configuration module for the showcase site.

pub mod catalog;
pub mod confetti;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod demo;
pub mod fetch;
pub mod persistence;

// Re-export commonly used items
pub use catalog::{
    MARKS_BASE, NAV_ROUTES, NavLink, NavRoute, PHONE_FALLBACK, PRICING_PLANS, SOCIAL_LINKS,
    SUPPORT_ITEMS, SocialLink, SupportItem,
};
pub use confetti::CONFETTI;
pub use demo::DEMO;
pub use fetch::{PHONE_API, RetryPolicy};
pub use persistence::{APP_STATE_PATH, CSV_BOM, EXPORT_DIR};
