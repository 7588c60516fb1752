//! User-facing strings, kept in one place.

pub struct UiText {
    // Nav bar
    pub nav_search_hint: &'static str,
    pub nav_menu_open: &'static str,
    pub nav_menu_close: &'static str,
    pub nav_theme_tooltip_prefix: &'static str,
    pub nav_theme_picker: &'static str,

    // Pricing
    pub pricing_heading: &'static str,
    pub pricing_blurb: &'static str,
    pub pricing_yearly_toggle: &'static str,
    pub pricing_buy: &'static str,
    pub pricing_processing: &'static str,
    pub pricing_success: &'static str,
    pub pricing_popular_badge: &'static str,
    pub pricing_recommended_badge: &'static str,

    // Charts
    pub marks_heading: &'static str,
    pub marks_live_toggle: &'static str,
    pub marks_export: &'static str,
    pub marks_reset: &'static str,
    pub marks_series_marks: &'static str,
    pub marks_series_quiz: &'static str,
    pub marks_csv_filename: &'static str,
    pub phones_heading: &'static str,
    pub phones_loading: &'static str,
    pub phones_series_price: &'static str,
    pub phones_series_rating: &'static str,

    // Footer
    pub footer_blurb: &'static str,
    pub footer_products: &'static str,
    pub footer_support: &'static str,
    pub footer_newsletter: &'static str,
    pub footer_email_hint: &'static str,
    pub footer_subscribe: &'static str,
    pub footer_subscribing: &'static str,
    pub footer_subscribed: &'static str,
    pub footer_rights: &'static str,

    // Error boundary
    pub boundary_heading: &'static str,
    pub boundary_body: &'static str,
    pub boundary_retry: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    nav_search_hint: "Search...",
    nav_menu_open: "☰",
    nav_menu_close: "✕",
    nav_theme_tooltip_prefix: "Current theme: ",
    nav_theme_picker: "Theme",

    pricing_heading: "Select Your Best Plan",
    pricing_blurb: "Choose from our tiered plans designed for every need. All plans include responsive design and theme support.",
    pricing_yearly_toggle: "Bill yearly",
    pricing_buy: "Buy Now",
    pricing_processing: "Processing...",
    pricing_success: "Purchased! 🎉",
    pricing_popular_badge: "⭐ Most Popular",
    pricing_recommended_badge: "🤖 Recommended",

    marks_heading: "Assignment Marks",
    marks_live_toggle: "Live updates",
    marks_export: "Export CSV",
    marks_reset: "Reset",
    marks_series_marks: "Marks",
    marks_series_quiz: "Quiz Score",
    marks_csv_filename: "assignment-marks.csv",
    phones_heading: "Phone Prices",
    phones_loading: "Loading phone data...",
    phones_series_price: "Price ($)",
    phones_series_rating: "Rating",

    footer_blurb: "Building world-class UIs with React, Tailwind, and DaisyUI. Impress your clients with gorgeous, responsive designs.",
    footer_products: "Products",
    footer_support: "Support",
    footer_newsletter: "Stay Updated",
    footer_email_hint: "Enter your email",
    footer_subscribe: "Subscribe",
    footer_subscribing: "Subscribing...",
    footer_subscribed: "Subscribed! 🎉",
    footer_rights: "All rights reserved.",

    boundary_heading: "Oops! Something Went Wrong",
    boundary_body: "We've encountered an unexpected error.",
    boundary_retry: "Retry",
};
