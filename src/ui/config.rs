use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub brand: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub popular_ring: Color32,
    pub recommended_ring: Color32,
    pub light_panel: Color32,
    pub dark_panel: Color32,
    pub marks_line: Color32,
    pub quiz_line: Color32,
    pub price_bar: Color32,
    pub rating_bar: Color32,
}

#[derive(Clone, Copy)]
pub struct UiLayout {
    pub content_width: f32,
    pub card_width: f32,
    pub chart_height: f32,
    pub section_spacing: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub layout: UiLayout,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        brand: Color32::from_rgb(0x66, 0x7e, 0xea),
        heading: Color32::from_rgb(0x76, 0x4b, 0xa2),
        subdued: Color32::GRAY,
        success: Color32::from_rgb(0x10, 0xb9, 0x81),
        warning: Color32::from_rgb(0xf5, 0x9e, 0x0b),
        error: Color32::from_rgb(255, 100, 100),
        popular_ring: Color32::from_rgb(0x66, 0x7e, 0xea),
        recommended_ring: Color32::from_rgb(0xf5, 0x9e, 0x0b),
        light_panel: Color32::from_rgb(242, 242, 247),
        dark_panel: Color32::from_rgb(29, 35, 42),
        marks_line: Color32::from_rgb(0x82, 0xca, 0x9d),
        quiz_line: Color32::from_rgb(0x88, 0x84, 0xd8),
        price_bar: Color32::from_rgb(0x88, 0x84, 0xd8),
        rating_bar: Color32::from_rgb(0x82, 0xca, 0x9d),
    },
    layout: UiLayout {
        content_width: 1100.0,
        card_width: 300.0,
        chart_height: 280.0,
        section_spacing: 32.0,
    },
};
