use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for captions like "per month").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a big centered section title in the brand color.
    fn label_hero(&mut self, text: impl Into<String>);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a pill-style badge.
    fn badge(&mut self, text: impl Into<String>, color: Color32);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a warning/info message (Amber).
    fn label_warning(&mut self, text: impl Into<String>);

    fn label_success(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn label_hero(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(36.0)
                .strong()
                .color(UI_CONFIG.colors.brand),
        );
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).strong().color(UI_CONFIG.colors.heading));
    }

    fn badge(&mut self, text: impl Into<String>, color: Color32) {
        self.label(
            RichText::new(text)
                .small()
                .strong()
                .color(Color32::WHITE)
                .background_color(color),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.warning));
    }

    fn label_success(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).strong().color(UI_CONFIG.colors.success));
    }
}
