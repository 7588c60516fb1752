use eframe::egui::{self, Context, Ui, Visuals};

use crate::domain::Theme;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context, theme: Theme) {
    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.panel_fill = if theme.is_dark() {
        UI_CONFIG.colors.dark_panel
    } else {
        UI_CONFIG.colors.light_panel
    };
    visuals.selection.bg_fill = UI_CONFIG.colors.brand;
    visuals.hyperlink_color = UI_CONFIG.colors.brand;

    ctx.set_visuals(visuals);
}

/// Maps egui's reported OS theme onto ours.
pub fn theme_from_egui(theme: egui::Theme) -> Theme {
    match theme {
        egui::Theme::Dark => Theme::Dark,
        egui::Theme::Light => Theme::Light,
    }
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(UI_CONFIG.layout.section_spacing);
    ui.label_header(text);
    ui.add_space(8.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}
