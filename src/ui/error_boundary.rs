use std::any::Any;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

use eframe::egui::{Frame, Ui};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

/// Isolates page sections: a panic while drawing one is caught, logged, and
/// the section is replaced by a fallback card until the user retries.
///
/// Only effective where panics unwind (native builds).
#[derive(Default)]
pub struct ErrorBoundary {
    failures: HashMap<&'static str, String>,
}

impl ErrorBoundary {
    pub fn show(&mut self, ui: &mut Ui, section: &'static str, add_contents: impl FnOnce(&mut Ui)) {
        if let Some(message) = self.failures.get(section) {
            if fallback_card(ui, message) {
                log::info!("Retrying section '{}'", section);
                self.failures.remove(section);
                ui.ctx().request_repaint();
            }
            return;
        }

        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| add_contents(ui))) {
            let message = panic_message(payload.as_ref());
            log::error!("ErrorBoundary caught an error in '{}': {}", section, message);
            self.failures.insert(section, message);
            ui.ctx().request_repaint();
        }
    }

    pub fn has_failed(&self, section: &str) -> bool {
        self.failures.contains_key(section)
    }
}

/// Returns `true` when *Retry* was clicked.
fn fallback_card(ui: &mut Ui, message: &str) -> bool {
    let mut retry = false;
    Frame::group(ui.style())
        .stroke((1.0, UI_CONFIG.colors.error))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label_error(UI_TEXT.boundary_heading);
                ui.label(UI_TEXT.boundary_body);
                ui.label_subdued(message);
                retry = ui.button(UI_TEXT.boundary_retry).clicked();
            });
        });
    retry
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{CentralPanel, Context};

    fn run(ctx: &Context, mut body: impl FnMut(&mut Ui)) {
        let _ = ctx.run(Default::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| body(ui));
        });
    }

    #[test]
    fn payload_text_is_extracted() {
        let err = catch_unwind(|| panic!("static boom")).unwrap_err();
        assert_eq!(panic_message(err.as_ref()), "static boom");
        let err = catch_unwind(|| panic!("boom {}", 7)).unwrap_err();
        assert_eq!(panic_message(err.as_ref()), "boom 7");
    }

    #[test]
    fn panicking_section_is_contained() {
        let ctx = Context::default();
        let mut boundary = ErrorBoundary::default();
        let mut after = false;

        run(&ctx, |ui| {
            boundary.show(ui, "charts", |_| panic!("chart exploded"));
            after = true;
        });

        assert!(after);
        assert!(boundary.has_failed("charts"));
        assert_eq!(boundary.failures["charts"], "chart exploded");
        assert!(!boundary.has_failed("pricing"));
    }

    #[test]
    fn failed_section_is_not_redrawn_until_retry() {
        let ctx = Context::default();
        let mut boundary = ErrorBoundary::default();
        boundary.failures.insert("pricing", "earlier".into());

        let mut drawn = false;
        run(&ctx, |ui| boundary.show(ui, "pricing", |_| drawn = true));
        assert!(!drawn);
        assert!(boundary.has_failed("pricing"));
    }
}
