use eframe::egui::{CentralPanel, CollapsingHeader, Context, ScrollArea, TopBottomPanel, Ui};

use crate::config::{DEMO, NAV_ROUTES, SOCIAL_LINKS, SUPPORT_ITEMS};
use crate::domain::BillingInterval;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_charts::{marks_chart, phone_chart};
use crate::ui::ui_panels::{
    NavBarPanel, NavEvent, NewsletterEvent, NewsletterPanel, Panel, PricingCardPanel, PricingEvent,
};
use crate::ui::utils::{section_heading, spaced_separator};
use crate::utils::app_time::current_year;

use super::app::ShowcaseApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl ShowcaseApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            let events = NavBarPanel::new(self.theme.current(), self.menu_open, &mut self.search_query)
                .render(ui);
            ui.add_space(6.0);

            for event in events {
                match event {
                    NavEvent::ToggleTheme => self.toggle_theme(),
                    NavEvent::SetTheme(theme) => self.choose_theme(theme),
                    NavEvent::ToggleMenu => self.menu_open = !self.menu_open,
                    NavEvent::Search(query) => {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Search: {}", query);
                        }
                        #[cfg(not(debug_assertions))]
                        let _ = query;
                    }
                    NavEvent::Navigate(path) => {
                        log::debug!("Navigate to {}", path);
                        self.menu_open = false;
                    }
                }
            }
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().id_salt("page").show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(UI_CONFIG.layout.content_width);

                    // The boundary is moved out so sections can borrow `self`
                    let mut boundary = std::mem::take(&mut self.boundary);
                    boundary.show(ui, "pricing", |ui| self.render_pricing(ui));
                    boundary.show(ui, "marks", |ui| self.render_marks(ui));
                    boundary.show(ui, "phones", |ui| self.render_phones(ui));
                    boundary.show(ui, "footer", |ui| self.render_footer(ui));
                    self.boundary = boundary;
                });
            });
        });
    }

    fn render_pricing(&mut self, ui: &mut Ui) {
        ui.add_space(UI_CONFIG.layout.section_spacing);
        ui.label_hero(UI_TEXT.pricing_heading);
        ui.label_subdued(UI_TEXT.pricing_blurb);
        ui.add_space(12.0);

        let mut yearly = self.billing == BillingInterval::Yearly;
        if ui.checkbox(&mut yearly, UI_TEXT.pricing_yearly_toggle).changed() {
            self.billing = self.billing.toggled();
        }
        ui.add_space(12.0);

        let mut events = Vec::new();
        ui.horizontal_wrapped(|ui| {
            for flow in &self.purchases {
                events.extend(PricingCardPanel::new(flow, self.billing).render(ui));
            }
        });

        for event in events {
            match event {
                PricingEvent::Buy { plan_id } => self.buy_plan(plan_id),
            }
        }
    }

    fn render_marks(&mut self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.marks_heading);
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.marks_live, UI_TEXT.marks_live_toggle);
            if ui.button(UI_TEXT.marks_export).clicked() {
                self.export_marks();
            }
            if ui.button(UI_TEXT.marks_reset).clicked() {
                self.marks.reset();
            }
            match &self.last_export {
                Some(Ok(path)) => ui.label_subdued(format!("Saved to {}", path)),
                Some(Err(e)) => ui.label_error(e.to_string()),
                None => {}
            }
        });
        marks_chart(ui, self.marks.rows());
    }

    fn render_phones(&mut self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.phones_heading);
        match &self.phones {
            Some(load) => {
                if let Some(notice) = &load.notice {
                    ui.label_warning(notice.as_str());
                }
                phone_chart(ui, &load.rows);
            }
            None => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label_subdued(UI_TEXT.phones_loading);
                });
            }
        }
    }

    fn render_footer(&mut self, ui: &mut Ui) {
        spaced_separator(ui);
        ui.columns(3, |columns| {
            columns[0].label_header(DEMO.company_name);
            columns[0].label(UI_TEXT.footer_blurb);
            columns[0].horizontal(|ui| {
                for link in SOCIAL_LINKS {
                    ui.hyperlink_to(link.name, link.url);
                }
            });

            columns[1].strong(UI_TEXT.footer_products);
            // Product and Order, as in the nav bar
            for route in NAV_ROUTES.iter().skip(1).take(2) {
                columns[1].label(route.link.name);
            }

            columns[2].strong(UI_TEXT.footer_support);
            for item in SUPPORT_ITEMS {
                CollapsingHeader::new(item.question)
                    .default_open(false)
                    .show(&mut columns[2], |ui| ui.label(item.answer));
            }
        });

        spaced_separator(ui);
        let events = NewsletterPanel::new(&mut self.newsletter).render(ui);
        for event in events {
            match event {
                NewsletterEvent::Submit => self.submit_newsletter(),
            }
        }

        ui.add_space(12.0);
        ui.label_subdued(format!(
            "© {} {}. {}",
            current_year(),
            DEMO.company_name,
            UI_TEXT.footer_rights
        ));
        ui.add_space(UI_CONFIG.layout.section_spacing);
    }
}
