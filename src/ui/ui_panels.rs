use eframe::egui::{
    Align, Button, Frame, Key, Layout, ProgressBar, RichText, Spinner, TextEdit, Ui,
};

use crate::config::{DEMO, NAV_ROUTES, NavRoute};
use crate::domain::pricing::{FeatureIcon, feature_icon, feature_progress};
use crate::domain::{
    BillingInterval, NewsletterForm, PurchaseFlow, PurchaseStatus, SubscribeStatus, Theme,
};
use strum::IntoEnumIterator;

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    ToggleTheme,
    SetTheme(Theme),
    ToggleMenu,
    Search(String),
    Navigate(&'static str),
}

/// Below this width the route list collapses behind the menu button.
const NARROW_WIDTH: f32 = 760.0;

pub struct NavBarPanel<'a> {
    theme: Theme,
    menu_open: bool,
    search_query: &'a mut String,
}

impl<'a> NavBarPanel<'a> {
    pub fn new(theme: Theme, menu_open: bool, search_query: &'a mut String) -> Self {
        Self {
            theme,
            menu_open,
            search_query,
        }
    }

    fn render_route(ui: &mut Ui, route: &NavRoute, events: &mut Vec<NavEvent>) {
        if route.has_mega_menu() {
            ui.menu_button(route.link.name, |ui| {
                for item in route.sub_items {
                    if ui.button(item.name).clicked() {
                        events.push(NavEvent::Navigate(item.path));
                        ui.close();
                    }
                }
            });
        } else if ui.link(route.link.name).clicked() {
            events.push(NavEvent::Navigate(route.link.path));
        }
    }
}

impl Panel for NavBarPanel<'_> {
    type Event = NavEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<NavEvent> {
        let mut events = Vec::new();
        let narrow = ui.available_width() < NARROW_WIDTH;

        ui.horizontal(|ui| {
            if narrow {
                let icon = if self.menu_open {
                    UI_TEXT.nav_menu_close
                } else {
                    UI_TEXT.nav_menu_open
                };
                if ui.button(icon).clicked() {
                    events.push(NavEvent::ToggleMenu);
                }
            }

            ui.label(
                RichText::new(DEMO.company_name)
                    .size(20.0)
                    .strong()
                    .color(UI_CONFIG.colors.brand),
            );

            if !narrow {
                ui.add_space(16.0);
                for route in NAV_ROUTES {
                    Self::render_route(ui, route, &mut events);
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let icon = if self.theme.is_dark() { "🌙" } else { "☀" };
                if ui
                    .button(icon)
                    .on_hover_text(format!("{}{}", UI_TEXT.nav_theme_tooltip_prefix, self.theme))
                    .clicked()
                {
                    events.push(NavEvent::ToggleTheme);
                }

                ui.menu_button(UI_TEXT.nav_theme_picker, |ui| {
                    for theme in Theme::iter() {
                        if ui.selectable_label(theme == self.theme, theme.to_string()).clicked() {
                            events.push(NavEvent::SetTheme(theme));
                            ui.close();
                        }
                    }
                });

                if !narrow {
                    let response = ui.add(
                        TextEdit::singleline(self.search_query)
                            .hint_text(UI_TEXT.nav_search_hint)
                            .desired_width(180.0),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        events.push(NavEvent::Search(self.search_query.trim().to_string()));
                    }
                }
            });
        });

        if narrow && self.menu_open {
            ui.vertical(|ui| {
                for route in NAV_ROUTES {
                    Self::render_route(ui, route, &mut events);
                }
            });
        }

        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingEvent {
    Buy { plan_id: u32 },
}

/// One plan card: badges, price, features and the buy button.
pub struct PricingCardPanel<'a> {
    flow: &'a PurchaseFlow,
    interval: BillingInterval,
}

impl<'a> PricingCardPanel<'a> {
    pub fn new(flow: &'a PurchaseFlow, interval: BillingInterval) -> Self {
        Self { flow, interval }
    }
}

impl Panel for PricingCardPanel<'_> {
    type Event = PricingEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<PricingEvent> {
        let mut events = Vec::new();
        let plan = self.flow.plan();

        let ring = if plan.popular {
            UI_CONFIG.colors.popular_ring
        } else if plan.recommended {
            UI_CONFIG.colors.recommended_ring
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke.color
        };

        Frame::group(ui.style())
            .stroke((2.0, ring))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(UI_CONFIG.layout.card_width);
                ui.vertical_centered(|ui| {
                    if plan.popular {
                        ui.badge(UI_TEXT.pricing_popular_badge, UI_CONFIG.colors.popular_ring);
                    }
                    if plan.recommended {
                        ui.badge(
                            UI_TEXT.pricing_recommended_badge,
                            UI_CONFIG.colors.recommended_ring,
                        );
                    }
                    if !plan.is_free() {
                        ui.badge(plan.discount, UI_CONFIG.colors.success);
                    }

                    ui.label_header(plan.name);
                    ui.label(
                        RichText::new(plan.display_price(self.interval))
                            .size(32.0)
                            .strong(),
                    );
                    ui.label_subdued(self.interval.period_label());
                    if plan.is_free() {
                        ui.label_subdued(plan.discount);
                    }
                });

                ui.add_space(8.0);
                for (idx, feature) in plan.features.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let icon = match feature_icon(idx) {
                            FeatureIcon::Check => "✔",
                            FeatureIcon::Star => "★",
                            FeatureIcon::Bolt => "⚡",
                        };
                        ui.label(RichText::new(icon).color(UI_CONFIG.colors.brand));
                        ui.label(*feature);
                    });
                    let progress = feature_progress(idx);
                    if progress < 100 {
                        ui.add(ProgressBar::new(progress as f32 / 100.0).desired_height(4.0));
                    }
                }

                ui.add_space(12.0);
                ui.vertical_centered(|ui| match self.flow.status() {
                    PurchaseStatus::Idle => {
                        if ui
                            .add(Button::new(UI_TEXT.pricing_buy).min_size([160.0, 32.0].into()))
                            .clicked()
                        {
                            events.push(PricingEvent::Buy { plan_id: plan.id });
                        }
                    }
                    PurchaseStatus::Processing { .. } => {
                        ui.horizontal(|ui| {
                            ui.add(Spinner::new());
                            ui.label(UI_TEXT.pricing_processing);
                        });
                    }
                    PurchaseStatus::Succeeded { .. } => {
                        ui.label_success(UI_TEXT.pricing_success);
                    }
                });
            });

        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterEvent {
    Submit,
}

pub struct NewsletterPanel<'a> {
    form: &'a mut NewsletterForm,
}

impl<'a> NewsletterPanel<'a> {
    pub fn new(form: &'a mut NewsletterForm) -> Self {
        Self { form }
    }
}

impl Panel for NewsletterPanel<'_> {
    type Event = NewsletterEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<NewsletterEvent> {
        let mut events = Vec::new();
        let status = self.form.status();

        ui.horizontal(|ui| {
            ui.label(RichText::new(UI_TEXT.footer_newsletter).strong());
            let editable = matches!(status, SubscribeStatus::Idle);
            let response = ui.add_enabled(
                editable,
                TextEdit::singleline(&mut self.form.email).hint_text(UI_TEXT.footer_email_hint),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            match status {
                SubscribeStatus::Idle => {
                    if ui.button(UI_TEXT.footer_subscribe).clicked() || entered {
                        events.push(NewsletterEvent::Submit);
                    }
                }
                SubscribeStatus::Pending { .. } => {
                    ui.add(Spinner::new());
                    ui.label(UI_TEXT.footer_subscribing);
                }
                SubscribeStatus::Subscribed => {
                    ui.label_success(UI_TEXT.footer_subscribed);
                }
            }
        });

        if let Some(err) = self.form.error() {
            ui.label_error(err.to_string());
        }

        events
    }
}
