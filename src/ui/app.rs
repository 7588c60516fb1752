use std::time::Duration;

use eframe::{Frame, egui};
use poll_promise::Promise;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::Cli;
use crate::config::PRICING_PLANS;
use crate::confetti::ConfettiCannon;
use crate::data::PhoneLoad;
use crate::domain::{
    BillingInterval, MarksBoard, NewsletterForm, PurchaseEvent, PurchaseFlow, SubscribeStatus,
    Theme, ThemeState,
};
use crate::error::AppError;
use crate::ui::error_boundary::ErrorBoundary;
use crate::ui::utils::{setup_custom_visuals, theme_from_egui};
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// How often to wake up while a simulated request is in flight.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

#[derive(Deserialize, Serialize)]
pub struct ShowcaseApp {
    // UI state
    #[serde(default)]
    pub(super) theme: ThemeState,
    #[serde(default)]
    pub(super) billing: BillingInterval,
    #[serde(default = "default_marks_live")]
    pub(super) marks_live: bool,

    // Runtime-only state, skipped during serialization
    #[serde(skip)]
    pub(super) cli: Cli,
    #[serde(skip)]
    pub(super) cannon: ConfettiCannon,
    #[serde(skip, default = "default_rng")]
    pub(super) rng: StdRng,
    #[serde(skip)]
    pub(super) purchases: Vec<PurchaseFlow>,
    #[serde(skip)]
    pub(super) newsletter: NewsletterForm,
    #[serde(skip)]
    pub(super) marks: MarksBoard,
    #[serde(skip)]
    pub(super) last_export: Option<Result<String, AppError>>,
    #[serde(skip)]
    pub(super) phones: Option<PhoneLoad>,
    #[serde(skip)]
    pub(super) phone_promise: Option<Promise<PhoneLoad>>,
    #[serde(skip)]
    pub(super) search_query: String,
    #[serde(skip)]
    pub(super) menu_open: bool,
    #[serde(skip)]
    pub(super) boundary: ErrorBoundary,
    #[serde(skip)]
    pub(super) fire_on_start: bool,
}

fn default_marks_live() -> bool {
    true
}

fn default_rng() -> StdRng {
    StdRng::from_os_rng()
}

impl ShowcaseApp {
    pub fn new(cc: &eframe::CreationContext<'_>, cli: Cli) -> Self {
        let persisted: Option<ShowcaseApp> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            if persisted.is_some() {
                log::info!("Successfully loaded persisted state");
            } else {
                log::info!("No persisted Showcase state found. Creating anew.");
            }
        }

        let system_theme = cc.egui_ctx.system_theme().map(theme_from_egui);
        let mut app = persisted.unwrap_or_else(|| Self::new_with_initial_state(Cli::default()));
        app.theme = ThemeState::resolve(Some(app.theme), system_theme);
        app.attach_runtime(cli);
        app.start_phone_fetch();
        app
    }

    pub fn new_with_initial_state(cli: Cli) -> Self {
        let mut app = Self {
            theme: ThemeState::default(),
            billing: BillingInterval::default(),
            marks_live: default_marks_live(),
            cli: Cli::default(),
            cannon: ConfettiCannon::default(),
            rng: default_rng(),
            purchases: Vec::new(),
            newsletter: NewsletterForm::default(),
            marks: MarksBoard::default(),
            last_export: None,
            phones: None,
            phone_promise: None,
            search_query: String::new(),
            menu_open: false,
            boundary: ErrorBoundary::default(),
            fire_on_start: false,
        };
        app.attach_runtime(cli);
        app
    }

    /// Rebuilds everything serde skipped from the command line.
    fn attach_runtime(&mut self, cli: Cli) {
        self.cannon = ConfettiCannon::new(cli.seed);
        self.rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => default_rng(),
        };
        self.purchases = PRICING_PLANS.iter().copied().map(PurchaseFlow::new).collect();
        self.fire_on_start = cli.confetti_on_start;
        self.cli = cli;
    }

    /// Follows OS theme switches until the user picks a theme.
    fn sync_system_theme(&mut self, ctx: &egui::Context) {
        if let Some(system) = ctx.system_theme().map(theme_from_egui) {
            if self.theme.on_system_change(system) {
                log::info!("Theme follows system: {}", system);
            }
        }
    }

    pub(super) fn toggle_theme(&mut self) {
        let theme = self.theme.toggle_next();
        log::info!("Theme switched to {}", theme);
        self.cannon.fire("theme change");
    }

    /// Applies a theme picked from the menu; re-picking the current one is a no-op.
    pub(super) fn choose_theme(&mut self, theme: Theme) {
        if self.theme.set(theme) {
            log::info!("Theme switched to {}", theme);
            self.cannon.fire("theme change");
        }
    }

    pub(super) fn buy_plan(&mut self, plan_id: u32) {
        let interval = self.billing;
        if let Some(flow) = self.purchases.iter_mut().find(|f| f.plan().id == plan_id) {
            if flow.buy(interval, now()) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("Processing payment for {}...", flow.plan().name);
                }
            }
        }
    }

    pub(super) fn submit_newsletter(&mut self) {
        if let Err(e) = self.newsletter.submit(now()) {
            log::warn!("Newsletter signup rejected: {}", e);
        }
    }

    pub(super) fn export_marks(&mut self) {
        let result = crate::utils::export::save_csv(
            crate::ui::config::UI_TEXT.marks_csv_filename,
            &self.marks.to_csv(),
        );
        if let Err(e) = &result {
            log::error!("CSV Export failed: {}", e);
        }
        self.last_export = Some(result);
    }

    /// Advances every simulated timer and schedules the next wake-up.
    fn tick_timers(&mut self, ctx: &egui::Context) {
        let now = now();
        let mut busy = false;
        let mut celebrations = Vec::new();

        for flow in &mut self.purchases {
            if let Some(PurchaseEvent::Completed(receipt)) = flow.advance(now) {
                log::info!("{}", receipt);
                celebrations.push("purchase");
            }
            busy |= flow.is_busy();
        }

        if self.newsletter.advance(now) {
            log::info!("Subscribed: {}", self.newsletter.email);
            celebrations.push("newsletter");
        }
        busy |= matches!(self.newsletter.status(), SubscribeStatus::Pending { .. });

        for reason in celebrations {
            self.cannon.fire(reason);
        }

        if self.marks_live {
            self.marks.maybe_drift(now, &mut self.rng);
            ctx.request_repaint_after(Duration::from_millis(
                crate::config::DEMO.timings.marks_refresh_ms,
            ));
        } else {
            self.marks.pause();
        }

        if busy {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }

    fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        #[cfg(debug_assertions)]
        if ctx.input(|i| i.key_pressed(egui::Key::F9)) {
            self.cannon.fire("F9 debug trigger");
        }
        #[cfg(not(debug_assertions))]
        let _ = ctx;
    }
}

impl eframe::App for ShowcaseApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop the in-flight fetch so its thread result has nowhere to go
        self.phone_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.sync_system_theme(ctx);
        ctx.set_theme(if self.theme.current().is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        setup_custom_visuals(ctx, self.theme.current());

        self.cannon.begin_frame(ctx);
        if self.fire_on_start {
            self.fire_on_start = false;
            self.cannon.fire("startup");
        }

        self.poll_phone_fetch(ctx);
        self.tick_timers(ctx);
        self.handle_global_shortcuts(ctx);

        self.render_top_panel(ctx);
        self.render_central_panel(ctx);

        self.cannon.end_frame(ctx);
    }
}
