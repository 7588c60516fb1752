use std::time::Duration;

use eframe::egui;
use poll_promise::Promise;

use crate::config::DEMO;
use crate::data::PhoneLoad;
use crate::ui::app::ShowcaseApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl ShowcaseApp {
    /// Kicks off the phone catalogue load unless one is already running.
    pub(super) fn start_phone_fetch(&mut self) {
        if self.phone_promise.is_some() {
            return;
        }

        if DEMO.disable_networking || self.cli.offline {
            self.phone_promise = Some(Promise::from_ready(PhoneLoad::offline()));
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let seed = self.cli.seed;
            self.phone_promise = Some(Promise::spawn_thread("phone_fetch", move || {
                run_phone_fetch(seed)
            }));
        }
    }

    pub(super) fn poll_phone_fetch(&mut self, ctx: &egui::Context) {
        let outcome = self
            .phone_promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        match outcome {
            Some(load) => {
                self.phone_promise = None;
                if let Some(notice) = &load.notice {
                    log::warn!("{}", notice);
                }
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_fetch_attempts {
                    log::info!("Phone chart data from: {}.", load.signature);
                }
                self.phones = Some(load);
            }
            None if self.phone_promise.is_some() => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            None => {}
        }
    }
}

/// Runs the async loader on a private current-thread runtime.
#[cfg(not(target_arch = "wasm32"))]
fn run_phone_fetch(seed: Option<u64>) -> PhoneLoad {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt.block_on(crate::data::fetch_phone_rows(seed)),
        Err(e) => {
            log::error!("⚠️  Failed to create Tokio runtime: {}", e);
            PhoneLoad::fallback()
        }
    }
}
