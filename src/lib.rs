#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod confetti;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use confetti::{ConfettiError, ConfettiOptions, launch_confetti};
pub use error::AppError;
pub use ui::ShowcaseApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the confetti and mock-data RNGs for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the phone catalogue request and chart bundled data
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Fire a confetti burst as soon as the window opens
    #[arg(long, default_value_t = false)]
    pub confetti_on_start: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, cli: Cli) -> Box<dyn eframe::App> {
    Box::new(ui::ShowcaseApp::new(cc, cli))
}
