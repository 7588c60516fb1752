// User interface components
pub mod app;
mod app_async;
pub mod config;
pub mod error_boundary;
pub mod styles;
pub mod ui_charts;
pub mod ui_panels;
mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::ShowcaseApp;
pub use config::UI_CONFIG;
