//! File persistence configuration

// App state persistence
/// Path for saving/loading application UI state (theme, billing interval, ...)
pub const APP_STATE_PATH: &str = ".states.json";

/// Directory that native CSV exports are written into
pub const EXPORT_DIR: &str = "exports";

/// Byte-order mark prepended to CSV exports so spreadsheet tools detect UTF-8
pub const CSV_BOM: &str = "\u{FEFF}";
