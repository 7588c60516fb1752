//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep noisy ones `false` by default so
//! release builds remain quiet.

pub struct DebugFlags {
    /// Emit burst launch/finish summaries.
    pub print_confetti_events: bool,
    /// Emit one line per confetti frame (very noisy).
    pub print_confetti_frames: bool,
    /// Emit UI interaction logs (theme switches, purchases, searches).
    pub print_ui_interactions: bool,
    /// Emit phone fetch attempts and backoff delays.
    pub print_fetch_attempts: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_confetti_events: true,
    print_confetti_frames: false,
    print_ui_interactions: true,
    print_fetch_attempts: true,
    print_state_serde: false,
    print_shutdown: false,
};
