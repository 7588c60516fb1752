//! config/demo.rs Simulated delays and demo-only knobs.
//!
//! Every "network" interaction on the site other than the phone catalogue is
//! faked with a fixed delay so the UI can show its in-flight states.

pub struct DemoTimings {
    /// Simulated payment round-trip
    pub payment_ms: u64,
    /// How long a purchased plan shows its success state before resetting
    pub celebration_ms: u64,
    /// Simulated newsletter API call
    pub subscribe_ms: u64,
    /// Interval between live updates of the assignment marks chart
    pub marks_refresh_ms: u64,
}

pub struct DemoConfig {
    pub timings: DemoTimings,
    /// The browser build never touches the network; the phone chart uses
    /// bundled mock data instead.
    pub disable_networking: bool,
    pub company_name: &'static str,
}

pub const DEMO: DemoConfig = DemoConfig {
    timings: DemoTimings {
        payment_ms: 2_500,
        celebration_ms: 4_000,
        subscribe_ms: 1_000,
        marks_refresh_ms: 5_000,
    },
    disable_networking: cfg!(target_arch = "wasm32"),
    company_name: "ReactTailwind Pro",
};
