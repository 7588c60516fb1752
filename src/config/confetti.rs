//! Confetti burst defaults and hard limits.

/// Default tuning for a burst when the caller leaves a field unset.
pub struct ConfettiDefaults {
    pub count: usize,
    pub colors: &'static [&'static str],
    /// Arc (degrees) the launch angles of a batch are spread over
    pub spread: f32,
    pub start_velocity: f32,
    /// Per-tick velocity damping (1.0 = none)
    pub decay: f32,
    pub gravity: f32,
    pub wind: f32,
    /// Life budget of every particle, in frames
    pub ticks: u32,
    /// Stacking order of the overlay canvas
    pub z_index: i32,
}

/// Upper bounds that keep every burst finite and cheap.
pub struct ConfettiLimits {
    pub max_particles: usize,
    pub max_ticks: u32,
    /// Extra frames a burst may run past `ticks` before the backstop tears it down
    pub frame_budget_slack: u32,
    /// Smallest and largest particle edge length (pixels)
    pub min_particle_size: f32,
    pub max_particle_size: f32,
    /// Rotation speed is sampled from +/- this many degrees per tick
    pub max_rotation_speed: f32,
}

pub struct ConfettiConfig {
    pub defaults: ConfettiDefaults,
    pub limits: ConfettiLimits,
    /// egui layer name the overlay paints on
    pub overlay_layer: &'static str,
}

pub const CONFETTI: ConfettiConfig = ConfettiConfig {
    defaults: ConfettiDefaults {
        count: 150,
        colors: &[
            "#f7931e", // Orange
            "#60a5fa", // Sky blue
            "#10b981", // Emerald
            "#f87171", // Coral
            "#a78bfa", // Lavender
            "#ef4444", // Red
        ],
        spread: 360.0,
        start_velocity: 45.0,
        decay: 0.94,
        gravity: 1.0,
        wind: 0.0,
        ticks: 200,
        z_index: 9999,
    },
    limits: ConfettiLimits {
        max_particles: 10_000,
        max_ticks: 6_000,
        frame_budget_slack: 30,
        min_particle_size: 3.0,
        max_particle_size: 9.0,
        max_rotation_speed: 10.0,
    },
    overlay_layer: "confetti_overlay",
};
