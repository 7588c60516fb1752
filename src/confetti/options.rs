use serde::{Deserialize, Serialize};

use crate::config::CONFETTI;

use super::{ConfettiError, Rgba};

/// Tuning for a single burst. Every field is optional on the wire; missing
/// fields fall back to [`CONFETTI`] defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfettiOptions {
    pub count: usize,
    pub colors: Vec<String>,
    pub spread: f32,
    pub start_velocity: f32,
    pub decay: f32,
    pub gravity: f32,
    pub wind: f32,
    pub ticks: u32,
    pub z_index: i32,
}

impl Default for ConfettiOptions {
    fn default() -> Self {
        let d = &CONFETTI.defaults;
        Self {
            count: d.count,
            colors: d.colors.iter().map(|c| c.to_string()).collect(),
            spread: d.spread,
            start_velocity: d.start_velocity,
            decay: d.decay,
            gravity: d.gravity,
            wind: d.wind,
            ticks: d.ticks,
            z_index: d.z_index,
        }
    }
}

impl ConfettiOptions {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_ticks(mut self, ticks: u32) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Checks every field and returns the parsed palette.
    ///
    /// Nothing outside the options is touched, so a failed validation leaves
    /// the mount target exactly as it was.
    pub fn validate(&self) -> Result<Vec<Rgba>, ConfettiError> {
        let limits = &CONFETTI.limits;

        if self.count > limits.max_particles {
            return Err(ConfettiError::InvalidOptions(format!(
                "count {} exceeds the limit of {}",
                self.count, limits.max_particles
            )));
        }
        if self.ticks == 0 || self.ticks > limits.max_ticks {
            return Err(ConfettiError::InvalidOptions(format!(
                "ticks must be within 1..={}, got {}",
                limits.max_ticks, self.ticks
            )));
        }

        let motion = [
            ("spread", self.spread),
            ("startVelocity", self.start_velocity),
            ("decay", self.decay),
            ("gravity", self.gravity),
            ("wind", self.wind),
        ];
        if let Some((name, value)) = motion.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfettiError::InvalidOptions(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.colors.is_empty() {
            return Err(ConfettiError::InvalidOptions(
                "colors must contain at least one entry".to_string(),
            ));
        }
        self.colors
            .iter()
            .map(|css| {
                Rgba::parse(css).ok_or_else(|| {
                    ConfettiError::InvalidOptions(format!("unrecognised color '{}'", css))
                })
            })
            .collect()
    }

    /// Hard cap on frames a burst may run before it is torn down regardless
    /// of particle state.
    pub fn frame_budget(&self) -> u32 {
        self.ticks.saturating_add(CONFETTI.limits.frame_budget_slack)
    }
}
