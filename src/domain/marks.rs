use std::time::Duration;

use itertools::Itertools;
use rand::Rng;
use strum_macros::Display;

use crate::config::{DEMO, MARKS_BASE};
use crate::utils::app_time::AppInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// One week of the assignment marks chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkRow {
    pub name: &'static str,
    pub marks: i32,
    pub quiz: i32,
    pub amt: i32,
    pub trend: Trend,
}

pub const CSV_HEADER: &str = "name,marks,quiz,amt,trend";

/// Marks chart data with optional simulated live updates.
#[derive(Debug, Clone)]
pub struct MarksBoard {
    rows: Vec<MarkRow>,
    last_drift: Option<AppInstant>,
}

impl Default for MarksBoard {
    fn default() -> Self {
        Self {
            rows: MARKS_BASE.to_vec(),
            last_drift: None,
        }
    }
}

impl MarksBoard {
    pub fn rows(&self) -> &[MarkRow] {
        &self.rows
    }

    pub fn reset(&mut self) {
        self.rows = MARKS_BASE.to_vec();
        self.last_drift = None;
    }

    /// Nudges every week: marks by up to ±100, quiz by up to ±150.
    pub fn drift<R: Rng>(&mut self, rng: &mut R) {
        for row in &mut self.rows {
            row.marks += rng.random_range(-100..100);
            row.quiz += rng.random_range(-150..150);
        }
    }

    /// Drifts once per refresh interval. The first call only starts the clock.
    pub fn maybe_drift<R: Rng>(&mut self, now: AppInstant, rng: &mut R) -> bool {
        let Some(last) = self.last_drift else {
            self.last_drift = Some(now);
            return false;
        };
        if now.saturating_duration_since(last) < Duration::from_millis(DEMO.timings.marks_refresh_ms)
        {
            return false;
        }
        self.drift(rng);
        self.last_drift = Some(now);
        true
    }

    /// Pauses the clock so resuming waits a full interval.
    pub fn pause(&mut self) {
        self.last_drift = None;
    }

    pub fn to_csv(&self) -> String {
        let body = self
            .rows
            .iter()
            .map(|r| format!("{},{},{},{},{}", r.name, r.marks, r.quiz, r.amt, r.trend))
            .join("\n");
        format!("{}\n{}", CSV_HEADER, body)
    }
}
