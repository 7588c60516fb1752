use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::config::DEMO;
use crate::error::AppError;
use crate::utils::app_time::AppInstant;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Loose shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubscribeStatus {
    Idle,
    Pending { since: AppInstant },
    Subscribed,
}

/// Footer newsletter sign-up with a simulated API round-trip.
#[derive(Debug, Clone)]
pub struct NewsletterForm {
    pub email: String,
    status: SubscribeStatus,
    error: Option<AppError>,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            status: SubscribeStatus::Idle,
            error: None,
        }
    }
}

impl NewsletterForm {
    pub fn status(&self) -> SubscribeStatus {
        self.status
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    /// Validates the address and starts the request. Submitting again while
    /// pending or after success does nothing.
    pub fn submit(&mut self, now: AppInstant) -> Result<(), AppError> {
        if !matches!(self.status, SubscribeStatus::Idle) {
            return Ok(());
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            let err = AppError::InvalidEmail(email.to_string());
            self.error = Some(err.clone());
            return Err(err);
        }

        self.email = email.to_string();
        self.error = None;
        self.status = SubscribeStatus::Pending { since: now };
        Ok(())
    }

    /// Returns `true` on the call that completes the subscription.
    pub fn advance(&mut self, now: AppInstant) -> bool {
        match self.status {
            SubscribeStatus::Pending { since }
                if now.saturating_duration_since(since)
                    >= Duration::from_millis(DEMO.timings.subscribe_ms) =>
            {
                self.status = SubscribeStatus::Subscribed;
                true
            }
            _ => false,
        }
    }
}
