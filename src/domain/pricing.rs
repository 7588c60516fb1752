use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::DEMO;
use crate::utils::app_time::AppInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub id: u32,
    pub name: &'static str,
    pub monthly_cents: u32,
    pub yearly_cents: u32,
    pub discount: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub recommended: bool,
}

impl PricingPlan {
    pub fn price_cents(&self, interval: BillingInterval) -> u32 {
        match interval {
            BillingInterval::Monthly => self.monthly_cents,
            BillingInterval::Yearly => self.yearly_cents,
        }
    }

    pub fn display_price(&self, interval: BillingInterval) -> String {
        format_cents(self.price_cents(interval))
    }

    pub fn is_free(&self) -> bool {
        self.monthly_cents == 0 && self.yearly_cents == 0
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, Display,
)]
pub enum BillingInterval {
    #[default]
    Monthly,
    Yearly,
}

impl BillingInterval {
    pub fn toggled(self) -> Self {
        match self {
            BillingInterval::Monthly => BillingInterval::Yearly,
            BillingInterval::Yearly => BillingInterval::Monthly,
        }
    }

    pub fn period_label(self) -> &'static str {
        match self {
            BillingInterval::Monthly => "per month",
            BillingInterval::Yearly => "per year",
        }
    }

    pub fn short_suffix(self) -> &'static str {
        match self {
            BillingInterval::Monthly => "/mo",
            BillingInterval::Yearly => "/yr",
        }
    }
}

/// `999` -> `"$9.99"`
pub fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum FeatureIcon {
    Check,
    Star,
    Bolt,
}

/// Icons rotate check, star, bolt down a feature list.
pub fn feature_icon(idx: usize) -> FeatureIcon {
    match idx % 3 {
        0 => FeatureIcon::Check,
        1 => FeatureIcon::Star,
        _ => FeatureIcon::Bolt,
    }
}

/// Decorative fill percentage of the `idx`th feature.
pub fn feature_progress(idx: usize) -> u8 {
    ((idx + 1) * 10).min(100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PurchaseStatus {
    Idle,
    /// Waiting on the simulated payment
    Processing {
        since: AppInstant,
        interval: BillingInterval,
    },
    /// Showing the success state until the celebration window closes
    Succeeded { since: AppInstant },
}

/// What a purchase confirmation logs and shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub plan: &'static str,
    pub price: String,
    pub interval: BillingInterval,
}

impl fmt::Display for PurchaseReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Purchased {} for {}{}",
            self.plan,
            self.price,
            self.interval.short_suffix()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseEvent {
    /// Payment went through; celebrate once.
    Completed(PurchaseReceipt),
    /// Back to idle, the plan can be bought again.
    Reset,
}

/// Simulated checkout for one plan: `Idle -> Processing -> Succeeded -> Idle`.
#[derive(Debug, Clone)]
pub struct PurchaseFlow {
    plan: PricingPlan,
    status: PurchaseStatus,
}

impl PurchaseFlow {
    pub fn new(plan: PricingPlan) -> Self {
        Self {
            plan,
            status: PurchaseStatus::Idle,
        }
    }

    pub fn plan(&self) -> &PricingPlan {
        &self.plan
    }

    pub fn status(&self) -> PurchaseStatus {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        !matches!(self.status, PurchaseStatus::Idle)
    }

    /// Starts a purchase. Ignored (returns `false`) unless idle.
    pub fn buy(&mut self, interval: BillingInterval, now: AppInstant) -> bool {
        if self.is_busy() {
            return false;
        }
        self.status = PurchaseStatus::Processing {
            since: now,
            interval,
        };
        true
    }

    /// Moves the flow along once its current phase has elapsed.
    pub fn advance(&mut self, now: AppInstant) -> Option<PurchaseEvent> {
        let timings = &DEMO.timings;
        match self.status {
            PurchaseStatus::Idle => None,
            PurchaseStatus::Processing { since, interval } => {
                if now.saturating_duration_since(since) < Duration::from_millis(timings.payment_ms)
                {
                    return None;
                }
                self.status = PurchaseStatus::Succeeded { since: now };
                Some(PurchaseEvent::Completed(PurchaseReceipt {
                    plan: self.plan.name,
                    price: self.plan.display_price(interval),
                    interval,
                }))
            }
            PurchaseStatus::Succeeded { since } => {
                if now.saturating_duration_since(since)
                    < Duration::from_millis(timings.celebration_ms)
                {
                    return None;
                }
                self.status = PurchaseStatus::Idle;
                Some(PurchaseEvent::Reset)
            }
        }
    }
}
