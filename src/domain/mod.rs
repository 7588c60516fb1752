// Site domain types and state machines
pub mod marks;
pub mod newsletter;
pub mod phones;
pub mod pricing;
pub mod theme;

// Re-export commonly used types
pub use marks::{MarkRow, MarksBoard, Trend};
pub use newsletter::{NewsletterForm, SubscribeStatus, is_valid_email};
pub use phones::{ApiPhone, ApiResponse, PhoneRow};
pub use pricing::{BillingInterval, PricingPlan, PurchaseEvent, PurchaseFlow, PurchaseStatus};
pub use theme::{Theme, ThemeState};
