// Remote data loading
pub mod phone_fetch;

// Re-export commonly used types
pub use phone_fetch::{PhoneLoad, backoff_delay};
#[cfg(not(target_arch = "wasm32"))]
pub use phone_fetch::{HttpPhoneSource, PhoneSource, fetch_phone_rows, fetch_with_retry, load_phones};
