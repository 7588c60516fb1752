//! Phone catalogue endpoint and retry policy.

/// Exponential backoff settings for flaky endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

pub struct PhoneApiConfig {
    pub url: &'static str,
    pub timeout_ms: u64,
    /// Only the first N phones returned are charted
    pub max_results: usize,
    /// The endpoint carries no prices, so a mock one is drawn from [min, max)
    pub mock_price_min: u32,
    pub mock_price_max: u32,
    /// Mock rating drawn from [min, max]
    pub mock_rating_min: u8,
    pub mock_rating_max: u8,
    pub retry: RetryPolicy,
    /// Shown above the chart when every attempt failed
    pub fallback_notice: &'static str,
}

pub const PHONE_API: PhoneApiConfig = PhoneApiConfig {
    url: "https://openapi.programming-hero.com/api/phones?search=iphone",
    timeout_ms: 8_000,
    max_results: 6,
    mock_price_min: 500,
    mock_price_max: 2_500,
    mock_rating_min: 1,
    mock_rating_max: 5,
    retry: RetryPolicy {
        attempts: 3,
        initial_backoff_ms: 500,
        max_backoff_ms: 4_000,
    },
    fallback_notice: "Failed to load phone data. Showing mock data.",
};
