//! Phone catalogue loading for the price chart.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Result, anyhow};
#[cfg(not(target_arch = "wasm32"))]
use async_trait::async_trait;
#[cfg(not(target_arch = "wasm32"))]
use rand::Rng;

use crate::config::{PHONE_API, RetryPolicy};
#[cfg(not(target_arch = "wasm32"))]
use crate::domain::ApiPhone;
use crate::domain::PhoneRow;

#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
use crate::config::DEBUG_FLAGS;

/// Outcome of loading the chart data, whichever way it went.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneLoad {
    pub rows: Vec<PhoneRow>,
    /// Which source produced `rows`
    pub signature: &'static str,
    /// User-facing notice when the rows are not live data
    pub notice: Option<String>,
}

impl PhoneLoad {
    pub fn fallback() -> Self {
        Self {
            rows: PhoneRow::fallback(),
            signature: "fallback",
            notice: Some(PHONE_API.fallback_notice.to_string()),
        }
    }

    /// Bundled data for builds that never touch the network.
    pub fn offline() -> Self {
        Self {
            rows: PhoneRow::fallback(),
            signature: "offline",
            notice: None,
        }
    }
}

/// Delay before retry number `attempt + 1`: doubles from the initial
/// backoff and saturates at the maximum.
pub fn backoff_delay(policy: RetryPolicy, attempt: u32) -> Duration {
    let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
    let ms = policy
        .initial_backoff_ms
        .saturating_mul(factor)
        .min(policy.max_backoff_ms);
    Duration::from_millis(ms)
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
pub trait PhoneSource: Send + Sync {
    async fn fetch_phones(&self) -> Result<Vec<ApiPhone>>;

    /// A unique identifier for this source (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// The public catalogue endpoint.
#[cfg(not(target_arch = "wasm32"))]
pub struct HttpPhoneSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpPhoneSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(PHONE_API.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl PhoneSource for HttpPhoneSource {
    async fn fetch_phones(&self) -> Result<Vec<ApiPhone>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body: crate::domain::ApiResponse = response.json().await?;
        if body.data.is_empty() {
            return Err(anyhow!("catalogue returned no phones"));
        }
        Ok(body.data)
    }

    fn signature(&self) -> &'static str {
        "http"
    }
}

/// Calls `source` up to `policy.attempts` times with exponential backoff
/// between failures.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_with_retry(
    source: &dyn PhoneSource,
    policy: RetryPolicy,
) -> Result<Vec<ApiPhone>> {
    let attempts = policy.attempts.max(1);
    let mut last_error = None;

    for attempt in 0..attempts {
        match source.fetch_phones().await {
            Ok(phones) => return Ok(phones),
            Err(e) => {
                log::warn!(
                    "⚠️  {} attempt {}/{} failed: {:#}",
                    source.signature(),
                    attempt + 1,
                    attempts,
                    e
                );
                last_error = Some(e);
            }
        }

        if attempt + 1 < attempts {
            let delay = backoff_delay(policy, attempt);
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_fetch_attempts {
                log::info!("Retrying {} in {:?}...", source.signature(), delay);
            }
            tokio::time::sleep(delay).await;
        }
    }

    Err(last_error
        .unwrap_or_else(|| anyhow!("no attempts made"))
        .context(format!("{} gave up after {} attempts", source.signature(), attempts)))
}

/// Tries each source in order; the first one to answer supplies the rows.
/// Falls back to bundled data with a notice when all of them fail.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_phones<R: Rng>(
    sources: &[Box<dyn PhoneSource>],
    policy: RetryPolicy,
    rng: &mut R,
) -> PhoneLoad {
    for source in sources {
        match fetch_with_retry(source.as_ref(), policy).await {
            Ok(phones) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_fetch_attempts {
                    log::info!(
                        "Loaded {} phones using: {}.",
                        phones.len(),
                        source.signature()
                    );
                }
                return PhoneLoad {
                    rows: PhoneRow::from_api(&phones, rng),
                    signature: source.signature(),
                    notice: None,
                };
            }
            Err(e) => log::error!("{:#}", e),
        }
    }
    PhoneLoad::fallback()
}

/// Loads the chart from the live endpoint, with `seed` fixing the mock
/// prices and ratings.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_phone_rows(seed: Option<u64>) -> PhoneLoad {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let sources: Vec<Box<dyn PhoneSource>> = match HttpPhoneSource::new(PHONE_API.url) {
        Ok(source) => vec![Box::new(source)],
        Err(e) => {
            log::error!("⚠️  Could not build HTTP client: {:#}", e);
            Vec::new()
        }
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    load_phones(&sources, PHONE_API.retry, &mut rng).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    /// Fails a fixed number of times, then answers.
    struct FlakySource {
        failures: u32,
        calls: AtomicU32,
    }

    impl FlakySource {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl PhoneSource for FlakySource {
        async fn fetch_phones(&self) -> Result<Vec<ApiPhone>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(anyhow!("boom #{}", call));
            }
            Ok(vec![ApiPhone {
                phone_name: "iPhone 12".into(),
                slug: "apple_iphone_12-10509".into(),
                brand: "Apple".into(),
                image: String::new(),
            }])
        }

        fn signature(&self) -> &'static str {
            "flaky"
        }
    }

    #[test]
    fn backoff_doubles_up_to_the_cap() {
        let policy = PHONE_API.retry;
        let delays: Vec<u64> = (0..6)
            .map(|a| backoff_delay(policy, a).as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![500, 1_000, 2_000, 4_000, 4_000, 4_000]);
        assert_eq!(backoff_delay(policy, 200), Duration::from_millis(4_000));
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_the_source_answers() {
        let source = FlakySource::new(2);
        let start = Instant::now();
        let phones = fetch_with_retry(&source, PHONE_API.retry).await.unwrap();
        assert_eq!(phones.len(), 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        assert!(start.elapsed() >= Duration::from_millis(1_500));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_the_last_attempt() {
        let source = FlakySource::new(u32::MAX);
        let err = fetch_with_retry(&source, PHONE_API.retry).await.unwrap_err();
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        assert!(format!("{:#}", err).contains("gave up after 3 attempts"));
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_sources_fall_back_with_a_notice() {
        let sources: Vec<Box<dyn PhoneSource>> = vec![Box::new(FlakySource::new(u32::MAX))];
        let load = load_phones(&sources, PHONE_API.retry, &mut StdRng::seed_from_u64(1)).await;
        assert_eq!(load, PhoneLoad::fallback());
        assert_eq!(
            load.notice.as_deref(),
            Some("Failed to load phone data. Showing mock data.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn later_sources_cover_for_earlier_ones() {
        let sources: Vec<Box<dyn PhoneSource>> = vec![
            Box::new(FlakySource::new(u32::MAX)),
            Box::new(FlakySource::new(0)),
        ];
        let load = load_phones(&sources, PHONE_API.retry, &mut StdRng::seed_from_u64(1)).await;
        assert_eq!(load.signature, "flaky");
        assert_eq!(load.rows.len(), 1);
        assert!(load.notice.is_none());
    }

    #[tokio::test]
    async fn no_sources_means_fallback() {
        let load = load_phones(&[], PHONE_API.retry, &mut StdRng::seed_from_u64(1)).await;
        assert_eq!(load.signature, "fallback");
    }
}
