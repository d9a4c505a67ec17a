use std::time::Duration;

use crumbs_common::config::BoardConfig;
use crumbs_common::intake::PendingReport;
use crumbs_common::listing::Listing;
use crumbs_common::report::ReportError;
use crumbs_common::submitter::ReportSubmitter;
use crumbs_common::time::TimeFormat;

/// Wait on a browser timer. Resolves at once on native builds.
pub async fn sleep(duration: Duration) {
    #[cfg(target_family = "wasm")]
    {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = duration;
    }
}

/// Stand-in for a reporting backend.
///
/// Every report is "accepted" after a fixed delay. No request leaves the page.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
    delay: Duration,
    format: TimeFormat,
}

impl SimulatedBackend {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            delay: config.submit_delay,
            format: config.time_format,
        }
    }
}

impl ReportSubmitter for SimulatedBackend {
    async fn submit(&self, pending: PendingReport) -> Result<Listing, ReportError> {
        let id = pending.id();
        tracing::debug!("Submitting listing {id} ({:?} simulated latency)", self.delay);
        sleep(self.delay).await;
        Ok(pending.into_listing(self.format))
    }

    fn submitter_name(&self) -> &str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use crumbs_common::intake::accept;
    use crumbs_common::listing::ListingId;
    use crumbs_common::report::ReportInput;
    use crumbs_common::store::ListingStore;

    use super::*;

    #[test]
    fn test_simulated_backend_uses_configured_format() {
        let config = BoardConfig::with_overrides(Some("1000"), None, Some("24h"));
        let backend = SimulatedBackend::new(&config);
        assert_eq!(backend.submitter_name(), "simulated");

        let mut store = ListingStore::seeded();
        let input = ReportInput {
            source: "event".into(),
            food_type: "Cupcakes".into(),
            quantity: "30".into(),
            available_from: "2024-02-02T16:00".into(),
            available_to: "2024-02-02T17:45".into(),
            description: String::new(),
        };
        let pending = accept(&mut store, &input).unwrap();
        let listing = block_on(backend.submit(pending)).unwrap();
        assert_eq!(listing.id, ListingId(3));
        assert_eq!(listing.title, "Event Food");
        assert_eq!(listing.available_from, "16:00");
        assert_eq!(listing.available_to, "17:45");
    }
}
