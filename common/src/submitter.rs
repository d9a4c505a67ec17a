use crate::intake::PendingReport;
use crate::listing::Listing;
use crate::report::ReportError;
use crate::time::TimeFormat;

/// Abstraction over where accepted reports are sent.
///
/// There is no real backend. The page uses a simulated one that resolves
/// after a fixed delay; tests use [`ImmediateSubmitter`].
#[allow(async_fn_in_trait)]
pub trait ReportSubmitter {
    /// Send an accepted report and eventually get the listing it became.
    async fn submit(&self, pending: PendingReport) -> Result<Listing, ReportError>;

    /// Human-readable name of this submitter.
    fn submitter_name(&self) -> &str;
}

/// Resolves every submission at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateSubmitter {
    format: TimeFormat,
}

impl ImmediateSubmitter {
    pub fn new(format: TimeFormat) -> Self {
        Self { format }
    }
}

impl ReportSubmitter for ImmediateSubmitter {
    async fn submit(&self, pending: PendingReport) -> Result<Listing, ReportError> {
        Ok(pending.into_listing(self.format))
    }

    fn submitter_name(&self) -> &str {
        "immediate"
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::command::{complete, dispatch, Command, Outcome};
    use crate::listing::ListingId;
    use crate::report::ReportInput;
    use crate::store::ListingStore;

    fn draft(source: &str, quantity: &str) -> ReportInput {
        ReportInput {
            source: source.into(),
            food_type: "Fruit".into(),
            quantity: quantity.into(),
            available_from: "2024-06-01T08:00".into(),
            available_to: "2024-06-01T09:15".into(),
            description: String::new(),
        }
    }

    fn accepted(store: &mut ListingStore, input: ReportInput) -> PendingReport {
        match dispatch(store, Command::SubmitReport(input)) {
            Outcome::Accepted(p) => p,
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn test_immediate_submitter_round_trip() {
        let submitter = ImmediateSubmitter::new(TimeFormat::TwentyFourHour);
        assert_eq!(submitter.submitter_name(), "immediate");

        let mut store = ListingStore::seeded();
        let pending = accepted(&mut store, draft("canteen", "6"));
        let listing = block_on(submitter.submit(pending)).unwrap();
        assert_eq!(listing.id, ListingId(3));
        assert_eq!(listing.available_from, "08:00");

        complete(&mut store, listing).unwrap();
        assert_eq!(store.all()[0].id, ListingId(3));
    }

    #[test]
    fn test_interleaved_submissions() {
        let submitter = ImmediateSubmitter::default();
        let mut store = ListingStore::seeded();

        let a = accepted(&mut store, draft("canteen", "1"));
        let b = accepted(&mut store, draft("event", "2"));

        let b = block_on(submitter.submit(b)).unwrap();
        complete(&mut store, b).unwrap();
        let a = block_on(submitter.submit(a)).unwrap();
        complete(&mut store, a).unwrap();

        let listed: Vec<_> = store.all().iter().map(|l| (l.id.0, l.quantity)).collect();
        assert_eq!(listed, vec![(3, 1), (4, 2), (1, 25), (2, 50)]);
    }
}
