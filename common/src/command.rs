use crate::intake::{accept, PendingReport, SubmissionError};
use crate::listing::{Listing, ListingId};
use crate::notification::Notification;
use crate::registration::register_for;
use crate::report::{ReportError, ReportInput};
use crate::store::{ListingStore, StoreError};

/// Things a user can ask the board to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the report form.
    SubmitReport(ReportInput),
    /// Press "Register for This" on a listing.
    RegisterInterest(ListingId),
}

/// What happened in response to a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Report passed validation and holds its id. Hand it to a
    /// [`ReportSubmitter`](crate::submitter::ReportSubmitter), then call
    /// [`complete`] with the result.
    Accepted(PendingReport),
    /// Report failed validation. The form should keep its values.
    Rejected {
        error: ReportError,
        notification: Notification,
    },
    /// Report was fine but the board could not take it.
    Failed {
        error: StoreError,
        notification: Notification,
    },
    Registered(Notification),
    /// Nothing to show, nothing changed.
    Ignored,
}

pub fn dispatch(store: &mut ListingStore, command: Command) -> Outcome {
    match command {
        Command::SubmitReport(input) => match accept(store, &input) {
            Ok(pending) => {
                tracing::debug!("Report accepted as listing {}", pending.id());
                Outcome::Accepted(pending)
            }
            Err(SubmissionError::Invalid(error)) => {
                tracing::debug!("Report rejected: {error}");
                Outcome::Rejected {
                    error,
                    notification: Notification::report_rejected(),
                }
            }
            Err(SubmissionError::Store(error)) => {
                tracing::error!("Report could not be accepted: {error}");
                Outcome::Failed {
                    error,
                    notification: Notification::unexpected(),
                }
            }
        },
        Command::RegisterInterest(id) => match register_for(store, id) {
            Some(notification) => Outcome::Registered(notification),
            None => Outcome::Ignored,
        },
    }
}

/// Insert a listing returned by the submitter and produce the success banner.
pub fn complete(store: &mut ListingStore, listing: Listing) -> Result<Notification, StoreError> {
    let id = listing.id;
    store.insert_front(listing)?;
    tracing::info!("Listing {id} added, {} on the board", store.len());
    Ok(Notification::report_accepted())
}

/// Finish a submission with whatever the submitter returned.
pub fn settle(
    store: &mut ListingStore,
    submitted: Result<Listing, ReportError>,
) -> Result<Notification, SubmissionError> {
    Ok(complete(store, submitted?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{
        NotificationKind, REPORT_ACCEPTED, REPORT_REJECTED, UNEXPECTED_FAILURE,
    };
    use crate::report::Field;
    use crate::time::TimeFormat;

    fn draft() -> ReportInput {
        ReportInput {
            source: "event".into(),
            food_type: "Pizza".into(),
            quantity: "8".into(),
            available_from: "2024-01-01T18:00".into(),
            available_to: "2024-01-01T19:30".into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_submit_then_complete() {
        let mut store = ListingStore::seeded();
        let pending = match dispatch(&mut store, Command::SubmitReport(draft())) {
            Outcome::Accepted(p) => p,
            other => panic!("expected Accepted, got {other:?}"),
        };
        assert_eq!(store.len(), 2);

        let listing = pending.into_listing(TimeFormat::TwelveHour);
        let banner = complete(&mut store, listing).unwrap();
        assert_eq!(banner.text, REPORT_ACCEPTED);
        assert_eq!(store.len(), 3);
        assert_eq!(store.all()[0].title, "Event Food");
        assert_eq!(store.all()[0].available_to, "7:30 PM");
    }

    #[test]
    fn test_invalid_report_is_rejected() {
        let mut store = ListingStore::seeded();
        let mut bad = draft();
        bad.source.clear();
        match dispatch(&mut store, Command::SubmitReport(bad)) {
            Outcome::Rejected {
                error,
                notification,
            } => {
                assert_eq!(error, ReportError::MissingField(Field::Source));
                assert_eq!(notification.kind, NotificationKind::Error);
                assert_eq!(notification.text, REPORT_REJECTED);
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_register_interest() {
        let mut store = ListingStore::seeded();
        match dispatch(&mut store, Command::RegisterInterest(ListingId(1))) {
            Outcome::Registered(n) => assert!(n.text.contains("Canteen Lunch Extras")),
            other => panic!("expected Registered, got {other:?}"),
        }
        assert_eq!(
            dispatch(&mut store, Command::RegisterInterest(ListingId(99999))),
            Outcome::Ignored
        );
    }

    #[test]
    fn test_complete_duplicate_is_error() {
        let mut store = ListingStore::seeded();
        let dup = store.all()[0].clone();
        assert_eq!(
            complete(&mut store, dup),
            Err(StoreError::DuplicateId(ListingId(1)))
        );
    }

    #[test]
    fn test_exhausted_ids_fail_instead_of_reject() {
        let mut store = ListingStore::seeded();
        let mut top = store.all()[0].clone();
        top.id = ListingId(u32::MAX);
        store.insert_front(top).unwrap();

        match dispatch(&mut store, Command::SubmitReport(draft())) {
            Outcome::Failed {
                error,
                notification,
            } => {
                assert_eq!(error, StoreError::IdsExhausted);
                assert_eq!(notification.text, UNEXPECTED_FAILURE);
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_settle_passes_failures_on() {
        let mut store = ListingStore::seeded();
        assert_eq!(
            settle(&mut store, Err(ReportError::EndNotAfterStart)),
            Err(SubmissionError::Invalid(ReportError::EndNotAfterStart))
        );

        let dup = store.all()[1].clone();
        assert_eq!(
            settle(&mut store, Ok(dup)),
            Err(SubmissionError::Store(StoreError::DuplicateId(ListingId(2))))
        );
        assert_eq!(store.len(), 2);

        let pending = match dispatch(&mut store, Command::SubmitReport(draft())) {
            Outcome::Accepted(p) => p,
            other => panic!("expected Accepted, got {other:?}"),
        };
        let banner = settle(&mut store, Ok(pending.into_listing(TimeFormat::TwelveHour)));
        assert_eq!(banner.map(|n| n.text), Ok(REPORT_ACCEPTED.to_string()));
        assert_eq!(store.len(), 3);
    }
}
