use thiserror::Error;

use crate::listing::{title_for_source, Listing, ListingId};
use crate::report::{validate, ReportError, ReportInput, ValidReport};
use crate::store::{ListingStore, StoreError};
use crate::time::TimeFormat;

/// Why a report did not make it onto the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] ReportError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A validated report that already holds its listing id and is waiting on
/// the backend round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReport {
    id: ListingId,
    report: ValidReport,
}

impl PendingReport {
    pub fn id(&self) -> ListingId {
        self.id
    }

    pub fn report(&self) -> &ValidReport {
        &self.report
    }

    /// Build the listing this report becomes. Availability instants are
    /// reduced to hour:minute strings in `format`.
    pub fn into_listing(self, format: TimeFormat) -> Listing {
        let ValidReport {
            source,
            food_type,
            quantity,
            available_from,
            available_to,
            ..
        } = self.report;
        Listing {
            id: self.id,
            title: title_for_source(&source),
            food_type,
            quantity,
            available_from: format.format(available_from),
            available_to: format.format(available_to),
            source,
        }
    }
}

/// Validate a draft and reserve its id. Runs when the user submits, before
/// any delay, so reports accepted back to back get distinct ids.
pub fn accept(
    store: &mut ListingStore,
    input: &ReportInput,
) -> Result<PendingReport, SubmissionError> {
    let report = validate(input)?;
    let id = store.reserve_id()?;
    Ok(PendingReport { id, report })
}

/// Turn a validated report into a listing and put it at the front of the
/// board in one step. Only fails once the store has no ids left.
pub fn submit(
    store: &mut ListingStore,
    report: ValidReport,
    format: TimeFormat,
) -> Result<Listing, StoreError> {
    let id = store.reserve_id()?;
    let listing = PendingReport { id, report }.into_listing(format);
    store.push_front(listing.clone());
    Ok(listing)
}
