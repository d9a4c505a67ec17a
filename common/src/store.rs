use thiserror::Error;

use crate::listing::{seed_listings, Listing, ListingId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("listing {0} already exists")]
    DuplicateId(ListingId),
    #[error("every listing id has been handed out")]
    IdsExhausted,
}

/// Owns the session's listings, newest first.
///
/// Ids come from a counter that only moves forward, so two submissions that
/// are accepted before either completes still get distinct ids.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingStore {
    listings: Vec<Listing>,
    /// Wider than `ListingId` so "past the last id" is representable.
    next_id: u64,
}

impl ListingStore {
    /// Store holding the sample listings the board starts with.
    pub fn seeded() -> Self {
        Self::from_listings(seed_listings())
    }

    /// Build a store from listings already in display order.
    /// The counter starts just past the highest id present.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let next_id = listings
            .iter()
            .map(|l| u64::from(l.id.0) + 1)
            .max()
            .unwrap_or(1);
        Self { listings, next_id }
    }

    /// All listings in display order. Never fails, never mutates.
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// The id the next accepted report will receive, or `None` once every
    /// id has been used.
    pub fn next_id(&self) -> Option<ListingId> {
        u32::try_from(self.next_id).ok().map(ListingId)
    }

    /// Hand out the next id and advance the counter.
    pub fn reserve_id(&mut self) -> Result<ListingId, StoreError> {
        let id = self.next_id().ok_or(StoreError::IdsExhausted)?;
        self.next_id += 1;
        Ok(id)
    }

    /// Prepend a listing. Fails if its id is already on the board.
    pub fn insert_front(&mut self, listing: Listing) -> Result<(), StoreError> {
        if self.get(listing.id).is_some() {
            return Err(StoreError::DuplicateId(listing.id));
        }
        self.push_front(listing);
        Ok(())
    }

    /// Prepend without the duplicate check. Only for ids from `reserve_id`.
    pub(crate) fn push_front(&mut self, listing: Listing) {
        self.next_id = self.next_id.max(u64::from(listing.id.0) + 1);
        self.listings.insert(0, listing);
    }
}
