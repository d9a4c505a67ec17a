use crate::listing::ListingId;
use crate::notification::Notification;
use crate::store::ListingStore;

/// Register interest in a listing.
///
/// Returns the confirmation banner, or `None` when no listing has that id.
/// Registration never changes the store.
pub fn register_for(store: &ListingStore, id: ListingId) -> Option<Notification> {
    match store.get(id) {
        Some(listing) => {
            tracing::debug!("Registered interest in listing {id}");
            Some(Notification::registered(&listing.title))
        }
        None => {
            tracing::debug!("Registration for unknown listing {id} ignored");
            None
        }
    }
}
