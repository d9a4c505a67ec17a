use std::fmt;

use serde::{Deserialize, Serialize};

/// Listing identifier, handed out by the store's monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One reported food availability window.
///
/// Immutable once created. Availability times are kept only as display
/// strings; the instants they came from are not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    #[serde(rename = "type")]
    pub food_type: String,
    /// Servings on offer, always positive.
    pub quantity: u32,
    pub available_from: String,
    pub available_to: String,
    pub source: String,
}

/// Display title for a report source: first letter upper-cased, then " Food".
pub fn title_for_source(source: &str) -> String {
    let mut chars = source.chars();
    let mut title: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    title.push_str(" Food");
    title
}

/// Sample listings present when the board first loads, in display order.
pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId(1),
            title: "Canteen Lunch Extras".into(),
            food_type: "Vegetarian Meals".into(),
            quantity: 25,
            available_from: "12:30 PM".into(),
            available_to: "1:30 PM".into(),
            source: "canteen".into(),
        },
        Listing {
            id: ListingId(2),
            title: "Tech Event Refreshments".into(),
            food_type: "Snacks and Beverages".into(),
            quantity: 50,
            available_from: "4:00 PM".into(),
            available_to: "5:00 PM".into(),
            source: "event".into(),
        },
    ]
}
