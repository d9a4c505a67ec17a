use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::parse_form_timestamp;

/// Raw values from the report form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    pub source: String,
    pub food_type: String,
    pub quantity: String,
    pub available_from: String,
    pub available_to: String,
    #[serde(default)]
    pub description: String,
}

/// A required form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Source,
    FoodType,
    Quantity,
    AvailableFrom,
    AvailableTo,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Source => write!(f, "source"),
            Field::FoodType => write!(f, "food type"),
            Field::Quantity => write!(f, "quantity"),
            Field::AvailableFrom => write!(f, "available from"),
            Field::AvailableTo => write!(f, "available to"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("quantity {0:?} is not a number")]
    InvalidQuantity(String),
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),
    #[error("{field} {value:?} is not a valid date and time")]
    InvalidTimestamp { field: Field, value: String },
    #[error("available to must be later than available from")]
    EndNotAfterStart,
}

/// A report that passed every check, with its fields parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReport {
    pub source: String,
    pub food_type: String,
    pub quantity: u32,
    pub available_from: NaiveDateTime,
    pub available_to: NaiveDateTime,
    pub description: Option<String>,
}

fn required(value: &str, field: Field) -> Result<String, ReportError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ReportError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Any finite number is accepted; the fraction is dropped, so a value
/// below one serving is not positive.
fn parse_quantity(raw: &str) -> Result<u32, ReportError> {
    let raw = required(raw, Field::Quantity)?;
    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ReportError::InvalidQuantity(raw.clone()))?;
    let whole = value.trunc();
    if whole < 1.0 {
        return Err(ReportError::NonPositiveQuantity(whole as i64));
    }
    if whole > f64::from(u32::MAX) {
        return Err(ReportError::InvalidQuantity(raw));
    }
    Ok(whole as u32)
}

fn parse_timestamp(raw: &str, field: Field) -> Result<NaiveDateTime, ReportError> {
    parse_form_timestamp(raw).ok_or_else(|| ReportError::InvalidTimestamp {
        field,
        value: raw.to_string(),
    })
}

/// Check a report draft. All-or-nothing: the first failing check, in form
/// order, is returned.
pub fn validate(input: &ReportInput) -> Result<ValidReport, ReportError> {
    let source = required(&input.source, Field::Source)?;
    let food_type = required(&input.food_type, Field::FoodType)?;
    let quantity = parse_quantity(&input.quantity)?;
    let from_raw = required(&input.available_from, Field::AvailableFrom)?;
    let to_raw = required(&input.available_to, Field::AvailableTo)?;

    let available_from = parse_timestamp(&from_raw, Field::AvailableFrom)?;
    let available_to = parse_timestamp(&to_raw, Field::AvailableTo)?;
    if available_to <= available_from {
        return Err(ReportError::EndNotAfterStart);
    }

    let description = Some(input.description.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Ok(ValidReport {
        source,
        food_type,
        quantity,
        available_from,
        available_to,
        description,
    })
}

/// Boolean form of [`validate`].
pub fn is_valid(input: &ReportInput) -> bool {
    validate(input).is_ok()
}
