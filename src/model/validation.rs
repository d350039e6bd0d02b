use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use thiserror::Error;

use super::budget::{Amount, Budget};
use super::dates::EventDates;
use super::draft::Location;

/// A draft field that does not yet satisfy its completion rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("choose an event type")]
    MissingCategory,
    #[error("event name cannot be empty")]
    BlankName,
    #[error("enter a location or mark it flexible")]
    BlankLocation,
    #[error("enter a start date or mark dates as to be decided")]
    MissingStartDate,
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("enter a budget amount or mark the budget flexible")]
    MissingAmount,
}

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid hardcoded regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid hardcoded regex"));

/// Parses a `YYYY-MM-DD` date. Anything else, including impossible dates, is `None`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if !DATE_RE.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Parses a 24-hour `HH:MM` time.
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if !TIME_RE.is_match(text) {
        return None;
    }
    NaiveTime::parse_from_str(text, "%H:%M").ok()
}

/// Parses a budget amount. Malformed, zero or negative input means "no amount".
pub fn parse_amount(text: &str) -> Option<Amount> {
    text.trim().parse::<f64>().ok().and_then(Amount::new)
}

/// Name must contain something other than whitespace.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::BlankName)
    } else {
        Ok(())
    }
}

pub fn validate_location(location: &Location) -> Result<(), ValidationError> {
    match location {
        Location::Flexible => Ok(()),
        Location::Named(name) if !name.trim().is_empty() => Ok(()),
        Location::Named(_) => Err(ValidationError::BlankLocation),
    }
}

/// Flexible dates always pass; otherwise a start date is required and a
/// multi-day range must not end before it starts.
pub fn validate_dates(dates: &EventDates) -> Result<(), ValidationError> {
    match *dates {
        EventDates::Flexible => Ok(()),
        EventDates::Single { start: None, .. } | EventDates::Multi { start: None, .. } => {
            Err(ValidationError::MissingStartDate)
        }
        EventDates::Multi {
            start: Some(start),
            end,
        } if end < start => Err(ValidationError::EndBeforeStart { start, end }),
        _ => Ok(()),
    }
}

pub fn validate_budget(budget: &Budget) -> Result<(), ValidationError> {
    match budget {
        Budget::Flexible { .. } => Ok(()),
        Budget::Fixed { amount: Some(_), .. } => Ok(()),
        Budget::Fixed { amount: None, .. } => Err(ValidationError::MissingAmount),
    }
}
