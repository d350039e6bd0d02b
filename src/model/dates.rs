use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// When an event takes place. Dates are wall-clock local values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventDates {
    /// A one-day event, optionally at a given time.
    Single {
        start: Option<NaiveDate>,
        time: Option<NaiveTime>,
    },
    /// An event spanning from `start` through `end`. The end date alone
    /// selects this variant, so `start` is still `None` while the user has
    /// only filled in the end; validation reports it as missing.
    Multi {
        start: Option<NaiveDate>,
        end: NaiveDate,
    },
    /// Dates are intentionally left to be decided.
    Flexible,
}

/// The tag of an [`EventDates`] value without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateKind {
    Single,
    Multi,
    Flexible,
}

impl Default for EventDates {
    fn default() -> Self {
        Self::Single {
            start: None,
            time: None,
        }
    }
}

impl EventDates {
    /// Derives the variant from concrete inputs: an end date makes it multi-day,
    /// otherwise it is a single day. The time only survives on single days.
    pub fn from_inputs(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        time: Option<NaiveTime>,
    ) -> Self {
        match end {
            Some(end) => Self::Multi { start, end },
            None => Self::Single { start, time },
        }
    }

    pub fn kind(&self) -> DateKind {
        match self {
            Self::Single { .. } => DateKind::Single,
            Self::Multi { .. } => DateKind::Multi,
            Self::Flexible => DateKind::Flexible,
        }
    }

    /// Returns the start date, if one has been set.
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            Self::Single { start, .. } | Self::Multi { start, .. } => *start,
            Self::Flexible => None,
        }
    }

    /// Returns the end date of a multi-day event.
    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            Self::Multi { end, .. } => Some(*end),
            _ => None,
        }
    }

    /// Returns the time of a single-day event.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Self::Single { time, .. } => *time,
            _ => None,
        }
    }
}
