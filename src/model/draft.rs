use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::category::Category;
use super::currency::Currency;
use super::dates::EventDates;
use super::validation::{
    ValidationError, validate_budget, validate_dates, validate_location, validate_name,
};

/// Display text for a location the organiser has left open.
pub const FLEXIBLE_LOCATION_LABEL: &str = "Anywhere/Flexible";

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Location is intentionally left open.
    Flexible,
    /// A free-text place. Empty means not yet entered.
    Named(String),
}

impl Default for Location {
    fn default() -> Self {
        Self::Named(String::new())
    }
}

impl Location {
    pub fn display(&self) -> &str {
        match self {
            Self::Flexible => FLEXIBLE_LOCATION_LABEL,
            Self::Named(name) => name,
        }
    }
}

/// An event being assembled by the creation wizard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub category: Option<Category>,
    pub name: String,
    pub location: Location,
    pub dates: EventDates,
    pub budget: Budget,
}

/// A partial draft. Each present field replaces the whole corresponding field
/// of the draft it is merged into; nested values are never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftUpdate {
    pub category: Option<Category>,
    pub name: Option<String>,
    pub location: Option<Location>,
    pub dates: Option<EventDates>,
    pub budget: Option<Budget>,
}

impl DraftUpdate {
    pub fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn location(location: Location) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }

    pub fn dates(dates: EventDates) -> Self {
        Self {
            dates: Some(dates),
            ..Self::default()
        }
    }

    pub fn budget(budget: Budget) -> Self {
        Self {
            budget: Some(budget),
            ..Self::default()
        }
    }

    /// Returns `true` if merging this update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl EventDraft {
    /// Creates an empty draft whose budget defaults to `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            budget: Budget::unset(currency),
            ..Self::default()
        }
    }

    /// Shallow-merges `update` into this draft.
    pub fn merge(&mut self, update: DraftUpdate) {
        let DraftUpdate {
            category,
            name,
            location,
            dates,
            budget,
        } = update;
        if category.is_some() {
            self.category = category;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(dates) = dates {
            self.dates = dates;
        }
        if let Some(budget) = budget {
            self.budget = budget;
        }
    }

    /// Lists every field that does not yet satisfy its completion rule, in
    /// form order.
    pub fn problems(&self) -> Vec<ValidationError> {
        problems_of(
            self.category,
            &self.name,
            &self.location,
            &self.dates,
            &self.budget,
        )
    }

    pub fn is_complete(&self) -> bool {
        self.problems().is_empty()
    }
}

/// Shared completion check for a draft and for raw step state.
pub(crate) fn problems_of(
    category: Option<Category>,
    name: &str,
    location: &Location,
    dates: &EventDates,
    budget: &Budget,
) -> Vec<ValidationError> {
    let mut problems = Vec::new();
    if category.is_none() {
        problems.push(ValidationError::MissingCategory);
    }
    problems.extend(validate_name(name).err());
    problems.extend(validate_location(location).err());
    problems.extend(validate_dates(dates).err());
    problems.extend(validate_budget(budget).err());
    problems
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::Amount;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goa_draft() -> EventDraft {
        EventDraft {
            category: Some(Category::Travel),
            name: "Goa Adventure 2025".into(),
            location: Location::Named("Goa, India".into()),
            dates: EventDates::Single {
                start: Some(date(2025, 3, 15)),
                time: None,
            },
            budget: Budget::Flexible {
                currency: Currency::Usd,
            },
        }
    }

    #[test]
    fn new_draft_is_empty_with_currency() {
        let draft = EventDraft::new(Currency::Inr);
        assert_eq!(draft.category, None);
        assert_eq!(draft.name, "");
        assert_eq!(draft.location, Location::Named(String::new()));
        assert_eq!(draft.dates, EventDates::default());
        assert_eq!(draft.budget, Budget::unset(Currency::Inr));
    }

    #[test]
    fn empty_draft_lists_every_problem() {
        let draft = EventDraft::default();
        assert_eq!(
            draft.problems(),
            vec![
                ValidationError::MissingCategory,
                ValidationError::BlankName,
                ValidationError::BlankLocation,
                ValidationError::MissingStartDate,
                ValidationError::MissingAmount,
            ]
        );
        assert!(!draft.is_complete());
    }

    #[test]
    fn filled_draft_is_complete() {
        assert!(goa_draft().is_complete());
    }

    #[test]
    fn end_before_start_is_incomplete() {
        let mut draft = goa_draft();
        draft.dates = EventDates::Multi {
            start: Some(date(2025, 3, 18)),
            end: date(2025, 3, 15),
        };
        assert!(!draft.is_complete());
    }

    #[test]
    fn merge_replaces_only_present_fields() {
        let mut draft = goa_draft();
        draft.merge(DraftUpdate::name("Team Building Weekend"));
        assert_eq!(draft.name, "Team Building Weekend");
        assert_eq!(draft.category, Some(Category::Travel));
        assert_eq!(draft.location, Location::Named("Goa, India".into()));
    }

    #[test]
    fn merge_replaces_nested_values_wholesale() {
        let mut draft = goa_draft();
        draft.merge(DraftUpdate::budget(Budget::Fixed {
            currency: Currency::Inr,
            amount: Amount::new(50000.0),
        }));
        assert_eq!(draft.budget.currency(), Currency::Inr);
        assert_eq!(draft.budget.amount().map(Amount::value), Some(50000.0));

        draft.merge(DraftUpdate::dates(EventDates::Flexible));
        assert_eq!(draft.dates, EventDates::Flexible);
    }

    #[test]
    fn merge_empty_update_is_noop() {
        let mut draft = goa_draft();
        let update = DraftUpdate::default();
        assert!(update.is_empty());
        draft.merge(update);
        assert_eq!(draft, goa_draft());
    }

    #[test]
    fn flexible_location_displays_label() {
        assert_eq!(Location::Flexible.display(), "Anywhere/Flexible");
        assert_eq!(Location::Named("Goa, India".into()).display(), "Goa, India");
    }

    #[quickcheck]
    fn any_name_merge_is_visible(name: String) -> bool {
        let mut draft = EventDraft::default();
        draft.merge(DraftUpdate::name(name.clone()));
        draft.name == name
    }

    #[test]
    fn serde_round_trip() {
        let draft = goa_draft();
        let json = serde_json::to_string(&draft).unwrap();
        let deserialized: EventDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(draft, deserialized);
    }
}
