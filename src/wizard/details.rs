//! Data-entry step: local field text mirrored into the draft on every edit.

use tracing::debug;

use crate::model::{
    Budget, Category, Currency, DraftUpdate, EventDates, EventDraft, Location, ValidationError,
    parse_amount, parse_date, parse_time, problems_of,
};

/// One user edit on the data-entry step.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    SelectCategory(Category),
    SetName(String),
    SetLocation(String),
    SetLocationFlexible(bool),
    SetStartDate(String),
    SetEndDate(String),
    SetTime(String),
    SetDatesFlexible(bool),
    SetAmount(String),
    SetCurrency(Currency),
    SetBudgetFlexible(bool),
}

/// A non-blocking problem with text the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextIssue {
    StartDate,
    EndDate,
    Time,
    Amount,
}

impl TextIssue {
    pub fn message(&self) -> &'static str {
        match self {
            Self::StartDate | Self::EndDate => "expected YYYY-MM-DD",
            Self::Time => "expected HH:MM (24-hour)",
            Self::Amount => "expected a positive number",
        }
    }
}

/// Field values as typed on the data-entry step.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsStep {
    category: Option<Category>,
    name: String,
    location: String,
    location_flexible: bool,
    start_date: String,
    end_date: String,
    time: String,
    dates_flexible: bool,
    amount: String,
    currency: Currency,
    budget_flexible: bool,
}

impl DetailsStep {
    /// Initialises the field text from an existing draft.
    pub fn from_draft(draft: &EventDraft) -> Self {
        let iso = |d: chrono::NaiveDate| d.format("%Y-%m-%d").to_string();
        Self {
            category: draft.category,
            name: draft.name.clone(),
            location: match &draft.location {
                Location::Named(name) => name.clone(),
                Location::Flexible => String::new(),
            },
            location_flexible: draft.location == Location::Flexible,
            start_date: draft.dates.start().map(iso).unwrap_or_default(),
            end_date: draft.dates.end().map(iso).unwrap_or_default(),
            time: draft
                .dates
                .time()
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default(),
            dates_flexible: draft.dates == EventDates::Flexible,
            amount: draft
                .budget
                .amount()
                .map(|a| a.value().to_string())
                .unwrap_or_default(),
            currency: draft.budget.currency(),
            budget_flexible: draft.budget.is_flexible(),
        }
    }

    /// Applies an edit to the local field state and returns the update that
    /// mirrors it into the draft.
    pub fn apply(&mut self, edit: FieldEdit) -> DraftUpdate {
        debug!(?edit, "field edit");
        match edit {
            FieldEdit::SelectCategory(category) => {
                self.category = Some(category);
                DraftUpdate::category(category)
            }
            FieldEdit::SetName(name) => {
                self.name = name;
                DraftUpdate::name(self.name.clone())
            }
            FieldEdit::SetLocation(text) => {
                self.location = text;
                self.location_flexible = false;
                DraftUpdate::location(self.location())
            }
            FieldEdit::SetLocationFlexible(on) => {
                self.location_flexible = on;
                self.location.clear();
                DraftUpdate::location(self.location())
            }
            FieldEdit::SetStartDate(text) => self.edit_dates(|s| s.start_date = text),
            FieldEdit::SetEndDate(text) => self.edit_dates(|s| s.end_date = text),
            FieldEdit::SetTime(text) => self.edit_dates(|s| s.time = text),
            FieldEdit::SetDatesFlexible(on) => {
                self.dates_flexible = on;
                self.start_date.clear();
                self.end_date.clear();
                self.time.clear();
                DraftUpdate::dates(self.dates())
            }
            FieldEdit::SetAmount(text) => {
                if self.budget_flexible {
                    return DraftUpdate::default();
                }
                self.amount = text;
                DraftUpdate::budget(self.budget())
            }
            FieldEdit::SetCurrency(currency) => {
                self.currency = currency;
                DraftUpdate::budget(self.budget())
            }
            FieldEdit::SetBudgetFlexible(on) => {
                self.budget_flexible = on;
                self.amount.clear();
                DraftUpdate::budget(self.budget())
            }
        }
    }

    /// Date inputs are disabled while dates are to be decided.
    fn edit_dates(&mut self, edit: impl FnOnce(&mut Self)) -> DraftUpdate {
        if self.dates_flexible {
            return DraftUpdate::default();
        }
        edit(self);
        DraftUpdate::dates(self.dates())
    }

    pub fn location(&self) -> Location {
        if self.location_flexible {
            Location::Flexible
        } else {
            Location::Named(self.location.clone())
        }
    }

    /// Derives the date variant from the current text: an end date makes the
    /// event multi-day, otherwise it is a single day.
    pub fn dates(&self) -> EventDates {
        if self.dates_flexible {
            return EventDates::Flexible;
        }
        EventDates::from_inputs(
            parse_date(&self.start_date),
            parse_date(&self.end_date),
            parse_time(&self.time),
        )
    }

    pub fn budget(&self) -> Budget {
        if self.budget_flexible {
            Budget::Flexible {
                currency: self.currency,
            }
        } else {
            Budget::Fixed {
                currency: self.currency,
                amount: parse_amount(&self.amount),
            }
        }
    }

    /// Lists the requirements this step does not yet meet.
    pub fn problems(&self) -> Vec<ValidationError> {
        problems_of(
            self.category,
            &self.name,
            &self.location(),
            &self.dates(),
            &self.budget(),
        )
    }

    /// Whether every field requirement is met and the flow may advance.
    pub fn can_proceed(&self) -> bool {
        self.problems().is_empty()
    }

    /// Text that was typed but could not be understood.
    pub fn text_issues(&self) -> Vec<TextIssue> {
        let mut issues = Vec::new();
        if !self.dates_flexible {
            if !self.start_date.trim().is_empty() && parse_date(&self.start_date).is_none() {
                issues.push(TextIssue::StartDate);
            }
            if !self.end_date.trim().is_empty() && parse_date(&self.end_date).is_none() {
                issues.push(TextIssue::EndDate);
            }
            if !self.time.trim().is_empty() && parse_time(&self.time).is_none() {
                issues.push(TextIssue::Time);
            }
        }
        if !self.budget_flexible
            && !self.amount.trim().is_empty()
            && parse_amount(&self.amount).is_none()
        {
            issues.push(TextIssue::Amount);
        }
        issues
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location_text(&self) -> &str {
        &self.location
    }

    pub fn is_location_flexible(&self) -> bool {
        self.location_flexible
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn are_dates_flexible(&self) -> bool {
        self.dates_flexible
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_budget_flexible(&self) -> bool {
        self.budget_flexible
    }
}
