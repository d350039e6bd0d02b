//! Display formatting for drafts shown on the confirmation step and event list.

use chrono::{NaiveDate, NaiveTime};

use super::budget::{Amount, Budget};
use super::dates::EventDates;
use super::draft::EventDraft;

/// Shown for dates left to be decided.
pub const FLEXIBLE_DATES_LABEL: &str = "TBD/Flexible";
/// Shown for a flexible budget or one without an amount.
pub const FLEXIBLE_BUDGET_LABEL: &str = "Flexible";
/// Shown when a date range cannot be rendered yet.
pub const UNSPECIFIED_LABEL: &str = "Not specified";

/// Formats a date as `Mar 15, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a time as 24-hour `HH:MM`, the way it was entered.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn format_dates(dates: &EventDates) -> String {
    match *dates {
        EventDates::Flexible => FLEXIBLE_DATES_LABEL.to_string(),
        EventDates::Single {
            start: Some(start),
            time,
        } => match time {
            Some(time) => format!("{} at {}", format_date(start), format_time(time)),
            None => format_date(start),
        },
        EventDates::Multi {
            start: Some(start),
            end,
        } => format!("{} - {}", format_date(start), format_date(end)),
        _ => UNSPECIFIED_LABEL.to_string(),
    }
}

pub fn format_budget(budget: &Budget) -> String {
    match budget {
        Budget::Fixed {
            currency,
            amount: Some(amount),
        } => format!("{}{}", currency.symbol(), format_amount(*amount)),
        _ => FLEXIBLE_BUDGET_LABEL.to_string(),
    }
}

/// Formats an amount with comma thousands separators and at most three
/// fraction digits, trailing zeros removed. Amounts below 0.0005 round to
/// `0` even though they are valid.
pub fn format_amount(amount: Amount) -> String {
    let fixed = format!("{:.3}", amount.value());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let grouped = group_thousands(whole);
    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Read-only display strings for one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub name: String,
    pub category: String,
    pub location: String,
    pub dates: String,
    pub budget: String,
}

impl EventSummary {
    pub fn of(draft: &EventDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            category: draft
                .category
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| UNSPECIFIED_LABEL.to_string()),
            location: draft.location.display().trim().to_string(),
            dates: format_dates(&draft.dates),
            budget: format_budget(&draft.budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::{Category, Currency, Location};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixed(currency: Currency, value: f64) -> Budget {
        Budget::Fixed {
            currency,
            amount: Amount::new(value),
        }
    }

    // --- dates ---

    #[test]
    fn single_date() {
        let dates = EventDates::Single {
            start: Some(date(2025, 3, 15)),
            time: None,
        };
        assert_eq!(format_dates(&dates), "Mar 15, 2025");
    }

    #[test]
    fn single_date_with_time() {
        let dates = EventDates::Single {
            start: Some(date(2025, 3, 5)),
            time: NaiveTime::from_hms_opt(9, 5, 0),
        };
        assert_eq!(format_dates(&dates), "Mar 5, 2025 at 09:05");
    }

    #[test]
    fn multi_day_range() {
        let dates = EventDates::Multi {
            start: Some(date(2025, 12, 30)),
            end: date(2026, 1, 2),
        };
        assert_eq!(format_dates(&dates), "Dec 30, 2025 - Jan 2, 2026");
    }

    #[test]
    fn flexible_dates() {
        assert_eq!(format_dates(&EventDates::Flexible), "TBD/Flexible");
    }

    #[test]
    fn missing_start_is_unspecified() {
        assert_eq!(format_dates(&EventDates::default()), "Not specified");
        let dates = EventDates::Multi {
            start: None,
            end: date(2025, 3, 18),
        };
        assert_eq!(format_dates(&dates), "Not specified");
    }

    // --- budget ---

    #[test]
    fn rupee_budget_grouped() {
        assert_eq!(format_budget(&fixed(Currency::Inr, 50000.0)), "₹50,000");
    }

    #[test]
    fn budget_small_amount_not_grouped() {
        assert_eq!(format_budget(&fixed(Currency::Usd, 750.0)), "$750");
    }

    #[test]
    fn budget_fraction_kept() {
        assert_eq!(format_budget(&fixed(Currency::Eur, 1234.5)), "€1,234.5");
    }

    #[test]
    fn budget_fraction_rounded_to_three_digits() {
        assert_eq!(format_budget(&fixed(Currency::Gbp, 0.12345)), "£0.123");
    }

    #[test]
    fn budget_large_amount() {
        assert_eq!(
            format_budget(&fixed(Currency::Jpy, 1_234_567_890.0)),
            "¥1,234,567,890"
        );
    }

    #[test]
    fn budget_below_rounding_threshold_shows_zero() {
        let budget = fixed(Currency::Usd, 0.0004);
        assert!(budget.amount().is_some(), "still a real amount");
        assert_eq!(format_budget(&budget), "$0");
    }

    #[test]
    fn budget_beyond_u64_still_grouped() {
        assert_eq!(
            format_budget(&fixed(Currency::Usd, 1e22)),
            "$10,000,000,000,000,000,000,000"
        );
    }

    #[test]
    fn flexible_budget() {
        let budget = Budget::Flexible {
            currency: Currency::Inr,
        };
        assert_eq!(format_budget(&budget), "Flexible");
    }

    #[test]
    fn missing_amount_is_flexible_label() {
        assert_eq!(format_budget(&Budget::unset(Currency::Usd)), "Flexible");
    }

    #[quickcheck]
    fn grouping_preserves_digits(n: u64) -> bool {
        let grouped = group_thousands(&n.to_string());
        grouped.replace(',', "") == n.to_string()
            && grouped.split(',').skip(1).all(|chunk| chunk.len() == 3)
    }

    // --- summary ---

    #[test]
    fn summary_snapshot() {
        let draft = EventDraft {
            category: Some(Category::Travel),
            name: "Goa Adventure 2025".into(),
            location: Location::Named("Goa, India".into()),
            dates: EventDates::Multi {
                start: Some(date(2025, 3, 15)),
                end: date(2025, 3, 18),
            },
            budget: fixed(Currency::Inr, 50000.0),
        };
        let summary = EventSummary::of(&draft);
        let rendered = format!(
            "{}\n{}\n{}\n{}\n{}",
            summary.name, summary.category, summary.location, summary.dates, summary.budget
        );
        assert_snapshot!(rendered, @r"
        Goa Adventure 2025
        Travel
        Goa, India
        Mar 15, 2025 - Mar 18, 2025
        ₹50,000
        ");
    }

    #[test]
    fn summary_of_flexible_location() {
        let draft = EventDraft {
            location: Location::Flexible,
            ..EventDraft::default()
        };
        let summary = EventSummary::of(&draft);
        assert_eq!(summary.location, "Anywhere/Flexible");
        assert_eq!(summary.category, "Not specified");
    }
}
