mod budget;
pub mod catalog;
mod category;
mod currency;
mod dates;
mod draft;
pub mod format;
mod validation;

pub use budget::{Amount, Budget};
pub use category::Category;
pub use currency::{Currency, CurrencyError};
pub use dates::{DateKind, EventDates};
pub use draft::{DraftUpdate, EventDraft, FLEXIBLE_LOCATION_LABEL, Location};
pub(crate) use draft::problems_of;
pub use format::EventSummary;
pub use validation::{
    ValidationError, parse_amount, parse_date, parse_time, validate_budget, validate_dates,
    validate_location, validate_name,
};
