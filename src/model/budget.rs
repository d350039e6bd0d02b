use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// A strictly positive, finite budget amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Returns `None` unless `value` is finite and greater than zero.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::new(value).ok_or_else(|| format!("budget amount must be positive, got {value}"))
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// How much the event is expected to cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Budget {
    /// Budget is intentionally open; any entered amount is dropped.
    Flexible { currency: Currency },
    /// A concrete budget, which may still be missing its amount while editing.
    Fixed {
        currency: Currency,
        amount: Option<Amount>,
    },
}

impl Default for Budget {
    fn default() -> Self {
        Self::unset(Currency::default())
    }
}

impl Budget {
    /// A fixed budget in `currency` with no amount entered yet.
    pub fn unset(currency: Currency) -> Self {
        Self::Fixed {
            currency,
            amount: None,
        }
    }

    pub fn currency(&self) -> Currency {
        match self {
            Self::Flexible { currency } | Self::Fixed { currency, .. } => *currency,
        }
    }

    pub fn amount(&self) -> Option<Amount> {
        match self {
            Self::Fixed { amount, .. } => *amount,
            Self::Flexible { .. } => None,
        }
    }

    pub fn is_flexible(&self) -> bool {
        matches!(self, Self::Flexible { .. })
    }
}
