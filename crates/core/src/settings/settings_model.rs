//! Billing settings domain models.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{CURRENCY_SYMBOL, DEFAULT_COMMISSION_RATE, THOUSANDS_SEPARATOR};
use crate::errors::{Error, Result};

/// How an explicit `count: 0` on a session record is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionCountPolicy {
    /// Explicit counts are taken as-is; only a missing count means one session.
    #[default]
    Explicit,
    /// Any zero or missing count means one session.
    Legacy,
}

/// Rounding applied when an amount is displayed in whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingRule {
    /// Midpoints round away from zero (2.5 -> 3, -2.5 -> -3).
    #[default]
    HalfUp,
    /// Midpoints round to the nearest even unit (2.5 -> 2, 3.5 -> 4).
    HalfEven,
}

impl RoundingRule {
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingRule::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingRule::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: String,
    pub rounding: RoundingRule,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: CURRENCY_SYMBOL.to_string(),
            thousands_separator: THOUSANDS_SEPARATOR.to_string(),
            rounding: RoundingRule::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingSettings {
    pub default_commission_rate: Decimal,
    pub session_count_policy: SessionCountPolicy,
    pub currency: CurrencyFormat,
}

impl Default for BillingSettings {
    fn default() -> Self {
        BillingSettings {
            default_commission_rate: DEFAULT_COMMISSION_RATE,
            session_count_policy: SessionCountPolicy::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl BillingSettings {
    /// Parses settings from JSON. Missing keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: BillingSettings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_commission_rate.is_sign_negative() {
            return Err(Error::InvalidConfigValue(format!(
                "defaultCommissionRate must not be negative, got {}",
                self.default_commission_rate
            )));
        }
        if self.currency.symbol.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "currency.symbol must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Share of the billed total that goes to a professional without a
    /// negotiated percentage.
    pub fn default_professional_percentage(&self) -> Decimal {
        Decimal::ONE - self.default_commission_rate
    }
}
