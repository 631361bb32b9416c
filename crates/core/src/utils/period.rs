use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::errors::{invalid_input, Error, Result, ValidationError};
use crate::formatting::month_name;

/// A calendar month in which sessions are billed and liquidated.
///
/// Only obtainable through [`BillingPeriod::new`], so `month` is always 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBillingPeriod {
    year: i32,
    month: u32,
}

impl<'de> Deserialize<'de> for BillingPeriod {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawBillingPeriod::deserialize(deserializer)?;
        BillingPeriod::new(raw.month, raw.year).map_err(de::Error::custom)
    }
}

impl BillingPeriod {
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::MonthOutOfRange(month).into());
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(invalid_input(format!("year {} is not representable", year)));
        }
        Ok(BillingPeriod { year, month })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn from_date(date: NaiveDate) -> Self {
        BillingPeriod {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // Constructors guarantee the date exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn previous(&self) -> Result<Self> {
        match self.month.checked_sub(1) {
            Some(month) if month >= 1 => BillingPeriod::new(month, self.year),
            _ => {
                let year = self
                    .year
                    .checked_sub(1)
                    .ok_or_else(|| invalid_input("no month precedes the earliest period"))?;
                BillingPeriod::new(12, year)
            }
        }
    }

    /// "Marzo 2025"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parses the `YYYY-MM` form produced by `Display`.
impl FromStr for BillingPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| invalid_input(format!("expected YYYY-MM, got '{}'", s)))?;
        let year: i32 = year.parse().map_err(ValidationError::from)?;
        let month: u32 = month.parse().map_err(ValidationError::from)?;
        BillingPeriod::new(month, year)
    }
}
