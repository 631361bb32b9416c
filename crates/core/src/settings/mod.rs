//! Settings module - billing configuration.

mod settings_model;

pub use settings_model::{BillingSettings, CurrencyFormat, RoundingRule, SessionCountPolicy};
