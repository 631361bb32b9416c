//! Psicomotricidad Core - billing and liquidation calculations.
//!
//! This crate turns session counts and module fees into monthly billed
//! amounts and splits them between professionals and the clinic. Storage is
//! reached only through the repository traits it defines.

pub mod billing;
pub mod constants;
pub mod errors;
pub mod formatting;
pub mod liquidations;
pub mod professionals;
pub mod settings;
pub mod utils;

pub use billing::{calculate_billing, calculate_monthly_total, MonthlyFigure, SessionInput, SessionRecord};
pub use formatting::{format_currency, month_name};
pub use liquidations::{calculate_commission, LiquidationFigure};
pub use utils::BillingPeriod;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
