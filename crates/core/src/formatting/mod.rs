//! Display formatting for amounts and billing periods.

mod currency;
mod months;

pub use currency::{format_currency, format_currency_with, format_percentage, round_to_display};
pub use months::{month_name, month_name_strict, period_label, MONTH_NAMES};
