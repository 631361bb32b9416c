use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Clinic share retained when no rate is given
pub const DEFAULT_COMMISSION_RATE: Decimal = dec!(0.25);

/// Sessions represented by a record without an explicit count
pub const DEFAULT_SESSION_COUNT: i64 = 1;

/// Peso amounts are displayed in whole units
pub const DISPLAY_DECIMAL_PRECISION: u32 = 0;

/// Currency symbol for display
pub const CURRENCY_SYMBOL: &str = "$";

/// Thousands separator for display
pub const THOUSANDS_SEPARATOR: &str = ".";
