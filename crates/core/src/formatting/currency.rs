use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::settings::{CurrencyFormat, RoundingRule};

/// Rounds an amount to whole currency units using the given rule.
pub fn round_to_display(amount: Decimal, rounding: RoundingRule) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, rounding.strategy())
}

/// Formats an amount as whole pesos, e.g. `1000000` -> `"$1.000.000"`.
///
/// Fractional amounts are rounded half-up (`1500.5` -> `"$1.501"`).
pub fn format_currency(amount: Decimal) -> String {
    format_currency_with(amount, &CurrencyFormat::default())
}

pub fn format_currency_with(amount: Decimal, format: &CurrencyFormat) -> String {
    let rounded = round_to_display(amount, format.rounding);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!(
        "{}{}{}",
        sign,
        format.symbol,
        group_thousands(&digits, &format.thousands_separator)
    )
}

/// `0.25` -> `"25%"`, `0.125` -> `"12.5%"`.
pub fn format_percentage(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1000000)), "$1.000.000");
        assert_eq!(format_currency(dec!(25000)), "$25.000");
        assert_eq!(format_currency(dec!(999)), "$999");
        assert_eq!(format_currency(dec!(1000)), "$1.000");
        assert_eq!(format_currency(Decimal::ZERO), "$0");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(1500.5)), "$1.501");
        assert_eq!(format_currency(dec!(1500.49)), "$1.500");
        assert_eq!(format_currency(dec!(2.5)), "$3");
        assert_eq!(format_currency(dec!(-2.5)), "-$3");
    }

    #[test]
    fn test_format_currency_negative_and_negative_zero() {
        assert_eq!(format_currency(dec!(-1234567)), "-$1.234.567");
        assert_eq!(format_currency(dec!(-0.4)), "$0");
    }

    #[test]
    fn test_format_currency_half_even() {
        let format = CurrencyFormat {
            rounding: RoundingRule::HalfEven,
            ..CurrencyFormat::default()
        };
        assert_eq!(format_currency_with(dec!(2.5), &format), "$2");
        assert_eq!(format_currency_with(dec!(3.5), &format), "$4");
    }

    #[test]
    fn test_format_currency_custom_separator() {
        let format = CurrencyFormat {
            symbol: "CLP ".to_string(),
            thousands_separator: ",".to_string(),
            rounding: RoundingRule::HalfUp,
        };
        assert_eq!(format_currency_with(dec!(1234567.8), &format), "CLP 1,234,568");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec!(0.25)), "25%");
        assert_eq!(format_percentage(dec!(0.125)), "12.5%");
        assert_eq!(format_percentage(Decimal::ONE), "100%");
    }
}
