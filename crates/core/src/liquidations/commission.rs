use rust_decimal::Decimal;

use crate::constants::DEFAULT_COMMISSION_RATE;

/// `total_billed * rate`, with the rate defaulting to 25%.
///
/// The rate is not range-checked: per-professional negotiated rates outside
/// `[0, 1]` scale the result proportionally.
pub fn calculate_commission(total_billed: Decimal, commission_rate: Option<Decimal>) -> Decimal {
    total_billed * commission_rate.unwrap_or(DEFAULT_COMMISSION_RATE)
}

/// Splits `total` into `(professional, clinic)` shares.
///
/// The clinic share is the remainder, so both always add up to `total`.
pub fn split_liquidation(total: Decimal, professional_percentage: Decimal) -> (Decimal, Decimal) {
    let professional_amount = total * professional_percentage;
    (professional_amount, total - professional_amount)
}
