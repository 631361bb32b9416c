//! Pure billing arithmetic.
//!
//! The unchecked functions accept any input; negative values simply produce
//! negative amounts, and results beyond the range of `i64`/`Decimal` panic.
//! The `try_` variants reject negative counts, fees and overflowing results
//! with an error and are what the services call.

use log::debug;
use rust_decimal::Decimal;

use super::billing_model::SessionInput;
use crate::errors::{invalid_input, Result};
use crate::settings::SessionCountPolicy;

/// `session_count * module_value`, exact.
pub fn calculate_billing(session_count: i64, module_value: Decimal) -> Decimal {
    Decimal::from(session_count) * module_value
}

pub fn try_calculate_billing(session_count: i64, module_value: Decimal) -> Result<Decimal> {
    validate_session_count(session_count)?;
    validate_module_value(module_value)?;
    checked_billing(session_count, module_value)
}

/// Sum of sessions represented by `sessions`.
pub fn effective_session_count(sessions: &SessionInput, policy: SessionCountPolicy) -> i64 {
    match sessions {
        SessionInput::Count(count) => *count,
        SessionInput::Records(records) => records.iter().map(|r| r.sessions(policy)).sum(),
    }
}

/// Like [`effective_session_count`], but rejects negative counts and sums that
/// overflow.
pub fn try_effective_session_count(
    sessions: &SessionInput,
    policy: SessionCountPolicy,
) -> Result<i64> {
    match sessions {
        SessionInput::Count(count) => {
            validate_session_count(*count)?;
            Ok(*count)
        }
        SessionInput::Records(records) => records.iter().try_fold(0i64, |total, record| {
            let count = record.sessions(policy);
            validate_session_count(count)?;
            total
                .checked_add(count)
                .ok_or_else(|| invalid_input("session count total overflows"))
        }),
    }
}

pub fn calculate_monthly_total(
    sessions: &SessionInput,
    module_value: Decimal,
    policy: SessionCountPolicy,
) -> Decimal {
    let count = effective_session_count(sessions, policy);
    debug!(
        "Monthly total: {} session(s) x {} ({:?})",
        count, module_value, policy
    );
    calculate_billing(count, module_value)
}

pub fn try_calculate_monthly_total(
    sessions: &SessionInput,
    module_value: Decimal,
    policy: SessionCountPolicy,
) -> Result<Decimal> {
    let count = try_effective_session_count(sessions, policy)?;
    validate_module_value(module_value)?;
    debug!(
        "Monthly total: {} session(s) x {} ({:?})",
        count, module_value, policy
    );
    checked_billing(count, module_value)
}

fn checked_billing(session_count: i64, module_value: Decimal) -> Result<Decimal> {
    Decimal::from(session_count)
        .checked_mul(module_value)
        .ok_or_else(|| {
            invalid_input(format!(
                "billing {} session(s) at {} overflows",
                session_count, module_value
            ))
        })
}

fn validate_session_count(count: i64) -> Result<()> {
    if count < 0 {
        return Err(invalid_input(format!(
            "session count must not be negative, got {}",
            count
        )));
    }
    Ok(())
}

fn validate_module_value(module_value: Decimal) -> Result<()> {
    if module_value.is_sign_negative() && !module_value.is_zero() {
        return Err(invalid_input(format!(
            "module value must not be negative, got {}",
            module_value
        )));
    }
    Ok(())
}
