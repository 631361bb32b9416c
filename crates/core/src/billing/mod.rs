//! Billing module - session aggregation and per-child monthly figures.

mod billing_calculator;
mod billing_model;
mod billing_service;
mod billing_traits;

#[cfg(test)]
mod billing_service_tests;

pub use billing_calculator::{
    calculate_billing, calculate_monthly_total, effective_session_count, try_calculate_billing,
    try_calculate_monthly_total, try_effective_session_count,
};
pub use billing_model::{MonthlyFigure, SessionEntry, SessionInput, SessionRecord};
pub use billing_service::BillingService;
pub use billing_traits::{BillingServiceTrait, SessionRepositoryTrait};
