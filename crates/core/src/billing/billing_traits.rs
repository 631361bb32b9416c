use rust_decimal::Decimal;

use crate::billing::billing_model::{MonthlyFigure, SessionEntry};
use crate::errors::Result;
use crate::utils::BillingPeriod;

/// Read access to session rows kept by the clinic's data store.
pub trait SessionRepositoryTrait: Send + Sync {
    fn get_sessions_for_period(
        &self,
        professional_id: &str,
        period: BillingPeriod,
    ) -> Result<Vec<SessionEntry>>;
}

/// Trait for billing service operations
pub trait BillingServiceTrait: Send + Sync {
    fn monthly_figures(
        &self,
        professional_id: &str,
        period: BillingPeriod,
    ) -> Result<Vec<MonthlyFigure>>;

    fn monthly_total(&self, professional_id: &str, period: BillingPeriod) -> Result<Decimal>;
}
