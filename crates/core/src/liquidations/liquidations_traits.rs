use async_trait::async_trait;

use crate::errors::Result;
use crate::liquidations::liquidations_model::{Liquidation, LiquidationStatus};
use crate::utils::BillingPeriod;

/// Trait for liquidation repository operations
#[async_trait]
pub trait LiquidationRepositoryTrait: Send + Sync {
    /// `Ok(None)` when nothing has been stored for this professional and period.
    fn get_liquidation(
        &self,
        professional_id: &str,
        period: BillingPeriod,
    ) -> Result<Option<Liquidation>>;
    async fn save_liquidation(&self, liquidation: Liquidation) -> Result<Liquidation>;
    async fn update_status(
        &self,
        liquidation_id: &str,
        status: LiquidationStatus,
    ) -> Result<Liquidation>;
}

/// Trait for liquidation service operations
#[async_trait]
pub trait LiquidationServiceTrait: Send + Sync {
    fn calculate_liquidation(
        &self,
        professional_id: &str,
        period: BillingPeriod,
    ) -> Result<Liquidation>;
    async fn create_liquidation(
        &self,
        professional_id: &str,
        period: BillingPeriod,
    ) -> Result<Liquidation>;
    async fn mark_as_paid(&self, professional_id: &str, period: BillingPeriod)
        -> Result<Liquidation>;
}
