use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;

use super::liquidations_model::{Liquidation, LiquidationFigure, LiquidationStatus};
use super::liquidations_traits::{LiquidationRepositoryTrait, LiquidationServiceTrait};
use crate::billing::BillingServiceTrait;
use crate::errors::{Error, Result};
use crate::professionals::ProfessionalRepositoryTrait;
use crate::settings::BillingSettings;
use crate::utils::BillingPeriod;

pub struct LiquidationService {
    billing_service: Arc<dyn BillingServiceTrait>,
    professional_repository: Arc<dyn ProfessionalRepositoryTrait>,
    liquidation_repository: Arc<dyn LiquidationRepositoryTrait>,
    settings: Arc<BillingSettings>,
}

impl LiquidationService {
    pub fn new(
        billing_service: Arc<dyn BillingServiceTrait>,
        professional_repository: Arc<dyn ProfessionalRepositoryTrait>,
        liquidation_repository: Arc<dyn LiquidationRepositoryTrait>,
        settings: Arc<BillingSettings>,
    ) -> Self {
        LiquidationService {
            billing_service,
            professional_repository,
            liquidation_repository,
            settings,
        }
    }

    fn professional_percentage(&self, professional_id: &str) -> Result<Decimal> {
        let professional = self
            .professional_repository
            .get_professional(professional_id)?;
        Ok(professional
            .commission_percentage
            .unwrap_or_else(|| self.settings.default_professional_percentage()))
    }
}

#[async_trait]
impl LiquidationServiceTrait for LiquidationService {
    fn calculate_liquidation(
        &self,
        professional_id: &str,
        period: BillingPeriod,
    ) -> Result<Liquidation> {
        let percentage = self.professional_percentage(professional_id)?;
        let details = self
            .billing_service
            .monthly_figures(professional_id, period)?;
        let figure =
            LiquidationFigure::from_monthly_figures(professional_id, period, &details, percentage)?;

        debug!(
            "Liquidation {} {}: {} session(s), total {}, professional {}, clinic {}",
            professional_id,
            period,
            figure.total_sessions,
            figure.total_amount,
            figure.professional_amount,
            figure.clinic_amount
        );

        Ok(Liquidation {
            id: Liquidation::make_id(professional_id, period),
            figure,
            status: LiquidationStatus::Pending,
            details,
        })
    }

    async fn create_liquidation(
        &self,
        professional_id: &str,
        period: BillingPeriod,
    ) -> Result<Liquidation> {
        if let Some(existing) = self
            .liquidation_repository
            .get_liquidation(professional_id, period)?
        {
            if existing.is_paid() {
                return Err(Error::ConstraintViolation(format!(
                    "liquidation {} is already paid and cannot be recalculated",
                    existing.id
                )));
            }
        }

        let liquidation = self.calculate_liquidation(professional_id, period)?;
        let saved = self
            .liquidation_repository
            .save_liquidation(liquidation)
            .await?;
        info!("Saved liquidation {} ({})", saved.id, period.label());
        Ok(saved)
    }

    async fn mark_as_paid(
        &self,
        professional_id: &str,
        period: BillingPeriod,
    ) -> Result<Liquidation> {
        let existing = self
            .liquidation_repository
            .get_liquidation(professional_id, period)?
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "liquidation for {} in {}",
                    professional_id, period
                ))
            })?;

        if existing.is_paid() {
            return Err(Error::ConstraintViolation(format!(
                "liquidation {} is already paid",
                existing.id
            )));
        }

        let updated = self
            .liquidation_repository
            .update_status(&existing.id, LiquidationStatus::Paid)
            .await?;
        info!("Liquidation {} marked as paid", updated.id);
        Ok(updated)
    }
}
