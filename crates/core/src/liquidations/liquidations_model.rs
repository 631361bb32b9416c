//! Liquidation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::commission::split_liquidation;
use crate::billing::MonthlyFigure;
use crate::errors::{invalid_input, Result};
use crate::utils::BillingPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiquidationStatus {
    #[default]
    Pending,
    Paid,
}

/// Monthly settlement totals for one professional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidationFigure {
    pub professional_id: String,
    pub month: u32,
    pub year: i32,
    pub total_sessions: i64,
    pub total_amount: Decimal,
    pub professional_percentage: Decimal,
    pub professional_amount: Decimal,
    pub clinic_amount: Decimal,
}

impl LiquidationFigure {
    /// Builds a figure from already aggregated totals.
    pub fn new(
        professional_id: &str,
        period: BillingPeriod,
        total_sessions: i64,
        total_amount: Decimal,
        professional_percentage: Decimal,
    ) -> Result<Self> {
        if total_sessions < 0 {
            return Err(invalid_input(format!(
                "total sessions must not be negative, got {}",
                total_sessions
            )));
        }
        if total_amount.is_sign_negative() && !total_amount.is_zero() {
            return Err(invalid_input(format!(
                "total amount must not be negative, got {}",
                total_amount
            )));
        }
        if professional_percentage < Decimal::ZERO || professional_percentage > Decimal::ONE {
            return Err(invalid_input(format!(
                "professional percentage must be within [0, 1], got {}",
                professional_percentage
            )));
        }

        let (professional_amount, clinic_amount) =
            split_liquidation(total_amount, professional_percentage);

        Ok(LiquidationFigure {
            professional_id: professional_id.to_string(),
            month: period.month(),
            year: period.year(),
            total_sessions,
            total_amount,
            professional_percentage,
            professional_amount,
            clinic_amount,
        })
    }

    /// Sums monthly figures into a single liquidation figure.
    pub fn from_monthly_figures(
        professional_id: &str,
        period: BillingPeriod,
        figures: &[MonthlyFigure],
        professional_percentage: Decimal,
    ) -> Result<Self> {
        let mut total_sessions: i64 = 0;
        let mut total_amount = Decimal::ZERO;
        for figure in figures {
            total_sessions = total_sessions
                .checked_add(figure.session_count)
                .ok_or_else(|| invalid_input("total sessions overflow"))?;
            total_amount = total_amount
                .checked_add(figure.total_amount)
                .ok_or_else(|| invalid_input("total amount overflows"))?;
        }
        Self::new(
            professional_id,
            period,
            total_sessions,
            total_amount,
            professional_percentage,
        )
    }

    pub fn period(&self) -> Result<BillingPeriod> {
        BillingPeriod::new(self.month, self.year)
    }
}

/// A liquidation as stored: the figure, its payment status and the per-child
/// breakdown it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liquidation {
    pub id: String,
    #[serde(flatten)]
    pub figure: LiquidationFigure,
    pub status: LiquidationStatus,
    pub details: Vec<MonthlyFigure>,
}

impl Liquidation {
    /// Stable id for a professional and period, e.g. `prof-1_2025-03`.
    pub fn make_id(professional_id: &str, period: BillingPeriod) -> String {
        format!("{}_{}", professional_id, period)
    }

    pub fn is_paid(&self) -> bool {
        self.status == LiquidationStatus::Paid
    }
}
