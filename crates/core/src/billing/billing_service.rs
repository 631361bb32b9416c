use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use super::billing_calculator::{try_calculate_monthly_total, try_effective_session_count};
use super::billing_model::{MonthlyFigure, SessionEntry, SessionInput, SessionRecord};
use super::billing_traits::{BillingServiceTrait, SessionRepositoryTrait};
use crate::errors::{invalid_input, Result};
use crate::settings::BillingSettings;
use crate::utils::BillingPeriod;

pub struct BillingService {
    session_repository: Arc<dyn SessionRepositoryTrait>,
    settings: Arc<BillingSettings>,
}

impl BillingService {
    pub fn new(
        session_repository: Arc<dyn SessionRepositoryTrait>,
        settings: Arc<BillingSettings>,
    ) -> Self {
        BillingService {
            session_repository,
            settings,
        }
    }

    /// Drops rows that do not belong to the requested professional and month.
    fn belongs_to(entry: &SessionEntry, professional_id: &str, period: BillingPeriod) -> bool {
        entry.professional_id == professional_id
            && entry.month == period.month()
            && entry.year == period.year()
    }

    /// Folds session rows into one figure per child and module value.
    ///
    /// A child billed at two different module values in the same month gets
    /// two figures, so `total_amount == session_count * module_value` holds
    /// for each of them.
    fn fold_entries(
        &self,
        professional_id: &str,
        period: BillingPeriod,
        entries: Vec<SessionEntry>,
    ) -> Result<Vec<MonthlyFigure>> {
        let policy = self.settings.session_count_policy;
        let mut grouped: BTreeMap<(String, Decimal), Vec<SessionRecord>> = BTreeMap::new();

        for entry in entries {
            if !Self::belongs_to(&entry, professional_id, period) {
                warn!(
                    "Skipping session {} ({} {}-{}): outside requested professional/period {} {}",
                    entry.id, entry.professional_id, entry.year, entry.month, professional_id, period
                );
                continue;
            }
            grouped
                .entry((entry.child_id.clone(), entry.module_value.normalize()))
                .or_default()
                .push(entry.record());
        }

        let mut figures = Vec::with_capacity(grouped.len());
        for ((child_id, module_value), records) in grouped {
            let sessions = SessionInput::Records(records);
            let total_amount = try_calculate_monthly_total(&sessions, module_value, policy)?;
            figures.push(MonthlyFigure {
                professional_id: professional_id.to_string(),
                child_id,
                month: period.month(),
                year: period.year(),
                session_count: try_effective_session_count(&sessions, policy)?,
                module_value,
                total_amount,
            });
        }
        Ok(figures)
    }
}

impl BillingServiceTrait for BillingService {
    fn monthly_figures(
        &self,
        professional_id: &str,
        period: BillingPeriod,
    ) -> Result<Vec<MonthlyFigure>> {
        debug!(
            "Computing monthly figures for professional {} in {}",
            professional_id, period
        );
        let entries = self
            .session_repository
            .get_sessions_for_period(professional_id, period)?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }
        self.fold_entries(professional_id, period, entries)
    }

    fn monthly_total(&self, professional_id: &str, period: BillingPeriod) -> Result<Decimal> {
        let figures = self.monthly_figures(professional_id, period)?;
        figures.iter().try_fold(Decimal::ZERO, |total, figure| {
            total
                .checked_add(figure.total_amount)
                .ok_or_else(|| invalid_input("monthly total overflows"))
        })
    }
}
