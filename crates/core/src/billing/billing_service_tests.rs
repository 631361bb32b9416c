//! Unit tests for the billing service.

use super::*;
use crate::errors::{Error, Result};
use crate::settings::{BillingSettings, SessionCountPolicy};
use crate::utils::BillingPeriod;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockSessionRepository {
    entries: Vec<SessionEntry>,
}

impl MockSessionRepository {
    fn new(entries: Vec<SessionEntry>) -> Self {
        Self { entries }
    }
}

impl SessionRepositoryTrait for MockSessionRepository {
    fn get_sessions_for_period(
        &self,
        _professional_id: &str,
        _period: BillingPeriod,
    ) -> Result<Vec<SessionEntry>> {
        Ok(self.entries.clone())
    }
}

struct FailingSessionRepository;

impl SessionRepositoryTrait for FailingSessionRepository {
    fn get_sessions_for_period(
        &self,
        _professional_id: &str,
        _period: BillingPeriod,
    ) -> Result<Vec<SessionEntry>> {
        Err(Error::Repository("connection reset".to_string()))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn march() -> BillingPeriod {
    BillingPeriod::new(3, 2025).unwrap()
}

fn entry(id: &str, child_id: &str, count: Option<i64>, module_value: Decimal) -> SessionEntry {
    SessionEntry {
        id: id.to_string(),
        professional_id: "prof-1".to_string(),
        child_id: child_id.to_string(),
        month: 3,
        year: 2025,
        count,
        module_value,
    }
}

fn service_with(entries: Vec<SessionEntry>, policy: SessionCountPolicy) -> BillingService {
    let settings = BillingSettings {
        session_count_policy: policy,
        ..BillingSettings::default()
    };
    BillingService::new(
        Arc::new(MockSessionRepository::new(entries)),
        Arc::new(settings),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_no_sessions_yields_no_figures() {
    let service = service_with(vec![], SessionCountPolicy::Explicit);
    assert!(service.monthly_figures("prof-1", march()).unwrap().is_empty());
    assert_eq!(service.monthly_total("prof-1", march()).unwrap(), Decimal::ZERO);
}

#[test]
fn test_figures_grouped_per_child_in_child_order() {
    let service = service_with(
        vec![
            entry("s1", "child-b", Some(2), dec!(20000)),
            entry("s2", "child-a", Some(3), dec!(15000)),
            entry("s3", "child-b", None, dec!(20000)),
        ],
        SessionCountPolicy::Explicit,
    );

    let figures = service.monthly_figures("prof-1", march()).unwrap();
    assert_eq!(figures.len(), 2);

    assert_eq!(figures[0].child_id, "child-a");
    assert_eq!(figures[0].session_count, 3);
    assert_eq!(figures[0].total_amount, dec!(45000));

    assert_eq!(figures[1].child_id, "child-b");
    assert_eq!(figures[1].session_count, 3);
    assert_eq!(figures[1].total_amount, dec!(60000));

    for figure in &figures {
        assert_eq!(
            figure.total_amount,
            Decimal::from(figure.session_count) * figure.module_value
        );
        assert_eq!(figure.period().unwrap(), march());
    }

    assert_eq!(service.monthly_total("prof-1", march()).unwrap(), dec!(105000));
}

#[test]
fn test_distinct_module_values_split_figures() {
    let service = service_with(
        vec![
            entry("s1", "child-a", Some(2), dec!(15000)),
            entry("s2", "child-a", Some(1), dec!(18000)),
            entry("s3", "child-a", Some(1), dec!(15000.00)),
        ],
        SessionCountPolicy::Explicit,
    );

    let figures = service.monthly_figures("prof-1", march()).unwrap();
    assert_eq!(figures.len(), 2);
    assert_eq!(figures[0].module_value, dec!(15000));
    assert_eq!(figures[0].session_count, 3);
    assert_eq!(figures[1].module_value, dec!(18000));
    assert_eq!(figures[1].session_count, 1);
}

#[test]
fn test_zero_count_follows_policy() {
    let entries = vec![
        entry("s1", "child-a", Some(0), dec!(1000)),
        entry("s2", "child-a", None, dec!(1000)),
        entry("s3", "child-a", Some(1), dec!(1000)),
    ];

    let explicit = service_with(entries.clone(), SessionCountPolicy::Explicit);
    assert_eq!(explicit.monthly_total("prof-1", march()).unwrap(), dec!(2000));

    let legacy = service_with(entries, SessionCountPolicy::Legacy);
    assert_eq!(legacy.monthly_total("prof-1", march()).unwrap(), dec!(3000));
}

#[test]
fn test_rows_outside_period_or_professional_are_skipped() {
    let mut other_month = entry("s2", "child-a", Some(5), dec!(1000));
    other_month.month = 4;
    let mut other_prof = entry("s3", "child-a", Some(7), dec!(1000));
    other_prof.professional_id = "prof-2".to_string();

    let service = service_with(
        vec![entry("s1", "child-a", Some(1), dec!(1000)), other_month, other_prof],
        SessionCountPolicy::Explicit,
    );
    assert_eq!(service.monthly_total("prof-1", march()).unwrap(), dec!(1000));
}

#[test]
fn test_negative_values_are_rejected() {
    let service = service_with(
        vec![entry("s1", "child-a", Some(-2), dec!(1000))],
        SessionCountPolicy::Explicit,
    );
    assert!(matches!(
        service.monthly_figures("prof-1", march()),
        Err(Error::Validation(_))
    ));

    let service = service_with(
        vec![entry("s1", "child-a", Some(2), dec!(-1000))],
        SessionCountPolicy::Explicit,
    );
    assert!(matches!(
        service.monthly_figures("prof-1", march()),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_monthly_total_overflow_is_an_error() {
    let service = service_with(
        vec![
            entry("s1", "child-a", Some(1), Decimal::MAX),
            entry("s2", "child-b", Some(1), Decimal::MAX),
        ],
        SessionCountPolicy::Explicit,
    );
    assert!(matches!(
        service.monthly_total("prof-1", march()),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_session_count_overflow_is_an_error() {
    let service = service_with(
        vec![
            entry("s1", "child-a", Some(i64::MAX), dec!(1)),
            entry("s2", "child-a", Some(1), dec!(1)),
        ],
        SessionCountPolicy::Explicit,
    );
    assert!(matches!(
        service.monthly_figures("prof-1", march()),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_repository_errors_propagate() {
    let service = BillingService::new(
        Arc::new(FailingSessionRepository),
        Arc::new(BillingSettings::default()),
    );
    assert!(matches!(
        service.monthly_total("prof-1", march()),
        Err(Error::Repository(_))
    ));
}
