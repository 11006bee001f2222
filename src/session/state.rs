use super::action::Action;
use crate::allocation::set_allocation;
use crate::core::{
    ActivityLog, ActivityRecord, AllocationSet, ForecastPair, PerformanceLog, PerformancePoint,
};
use crate::forecast::sanitize_cpa;
use crate::scoring::{composite_improvement, ChannelRateTable};
use std::sync::Arc;
use tracing::debug;

/// Immutable dashboard state.
///
/// Updates go through [`Session::apply`], which returns a new session and
/// leaves the receiver unchanged. Cloning is cheap: the rate table is shared
/// and both logs are persistent vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    allocation: AllocationSet,
    rates: Arc<ChannelRateTable>,
    performance: PerformanceLog,
    activity: ActivityLog,
}

impl Session {
    pub fn new(allocation: AllocationSet, rates: ChannelRateTable, baseline: PerformancePoint) -> Self {
        Self {
            allocation,
            rates: Arc::new(rates),
            performance: PerformanceLog::new(baseline),
            activity: ActivityLog::new(),
        }
    }

    pub fn allocation(&self) -> AllocationSet {
        self.allocation
    }

    pub fn rates(&self) -> &ChannelRateTable {
        &self.rates
    }

    pub fn performance(&self) -> &PerformanceLog {
        &self.performance
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Composite improvement of the current allocation.
    pub fn composite_improvement(&self) -> f64 {
        composite_improvement(&self.allocation, &self.rates)
    }

    /// Apply one action and return the resulting session.
    pub fn apply(&self, action: &Action) -> Session {
        debug!(action = action.kind(), "Applying dashboard action");
        match action {
            Action::SetAllocation { channel, value } => Session {
                allocation: set_allocation(self.allocation, *channel, *value),
                ..self.clone()
            },
            Action::ApplyImprovement {
                label,
                improvement_pct,
                suggested,
                implemented,
                requested,
            } => self.improved(
                label,
                *improvement_pct,
                activity_record(label, suggested, implemented, requested),
            ),
            Action::ApplyComposite {
                label,
                suggested,
                implemented,
                requested,
            } => self.improved(
                label,
                self.composite_improvement(),
                activity_record(label, suggested, implemented, requested),
            ),
            Action::RecordActuals {
                label,
                cpa,
                conversions,
            } => Session {
                performance: self
                    .performance
                    .record_actuals(label.as_str(), ForecastPair::new(sanitize_cpa(*cpa), *conversions)),
                ..self.clone()
            },
        }
    }

    fn improved(&self, label: &str, improvement_pct: f64, record: ActivityRecord) -> Session {
        let performance = self.performance.chain_forecast(label, improvement_pct);
        let next = performance.latest().forecast();
        debug!(
            label,
            improvement_pct,
            forecast_cpa = next.cpa,
            forecast_conversions = next.conversions,
            "Chained forecast"
        );
        Session {
            performance,
            activity: self.activity.appended(record),
            ..self.clone()
        }
    }
}

fn activity_record(
    label: &str,
    suggested: &[String],
    implemented: &[String],
    requested: &[String],
) -> ActivityRecord {
    ActivityRecord {
        suggested_texts: suggested.to_vec(),
        implemented_texts: implemented.to_vec(),
        requested_texts: requested.to_vec(),
        ..ActivityRecord::new(label)
    }
}

/// Fold `actions` over `session` in order.
pub fn replay<'a, I>(session: Session, actions: I) -> Session
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(session, |state, action| state.apply(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Channel;

    fn session() -> Session {
        Session::new(
            AllocationSet::new(25, 25, 25, 25),
            ChannelRateTable::default(),
            PerformancePoint::baseline("Week 1", 80.0, 50),
        )
    }

    #[test]
    fn test_apply_does_not_mutate_receiver() {
        let start = session();
        let next = start.apply(&Action::set_allocation(Channel::Ooh, 100.0));
        assert_eq!(start.allocation(), AllocationSet::new(25, 25, 25, 25));
        assert_eq!(next.allocation(), AllocationSet::new(100, 0, 0, 0));
    }

    #[test]
    fn test_apply_improvement_appends_point_and_record() {
        let next = session().apply(&Action::apply_improvement("Bid tuning", 10.0));
        assert_eq!(next.performance().len(), 2);
        assert_eq!(next.activity().len(), 1);
        assert_eq!(next.performance().latest().forecast(), ForecastPair::new(72.0, 55));
        assert_eq!(next.activity().latest().map(|r| r.label.as_str()), Some("Bid tuning"));
    }

    #[test]
    fn test_apply_composite_uses_current_allocation() {
        let start = session().apply(&Action::set_allocation(Channel::Digital, 100.0));
        assert_eq!(start.composite_improvement(), 12.0);

        let next = start.apply(&Action::apply_composite("Rebalance"));
        // 80 * 0.88 = 70.4, 50 * 1.12 = 56
        assert_eq!(next.performance().latest().forecast(), ForecastPair::new(70.4, 56));
    }

    #[test]
    fn test_record_actuals_adds_no_activity() {
        let next = session().apply(&Action::record_actuals("Week 2", 70.0, 60));
        assert_eq!(next.activity().len(), 0);
        assert_eq!(next.performance().latest().actual(), ForecastPair::new(70.0, 60));
        assert_eq!(next.performance().latest().forecast(), ForecastPair::new(80.0, 50));
    }

    #[test]
    fn test_record_actuals_sanitizes_cpa() {
        for bad in [f64::NAN, f64::INFINITY, -12.5] {
            let next = session().apply(&Action::record_actuals("Week 2", bad, 60));
            assert_eq!(next.performance().latest().actual(), ForecastPair::new(0.0, 60));
        }
    }

    #[test]
    fn test_activity_record_keeps_all_texts() {
        let next = session().apply(&Action::ApplyComposite {
            label: "Rebalance".to_string(),
            suggested: vec!["a".to_string()],
            implemented: vec!["b".to_string()],
            requested: vec!["c".to_string()],
        });
        let record = next.activity().latest().unwrap();
        assert_eq!(record.label, "Rebalance");
        assert_eq!(record.suggested_texts, vec!["a".to_string()]);
        assert_eq!(record.implemented_texts, vec!["b".to_string()]);
        assert_eq!(record.requested_texts, vec!["c".to_string()]);
    }

    #[test]
    fn test_replay_folds_in_order() {
        let actions = vec![
            Action::set_allocation(Channel::Tv, 40.0),
            Action::apply_improvement("First", 10.0),
            Action::apply_improvement("Second", 10.0),
        ];
        let end = replay(session(), &actions);
        let labels: Vec<_> = end.activity().iter().map(|r| r.label.clone()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
        assert_eq!(end.performance().len(), 3);
        assert_eq!(end.allocation().get(Channel::Tv), 40);
    }
}
