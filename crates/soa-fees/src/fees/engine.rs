use super::amateur::AmateurRule;
use super::recompute::{wire, Derivation, Unwired, WiredRule};
use super::roc::RocRule;
use super::schedule::AmateurScheduleRule;
use super::ship::ShipStationRule;
use super::total::TotalAggregator;
use crate::form::FieldStore;
use crate::period::PeriodRule;
use serde::Serialize;
use std::cell::Cell;
use tracing::info;

/// Wiring outcome for one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleStatus {
    pub rule: &'static str,
    pub wired: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<&'static str>,
}

/// Every fee rule and the statement total wired against one form.
///
/// Subscriptions live until [`FeeEngine::dispose`] is called or the engine is dropped.
#[derive(Debug)]
pub struct FeeEngine {
    rules: Vec<WiredRule>,
    statuses: Vec<RuleStatus>,
    total: TotalAggregator,
    disposed: Cell<bool>,
}

impl FeeEngine {
    pub fn wire(store: &FieldStore) -> Self {
        // Period first so the initial ROC, amateur, and ship evaluations see the derived years.
        let outcomes = [
            wire(store, PeriodRule),
            wire(store, AmateurScheduleRule),
            wire(store, RocRule),
            wire(store, AmateurRule),
            wire(store, ShipStationRule),
        ];

        let mut rules = Vec::new();
        let mut statuses = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(wired) => {
                    statuses.push(RuleStatus {
                        rule: wired.name(),
                        wired: true,
                        missing: Vec::new(),
                    });
                    rules.push(wired);
                }
                Err(Unwired { rule, missing }) => statuses.push(RuleStatus {
                    rule,
                    wired: false,
                    missing,
                }),
            }
        }

        let total = TotalAggregator::wire(store);

        info!(
            wired = rules.len(),
            unwired = statuses.len() - rules.len(),
            "fee engine ready"
        );

        Self {
            rules,
            statuses,
            total,
            disposed: Cell::new(false),
        }
    }

    pub fn status(&self) -> &[RuleStatus] {
        &self.statuses
    }

    pub fn is_wired<D: Derivation>(&self, rule: &D) -> bool {
        self.rule(rule.name()).is_some()
    }

    pub fn rule(&self, name: &str) -> Option<&WiredRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn total(&self) -> &TotalAggregator {
        &self.total
    }

    pub fn total_recomputations(&self) -> u64 {
        self.total.recomputations()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Cancels every subscription. Safe to call more than once.
    pub fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        for rule in &self.rules {
            rule.cancel();
        }
        self.total.cancel();
        info!("fee engine disposed");
    }
}

impl Drop for FeeEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}
