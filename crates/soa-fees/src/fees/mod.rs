//! Fee derivation: formula tables, per-category rules, and the statement total.

mod amateur;
mod assessment;
mod engine;
mod recompute;
mod roc;
mod schedule;
mod ship;
pub mod tables;
mod total;

#[cfg(test)]
mod tests;

pub use amateur::{amateur_fee, AmateurFees, AmateurRule, AmateurTransaction};
pub use assessment::{Assessment, FeeLine};
pub use engine::{FeeEngine, RuleStatus};
pub use recompute::{
    wire, Binding, BindingKind, Derivation, Phase, RuleInputs, Unwired, Updates, WiredRule,
};
pub use roc::{assess as assess_roc, RocAssessment, RocRule, RocTransaction};
pub use schedule::AmateurScheduleRule;
pub use ship::{assess as assess_ship, ShipAssessment, ShipStationRule, ShipTransaction};
pub use total::{sum_fields, TotalAggregator, TOTAL_FIELD, TOTAL_FIELDS};
