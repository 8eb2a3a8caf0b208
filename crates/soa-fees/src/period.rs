//! Whole years covered by the SOA period.

use crate::fees::{Binding, Derivation, Phase, RuleInputs, Updates};
use crate::form::FieldValue;
use chrono::{Datelike, NaiveDate};

/// Completed years from `from` to `to`, never negative.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

static PERIOD_BINDINGS: &[Binding] = &[
    Binding::required("from", &["periodFrom", "dateFrom"]),
    Binding::required("to", &["periodTo", "dateTo"]),
    Binding::output("years", &["periodYears"]),
];

/// Keeps `periodYears` in step with the period range; empty while either date is missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PeriodRule;

impl Derivation for PeriodRule {
    fn name(&self) -> &'static str {
        "period"
    }

    fn bindings(&self) -> &'static [Binding] {
        PERIOD_BINDINGS
    }

    fn derive(&self, inputs: &RuleInputs<'_>, _phase: Phase) -> Updates {
        let years = match (inputs.date("from"), inputs.date("to")) {
            (Some(from), Some(to)) => FieldValue::from(years_between(from, to)),
            _ => FieldValue::Empty,
        };
        Updates::default().with("years", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::wire;
    use crate::form::FieldStore;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn counts_completed_years_only() {
        assert_eq!(years_between(date(2024, 3, 15), date(2027, 3, 15)), 3);
        assert_eq!(years_between(date(2024, 3, 15), date(2027, 3, 14)), 2);
        assert_eq!(years_between(date(2024, 3, 15), date(2027, 2, 28)), 2);
        assert_eq!(years_between(date(2024, 3, 15), date(2024, 12, 31)), 0);
    }

    #[test]
    fn reversed_range_clamps_to_zero() {
        assert_eq!(years_between(date(2027, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn rule_tracks_both_dates() {
        let store = FieldStore::new();
        store.create_if_missing("periodFrom", "");
        store.create_if_missing("periodTo", "");
        store.create_if_missing("periodYears", FieldValue::Empty);
        wire(&store, PeriodRule).expect("period rule wires");

        store.set("periodFrom", "2025-01-01").expect("field exists");
        assert_eq!(store.get("periodYears"), Some(FieldValue::Empty));

        store.set("periodTo", "2028-01-01").expect("field exists");
        assert_eq!(store.number("periodYears"), 3.0);

        store.set("periodTo", "not a date").expect("field exists");
        assert_eq!(store.get("periodYears"), Some(FieldValue::Empty));
    }
}
