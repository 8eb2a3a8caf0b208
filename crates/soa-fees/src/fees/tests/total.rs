use super::common::*;
use crate::fees::{sum_fields, TotalAggregator, TOTAL_FIELD, TOTAL_FIELDS};
use crate::form::{standard_form, FieldStore, FieldValue};

static FIELDS: &[&str] = &["a", "b", "c", "d"];

#[test]
fn sums_mixed_values_treating_blanks_as_zero() {
    let store = form_with(&[
        ("a", FieldValue::Number(100.0)),
        ("b", FieldValue::text("50")),
        ("c", FieldValue::Empty),
        ("d", FieldValue::Number(20.0)),
    ]);

    let total = TotalAggregator::wire_fields(&store, FIELDS, "total");

    assert_eq!(store.number("total"), 170.0);
    assert_eq!(total.recomputations(), 1);
    assert_eq!(sum_fields(&store, FIELDS), 170.0);
}

#[test]
fn creates_missing_fields_at_zero() {
    let store = FieldStore::new();
    store.create_if_missing("b", "oops");

    TotalAggregator::wire_fields(&store, FIELDS, "total");

    for field in ["a", "c", "d"] {
        assert_eq!(store.get(field), Some(FieldValue::Number(0.0)), "{field}");
    }
    assert_eq!(store.get("b"), Some(FieldValue::text("oops")));
    assert_eq!(store.get("total"), Some(FieldValue::Number(0.0)));
}

#[test]
fn one_recompute_per_monetary_change() {
    let store = standard_form();
    let total = TotalAggregator::wire(&store);

    for (step, field) in TOTAL_FIELDS.iter().enumerate() {
        let before = total.recomputations();
        set(&store, field, 10.0);
        assert_eq!(total.recomputations(), before + 1, "{field}");
        assert_eq!(store.number(TOTAL_FIELD), 10.0 * (step + 1) as f64);
    }
}

#[test]
fn other_fields_leave_the_total_alone() {
    let store = standard_form();
    let total = TotalAggregator::wire(&store);
    set(&store, "licFilingFee", "180");
    let recomputations = total.recomputations();

    set(&store, "remarks", "500");
    set(&store, "shipUnits", 4.0);
    set(&store, TOTAL_FIELD, 1.0);

    assert_eq!(total.recomputations(), recomputations);
    assert_eq!(store.number(TOTAL_FIELD), 1.0);

    set(&store, "licFilingFee", "200");
    assert_eq!(store.number(TOTAL_FIELD), 200.0);
}

#[test]
fn cancelled_total_goes_quiet() {
    let store = standard_form();
    let total = TotalAggregator::wire(&store);

    total.cancel();
    total.cancel();
    set(&store, "dst", 30.0);

    assert!(!total.is_active());
    assert_eq!(total.recomputations(), 1);
    assert_eq!(store.number(TOTAL_FIELD), 0.0);
}
