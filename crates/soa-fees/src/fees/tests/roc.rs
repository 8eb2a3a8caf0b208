use super::common::*;
use crate::fees::tables::{roc_row, ROC_TABLE};
use crate::fees::{assess_roc, wire, RocRule, RocTransaction};
use crate::form::FieldValue;

#[test]
fn commercial_new_certificate_scales_with_years() {
    let store = roc_form("RTG 1st", "COMM-NEW", 2.0);

    wire(&store, RocRule).expect("roc rule wires");

    assert_eq!(store.number("amRadioOperatorsCert"), 390.0);
    assert_eq!(store.number("dst"), 30.0);
    assert_eq!(store.get("amFilingFee"), Some(FieldValue::Number(0.0)));
    assert_eq!(store.get("amSeminarFee"), Some(FieldValue::Number(0.0)));
}

#[test]
fn operator_licence_new_charges_filing_and_seminar() {
    let store = roc_form("SROP", "SROP-NEW", 1.0);

    wire(&store, RocRule).expect("roc rule wires");

    assert_eq!(store.number("amRadioOperatorsCert"), 170.0);
    assert_eq!(store.number("amFilingFee"), 20.0);
    assert_eq!(store.number("amSeminarFee"), 60.0);
    assert_eq!(store.number("dst"), 30.0);
}

#[test]
fn switching_class_clears_filing_and_seminar_fees() {
    let store = roc_form("SROP", "SROP-NEW", 1.0);
    wire(&store, RocRule).expect("roc rule wires");
    assert_eq!(store.number("amFilingFee"), 20.0);

    set(&store, "rocClass", "RTG 1st");
    set(&store, "rocSubType", "COMM-NEW");

    assert_eq!(store.number("amRadioOperatorsCert"), 210.0);
    assert_eq!(store.get("amFilingFee"), Some(FieldValue::Number(0.0)));
    assert_eq!(store.get("amSeminarFee"), Some(FieldValue::Number(0.0)));
}

#[test]
fn operator_licence_without_seminar_charges_auxiliary_fee() {
    let row = roc_row("GROC").expect("row present");

    let assessment = assess_roc("GROC-NEW", &row, 2.0, 0.0);

    assert_eq!(assessment.certificate_fee, 20.0 + 20.0 + 120.0 + 30.0);
    assert_eq!(assessment.seminar_fee, None);
}

#[test]
fn renewal_follows_live_surcharge() {
    let store = roc_form("PHN 2nd", "PHN-RENEWAL", 3.0);
    wire(&store, RocRule).expect("roc rule wires");
    assert_eq!(store.number("amRadioOperatorsCert"), 330.0);

    set(&store, "rocSurcharge", "45");

    assert_eq!(store.number("amRadioOperatorsCert"), 375.0);
}

#[test]
fn temporary_certificate_ignores_years() {
    let row = roc_row("RTG 3rd").expect("row present");

    let one = assess_roc("COMM-TEMP", &row, 1.0, 0.0);
    let five = assess_roc("TEMP-FOREIGN", &row, 5.0, 0.0);

    assert_eq!(one.certificate_fee, 90.0);
    assert_eq!(five.certificate_fee, 90.0);
}

#[test]
fn modification_uses_class_modification_fee() {
    let store = roc_form("RTG 2nd", "COMM-MOD", 4.0);

    wire(&store, RocRule).expect("roc rule wires");

    assert_eq!(store.number("amRadioOperatorsCert"), 150.0);
}

#[test]
fn recomputing_with_identical_inputs_is_stable() {
    for (class, row) in ROC_TABLE {
        for code in RocTransaction::CODES {
            let first = assess_roc(code, row, 2.0, 15.0);
            let second = assess_roc(code, row, 2.0, 15.0);
            assert_eq!(first, second, "{class} / {code}");
        }
    }

    let store = roc_form("RTG 1st", "COMM-RENEWAL", 2.0);
    wire(&store, RocRule).expect("roc rule wires");
    let before = store.snapshot();
    set(&store, "rocYears", 2.0);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn unknown_sub_type_replaces_previous_fee() {
    let store = roc_form("RTG 1st", "COMM-NEW", 2.0);
    wire(&store, RocRule).expect("roc rule wires");
    assert_eq!(store.number("amRadioOperatorsCert"), 390.0);

    set(&store, "rocSubType", "COMM-UNKNOWN");

    assert_eq!(store.get("amRadioOperatorsCert"), Some(FieldValue::Number(0.0)));
    assert_eq!(store.number("dst"), 30.0);
}

#[test]
fn unknown_class_zeroes_outputs_after_a_change() {
    let store = roc_form("SROP", "SROP-NEW", 2.0);
    wire(&store, RocRule).expect("roc rule wires");
    assert_eq!(store.number("amSeminarFee"), 60.0);

    set(&store, "rocClass", "RTG 9th");
    for field in ["amRadioOperatorsCert", "dst", "amFilingFee", "amSeminarFee"] {
        assert_eq!(store.get(field), Some(FieldValue::Number(0.0)), "{field}");
    }

    for years in [1.0, 5.0] {
        set(&store, "rocYears", years);
        assert_eq!(store.number("amRadioOperatorsCert"), 0.0);
        assert_eq!(store.number("dst"), 0.0);
    }
}

#[test]
fn blank_class_writes_nothing_while_wiring() {
    let store = roc_form("", "COMM-NEW", 2.0);

    let wired = wire(&store, RocRule).expect("roc rule wires");

    assert_eq!(wired.evaluations(), 1);
    assert_eq!(store.get("amRadioOperatorsCert"), Some(FieldValue::Empty));
    assert_eq!(store.get("dst"), Some(FieldValue::Empty));
}

#[test]
fn form_without_a_years_field_never_wires() {
    let store = form_with(&[
        ("rocClass", FieldValue::text("RTG 1st")),
        ("rocSubType", FieldValue::text("COMM-NEW")),
        ("amRadioOperatorsCert", FieldValue::Empty),
        ("dst", FieldValue::Empty),
    ]);

    let unwired = wire(&store, RocRule).expect_err("years cannot resolve");

    assert_eq!(unwired.missing, vec!["years"]);
    assert_eq!(store.get("amRadioOperatorsCert"), Some(FieldValue::Empty));
    set(&store, "rocClass", "RTG 2nd");
    assert_eq!(store.get("dst"), Some(FieldValue::Empty));
}

#[test]
fn every_catalogue_code_selects_a_formula() {
    for code in RocTransaction::CODES {
        assert!(RocTransaction::from_code(code).is_some(), "{code}");
    }
    assert_eq!(
        RocTransaction::from_code(" RLM-NEW "),
        Some(RocTransaction::OperatorNew)
    );
    assert_eq!(RocTransaction::from_code("comm-new"), None);
}
