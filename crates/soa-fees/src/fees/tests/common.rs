use crate::form::{FieldStore, FieldValue};

pub(super) fn form_with(fields: &[(&str, FieldValue)]) -> FieldStore {
    let store = FieldStore::new();
    for (name, initial) in fields {
        store.create_if_missing(name, initial.clone());
    }
    store
}

pub(super) fn roc_form(class: &str, sub_type: &str, years: f64) -> FieldStore {
    form_with(&[
        ("rocClass", FieldValue::text(class)),
        ("rocSubType", FieldValue::text(sub_type)),
        ("rocYears", FieldValue::Number(years)),
        ("rocSurcharge", FieldValue::Empty),
        ("amRadioOperatorsCert", FieldValue::Empty),
        ("dst", FieldValue::Empty),
        ("amFilingFee", FieldValue::Empty),
        ("amSeminarFee", FieldValue::Empty),
    ])
}

pub(super) fn amateur_form(class: &str, sub_type: &str, years: f64) -> FieldStore {
    form_with(&[
        ("atClass", FieldValue::text(class)),
        ("atSubType", FieldValue::text(sub_type)),
        ("atYears", FieldValue::Number(years)),
        ("atFilingFee", FieldValue::Empty),
        ("atLicenseFee", FieldValue::Empty),
        ("atSurcharge", FieldValue::Empty),
        ("atTax", FieldValue::Empty),
        ("atModificationFee", FieldValue::Empty),
        ("atConstructionPermitFee", FieldValue::Empty),
        ("atPermitFee", FieldValue::Empty),
        ("atPurchaseFee", FieldValue::Empty),
        ("atPossessionFee", FieldValue::Empty),
        ("amRadioStationLicense", FieldValue::Empty),
    ])
}

pub(super) fn ship_form(category: &str, sub_type: &str, years: f64, units: f64) -> FieldStore {
    form_with(&[
        ("shipCategory", FieldValue::text(category)),
        ("shipSubType", FieldValue::text(sub_type)),
        ("shipYears", FieldValue::Number(years)),
        ("shipUnits", FieldValue::Number(units)),
        ("shipSurcharge", FieldValue::Empty),
        ("licRadioStationLicense", FieldValue::Empty),
        ("dst", FieldValue::Empty),
    ])
}

pub(super) fn set(store: &FieldStore, field: &str, value: impl Into<FieldValue>) {
    store
        .set(field, value)
        .unwrap_or_else(|err| panic!("cannot set {field}: {err}"));
}
