use super::store::FieldStore;
use super::value::FieldValue;

/// Header, flag, and sign-off fields of the SOA page with their initial values.
const HEADER_FIELDS: &[(&str, Initial)] = &[
    ("id", Initial::Empty),
    ("isMobileLicensing", Initial::Flag(true)),
    ("soaSeries", Initial::Blank),
    ("seriesNumber", Initial::Blank),
    ("date", Initial::Blank),
    ("payorName", Initial::Blank),
    ("address", Initial::Blank),
    ("particulars", Initial::Blank),
    ("periodCovered", Initial::Blank),
    ("periodFrom", Initial::Blank),
    ("periodTo", Initial::Blank),
    ("periodYears", Initial::Empty),
    ("txnNew", Initial::Flag(true)),
    ("txnRenew", Initial::Flag(true)),
    ("txnModification", Initial::Flag(true)),
    ("txnCO", Initial::Flag(false)),
    ("txnCV", Initial::Flag(true)),
    ("catROC", Initial::Flag(true)),
    ("catMS", Initial::Flag(false)),
    ("catMA", Initial::Flag(false)),
    ("catOTHERS", Initial::Flag(false)),
    ("remarks", Initial::Blank),
    ("accounting", Initial::Blank),
    ("accountingPosition", Initial::Blank),
    ("opAssessmentOnly", Initial::Flag(false)),
    ("opEndorsedForPayment", Initial::Flag(false)),
    ("opNotePayOnOrBefore", Initial::Blank),
    ("preparedBy", Initial::Blank),
    ("approvedBy", Initial::Blank),
    ("opSeries", Initial::Blank),
    ("orNumber", Initial::Blank),
    ("datePaid", Initial::Blank),
];

/// Discriminators and live inputs consumed by the fee rules.
const RULE_INPUT_FIELDS: &[(&str, Initial)] = &[
    ("rocSubType", Initial::Blank),
    ("rocClass", Initial::Blank),
    ("rocSurcharge", Initial::Empty),
    ("atClass", Initial::Blank),
    ("atSubType", Initial::Blank),
    ("atFilingFee", Initial::Empty),
    ("atLicenseFee", Initial::Empty),
    ("atSurcharge", Initial::Empty),
    ("atTax", Initial::Empty),
    ("atModificationFee", Initial::Empty),
    ("atConstructionPermitFee", Initial::Empty),
    ("atPermitFee", Initial::Empty),
    ("atPurchaseFee", Initial::Empty),
    ("atPossessionFee", Initial::Empty),
    ("shipSubType", Initial::Blank),
    ("shipCategory", Initial::Blank),
    ("shipUnits", Initial::Empty),
    ("shipSurcharge", Initial::Empty),
];

/// Monetary lines printed on the statement, in page order.
pub const MONETARY_FIELDS: &[&str] = &[
    "licPermitToPurchase",
    "licFilingFee",
    "licPermitToPossess",
    "licConstructionPermitFee",
    "licRadioStationLicense",
    "licInspectionFee",
    "licSUF",
    "licFinesPenalties",
    "licSurcharges",
    "appRegistrationFee",
    "appSupervisionRegulationFee",
    "appVerificationAuthFee",
    "appExaminationFee",
    "appClearanceCertificationFee",
    "appModificationFee",
    "appMiscIncome",
    "appOthers",
    "perPermitFees",
    "perInspectionFee",
    "perFilingFee",
    "perSurcharges",
    "amRadioStationLicense",
    "amRadioOperatorsCert",
    "amApplicationFee",
    "amFilingFee",
    "amSeminarFee",
    "amSurcharges",
    "dst",
];

#[derive(Debug, Clone, Copy)]
enum Initial {
    Empty,
    Blank,
    Flag(bool),
}

impl Initial {
    fn value(self) -> FieldValue {
        match self {
            Initial::Empty => FieldValue::Empty,
            Initial::Blank => FieldValue::text(""),
            Initial::Flag(flag) => FieldValue::Bool(flag),
        }
    }
}

/// Builds a store holding every field the SOA page defines.
pub fn standard_form() -> FieldStore {
    let store = FieldStore::new();

    for (name, initial) in HEADER_FIELDS.iter().chain(RULE_INPUT_FIELDS) {
        store.create_if_missing(name, initial.value());
    }
    for name in MONETARY_FIELDS {
        store.create_if_missing(name, FieldValue::Empty);
    }
    store.create_if_missing("totalAmount", FieldValue::Empty);

    store
}
