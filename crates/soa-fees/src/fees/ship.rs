use super::recompute::{Binding, Derivation, Phase, RuleInputs, Updates};
use super::tables::{ship_row, ShipRow};
use serde::Serialize;

/// Fee formula selected by a ship station sub-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipTransaction {
    NewWithEquipment,
    NewWithoutEquipment,
    Renewal,
    RenewalWithEquipment,
    LateRenewalHalf,
    LateRenewalFull,
    Modification,
    ModificationAddEquipment,
    Purchase,
    Possess,
    PurchasePossess,
    Inspection,
    ConstructionPermit,
    Deletion,
    Duplicate,
}

impl ShipTransaction {
    pub const CODES: &'static [(&'static str, ShipTransaction)] = &[
        ("A1-DOM-NEW-WITH-EQ", Self::NewWithEquipment),
        ("A2-DOM-NEW-NO-EQ", Self::NewWithoutEquipment),
        ("B1-DOM-RENEWAL", Self::Renewal),
        ("B2-DOM-RENEWAL-WITH-EQ", Self::RenewalWithEquipment),
        ("B3-DOM-RENEWAL-LATE-HALF", Self::LateRenewalHalf),
        ("B4-DOM-RENEWAL-LATE-FULL", Self::LateRenewalFull),
        ("C1-MOD", Self::Modification),
        ("C2-MOD-ADD-EQ", Self::ModificationAddEquipment),
        ("D1-PURCHASE", Self::Purchase),
        ("D2-POSSESS", Self::Possess),
        ("D3-PURCHASE-POSSESS", Self::PurchasePossess),
        ("E1-INSPECTION", Self::Inspection),
        ("E2-CONSTRUCTION-PERMIT", Self::ConstructionPermit),
        ("F1-DELETION", Self::Deletion),
        ("F2-DUPLICATE", Self::Duplicate),
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::CODES
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, transaction)| *transaction)
    }
}

/// Fees asserted for one ship station evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipAssessment {
    pub license_fee: f64,
    pub tax: f64,
}

pub fn assess(
    sub_type: &str,
    row: &ShipRow,
    years: f64,
    units: f64,
    surcharge: f64,
) -> ShipAssessment {
    let equipment = (row.purchase_fee + row.possession_fee) * units;
    let annual = row.license_fee * years + row.inspection_fee * years;

    let mut license_fee = 0.0;
    if let Some(transaction) = ShipTransaction::from_code(sub_type) {
        license_fee = match transaction {
            ShipTransaction::NewWithEquipment => {
                equipment + row.construction_permit_fee + annual + row.tax
            }
            ShipTransaction::NewWithoutEquipment => row.construction_permit_fee + annual + row.tax,
            ShipTransaction::Renewal => annual + row.tax + surcharge,
            ShipTransaction::RenewalWithEquipment => {
                row.possession_fee * units + annual + row.tax + surcharge
            }
            ShipTransaction::LateRenewalHalf => annual + row.tax + row.surcharge_half,
            ShipTransaction::LateRenewalFull => annual + row.tax + row.surcharge_full,
            ShipTransaction::Modification => row.modification_fee + row.tax,
            ShipTransaction::ModificationAddEquipment => {
                row.modification_fee + equipment + row.tax
            }
            ShipTransaction::Purchase => row.purchase_fee * units + row.tax,
            ShipTransaction::Possess => row.possession_fee * units + row.tax,
            ShipTransaction::PurchasePossess => equipment + row.tax,
            ShipTransaction::Inspection => row.inspection_fee * years + row.tax,
            ShipTransaction::ConstructionPermit => row.construction_permit_fee + row.tax,
            ShipTransaction::Deletion => {
                row.filing_fee * row.certificate_multiplier.unwrap_or(1.0) + row.tax
            }
            ShipTransaction::Duplicate => row.filing_fee + row.tax,
        };
    }

    ShipAssessment {
        license_fee,
        tax: row.tax,
    }
}

static SHIP_BINDINGS: &[Binding] = &[
    Binding::required("subType", &["shipSubType", "msSubType", "shipTxnType"]),
    Binding::required("category", &["shipCategory", "msCategory", "shipClass"]),
    Binding::required(
        "years",
        &["shipYears", "msYears", "years", "numberOfYears", "periodYears"],
    ),
    Binding::required("units", &["shipUnits", "msUnits", "units", "noOfUnits"]),
    Binding::watched("surcharge", &["shipSurcharge", "msSurcharge"]),
    Binding::output("licenseFee", &["licRadioStationLicense"]),
    Binding::output("tax", &["dst"]),
];

/// Ship station licence fees. A category with no table row asserts nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShipStationRule;

impl Derivation for ShipStationRule {
    fn name(&self) -> &'static str {
        "ship-station"
    }

    fn bindings(&self) -> &'static [Binding] {
        SHIP_BINDINGS
    }

    fn derive(&self, inputs: &RuleInputs<'_>, _phase: Phase) -> Updates {
        let Some(row) = ship_row(&inputs.code("category")) else {
            return Updates::default();
        };

        let assessment = assess(
            &inputs.code("subType"),
            &row,
            inputs.number("years"),
            inputs.number("units"),
            inputs.number("surcharge"),
        );

        Updates::default()
            .with("licenseFee", assessment.license_fee)
            .with("tax", assessment.tax)
    }
}
