use super::recompute::{Binding, Derivation, Phase, RuleInputs, Updates};
use serde::Serialize;

/// Fee formula selected by an amateur sub-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmateurTransaction {
    New,
    Renewal,
    Modification,
    PurchasePossess,
    ClubNew,
    ClubRenewal,
    ClubModification,
    Temporary,
    Vanity,
    Storage,
}

impl AmateurTransaction {
    /// Sub-type catalogue as `(series, code)`, in the order the page lists them.
    pub const CATALOGUE: &'static [(char, &'static str)] = &[
        ('A', "AT-ROC-NEW"),
        ('A', "AT-ROC-RENEWAL"),
        ('A', "AT-ROC-MOD"),
        ('B', "AT-RSL-NEW"),
        ('B', "AT-RSL-RENEWAL"),
        ('B', "AT-RSL-MOD"),
        ('C', "AT-PURCHASE"),
        ('C', "AT-POSSESS"),
        ('C', "AT-PURCHASE-POSSESS"),
        ('D', "AT-CLUB-NEW"),
        ('D', "AT-CLUB-RENEWAL"),
        ('D', "AT-CLUB-MOD"),
        ('E', "AT-TEMP"),
        ('E', "AT-TEMP-FOREIGN"),
        ('F', "AT-VANITY-NEW"),
        ('F', "AT-VANITY-RENEWAL"),
        ('G', "AT-STORAGE"),
        ('G', "AT-STORAGE-RENEWAL"),
        ('H', "AT-REPEATER-NEW"),
        ('H', "AT-REPEATER-RENEWAL"),
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "AT-ROC-NEW" | "AT-RSL-NEW" | "AT-REPEATER-NEW" => Some(Self::New),
            "AT-ROC-RENEWAL" | "AT-RSL-RENEWAL" | "AT-REPEATER-RENEWAL" => Some(Self::Renewal),
            "AT-ROC-MOD" | "AT-RSL-MOD" => Some(Self::Modification),
            "AT-PURCHASE" | "AT-POSSESS" | "AT-PURCHASE-POSSESS" => Some(Self::PurchasePossess),
            "AT-CLUB-NEW" => Some(Self::ClubNew),
            "AT-CLUB-RENEWAL" => Some(Self::ClubRenewal),
            "AT-CLUB-MOD" => Some(Self::ClubModification),
            "AT-TEMP" | "AT-TEMP-FOREIGN" => Some(Self::Temporary),
            "AT-VANITY-NEW" | "AT-VANITY-RENEWAL" => Some(Self::Vanity),
            "AT-STORAGE" | "AT-STORAGE-RENEWAL" => Some(Self::Storage),
            _ => None,
        }
    }
}

/// Live amateur fee inputs as read from the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AmateurFees {
    pub filing_fee: f64,
    pub license_fee: f64,
    pub surcharge: f64,
    pub tax: f64,
    pub modification_fee: f64,
    pub construction_permit_fee: f64,
    pub permit_fee: f64,
    pub purchase_fee: f64,
    pub possession_fee: f64,
}

pub fn amateur_fee(sub_type: &str, years: f64, fees: &AmateurFees) -> f64 {
    let Some(transaction) = AmateurTransaction::from_code(sub_type) else {
        return 0.0;
    };

    match transaction {
        AmateurTransaction::New => fees.license_fee * years + fees.tax,
        AmateurTransaction::Renewal | AmateurTransaction::ClubRenewal => {
            fees.license_fee * years + fees.tax + fees.surcharge
        }
        AmateurTransaction::Modification => fees.modification_fee + fees.tax,
        AmateurTransaction::PurchasePossess => fees.purchase_fee + fees.possession_fee + fees.tax,
        AmateurTransaction::ClubNew => {
            fees.filing_fee + fees.construction_permit_fee + fees.license_fee * years + fees.tax
        }
        AmateurTransaction::ClubModification => {
            fees.filing_fee + fees.construction_permit_fee + fees.modification_fee + fees.tax
        }
        AmateurTransaction::Temporary => {
            fees.filing_fee + fees.purchase_fee + fees.possession_fee + fees.tax
        }
        AmateurTransaction::Vanity => fees.permit_fee * years + fees.tax,
        AmateurTransaction::Storage => fees.possession_fee + fees.tax,
    }
}

// Shared with the schedule rule, which asserts these fields from the amateur table.
pub(crate) const FILING_FEE: &[&str] = &["atFilingFee", "amFilingFee"];
pub(crate) const LICENSE_FEE: &[&str] = &["atLicenseFee", "amLicenseFee"];
pub(crate) const SURCHARGE: &[&str] = &["atSurcharge", "amSurcharges"];
pub(crate) const TAX: &[&str] = &["atTax", "dst"];
pub(crate) const MODIFICATION_FEE: &[&str] = &["atModificationFee", "amModificationFee"];
pub(crate) const CONSTRUCTION_PERMIT_FEE: &[&str] =
    &["atConstructionPermitFee", "amConstructionPermitFee"];
pub(crate) const PERMIT_FEE: &[&str] = &["atPermitFee", "amPermitFee"];
pub(crate) const PURCHASE_FEE: &[&str] = &["atPurchaseFee", "amPurchaseFee"];
pub(crate) const POSSESSION_FEE: &[&str] = &["atPossessionFee", "amPossessionFee"];

static AMATEUR_BINDINGS: &[Binding] = &[
    Binding::required("subType", &["atSubType", "amSubType", "amateurSubType"]),
    Binding::required(
        "years",
        &["atYears", "amYears", "years", "numberOfYears", "periodYears"],
    ),
    Binding::required("filingFee", FILING_FEE),
    Binding::required("licenseFee", LICENSE_FEE),
    Binding::required("surcharge", SURCHARGE),
    Binding::required("tax", TAX),
    Binding::required("modificationFee", MODIFICATION_FEE),
    Binding::required("constructionPermitFee", CONSTRUCTION_PERMIT_FEE),
    Binding::required("permitFee", PERMIT_FEE),
    Binding::required("purchaseFee", PURCHASE_FEE),
    Binding::required("possessionFee", POSSESSION_FEE),
    Binding::output("result", &["amRadioStationLicense"]),
];

/// Amateur operator and station fees, charged to the amateur station licence line.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmateurRule;

impl Derivation for AmateurRule {
    fn name(&self) -> &'static str {
        "amateur"
    }

    fn bindings(&self) -> &'static [Binding] {
        AMATEUR_BINDINGS
    }

    fn derive(&self, inputs: &RuleInputs<'_>, _phase: Phase) -> Updates {
        let fees = AmateurFees {
            filing_fee: inputs.number("filingFee"),
            license_fee: inputs.number("licenseFee"),
            surcharge: inputs.number("surcharge"),
            tax: inputs.number("tax"),
            modification_fee: inputs.number("modificationFee"),
            construction_permit_fee: inputs.number("constructionPermitFee"),
            permit_fee: inputs.number("permitFee"),
            purchase_fee: inputs.number("purchaseFee"),
            possession_fee: inputs.number("possessionFee"),
        };

        let result = amateur_fee(&inputs.code("subType"), inputs.number("years"), &fees);
        Updates::default().with("result", result)
    }
}
