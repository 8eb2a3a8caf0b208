use super::amateur::{
    CONSTRUCTION_PERMIT_FEE, FILING_FEE, LICENSE_FEE, MODIFICATION_FEE, PERMIT_FEE,
    POSSESSION_FEE, PURCHASE_FEE, SURCHARGE, TAX,
};
use super::recompute::{Binding, Derivation, Phase, RuleInputs, Updates};
use super::tables::{amateur_row, AmateurRow};

static SCHEDULE_BINDINGS: &[Binding] = &[
    Binding::required("class", &["atClass", "amClass", "amateurClass"]),
    Binding::output("filingFee", FILING_FEE),
    Binding::output("licenseFee", LICENSE_FEE),
    Binding::output("surcharge", SURCHARGE),
    Binding::output("tax", TAX),
    Binding::output("modificationFee", MODIFICATION_FEE),
    Binding::output("constructionPermitFee", CONSTRUCTION_PERMIT_FEE),
    Binding::output("permitFee", PERMIT_FEE),
    Binding::output("purchaseFee", PURCHASE_FEE),
    Binding::output("possessionFee", POSSESSION_FEE),
];

const ZERO_ROW: AmateurRow = AmateurRow {
    filing_fee: 0.0,
    license_fee: 0.0,
    surcharge: 0.0,
    tax: 0.0,
    modification_fee: 0.0,
    construction_permit_fee: 0.0,
    permit_fee: 0.0,
    purchase_fee: 0.0,
    possession_fee: 0.0,
};

/// Fills the amateur fee inputs from the amateur table whenever the licence class changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmateurScheduleRule;

impl Derivation for AmateurScheduleRule {
    fn name(&self) -> &'static str {
        "amateur-schedule"
    }

    fn bindings(&self) -> &'static [Binding] {
        SCHEDULE_BINDINGS
    }

    fn derive(&self, inputs: &RuleInputs<'_>, phase: Phase) -> Updates {
        let row = match (amateur_row(&inputs.code("class")), phase) {
            (Some(row), _) => row,
            (None, Phase::Initial) => return Updates::default(),
            (None, Phase::Change) => ZERO_ROW,
        };

        Updates::default()
            .with("filingFee", row.filing_fee)
            .with("licenseFee", row.license_fee)
            .with("surcharge", row.surcharge)
            .with("tax", row.tax)
            .with("modificationFee", row.modification_fee)
            .with("constructionPermitFee", row.construction_permit_fee)
            .with("permitFee", row.permit_fee)
            .with("purchaseFee", row.purchase_fee)
            .with("possessionFee", row.possession_fee)
    }
}
