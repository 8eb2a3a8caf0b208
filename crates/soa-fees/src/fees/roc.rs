use super::recompute::{Binding, Derivation, Phase, RuleInputs, Updates};
use super::tables::{roc_row, RocRow};
use serde::Serialize;

/// Fee formula selected by a ROC sub-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RocTransaction {
    New,
    Renewal,
    /// Temporary and foreign-holder certificates, charged for a single period.
    Temporary,
    /// Provisional and operator-licence applications that carry filing and auxiliary fees.
    OperatorNew,
    Modification,
}

impl RocTransaction {
    pub const CODES: &'static [&'static str] = &[
        "COMM-NEW",
        "PHN-NEW",
        "RROC-NEW",
        "COMM-RENEWAL",
        "PHN-RENEWAL",
        "RROC-RENEWAL",
        "SROP-RENEWAL",
        "GROC-RENEWAL",
        "RLM-RENEWAL",
        "COMM-TEMP",
        "TEMP-FOREIGN",
        "SROP-NEW",
        "GROC-NEW",
        "RLM-NEW",
        "COMM-MOD",
        "PHN-MOD",
        "ROC-MOD",
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "COMM-NEW" | "PHN-NEW" | "RROC-NEW" => Some(Self::New),
            "COMM-RENEWAL" | "PHN-RENEWAL" | "RROC-RENEWAL" | "SROP-RENEWAL" | "GROC-RENEWAL"
            | "RLM-RENEWAL" => Some(Self::Renewal),
            "COMM-TEMP" | "TEMP-FOREIGN" => Some(Self::Temporary),
            "SROP-NEW" | "GROC-NEW" | "RLM-NEW" => Some(Self::OperatorNew),
            "COMM-MOD" | "PHN-MOD" | "ROC-MOD" => Some(Self::Modification),
            _ => None,
        }
    }
}

/// Fees asserted for one ROC evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocAssessment {
    pub certificate_fee: f64,
    pub tax: f64,
    pub filing_fee: Option<f64>,
    pub seminar_fee: Option<f64>,
}

/// Fees for one ROC row.
///
/// An unrecognised sub-type charges a certificate fee of 0; the row's tax is still asserted
/// on its own output.
pub fn assess(sub_type: &str, row: &RocRow, years: f64, surcharge: f64) -> RocAssessment {
    let filing_fee = row.filing_fee.unwrap_or(0.0);
    // Classes with a seminar charge it in place of the auxiliary fee.
    let application_fee = row.seminar_fee.or(row.aux_fee).unwrap_or(0.0);

    let certificate_fee = match RocTransaction::from_code(sub_type) {
        Some(RocTransaction::New) => row.rate * years + row.tax,
        Some(RocTransaction::Renewal) => row.rate * years + row.tax + surcharge,
        Some(RocTransaction::Temporary) => row.rate + row.tax,
        Some(RocTransaction::OperatorNew) => {
            filing_fee + application_fee + row.rate * years + row.tax
        }
        Some(RocTransaction::Modification) => row.modification_fee.unwrap_or(0.0) + row.tax,
        None => 0.0,
    };

    RocAssessment {
        certificate_fee,
        tax: row.tax,
        filing_fee: row.filing_fee,
        seminar_fee: row.seminar_fee,
    }
}

static ROC_BINDINGS: &[Binding] = &[
    Binding::required(
        "subType",
        &["rocSubType", "rocTxnType", "rocTransaction"],
    ),
    Binding::required(
        "class",
        &["rocClass", "rocOperator", "operator", "rocType", "classRoc", "roc"],
    ),
    Binding::required(
        "years",
        &[
            "rocYears",
            "years",
            "numberOfYears",
            "noOfYears",
            "rocYr",
            "yr",
            "periodYears",
        ],
    ),
    Binding::watched("surcharge", &["rocSurcharge", "rocSurcharges"]),
    Binding::output("certificateFee", &["amRadioOperatorsCert", "rocCert"]),
    Binding::output("tax", &["dst"]),
    Binding::optional_output("filingFee", &["amFilingFee"]),
    Binding::optional_output("seminarFee", &["amSeminarFee"]),
];

/// Radio Operator Certificate fees: certificate fee, stamp tax, and the class's filing and seminar
/// fees.
#[derive(Debug, Default, Clone, Copy)]
pub struct RocRule;

impl Derivation for RocRule {
    fn name(&self) -> &'static str {
        "roc"
    }

    fn bindings(&self) -> &'static [Binding] {
        ROC_BINDINGS
    }

    fn derive(&self, inputs: &RuleInputs<'_>, phase: Phase) -> Updates {
        let Some(row) = roc_row(&inputs.code("class")) else {
            return match phase {
                Phase::Initial => Updates::default(),
                Phase::Change => Updates::default()
                    .with("certificateFee", 0.0)
                    .with("tax", 0.0)
                    .with("filingFee", 0.0)
                    .with("seminarFee", 0.0),
            };
        };

        let assessment = assess(
            &inputs.code("subType"),
            &row,
            inputs.number("years"),
            inputs.number("surcharge"),
        );

        // Classes without a filing or seminar fee clear the previous class's amount.
        Updates::default()
            .with("certificateFee", assessment.certificate_fee)
            .with("tax", assessment.tax)
            .with("filingFee", assessment.filing_fee.unwrap_or(0.0))
            .with("seminarFee", assessment.seminar_fee.unwrap_or(0.0))
    }
}
