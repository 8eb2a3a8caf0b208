//! Backend SOA record: loading it into a form and building the submission payload from one.

use crate::fees::TOTAL_FIELD;
use crate::form::{parse_date, FieldStore, FieldValue, StoreError};
use chrono::SecondsFormat;
use serde::{Deserialize, Deserializer, Serialize};
use std::io;

/// Statement of Account record as stored by the backend.
///
/// Older exports use upper-case or spaced column names; those are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoaRecord {
    #[serde(default, alias = "ID")]
    pub id: Option<i64>,
    #[serde(default, alias = "DateIssued")]
    pub date_issued: Option<String>,
    #[serde(default, alias = "LICENSEE")]
    pub licensee: Option<String>,
    #[serde(default, alias = "Address")]
    pub address: Option<String>,
    #[serde(default, alias = "Particulars")]
    pub particulars: Option<String>,
    #[serde(default, alias = "PeriodCovered")]
    pub period_covered: Option<String>,
    #[serde(default)]
    pub period_from: Option<String>,
    #[serde(default)]
    pub period_to: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub period_years: Option<f64>,
    #[serde(default, alias = "rocRadioStation", deserialize_with = "lenient_amount")]
    pub rsl_radio_station: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub roc_operator_fee: Option<f64>,
    /// Stored licence surcharge line (`licSurcharges`). Older exports name it `rocSurcharge`,
    /// which is unrelated to the form's live ROC surcharge input of the same name.
    #[serde(default, alias = "rocSurcharge", deserialize_with = "lenient_amount")]
    pub rsl_surcharge: Option<f64>,
    #[serde(default, alias = "DST", deserialize_with = "lenient_amount")]
    pub dst: Option<f64>,
    #[serde(default)]
    pub or_number: Option<i64>,
    #[serde(default)]
    pub date_paid: Option<String>,
    #[serde(default, alias = "REMARKS_NOTE", alias = "REMARKS/NOTE")]
    pub remarks_note: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_amount: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("malformed SOA record: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SoaRecord {
    pub fn from_json(raw: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, RecordError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads the record into the form as operator input, so dependent rules react to it.
    ///
    /// `periodYears` and `totalAmount` are derived on the form and are not loaded.
    pub fn apply_to(&self, store: &FieldStore) -> Result<(), StoreError> {
        let mut writes: Vec<(&str, FieldValue)> = Vec::new();

        if let Some(id) = self.id {
            writes.push(("id", FieldValue::Number(id as f64)));
        }
        let text_fields = [
            ("date", self.date_issued.as_deref().map(normalize_date)),
            ("payorName", self.licensee.clone()),
            ("address", self.address.clone()),
            ("particulars", self.particulars.clone()),
            ("periodCovered", self.period_covered.clone()),
            ("periodFrom", self.period_from.as_deref().map(normalize_date)),
            ("periodTo", self.period_to.as_deref().map(normalize_date)),
            ("datePaid", self.date_paid.as_deref().map(normalize_date)),
            ("remarks", self.remarks_note.clone()),
        ];
        for (field, value) in text_fields {
            if let Some(value) = value {
                writes.push((field, FieldValue::Text(value)));
            }
        }
        if let Some(number) = self.or_number {
            writes.push(("orNumber", FieldValue::text(number.to_string())));
        }
        let amounts = [
            ("licRadioStationLicense", self.rsl_radio_station),
            ("amRadioOperatorsCert", self.roc_operator_fee),
            ("licSurcharges", self.rsl_surcharge),
            ("dst", self.dst),
        ];
        for (field, amount) in amounts {
            if let Some(amount) = amount {
                writes.push((field, FieldValue::Number(amount)));
            }
        }

        for (field, value) in writes {
            store.set(field, value)?;
        }
        Ok(())
    }

    /// Builds the submission payload from the form's current values.
    pub fn from_store(store: &FieldStore) -> Self {
        let text = |name: &str| {
            store
                .get(name)
                .filter(|value| !value.is_empty())
                .map(|value| value.as_code())
        };
        let amount = |name: &str| Some(store.number(name));

        Self {
            id: text("id").map(|_| store.number("id") as i64),
            date_issued: text("date").as_deref().and_then(iso_timestamp),
            licensee: text("payorName"),
            address: text("address"),
            particulars: text("particulars"),
            period_covered: text("periodCovered"),
            period_from: text("periodFrom"),
            period_to: text("periodTo"),
            period_years: text("periodYears").map(|_| store.number("periodYears")),
            rsl_radio_station: amount("licRadioStationLicense"),
            roc_operator_fee: amount("amRadioOperatorsCert"),
            rsl_surcharge: amount("licSurcharges"),
            dst: amount("dst"),
            or_number: text("orNumber").and_then(|raw| raw.parse().ok()),
            date_paid: text("datePaid"),
            remarks_note: text("remarks"),
            total_amount: amount(TOTAL_FIELD),
        }
    }
}

fn normalize_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => raw.trim().to_string(),
    }
}

fn iso_timestamp(raw: &str) -> Option<String> {
    let date = parse_date(raw)?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(
        midnight
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<FieldValue>::deserialize(deserializer)?;
    Ok(value
        .filter(|value| !value.is_empty())
        .map(|value| value.to_number()))
}
