use super::total::{TOTAL_FIELD, TOTAL_FIELDS};
use crate::form::FieldStore;
use serde::Serialize;
use std::io;

/// One non-zero monetary line of the statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeLine {
    pub field: &'static str,
    pub amount: f64,
}

/// Printable breakdown of the statement as it currently stands in the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub lines: Vec<FeeLine>,
    pub total: f64,
}

impl Assessment {
    pub fn from_store(store: &FieldStore) -> Self {
        let lines = TOTAL_FIELDS
            .iter()
            .map(|&field| FeeLine {
                field,
                amount: store.number(field),
            })
            .filter(|line| line.amount != 0.0)
            .collect();

        Self {
            lines,
            total: store.number(TOTAL_FIELD),
        }
    }

    pub fn amount(&self, field: &str) -> f64 {
        self.lines
            .iter()
            .find(|line| line.field == field)
            .map(|line| line.amount)
            .unwrap_or(0.0)
    }

    /// Writes `field,amount` rows followed by the total row.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv = csv::Writer::from_writer(writer);
        for line in &self.lines {
            csv.serialize(line)?;
        }
        csv.serialize(FeeLine {
            field: TOTAL_FIELD,
            amount: self.total,
        })?;
        csv.flush()?;
        Ok(())
    }
}
