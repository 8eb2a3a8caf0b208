use crate::infra::{parse_edit, parse_format, FieldEdit};
use clap::Args;
use serde::Serialize;
use soa_fees::config::{AppConfig, OutputFormat};
use soa_fees::error::AppError;
use soa_fees::fees::{Assessment, FeeEngine, RuleStatus};
use soa_fees::form::{standard_form, FieldStore};
use soa_fees::record::SoaRecord;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Stored SOA record (JSON) loaded into the form before any edits
    #[arg(long)]
    pub(crate) record: Option<PathBuf>,
    /// Operator edit applied in order after loading, e.g. --set rocClass="RTG 1st"
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_edit)]
    pub(crate) edits: Vec<FieldEdit>,
    /// Output format (table, json, csv). Defaults to APP_OUTPUT_FORMAT.
    #[arg(long, value_parser = parse_format)]
    pub(crate) format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct AssessmentReport<'a> {
    rules: &'a [RuleStatus],
    assessment: &'a Assessment,
    payload: SoaRecord,
}

pub(crate) fn run_assess(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let AssessArgs {
        record,
        edits,
        format,
    } = args;
    let format = format.unwrap_or(config.output.format);

    let store = standard_form();
    let engine = FeeEngine::wire(&store);
    for status in engine.status().iter().filter(|status| !status.wired) {
        warn!(rule = status.rule, missing = ?status.missing, "fee rule not wired");
    }

    if let Some(path) = record {
        let record = SoaRecord::from_reader(BufReader::new(File::open(&path)?))?;
        record.apply_to(&store)?;
        info!(path = %path.display(), "record loaded");
    }
    apply_edits(&store, edits);

    let assessment = Assessment::from_store(&store);
    info!(
        lines = assessment.lines.len(),
        total = assessment.total,
        recomputations = engine.total_recomputations(),
        "assessment ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => render_table(&assessment, &mut out)?,
        OutputFormat::Csv => assessment.write_csv(&mut out)?,
        OutputFormat::Json => {
            let report = AssessmentReport {
                rules: engine.status(),
                assessment: &assessment,
                payload: SoaRecord::from_store(&store),
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    engine.dispose();
    Ok(())
}

/// Applies edits as operator writes; an edit naming a field the form lacks is skipped.
fn apply_edits(store: &FieldStore, edits: Vec<FieldEdit>) {
    for FieldEdit { field, value } in edits {
        match store.set(&field, value) {
            Ok(()) => debug!(%field, "operator edit applied"),
            Err(err) => warn!(%field, %err, "operator edit rejected"),
        }
    }
}

fn render_table<W: Write>(assessment: &Assessment, out: &mut W) -> io::Result<()> {
    if assessment.lines.is_empty() {
        writeln!(out, "No fees assessed.")?;
    }
    for line in &assessment.lines {
        writeln!(out, "{:<32} {:>12.2}", line.field, line.amount)?;
    }
    writeln!(out, "{:<32} {:>12.2}", "TOTAL", assessment.total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edits(raw: &[&str]) -> Vec<FieldEdit> {
        raw.iter()
            .map(|edit| parse_edit(edit).expect("edit parses"))
            .collect()
    }

    #[test]
    fn edits_drive_the_wired_rules() {
        let store = standard_form();
        let _engine = FeeEngine::wire(&store);

        apply_edits(
            &store,
            edits(&[
                "periodFrom=2025-01-01",
                "periodTo=2026-01-01",
                "rocClass=RTG 3rd",
                "rocSubType=COMM-NEW",
                "notAField=12",
            ]),
        );

        assert_eq!(store.number("amRadioOperatorsCert"), 90.0);
        assert_eq!(store.number("totalAmount"), 120.0);
        assert!(!store.has("notAField"));
    }

    #[test]
    fn table_lists_lines_then_total() {
        let store = standard_form();
        let _engine = FeeEngine::wire(&store);
        apply_edits(&store, edits(&["licFilingFee=180", "dst=30"]));

        let mut out = Vec::new();
        render_table(&Assessment::from_store(&store), &mut out).expect("table renders");
        let text = String::from_utf8(out).expect("utf-8");
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("licFilingFee"));
        assert!(rows[0].ends_with("180.00"));
        assert!(rows[2].starts_with("TOTAL"));
        assert!(rows[2].ends_with("210.00"));
    }

    #[test]
    fn empty_assessment_says_so() {
        let store = standard_form();
        let _engine = FeeEngine::wire(&store);

        let mut out = Vec::new();
        render_table(&Assessment::from_store(&store), &mut out).expect("table renders");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.starts_with("No fees assessed."));
    }
}
