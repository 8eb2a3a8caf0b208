use crate::infra::parse_format;
use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::{Map, Value};
use soa_fees::config::{AppConfig, OutputFormat};
use soa_fees::error::AppError;
use soa_fees::fees::tables::{AMATEUR_TABLE, ROC_TABLE, SHIP_TABLE};
use std::io::{self, Write};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Schedule {
    Roc,
    Amateur,
    Ship,
}

impl Schedule {
    const ALL: [Schedule; 3] = [Schedule::Roc, Schedule::Amateur, Schedule::Ship];

    fn name(self) -> &'static str {
        match self {
            Schedule::Roc => "roc",
            Schedule::Amateur => "amateur",
            Schedule::Ship => "ship",
        }
    }

    fn rows(self) -> Result<Vec<(&'static str, Value)>, serde_json::Error> {
        match self {
            Schedule::Roc => to_values(ROC_TABLE),
            Schedule::Amateur => to_values(AMATEUR_TABLE),
            Schedule::Ship => to_values(SHIP_TABLE),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct TablesArgs {
    /// Schedule to print; every schedule when omitted
    #[arg(value_enum)]
    pub(crate) schedule: Option<Schedule>,
    /// Output format (table, json, csv). Defaults to APP_OUTPUT_FORMAT.
    #[arg(long, value_parser = parse_format)]
    pub(crate) format: Option<OutputFormat>,
}

/// One defined coefficient of one schedule row.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct ScheduleLine {
    schedule: &'static str,
    key: &'static str,
    coefficient: String,
    amount: f64,
}

pub(crate) fn run_tables(args: TablesArgs, config: &AppConfig) -> Result<(), AppError> {
    let schedules: Vec<Schedule> = match args.schedule {
        Some(schedule) => vec![schedule],
        None => Schedule::ALL.to_vec(),
    };
    let format = args.format.unwrap_or(config.output.format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            let mut document = Map::new();
            for schedule in &schedules {
                let rows: Map<String, Value> = schedule
                    .rows()?
                    .into_iter()
                    .map(|(key, row)| (key.to_string(), row))
                    .collect();
                document.insert(schedule.name().to_string(), Value::Object(rows));
            }
            serde_json::to_writer_pretty(&mut out, &document)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(&mut out);
            for line in schedule_lines(&schedules)? {
                csv.serialize(line)?;
            }
            csv.flush()?;
        }
        OutputFormat::Table => {
            for line in schedule_lines(&schedules)? {
                writeln!(
                    out,
                    "{:<8} {:<16} {:<26} {:>10.2}",
                    line.schedule, line.key, line.coefficient, line.amount
                )?;
            }
        }
    }
    Ok(())
}

fn to_values<T: Serialize>(
    table: &'static [(&'static str, T)],
) -> Result<Vec<(&'static str, Value)>, serde_json::Error> {
    table
        .iter()
        .map(|(key, row)| Ok((*key, serde_json::to_value(row)?)))
        .collect()
}

/// Flattens rows into coefficient lines, leaving out coefficients a row does not define.
fn schedule_lines(schedules: &[Schedule]) -> Result<Vec<ScheduleLine>, serde_json::Error> {
    let mut lines = Vec::new();
    for schedule in schedules {
        for (key, row) in schedule.rows()? {
            let Value::Object(coefficients) = row else {
                continue;
            };
            for (coefficient, amount) in coefficients {
                if let Some(amount) = amount.as_f64() {
                    lines.push(ScheduleLine {
                        schedule: schedule.name(),
                        key,
                        coefficient,
                        amount,
                    });
                }
            }
        }
    }
    Ok(lines)
}
