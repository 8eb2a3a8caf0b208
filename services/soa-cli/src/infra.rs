use soa_fees::config::OutputFormat;
use soa_fees::form::FieldValue;

/// One `--set FIELD=VALUE` operator edit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldEdit {
    pub(crate) field: String,
    pub(crate) value: FieldValue,
}

pub(crate) fn parse_edit(value: &str) -> Result<FieldEdit, String> {
    let (field, raw) = value
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{value}'"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{value}'"));
    }

    let value = if raw.trim().is_empty() {
        FieldValue::Empty
    } else {
        FieldValue::text(raw)
    };
    Ok(FieldEdit {
        field: field.to_string(),
        value,
    })
}

pub(crate) fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value.parse::<OutputFormat>().map_err(|err| err.to_string())
}
