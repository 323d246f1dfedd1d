//! Text renderings of a finished [`Table`].
use crate::attribute::AttributeKind;
use crate::table::{Table, Value};
use itertools::Itertools as _;
use std::borrow::Cow;
use std::io::Write;
use thiserror::Error;

/// Writes a header of attribute names followed by one record per row.
///
/// Missing numeric values are written as empty fields.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.attributes().iter().map(|a| a.name()))?;
    for i in 0..table.row_count() {
        for j in 0..table.attribute_count() {
            writer.write_field(cell(table, i, j, "").as_bytes())?;
        }
        writer.write_record(None::<&[u8]>)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the table in the ARFF format.
///
/// Missing numeric values are written as `?`.
pub fn write_arff<W: Write>(table: &Table, mut writer: W) -> Result<(), ExportError> {
    writeln!(writer, "@relation {}", quote(table.name()))?;
    writeln!(writer)?;
    for attribute in table.attributes() {
        let kind = match attribute.kind() {
            AttributeKind::Numeric => Cow::Borrowed("numeric"),
            AttributeKind::Categorical(domain) => {
                Cow::Owned(format!("{{{}}}", domain.values().iter().map(|v| quote(v)).join(",")))
            }
        };
        writeln!(writer, "@attribute {} {}", quote(attribute.name()), kind)?;
    }
    writeln!(writer)?;
    writeln!(writer, "@data")?;
    for i in 0..table.row_count() {
        let line = (0..table.attribute_count())
            .map(|j| match table.row(i).and_then(|r| r.get(j)) {
                Some(Value::Categorical(_)) => quote(&cell(table, i, j, "?")).into_owned(),
                Some(Value::Numeric(v)) if v == f64::INFINITY => "Infinity".to_owned(),
                Some(Value::Numeric(v)) if v == f64::NEG_INFINITY => "-Infinity".to_owned(),
                _ => cell(table, i, j, "?").into_owned(),
            })
            .join(",");
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

fn cell<'a>(table: &'a Table, row: usize, attribute: usize, missing: &'a str) -> Cow<'a, str> {
    match table.row(row).and_then(|r| r.get(attribute)) {
        Some(v) if v.is_missing() => Cow::Borrowed(missing),
        Some(Value::Numeric(v)) => Cow::Owned(v.to_string()),
        Some(Value::Categorical(_)) => Cow::Borrowed(table.category(row, attribute).unwrap_or(missing)),
        None => Cow::Borrowed(missing),
    }
}

fn quote(token: &str) -> Cow<'_, str> {
    let needs_quotes = token.is_empty()
        || token == "?"
        || token
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ',' | '\'' | '"' | '{' | '}' | '%' | '\\'));
    if !needs_quotes {
        return Cow::Borrowed(token);
    }

    let mut escaped = String::with_capacity(token.len() + 2);
    for c in token.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(format!("'{}'", escaped))
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
