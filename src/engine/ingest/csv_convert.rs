use serde_json::{Map, Number, Value};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::engine::errors::IngestError;
use crate::engine::record::Field;

/// Convert the raw CSV export into the JSON dataset file the loader reads.
/// Rows whose field count does not match the header are skipped. Returns the
/// number of records written.
pub fn convert(csv_path: &Path, json_path: &Path) -> Result<usize, IngestError> {
    let reader = BufReader::new(File::open(csv_path)?);
    let mut writer = BufWriter::new(File::create(json_path)?);

    let mut headers: Vec<String> = Vec::new();
    let mut count = 0usize;
    let mut skipped = 0usize;

    writer.write_all(b"[")?;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if headers.is_empty() {
            headers = parse_line(&line)
                .into_iter()
                .map(|h| h.trim().to_string())
                .collect();
            continue;
        }

        let values = parse_line(&line);
        if values.len() != headers.len() {
            skipped += 1;
            continue;
        }

        let record = row_to_json(&headers, &values);
        if count > 0 {
            writer.write_all(b",")?;
        }
        writer.write_all(b"\n  ")?;
        serde_json::to_writer(&mut writer, &record)?;
        count += 1;
    }
    writer.write_all(b"\n]")?;
    writer.flush()?;

    if headers.is_empty() {
        return Err(IngestError::MissingHeader);
    }
    if skipped > 0 {
        warn!(target: "salescan::ingest", skipped, "dropped malformed CSV rows");
    }
    info!(
        target: "salescan::ingest",
        count,
        path = %json_path.display(),
        "CSV conversion complete"
    );
    Ok(count)
}

fn row_to_json(headers: &[String], values: &[String]) -> Value {
    let mut record = Map::new();
    for (header, value) in headers.iter().zip(values) {
        let trimmed = value.trim();
        let numeric = Field::from_label(header).is_some_and(Field::is_numeric);
        let json_value = if numeric {
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        } else {
            Value::String(trimmed.to_string())
        };
        record.insert(header.clone(), json_value);
    }
    Value::Object(record)
}

/// Split one CSV line into fields, honoring double-quoted fields and escaped
/// quotes ("").
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
