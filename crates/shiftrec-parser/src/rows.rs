use crate::errors::ParseError;
use crate::model::{LogicalField, RawShiftRow};

// Hours columns are not part of the canonical schema; platform exports that
// carry them do so under these spellings, untouched by normalization.
const REGULAR_HOURS_COLUMNS: &[&str] = &["Regular", "Regular Hours"];
const OT_HOURS_COLUMNS: &[&str] = &["OT", "OT Hours", "Overtime"];

/// Parses canonical-header CSV text into raw shift rows. The first absent
/// required canonical column is a hard failure; rows missing employee id,
/// date, in time, or out time are dropped rather than errored, matching the
/// trailing blank and partial rows real exports contain.
pub fn parse_rows(content: &str) -> Result<Vec<RawShiftRow>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut records = reader.records();

    let header = loop {
        match records.next() {
            Some(record) => {
                let record = record?;
                if record.iter().any(|cell| !cell.trim().is_empty()) {
                    break record;
                }
            }
            None => return Err(ParseError::EmptyInput),
        }
    };

    let locate = |name: &str| {
        header
            .iter()
            .position(|cell| cell.trim().eq_ignore_ascii_case(name))
    };

    let mut required = [0usize; 6];
    for (slot, field) in required.iter_mut().zip(LogicalField::REQUIRED) {
        *slot = locate(field.canonical_name()).ok_or(ParseError::MissingColumn {
            column: field.canonical_name(),
        })?;
    }
    let [employee_id_col, date_col, first_col, last_col, in_col, out_col] = required;

    let role_col = locate(LogicalField::Role.canonical_name());
    let location_col = locate(LogicalField::Location.canonical_name());
    let regular_col = REGULAR_HOURS_COLUMNS.iter().find_map(|name| locate(name));
    let ot_col = OT_HOURS_COLUMNS.iter().find_map(|name| locate(name));

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        let optional = |idx: Option<usize>| idx.map(&cell).unwrap_or_default();

        let employee_id = cell(employee_id_col);
        let date = cell(date_col);
        let in_time = cell(in_col);
        let out_time = cell(out_col);
        if employee_id.is_empty() || date.is_empty() || in_time.is_empty() || out_time.is_empty() {
            continue;
        }

        rows.push(RawShiftRow {
            employee_id,
            date,
            first_name: cell(first_col),
            last_name: cell(last_col),
            in_time,
            out_time,
            role: optional(role_col),
            location: optional(location_col),
            regular_hours: parse_hours(&optional(regular_col)),
            ot_hours: parse_hours(&optional(ot_col)),
        });
    }
    Ok(rows)
}

/// Lenient float parse over the longest leading numeric prefix, so values
/// like `"7.5 hrs"` read as 7.5. Anything without a digit is 0.
pub(crate) fn parse_hours(value: &str) -> f64 {
    let trimmed = value.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => end = idx + 1,
            '0'..='9' => {
                seen_digit = true;
                end = idx + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return 0.0;
    }
    trimmed[..end].parse().unwrap_or(0.0)
}
