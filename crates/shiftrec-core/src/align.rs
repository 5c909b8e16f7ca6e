use chrono::{NaiveDate, NaiveTime};
use shiftrec_parser::RawShiftRow;

use crate::error::EngineError;
use crate::types::ParsedShift;

static TIME_FORMATS: &[&str] = &["%I:%M %p", "%I:%M%p", "%H:%M"];

/// Turns raw rows into parsed shifts with per-day sequence numbers and
/// match keys.
///
/// The default [`SequentialAligner`] pairs the Nth-earliest scheduled shift
/// on a day with the Nth-earliest worked shift on that day. That is a
/// heuristic: when an employee works their shifts in a different order than
/// scheduled, ordinal pairing mismatches them. An interval-overlap
/// implementation can replace it behind this trait without touching
/// callers.
pub trait AlignmentStrategy {
    fn name(&self) -> &'static str;
    fn align(&self, rows: Vec<RawShiftRow>) -> Result<Vec<ParsedShift>, EngineError>;
}

pub struct SequentialAligner;

impl AlignmentStrategy for SequentialAligner {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn align(&self, rows: Vec<RawShiftRow>) -> Result<Vec<ParsedShift>, EngineError> {
        let mut shifts = rows
            .into_iter()
            .map(parse_shift)
            .collect::<Result<Vec<_>, _>>()?;

        // Sort order is the sole determinant of sequence assignment; the
        // sort is stable, so equal in-times keep their input order.
        shifts.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
                .then_with(|| a.in_time.cmp(&b.in_time))
        });

        let mut sequence = 0u32;
        for idx in 0..shifts.len() {
            let new_group = idx == 0
                || shifts[idx - 1].employee_id != shifts[idx].employee_id
                || shifts[idx - 1].date != shifts[idx].date;
            sequence = if new_group { 1 } else { sequence + 1 };
            let match_key = format!(
                "{}-{}-{}",
                shifts[idx].employee_id,
                shifts[idx].date.format("%Y%m%d"),
                sequence
            );
            let shift = &mut shifts[idx];
            shift.sequence = sequence;
            shift.match_key = match_key;
        }

        Ok(shifts)
    }
}

fn parse_shift(row: RawShiftRow) -> Result<ParsedShift, EngineError> {
    let date = parse_date(&row.date, &row.employee_id)?;
    let in_time = parse_clock_time(&row.in_time)
        .map(|time| date.and_time(time))
        .ok_or_else(|| invalid_time(&row, &row.in_time))?;
    let out_time = parse_clock_time(&row.out_time)
        .map(|time| date.and_time(time))
        .ok_or_else(|| invalid_time(&row, &row.out_time))?;
    let employee_name = format!("{} {}", row.first_name, row.last_name)
        .trim()
        .to_string();

    Ok(ParsedShift {
        employee_id: row.employee_id,
        employee_name,
        date,
        in_time,
        out_time,
        role: row.role,
        scheduled_minutes: (out_time - in_time).num_minutes(),
        sequence: 0,
        match_key: String::new(),
    })
}

fn parse_date(value: &str, employee_id: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.trim().to_string(),
        employee_id: employee_id.to_string(),
    })
}

/// Accepts `H:MM`/`HH:MM` with an optional AM/PM marker, case-insensitive,
/// tolerating stray whitespace anywhere the exports put it.
pub(crate) fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let cleaned = value.trim().to_ascii_uppercase();
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(&cleaned, format) {
            return Some(time);
        }
    }
    None
}

fn invalid_time(row: &RawShiftRow, value: &str) -> EngineError {
    EngineError::InvalidTime {
        value: value.trim().to_string(),
        employee_id: row.employee_id.clone(),
        date: row.date.clone(),
    }
}
