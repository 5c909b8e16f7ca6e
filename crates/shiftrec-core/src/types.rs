use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One shift lifted to structured time, with its position within the
/// employee's day and the composite key used to pair the two datasets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedShift {
    pub employee_id: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub in_time: NaiveDateTime,
    pub out_time: NaiveDateTime,
    pub role: String,
    /// Out minus in, in minutes. Negative when the export has the out time
    /// before the in time; surfaced as-is for downstream review.
    pub scheduled_minutes: i64,
    pub sequence: u32,
    pub match_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaStatus {
    Matched,
    NoShow,
    Unscheduled,
}

impl DeltaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaStatus::Matched => "matched",
            DeltaStatus::NoShow => "no_show",
            DeltaStatus::Unscheduled => "unscheduled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    NoCallNoShow,
    TardinessMajor,
    TardinessMinor,
    EarlyDeparture,
    StayedLate,
    ArrivedEarly,
    UnscheduledWorked,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::NoCallNoShow => "no_call_no_show",
            EventKind::TardinessMajor => "tardiness_major",
            EventKind::TardinessMinor => "tardiness_minor",
            EventKind::EarlyDeparture => "early_departure",
            EventKind::StayedLate => "stayed_late",
            EventKind::ArrivedEarly => "arrived_early",
            EventKind::UnscheduledWorked => "unscheduled_worked",
        }
    }

    /// Engine-default suggested points. Negative values are credits;
    /// organizations override downstream, not here.
    pub fn default_points(&self) -> i32 {
        match self {
            EventKind::NoCallNoShow => 6,
            EventKind::TardinessMajor => 3,
            EventKind::TardinessMinor => 1,
            EventKind::EarlyDeparture => 2,
            EventKind::StayedLate => -1,
            EventKind::ArrivedEarly => -1,
            EventKind::UnscheduledWorked => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedEvent {
    pub kind: EventKind,
    pub description: String,
    pub suggested_points: i32,
    pub auto_detected: bool,
}

impl DetectedEvent {
    pub(crate) fn auto(kind: EventKind, description: String) -> Self {
        Self {
            kind,
            description,
            suggested_points: kind.default_points(),
            auto_detected: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftDelta {
    pub match_key: String,
    pub employee_id: String,
    pub employee_name: String,
    pub date: NaiveDate,
    pub role: String,
    pub scheduled_in: Option<NaiveDateTime>,
    pub scheduled_out: Option<NaiveDateTime>,
    pub scheduled_minutes: Option<i64>,
    pub worked_in: Option<NaiveDateTime>,
    pub worked_out: Option<NaiveDateTime>,
    pub worked_minutes: Option<i64>,
    /// Worked in minus scheduled in, minutes. Positive is a late arrival.
    pub start_variance: Option<i64>,
    /// Worked out minus scheduled out, minutes. Negative is an early exit.
    pub end_variance: Option<i64>,
    pub status: DeltaStatus,
    pub events: Vec<DetectedEvent>,
}

/// Minute thresholds driving event classification. Passed in by the caller
/// per organization; the engine does not validate ordering between them
/// (an inverted minor/major pair means the minor branch never fires, since
/// major is checked first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointThresholds {
    pub tardiness_minor_min: i64,
    pub tardiness_minor_max: i64,
    pub tardiness_major_min: i64,
    pub early_departure_min: i64,
    pub stayed_late_min: i64,
    pub arrived_early_min: i64,
}

impl Default for PointThresholds {
    fn default() -> Self {
        Self {
            tardiness_minor_min: 5,
            tardiness_minor_max: 14,
            tardiness_major_min: 15,
            early_departure_min: 30,
            stayed_late_min: 30,
            arrived_early_min: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    pub deltas: Vec<ShiftDelta>,
    pub scheduled_count: usize,
    pub worked_count: usize,
    pub matched_count: usize,
    pub no_show_count: usize,
    pub unscheduled_count: usize,
    pub date_range: Option<DateRange>,
    pub errors: Vec<String>,
}

impl ImportResult {
    pub(crate) fn failed(errors: Vec<String>) -> Self {
        Self {
            deltas: Vec::new(),
            scheduled_count: 0,
            worked_count: 0,
            matched_count: 0,
            no_show_count: 0,
            unscheduled_count: 0,
            date_range: None,
            errors,
        }
    }
}
