use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Column names every export is normalized into before row parsing.
pub const CANONICAL_HEADER: [&str; 8] = [
    "Employee ID",
    "Date",
    "First",
    "Last",
    "In Time",
    "Out Time",
    "Role",
    "Location",
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    EmployeeId,
    Date,
    FirstName,
    LastName,
    InTime,
    OutTime,
    Role,
    Location,
}

impl LogicalField {
    pub const ALL: [LogicalField; 8] = [
        LogicalField::EmployeeId,
        LogicalField::Date,
        LogicalField::FirstName,
        LogicalField::LastName,
        LogicalField::InTime,
        LogicalField::OutTime,
        LogicalField::Role,
        LogicalField::Location,
    ];

    pub const REQUIRED: [LogicalField; 6] = [
        LogicalField::EmployeeId,
        LogicalField::Date,
        LogicalField::FirstName,
        LogicalField::LastName,
        LogicalField::InTime,
        LogicalField::OutTime,
    ];

    pub fn canonical_name(&self) -> &'static str {
        match self {
            LogicalField::EmployeeId => "Employee ID",
            LogicalField::Date => "Date",
            LogicalField::FirstName => "First",
            LogicalField::LastName => "Last",
            LogicalField::InTime => "In Time",
            LogicalField::OutTime => "Out Time",
            LogicalField::Role => "Role",
            LogicalField::Location => "Location",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, LogicalField::Role | LogicalField::Location)
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Resolved association from logical fields to zero-based source column
/// indexes. A column index is claimed by at most one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub columns: BTreeMap<LogicalField, usize>,
    pub unmapped_fields: Vec<LogicalField>,
    pub success: bool,
}

impl ColumnMapping {
    pub fn column(&self, field: LogicalField) -> Option<usize> {
        self.columns.get(&field).copied()
    }
}

/// Header text a human previously confirmed per logical field, kept by the
/// calling layer so the next import from the same source maps without review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedMapping {
    pub headers: BTreeMap<LogicalField, String>,
}

impl SavedMapping {
    /// Records the header text a resolved mapping matched, for reuse on the
    /// next export from the same source.
    pub fn record(mapping: &ColumnMapping, header: &[String]) -> Self {
        let headers = mapping
            .columns
            .iter()
            .filter_map(|(field, idx)| header.get(*idx).map(|cell| (*field, cell.clone())))
            .collect();
        Self { headers }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawShiftRow {
    pub employee_id: String,
    pub date: String,
    pub first_name: String,
    pub last_name: String,
    pub in_time: String,
    pub out_time: String,
    pub role: String,
    pub location: String,
    pub regular_hours: f64,
    pub ot_hours: f64,
}
