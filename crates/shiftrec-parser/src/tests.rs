use std::fs;
use std::path::PathBuf;

use crate::errors::ParseError;
use crate::model::{LogicalField, SavedMapping, CANONICAL_HEADER};
use crate::normalizer::{apply_mapping, detect_platform, header_fields, map_columns, MappingSource};
use crate::platforms::SchedulingPlatform;
use crate::rows::{parse_hours, parse_rows};

fn fixture(path: &str) -> String {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let full_path = base.join("tests/data").join(path);
    fs::read_to_string(&full_path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", full_path.display(), err))
}

#[test]
fn maps_sevenshifts_export() {
    let content = fixture("sevenshifts_scheduled.csv");
    let mapping = map_columns(
        &content,
        MappingSource::Platform(SchedulingPlatform::SevenShifts),
    )
    .expect("mapping failed");

    assert!(mapping.success);
    assert!(mapping.unmapped_fields.is_empty());
    assert_eq!(mapping.column(LogicalField::EmployeeId), Some(0));
    assert_eq!(mapping.column(LogicalField::Date), Some(1));
    assert_eq!(mapping.column(LogicalField::InTime), Some(4));
    assert_eq!(mapping.column(LogicalField::OutTime), Some(5));
    assert_eq!(mapping.column(LogicalField::Location), Some(7));
}

#[test]
fn detects_platform_from_header() {
    let content = fixture("whentowork_worked.csv");
    let detected = detect_platform(&content).expect("detection failed");
    assert_eq!(detected, Some(SchedulingPlatform::WhenToWork));
}

#[test]
fn detection_requires_high_confidence() {
    // Every platform recognizes fewer than 5 of these headers.
    let content = fixture("mixed_vocab.csv");
    let detected = detect_platform(&content).expect("detection failed");
    assert_eq!(detected, None);
}

#[test]
fn auto_maps_mixed_vocabulary() {
    let content = fixture("mixed_vocab.csv");
    let mapping = map_columns(&content, MappingSource::Auto).expect("mapping failed");

    assert!(mapping.success);
    assert!(mapping.unmapped_fields.is_empty());
    assert_eq!(mapping.column(LogicalField::EmployeeId), Some(0));
    assert_eq!(mapping.column(LogicalField::Date), Some(1));
    assert_eq!(mapping.column(LogicalField::InTime), Some(4));
    assert_eq!(mapping.column(LogicalField::OutTime), Some(5));
    assert_eq!(mapping.column(LogicalField::Role), Some(6));
    assert_eq!(mapping.column(LogicalField::Location), Some(7));
}

#[test]
fn optional_fields_may_stay_unmapped() {
    let content = "Employee ID,Date,First Name,Last Name,Clock In,Clock Out\n\
                   1001,2025-01-06,Ana,Reyes,09:00AM,05:00PM\n";
    let mapping = map_columns(content, MappingSource::Auto).expect("mapping failed");

    assert!(mapping.success);
    assert_eq!(
        mapping.unmapped_fields,
        vec![LogicalField::Role, LogicalField::Location]
    );
}

#[test]
fn missing_required_alias_fails_mapping() {
    let content = "Employee ID,Date,First,Last,Clock In,Notes\n\
                   1001,2025-01-06,Ana,Reyes,09:00AM,fine\n";
    let mapping = map_columns(content, MappingSource::Auto).expect("mapping failed");

    assert!(!mapping.success);
    assert!(mapping.unmapped_fields.contains(&LogicalField::OutTime));
}

#[test]
fn duplicate_header_text_is_claimed_once() {
    let content = "Employee ID,Date,First,Last,Time,Time\n\
                   1001,2025-01-06,Ana,Reyes,09:00AM,05:00PM\n";
    let mut saved = SavedMapping::default();
    for (field, name) in [
        (LogicalField::EmployeeId, "Employee ID"),
        (LogicalField::Date, "Date"),
        (LogicalField::FirstName, "First"),
        (LogicalField::LastName, "Last"),
        (LogicalField::InTime, "Time"),
        (LogicalField::OutTime, "Time"),
    ] {
        saved.headers.insert(field, name.to_string());
    }

    let mapping = map_columns(content, MappingSource::Saved(&saved)).expect("mapping failed");
    assert!(mapping.success);
    assert_eq!(mapping.column(LogicalField::InTime), Some(4));
    assert_eq!(mapping.column(LogicalField::OutTime), Some(5));
}

#[test]
fn saved_mapping_round_trips() {
    let content = fixture("sevenshifts_scheduled.csv");
    let mapping = map_columns(
        &content,
        MappingSource::Platform(SchedulingPlatform::SevenShifts),
    )
    .expect("mapping failed");
    let header = header_fields(&content).expect("header read failed");
    let saved = SavedMapping::record(&mapping, &header);

    let resolved = map_columns(&content, MappingSource::Saved(&saved)).expect("mapping failed");
    assert!(resolved.success);
    assert_eq!(resolved.columns, mapping.columns);
}

#[test]
fn stale_saved_mapping_falls_back_to_union() {
    let content = fixture("sevenshifts_scheduled.csv");
    let mut saved = SavedMapping::default();
    saved
        .headers
        .insert(LogicalField::EmployeeId, "Badge Number".to_string());

    let mapping = map_columns(content.as_str(), MappingSource::Saved(&saved))
        .expect("mapping failed");
    assert!(mapping.success);
    assert_eq!(mapping.column(LogicalField::EmployeeId), Some(0));
}

#[test]
fn normalization_rewrites_header_only() {
    let content = fixture("sevenshifts_scheduled.csv");
    let mapping = map_columns(
        &content,
        MappingSource::Platform(SchedulingPlatform::SevenShifts),
    )
    .expect("mapping failed");
    let normalized = apply_mapping(&content, &mapping).expect("normalization failed");

    let mut lines = normalized.lines();
    assert_eq!(lines.next(), Some(CANONICAL_HEADER.join(",").as_str()));
    let original_tail: Vec<&str> = content.lines().skip(1).collect();
    let normalized_tail: Vec<&str> = normalized.lines().skip(1).collect();
    assert_eq!(normalized_tail, original_tail);
}

#[test]
fn normalizing_canonical_csv_is_identity() {
    let content = fixture("canonical_shifts.csv");
    let mapping = map_columns(&content, MappingSource::Auto).expect("mapping failed");
    let normalized = apply_mapping(&content, &mapping).expect("normalization failed");
    assert_eq!(normalized, content);
}

#[test]
fn header_may_follow_blank_lines() {
    let content = format!("\n\n{}", fixture("sevenshifts_scheduled.csv"));
    let detected = detect_platform(&content).expect("detection failed");
    assert_eq!(detected, Some(SchedulingPlatform::SevenShifts));

    let mapping = map_columns(&content, MappingSource::Auto).expect("mapping failed");
    let normalized = apply_mapping(&content, &mapping).expect("normalization failed");
    assert!(normalized.starts_with("\n\n"));
}

#[test]
fn empty_input_is_an_error() {
    match map_columns("  \n \n", MappingSource::Auto) {
        Err(ParseError::EmptyInput) => {}
        other => panic!("expected EmptyInput error, got {other:?}"),
    }
}

#[test]
fn parses_canonical_rows() {
    let content = fixture("canonical_shifts.csv");
    let rows = parse_rows(&content).expect("row parse failed");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].employee_id, "1001");
    assert_eq!(rows[0].in_time, "09:00AM");
    assert_eq!(rows[0].regular_hours, 8.0);
    assert_eq!(rows[1].regular_hours, 0.0);
    assert_eq!(rows[1].ot_hours, 0.5);
    assert_eq!(rows[2].in_time, "9:30 pm");
    assert_eq!(rows[2].regular_hours, 2.25);
    assert_eq!(rows[2].ot_hours, 0.0);
}

#[test]
fn drops_rows_missing_required_cells() {
    let content = "Employee ID,Date,First,Last,In Time,Out Time,Role,Location\n\
                   1001,2025-01-06,Ana,Reyes,09:00AM,05:00PM,Server,Downtown\n\
                   1002,,Ben,Okafor,10:00AM,06:00PM,Cook,Downtown\n\
                   1003,2025-01-06,Caro,Lund,,06:00PM,Host,Uptown\n\
                   ,,,,,,,\n";
    let rows = parse_rows(content).expect("row parse failed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_id, "1001");
}

#[test]
fn missing_out_time_column_errors() {
    let content = fixture("missing_out_time.csv");
    match parse_rows(&content) {
        Err(ParseError::MissingColumn { column }) => assert_eq!(column, "Out Time"),
        other => panic!("expected MissingColumn error, got {other:?}"),
    }
}

#[test]
fn hours_parse_leading_numeric_prefix() {
    assert_eq!(parse_hours("7.5"), 7.5);
    assert_eq!(parse_hours(" 2.25 hrs "), 2.25);
    assert_eq!(parse_hours("-1.5"), -1.5);
    assert_eq!(parse_hours("eight"), 0.0);
    assert_eq!(parse_hours(""), 0.0);
}

#[test]
fn platform_parses_from_name() {
    assert_eq!(
        SchedulingPlatform::try_from("7shifts"),
        Ok(SchedulingPlatform::SevenShifts)
    );
    assert_eq!(
        SchedulingPlatform::try_from(" WhenToWork "),
        Ok(SchedulingPlatform::WhenToWork)
    );
    assert!(SchedulingPlatform::try_from("paper calendar").is_err());
}
