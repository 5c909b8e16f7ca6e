use std::collections::BTreeMap;
use std::collections::BTreeSet;

use tracing::debug;

use crate::errors::ParseError;
use crate::model::{ColumnMapping, LogicalField, SavedMapping};
use crate::platforms::{SchedulingPlatform, MEGA_ALIASES};

/// Minimum fields (of 8) a platform's vocabulary must cover before
/// auto-detection will name it.
const DETECTION_THRESHOLD: usize = 5;

pub enum MappingSource<'a> {
    Platform(SchedulingPlatform),
    Saved(&'a SavedMapping),
    Auto,
}

/// Resolves the mapping from a source export's header to the canonical
/// schema. The saved-mapping path falls through to the union vocabulary
/// when any required field no longer resolves against the live header.
pub fn map_columns(content: &str, source: MappingSource<'_>) -> Result<ColumnMapping, ParseError> {
    let header = header_fields(content)?;
    let mapping = match source {
        MappingSource::Platform(platform) => resolve(&header, &platform_vocabulary(platform)),
        MappingSource::Auto => resolve(&header, &union_vocabulary()),
        MappingSource::Saved(saved) => {
            let mapping = resolve(&header, &saved_vocabulary(saved));
            if mapping.success {
                mapping
            } else {
                resolve(&header, &union_vocabulary())
            }
        }
    };
    Ok(mapping)
}

/// Scores every known platform against the header and returns the best one
/// only when at least [`DETECTION_THRESHOLD`] of its 8 fields have an alias
/// present. Ties keep the earliest platform in declaration order.
pub fn detect_platform(content: &str) -> Result<Option<SchedulingPlatform>, ParseError> {
    let header = header_fields(content)?;
    let mut best: Option<(SchedulingPlatform, usize)> = None;
    for platform in SchedulingPlatform::ALL {
        let score = LogicalField::ALL
            .iter()
            .filter(|field| {
                platform
                    .aliases(**field)
                    .iter()
                    .any(|alias| header.iter().any(|cell| cell.eq_ignore_ascii_case(alias)))
            })
            .count();
        debug!(platform = platform.name(), score, "platform detection score");
        if best.map_or(true, |(_, existing)| score > existing) {
            best = Some((platform, score));
        }
    }
    Ok(best
        .filter(|(_, score)| *score >= DETECTION_THRESHOLD)
        .map(|(platform, _)| platform))
}

/// Rewrites only the header line to canonical column names at the mapped
/// positions. Unmapped columns and every data row pass through untouched.
pub fn apply_mapping(content: &str, mapping: &ColumnMapping) -> Result<String, ParseError> {
    let mut out = String::with_capacity(content.len() + 16);
    let mut rewritten = false;
    for line in content.split_inclusive('\n') {
        if rewritten {
            out.push_str(line);
            continue;
        }
        let body = line.strip_suffix('\n').unwrap_or(line);
        let body = body.strip_suffix('\r').unwrap_or(body);
        if body.trim().is_empty() {
            out.push_str(line);
            continue;
        }
        out.push_str(&rewrite_header_line(body, mapping)?);
        out.push_str(&line[body.len()..]);
        rewritten = true;
    }
    if !rewritten {
        return Err(ParseError::EmptyInput);
    }
    Ok(out)
}

/// Tokenizes the first non-empty line, honoring quoted fields, and trims
/// each cell.
pub fn header_fields(content: &str) -> Result<Vec<String>, ParseError> {
    let line = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or(ParseError::EmptyInput)?;
    let fields = tokenize_line(line)?;
    Ok(fields.iter().map(|cell| cell.trim().to_string()).collect())
}

fn tokenize_line(line: &str) -> Result<Vec<String>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let record = reader
        .records()
        .next()
        .ok_or(ParseError::EmptyInput)??;
    Ok(record.iter().map(|cell| cell.to_string()).collect())
}

fn rewrite_header_line(body: &str, mapping: &ColumnMapping) -> Result<String, ParseError> {
    let mut fields = tokenize_line(body)?;
    for (field, idx) in &mapping.columns {
        if let Some(cell) = fields.get_mut(*idx) {
            *cell = field.canonical_name().to_string();
        }
    }
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(&fields)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| ParseError::Csv {
            source: err.into_error().into(),
        })?;
    let mut line = String::from_utf8(bytes).unwrap_or_default();
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// First-match-wins resolution: for each field, in vocabulary order, claim
/// the lowest-indexed unclaimed column whose header matches the alias
/// case-insensitively. A claimed index is never claimed again.
fn resolve(header: &[String], vocabulary: &[(LogicalField, Vec<&str>)]) -> ColumnMapping {
    let mut columns = BTreeMap::new();
    let mut claimed = BTreeSet::new();
    for (field, aliases) in vocabulary {
        'aliases: for alias in aliases {
            for (idx, cell) in header.iter().enumerate() {
                if !claimed.contains(&idx) && cell.eq_ignore_ascii_case(alias) {
                    claimed.insert(idx);
                    columns.insert(*field, idx);
                    break 'aliases;
                }
            }
        }
    }
    let unmapped_fields: Vec<LogicalField> = LogicalField::ALL
        .iter()
        .copied()
        .filter(|field| !columns.contains_key(field))
        .collect();
    let success = unmapped_fields.iter().all(|field| !field.is_required());
    ColumnMapping {
        columns,
        unmapped_fields,
        success,
    }
}

fn platform_vocabulary(platform: SchedulingPlatform) -> Vec<(LogicalField, Vec<&'static str>)> {
    LogicalField::ALL
        .iter()
        .map(|field| (*field, platform.aliases(*field).to_vec()))
        .collect()
}

fn union_vocabulary() -> Vec<(LogicalField, Vec<&'static str>)> {
    LogicalField::ALL
        .iter()
        .map(|field| (*field, MEGA_ALIASES.get(field).cloned().unwrap_or_default()))
        .collect()
}

fn saved_vocabulary(saved: &SavedMapping) -> Vec<(LogicalField, Vec<&str>)> {
    LogicalField::ALL
        .iter()
        .filter_map(|field| {
            saved
                .headers
                .get(field)
                .map(|name| (*field, vec![name.as_str()]))
        })
        .collect()
}
