use shiftrec_parser::parse_rows;
use tracing::{debug, info};

use crate::align::{AlignmentStrategy, SequentialAligner};
use crate::delta::reconcile_shifts;
use crate::error::EngineError;
use crate::types::{ImportResult, ParsedShift, PointThresholds};

/// End-to-end reconciliation over two canonical-header CSV documents.
/// Normalization runs upstream, after a human has confirmed the column
/// mapping, so this pipeline only ever sees canonical text.
pub struct ReconciliationPipeline {
    thresholds: PointThresholds,
    strategy: Box<dyn AlignmentStrategy>,
}

impl ReconciliationPipeline {
    pub fn new(thresholds: PointThresholds) -> Self {
        Self {
            thresholds,
            strategy: Box::new(SequentialAligner),
        }
    }

    pub fn with_strategy(thresholds: PointThresholds, strategy: Box<dyn AlignmentStrategy>) -> Self {
        Self {
            thresholds,
            strategy,
        }
    }

    /// Fatal parse errors on either document short-circuit: the result
    /// carries the error messages and no deltas rather than a partial,
    /// misleading reconciliation.
    pub fn run(&self, scheduled_csv: &str, worked_csv: &str) -> ImportResult {
        let mut errors = Vec::new();
        let scheduled = self
            .ingest(scheduled_csv, "scheduled")
            .map_err(|err| errors.push(err.to_string()))
            .ok();
        let worked = self
            .ingest(worked_csv, "worked")
            .map_err(|err| errors.push(err.to_string()))
            .ok();
        let (Some(scheduled), Some(worked)) = (scheduled, worked) else {
            return ImportResult::failed(errors);
        };

        let result = reconcile_shifts(scheduled, worked, &self.thresholds);
        info!(
            matched = result.matched_count,
            no_show = result.no_show_count,
            unscheduled = result.unscheduled_count,
            "reconciliation complete"
        );
        result
    }

    fn ingest(&self, content: &str, side: &'static str) -> Result<Vec<ParsedShift>, EngineError> {
        let rows = parse_rows(content)?;
        debug!(side, rows = rows.len(), "parsed canonical rows");
        let shifts = self.strategy.align(rows)?;
        debug!(
            side,
            shifts = shifts.len(),
            strategy = self.strategy.name(),
            "aligned shifts"
        );
        Ok(shifts)
    }
}
