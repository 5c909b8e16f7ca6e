//! Reconciliation engine: canonical CSV text in, aligned shift deltas and
//! classified attendance events out.

pub mod align;
pub mod classify;
pub mod delta;
pub mod error;
pub mod pipeline;
pub mod types;

pub use align::{AlignmentStrategy, SequentialAligner};
pub use error::EngineError;
pub use pipeline::ReconciliationPipeline;
pub use types::{
    DateRange, DeltaStatus, DetectedEvent, EventKind, ImportResult, ParsedShift, PointThresholds,
    ShiftDelta,
};
