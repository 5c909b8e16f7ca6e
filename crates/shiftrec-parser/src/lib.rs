pub mod errors;
pub mod model;
pub mod normalizer;
pub mod platforms;
pub mod rows;

pub use errors::ParseError;
pub use model::{ColumnMapping, LogicalField, RawShiftRow, SavedMapping, CANONICAL_HEADER};
pub use normalizer::{apply_mapping, detect_platform, map_columns, MappingSource};
pub use platforms::SchedulingPlatform;
pub use rows::parse_rows;

#[cfg(test)]
mod tests;
