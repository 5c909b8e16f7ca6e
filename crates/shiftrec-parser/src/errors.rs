use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("required column '{column}' not found in header")]
    MissingColumn { column: &'static str },

    #[error("input contained no header row")]
    EmptyInput,

    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
}
