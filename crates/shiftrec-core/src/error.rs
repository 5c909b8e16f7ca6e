use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid clock time '{value}' for employee {employee_id} on {date}")]
    InvalidTime {
        value: String,
        employee_id: String,
        date: String,
    },

    #[error("invalid date '{value}' for employee {employee_id}")]
    InvalidDate { value: String, employee_id: String },

    #[error(transparent)]
    Parse(#[from] shiftrec_parser::ParseError),
}
