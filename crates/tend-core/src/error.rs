use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("date arithmetic failed: {0}")]
    DateArithmetic(#[from] jiff::Error),
}
