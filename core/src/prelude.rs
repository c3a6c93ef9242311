/// Common error type for profile ingestion and analysis.
#[derive(thiserror::Error, Debug)]
pub enum BeamError {
    #[error("too few samples: got {0}, need at least 2")]
    TooFewSamples(usize),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("unsupported source: {0}")]
    UnsupportedSource(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type BeamResult<T> = Result<T, BeamError>;
