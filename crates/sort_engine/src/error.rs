use shared::{
    domain::AlgorithmKind,
    error::{ErrorCode, ErrorReport, UnknownAlgorithm},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    #[error("array size must be between 1 and {max}, got {size}")]
    InvalidSize { size: usize, max: usize },
    #[error("speed must be between {min} and {max}, got {speed}")]
    InvalidSpeed { speed: u32, min: u32, max: u32 },
    #[error("{algorithm} sort requires non-negative values, found {value} at index {index}")]
    NegativeValue {
        algorithm: AlgorithmKind,
        index: usize,
        value: i64,
    },
    #[error("{algorithm} sort supports at most {max} distinct keys, input spans {range}")]
    RangeTooLarge {
        algorithm: AlgorithmKind,
        range: u64,
        max: u64,
    },
    #[error("a {algorithm} sort is already in progress")]
    SortInProgress { algorithm: AlgorithmKind },
    #[error("{algorithm} sort was aborted")]
    Aborted { algorithm: AlgorithmKind },
    #[error("no array has been generated yet")]
    NoSequence,
    #[error("sort task failed: {0}")]
    TaskFailed(String),
}

impl EngineError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::UnknownAlgorithm(_)
            | EngineError::InvalidSize { .. }
            | EngineError::InvalidSpeed { .. }
            | EngineError::NegativeValue { .. }
            | EngineError::RangeTooLarge { .. }
            | EngineError::NoSequence => ErrorCode::Validation,
            EngineError::SortInProgress { .. } => ErrorCode::Busy,
            EngineError::Aborted { .. } => ErrorCode::Aborted,
            EngineError::TaskFailed(_) => ErrorCode::Internal,
        }
    }
}

impl From<&EngineError> for ErrorReport {
    fn from(value: &EngineError) -> Self {
        ErrorReport::new(value.code(), value.to_string())
    }
}
