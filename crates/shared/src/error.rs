use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Busy,
    Aborted,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected one of bubble, selection, insertion, counting, radix, bucket, merge, quick)")]
pub struct UnknownAlgorithm(pub String);

impl From<UnknownAlgorithm> for ErrorReport {
    fn from(value: UnknownAlgorithm) -> Self {
        Self::new(ErrorCode::Validation, value.to_string())
    }
}
