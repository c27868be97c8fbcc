use crate::error::AppError;
use crate::infrastructure::repositories::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("synthesis failed: {0}")]
    Engine(#[from] EngineError),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Engine(e) => AppError::SynthesisFailed(e.to_string()),
        }
    }
}
