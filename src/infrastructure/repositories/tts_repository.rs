use crate::domain::tts::SynthesisParams;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// Everything the engine needs to produce one WAV file.
#[derive(Debug, Clone)]
pub struct SynthesisJob {
    pub text: String,
    /// Model file name, relative to the models directory
    pub model: String,
    pub output_path: PathBuf,
    pub params: SynthesisParams,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("model not found: {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("failed to start {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("engine I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("engine exited with {status}: {stderr}")]
    Exited { status: ExitStatus, stderr: String },

    #[error("engine timed out after {0:?}")]
    TimedOut(Duration),
}

/// What the readiness probe reports about the engine installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineReadiness {
    pub engine: bool,
    pub models: bool,
}

impl EngineReadiness {
    pub fn is_ready(&self) -> bool {
        self.engine && self.models
    }
}

/// Repository for TTS synthesis operations.
/// Abstracts the engine that turns text into a WAV file on disk.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `job.text` into `job.output_path`
    ///
    /// The file exists once this returns `Ok`. Nothing is cleaned up on failure.
    ///
    /// # Errors
    /// Returns error if the model is missing, the engine cannot be started,
    /// exits unsuccessfully or runs past its timeout
    async fn synthesize(&self, job: &SynthesisJob) -> Result<(), EngineError>;

    /// Check that the engine binary and models directory are in place
    async fn readiness(&self) -> EngineReadiness;
}
