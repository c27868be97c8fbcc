use super::error::TtsServiceError;
use super::output::OutputNamer;
use super::params::{validate_model_id, SynthesisParams};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::{SynthesisJob, TtsRepository};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Validated input for one synthesis
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub model: Option<String>,
    pub length_scale: Option<f64>,
    pub noise_scale: Option<f64>,
    pub noise_w: Option<f64>,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
            length_scale: None,
            noise_scale: None,
            noise_w: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub file_name: String,
    pub output_path: PathBuf,
    /// Path clients use to fetch the file, e.g. `/output/1700000000000_synthesis.wav`
    pub file_path: String,
    pub model: String,
    pub duration: Duration,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    output_namer: OutputNamer,
    output_dir: PathBuf,
    output_url_prefix: String,
    default_model: String,
}

impl TtsService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        output_dir: PathBuf,
        output_url_prefix: String,
        default_model: String,
    ) -> Self {
        Self {
            tts_repo,
            output_namer: OutputNamer::new(),
            output_dir,
            output_url_prefix,
            default_model,
        }
    }

    pub fn from_config(tts_repo: Arc<dyn TtsRepository>, config: &Config) -> Self {
        Self::new(
            tts_repo,
            config.output_dir.clone(),
            config.output_url_prefix.clone(),
            config.default_model.clone(),
        )
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text into a new WAV file in the output directory
    ///
    /// This operation:
    /// - Applies the default model and tuning parameters
    /// - Allocates a unique `{millis}_synthesis.wav` file name
    /// - Runs the engine through the TTS repository
    ///
    /// Returns where the file was written and the path clients should use
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<TtsSynthesisResult, TtsServiceError> {
        let start_time = Instant::now();

        let model = request
            .model
            .unwrap_or_else(|| self.default_model.clone());
        validate_model_id(&model)?;

        let params =
            SynthesisParams::resolve(request.length_scale, request.noise_scale, request.noise_w)?;

        let file_name = self.output_namer.next_file_name();
        let output_path = self.output_dir.join(&file_name);

        tracing::info!(
            model = %model,
            file_name = %file_name,
            text_length = request.text.len(),
            "TTS synthesis request"
        );

        let job = SynthesisJob {
            text: request.text,
            model: model.clone(),
            output_path: output_path.clone(),
            params,
        };
        self.tts_repo.synthesize(&job).await?;

        Ok(TtsSynthesisResult {
            file_path: format!("{}/{}", self.output_url_prefix, file_name),
            file_name,
            output_path,
            model,
            duration: start_time.elapsed(),
        })
    }
}
