use super::tts_repository::{EngineError, EngineReadiness, SynthesisJob, TtsRepository};
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Piper implementation of TTS repository.
///
/// The engine is executed directly with an argument vector; the text only
/// ever travels over stdin, so nothing in it is interpreted by a shell.
pub struct PiperTtsRepository {
    piper_bin: PathBuf,
    models_dir: PathBuf,
    timeout: Duration,
}

impl PiperTtsRepository {
    pub fn new(piper_bin: PathBuf, models_dir: PathBuf, timeout: Duration) -> Self {
        Self {
            piper_bin,
            models_dir,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.piper_bin.clone(),
            config.models_dir.clone(),
            config.synthesis_timeout(),
        )
    }

    /// Resolve a model identifier against the models directory
    pub fn model_path(&self, model: &str) -> PathBuf {
        self.models_dir.join(model)
    }

    fn build_args(&self, job: &SynthesisJob) -> Vec<OsString> {
        vec![
            OsString::from("--model"),
            self.model_path(&job.model).into_os_string(),
            OsString::from("--output_file"),
            job.output_path.clone().into_os_string(),
            OsString::from(format!("--length_scale={}", job.params.length_scale)),
            OsString::from(format!("--noise_scale={}", job.params.noise_scale)),
            OsString::from(format!("--noise_w={}", job.params.noise_w)),
        ]
    }

    /// Piper reads one utterance per line, so the text is newline-terminated.
    fn stdin_payload(text: &str) -> Vec<u8> {
        let mut payload = text.as_bytes().to_vec();
        if !text.ends_with('\n') {
            payload.push(b'\n');
        }
        payload
    }

    async fn ensure_model_exists(&self, model_path: &Path) -> Result<(), EngineError> {
        if tokio::fs::try_exists(model_path).await? {
            Ok(())
        } else {
            Err(EngineError::ModelNotFound(model_path.to_path_buf()))
        }
    }

    /// Spawn the engine, feed stdin and collect its output under the timeout.
    /// Dropping the child on timeout kills it.
    async fn run(&self, args: Vec<OsString>, payload: Vec<u8>) -> Result<Output, EngineError> {
        let mut child = Command::new(&self.piper_bin)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: self.piper_bin.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            EngineError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "engine stdin was not captured",
            ))
        })?;

        let feed = async move {
            stdin.write_all(&payload).await?;
            stdin.flush().await?;
            drop(stdin);
            Ok::<(), std::io::Error>(())
        };

        let (fed, output) = tokio::time::timeout(self.timeout, async move {
            tokio::join!(feed, child.wait_with_output())
        })
        .await
        .map_err(|_| EngineError::TimedOut(self.timeout))?;

        let output = output?;
        if !output.status.success() {
            return Err(EngineError::Exited {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        fed?;

        Ok(output)
    }
}

#[async_trait]
impl TtsRepository for PiperTtsRepository {
    async fn synthesize(&self, job: &SynthesisJob) -> Result<(), EngineError> {
        let start_time = Instant::now();

        let model_path = self.model_path(&job.model);
        self.ensure_model_exists(&model_path).await.map_err(|e| {
            tracing::error!(error = %e, model = %job.model, "Piper model lookup failed");
            e
        })?;

        let args = self.build_args(job);
        tracing::info!(
            program = %self.piper_bin.display(),
            args = ?args,
            text_length = job.text.len(),
            "Executing Piper"
        );

        let output = self
            .run(args, Self::stdin_payload(&job.text))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %job.model,
                    output_file = %job.output_path.display(),
                    "Failed to execute Piper command"
                );
                e
            })?;

        // Piper reports progress on stderr even when it succeeds
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::debug!(stderr = %stderr.trim(), "Piper stderr");
        }

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "piper",
            model = %job.model,
            output_file = %job.output_path.display(),
            latency_ms = duration.as_millis(),
            characters_count = job.text.len(),
            "Successfully created WAV file"
        );

        Ok(())
    }

    async fn readiness(&self) -> EngineReadiness {
        let engine = tokio::fs::metadata(&self.piper_bin)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        let models = tokio::fs::metadata(&self.models_dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        EngineReadiness { engine, models }
    }
}
