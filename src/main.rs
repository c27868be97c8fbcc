use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use piper_tts_backend::controllers::synthesis::SynthesisController;
use piper_tts_backend::domain::tts::TtsService;
use piper_tts_backend::infrastructure::config::{Config, LogFormat};
use piper_tts_backend::infrastructure::http::{create_router, start_http_server};
use piper_tts_backend::infrastructure::repositories::{PiperTtsRepository, TtsRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Piper TTS Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        piper_bin = %config.piper_bin.display(),
        models_dir = %config.models_dir.display(),
        output_dir = %config.output_dir.display(),
        default_model = %config.default_model,
        timeout_secs = config.synthesis_timeout_secs,
        "Synthesis configuration loaded"
    );

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| {
            format!(
                "failed to create output directory {}",
                config.output_dir.display()
            )
        })?;

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the engine repository
    let tts_repo: Arc<dyn TtsRepository> = Arc::new(PiperTtsRepository::from_config(&config));

    let readiness = tts_repo.readiness().await;
    if !readiness.engine {
        tracing::warn!(
            piper_bin = %config.piper_bin.display(),
            "Piper executable not found. Synthesis requests will fail until it is installed"
        );
    }
    if !readiness.models {
        tracing::warn!(
            models_dir = %config.models_dir.display(),
            "Models directory not found"
        );
    }

    // 2. Instantiate services
    let tts_service = Arc::new(TtsService::from_config(tts_repo.clone(), &config));

    // 3. Instantiate controllers
    let synthesis_controller = Arc::new(SynthesisController::new(tts_service));

    let app = create_router(tts_repo, synthesis_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "piper_tts_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
