use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "en_GB-northern_english_male-medium.onnx";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    // Piper engine
    pub piper_bin: PathBuf,
    pub models_dir: PathBuf,
    pub default_model: String,
    pub synthesis_timeout_secs: u64,
    // Generated audio
    pub output_dir: PathBuf,
    pub output_url_prefix: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_format: LogFormat::Pretty,
            piper_bin: PathBuf::from("/usr/local/bin/piper"),
            models_dir: PathBuf::from("/app/models"),
            default_model: DEFAULT_MODEL.to_string(),
            synthesis_timeout_secs: 120,
            output_dir: PathBuf::from("/app/output"),
            output_url_prefix: "/output".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let config = Config {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: match env::var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => defaults.port,
            },
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(defaults.log_format),
            piper_bin: env::var("PIPER_BIN")
                .map(PathBuf::from)
                .unwrap_or(defaults.piper_bin),
            models_dir: env::var("MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.models_dir),
            default_model: env::var("DEFAULT_MODEL").unwrap_or(defaults.default_model),
            synthesis_timeout_secs: match env::var("SYNTHESIS_TIMEOUT_SECS") {
                Ok(secs) => parse_timeout_secs(&secs)?,
                Err(_) => defaults.synthesis_timeout_secs,
            },
            output_dir: env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            output_url_prefix: env::var("OUTPUT_URL_PREFIX")
                .map(|prefix| prefix.trim_end_matches('/').to_string())
                .unwrap_or(defaults.output_url_prefix),
        };

        Ok(config)
    }

    pub fn synthesis_timeout(&self) -> Duration {
        Duration::from_secs(self.synthesis_timeout_secs)
    }
}

/// Parse `SYNTHESIS_TIMEOUT_SECS`. Zero is rejected.
fn parse_timeout_secs(value: &str) -> Result<u64, Box<dyn std::error::Error>> {
    let secs: u64 = value.trim().parse()?;
    if secs == 0 {
        return Err("SYNTHESIS_TIMEOUT_SECS must be greater than zero".into());
    }
    Ok(secs)
}
