pub mod dto;
pub mod error;
pub mod output;
pub mod params;
pub mod service;

pub use error::TtsServiceError;
pub use params::SynthesisParams;
pub use service::{SynthesisRequest, TtsService, TtsServiceApi, TtsSynthesisResult};
