pub mod piper_tts_repository;
pub mod tts_repository;

pub use piper_tts_repository::PiperTtsRepository;
pub use tts_repository::{EngineError, EngineReadiness, SynthesisJob, TtsRepository};
