use super::error::TtsServiceError;

pub const DEFAULT_LENGTH_SCALE: f64 = 1.0;
pub const DEFAULT_NOISE_SCALE: f64 = 0.667;
pub const DEFAULT_NOISE_W: f64 = 0.8;

/// Piper tuning parameters, forwarded to the engine as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParams {
    /// Speaking rate. 1.2 makes speech 20% slower.
    pub length_scale: f64,
    /// Variability between runs; higher adds intonation but can sound less stable.
    pub noise_scale: f64,
    /// Phoneme duration noise (Piper's `noise_w`).
    pub noise_w: f64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            length_scale: DEFAULT_LENGTH_SCALE,
            noise_scale: DEFAULT_NOISE_SCALE,
            noise_w: DEFAULT_NOISE_W,
        }
    }
}

impl SynthesisParams {
    /// Fill unset values with the engine defaults and reject values Piper cannot use.
    pub fn resolve(
        length_scale: Option<f64>,
        noise_scale: Option<f64>,
        noise_w: Option<f64>,
    ) -> Result<Self, TtsServiceError> {
        let defaults = Self::default();
        let params = Self {
            length_scale: length_scale.unwrap_or(defaults.length_scale),
            noise_scale: noise_scale.unwrap_or(defaults.noise_scale),
            noise_w: noise_w.unwrap_or(defaults.noise_w),
        };

        if !params.length_scale.is_finite() || params.length_scale <= 0.0 {
            return Err(TtsServiceError::Invalid(
                "lengthScale must be a positive number".to_string(),
            ));
        }
        if !params.noise_scale.is_finite() || params.noise_scale < 0.0 {
            return Err(TtsServiceError::Invalid(
                "noiseScale must not be negative".to_string(),
            ));
        }
        if !params.noise_w.is_finite() || params.noise_w < 0.0 {
            return Err(TtsServiceError::Invalid(
                "noiseW must not be negative".to_string(),
            ));
        }

        Ok(params)
    }
}

/// Check that a model identifier names a file directly inside the models directory.
pub fn validate_model_id(model: &str) -> Result<(), TtsServiceError> {
    let invalid = model.is_empty()
        || model == "."
        || model == ".."
        || model.contains('/')
        || model.contains('\\')
        || model.contains('\0');

    if invalid {
        return Err(TtsServiceError::Invalid(format!("Invalid model: {}", model)));
    }

    Ok(())
}
