use serde::{Deserialize, Serialize};

use super::error::TtsServiceError;
use super::service::SynthesisRequest;

/// Request for POST /synthesize
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest {
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_w: Option<f64>,
}

pub const TEXT_REQUIRED: &str = "Text is required.";
pub const BODY_TOO_LARGE: &str = "Request body is too large.";

impl TryFrom<SynthesizeRequest> for SynthesisRequest {
    type Error = TtsServiceError;

    fn try_from(body: SynthesizeRequest) -> Result<Self, Self::Error> {
        let text = body
            .text
            .filter(|text| !text.is_empty())
            .ok_or_else(|| TtsServiceError::Invalid(TEXT_REQUIRED.to_string()))?;

        Ok(SynthesisRequest {
            text,
            model: body.model,
            length_scale: body.length_scale,
            noise_scale: body.noise_scale,
            noise_w: body.noise_w,
        })
    }
}

/// Response for a successful POST /synthesize
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
}
