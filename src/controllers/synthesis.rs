use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{
        dto::{SynthesizeRequest, SynthesizeResponse, BODY_TOO_LARGE, TEXT_REQUIRED},
        SynthesisRequest, TtsService, TtsServiceApi,
    },
    error::{AppError, AppResult},
};

pub const SYNTHESIS_SUCCESS_MESSAGE: &str = "WAV file created successfully.";

pub struct SynthesisController {
    tts_service: Arc<TtsService>,
}

impl SynthesisController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /synthesize - Convert text to a WAV file on disk
    pub async fn synthesize(
        State(controller): State<Arc<SynthesisController>>,
        body: Result<Json<SynthesizeRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<SynthesizeResponse>)> {
        // Apart from an oversized body, a body we cannot read is treated the same as one without text
        let Json(body) = body.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Unreadable synthesis request body");
            match rejection {
                JsonRejection::BytesRejection(inner)
                    if inner.status() == StatusCode::PAYLOAD_TOO_LARGE =>
                {
                    AppError::PayloadTooLarge(BODY_TOO_LARGE.to_string())
                }
                _ => AppError::BadRequest(TEXT_REQUIRED.to_string()),
            }
        })?;

        let request = SynthesisRequest::try_from(body)?;

        let result = controller.tts_service.synthesize(request).await?;

        tracing::info!(
            file_path = %result.file_path,
            model = %result.model,
            duration_ms = result.duration.as_millis(),
            "Synthesis request completed"
        );

        Ok((
            StatusCode::CREATED,
            Json(SynthesizeResponse {
                success: true,
                message: SYNTHESIS_SUCCESS_MESSAGE.to_string(),
                file_path: result.file_path,
            }),
        ))
    }
}
