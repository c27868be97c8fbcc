use serde::{Deserialize, Serialize};

/// Body for rejected requests (4xx)
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for requests that were accepted but could not be fulfilled (5xx)
#[derive(Debug, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}
