//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Query for GET /api/flag-image
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagQuestionQuery {
    #[serde(default)]
    pub option_count: Option<i64>,
}

/// Response for GET /api/flag-image
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagQuestionResponse {
    /// Base64-encoded PNG
    pub image_buffer: String,
    pub country_name: String,
    pub options: Vec<String>,
}

/// Response for GET /api/health
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub catalog_size: usize,
    /// Codes currently held back from primary selection
    pub recent_count: usize,
}
