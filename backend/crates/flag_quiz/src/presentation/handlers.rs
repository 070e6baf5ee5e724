//! HTTP Handlers

use crate::application::config::QuizConfig;
use crate::application::generate_question::QuestionGenerator;
use crate::application::issue_question::IssueFlagQuestionUseCase;
use crate::domain::repository::{CodeListSource, FlagImageSource};
use crate::error::{QuizError, QuizResult};
use crate::presentation::dto::{FlagQuestionQuery, FlagQuestionResponse, HealthResponse};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared state for quiz handlers
#[derive(Clone)]
pub struct QuizAppState<C>
where
    C: FlagImageSource + CodeListSource + Clone + Send + Sync + 'static,
{
    pub generator: Arc<QuestionGenerator>,
    pub cdn: Arc<C>,
    pub config: Arc<QuizConfig>,
}

/// GET /api/flag-image
pub async fn issue_flag_question<C>(
    State(state): State<QuizAppState<C>>,
    query: Result<Query<FlagQuestionQuery>, QueryRejection>,
) -> QuizResult<impl IntoResponse>
where
    C: FlagImageSource + CodeListSource + Clone + Send + Sync + 'static,
{
    let Query(query) =
        query.map_err(|rejection| QuizError::InvalidArgument(rejection.body_text()))?;

    let use_case = IssueFlagQuestionUseCase::new(
        state.generator.clone(),
        state.cdn.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(query.option_count).await?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(FlagQuestionResponse {
            image_buffer: output.image_b64,
            country_name: output.name,
            options: output.options,
        }),
    ))
}

/// GET /api/flag-info
pub async fn flag_codes<C>(
    State(state): State<QuizAppState<C>>,
) -> QuizResult<Json<BTreeMap<String, String>>>
where
    C: FlagImageSource + CodeListSource + Clone + Send + Sync + 'static,
{
    let codes = state.cdn.fetch_codes().await?;
    tracing::info!(count = codes.len(), "Fetched flag code list");
    Ok(Json(codes))
}

/// GET /api/health
pub async fn health<C>(
    State(state): State<QuizAppState<C>>,
) -> QuizResult<Json<HealthResponse>>
where
    C: FlagImageSource + CodeListSource + Clone + Send + Sync + 'static,
{
    Ok(Json(HealthResponse {
        status: "ok",
        catalog_size: state.generator.catalog().len(),
        recent_count: state.generator.recent_codes()?.len(),
    }))
}
