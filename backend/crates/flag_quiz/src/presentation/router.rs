//! Quiz Router

use crate::application::config::QuizConfig;
use crate::application::generate_question::QuestionGenerator;
use crate::domain::repository::{CodeListSource, FlagImageSource};
use crate::infra::flag_cdn::FlagCdnClient;
use crate::presentation::handlers::{self, QuizAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the quiz router backed by the flag CDN
pub fn quiz_router(
    generator: Arc<QuestionGenerator>,
    cdn: FlagCdnClient,
    config: QuizConfig,
) -> Router {
    quiz_router_generic(generator, cdn, config)
}

/// Create a quiz router for any image/code-list source
pub fn quiz_router_generic<C>(
    generator: Arc<QuestionGenerator>,
    cdn: C,
    config: QuizConfig,
) -> Router
where
    C: FlagImageSource + CodeListSource + Clone + Send + Sync + 'static,
{
    let state = QuizAppState {
        generator,
        cdn: Arc::new(cdn),
        config: Arc::new(config),
    };

    Router::new()
        .route("/flag-image", get(handlers::issue_flag_question::<C>))
        .route("/flag-info", get(handlers::flag_codes::<C>))
        .route("/health", get(handlers::health::<C>))
        .with_state(state)
}
