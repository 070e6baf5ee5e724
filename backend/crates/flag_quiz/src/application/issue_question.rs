//! Issue Flag Question Use Case

use crate::application::config::QuizConfig;
use crate::application::generate_question::QuestionGenerator;
use crate::domain::repository::FlagImageSource;
use crate::error::QuizResult;
use base64::Engine;
use base64::engine::general_purpose;
use rand::Rng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// Output DTO for issue flag question
#[derive(Debug, Clone)]
pub struct IssueFlagQuestionOutput {
    pub code: String,
    pub name: String,
    pub options: Vec<String>,
    pub image_b64: String,
}

/// Issue Flag Question Use Case
///
/// Generates the next question and attaches the flag image for its code.
pub struct IssueFlagQuestionUseCase<I, R = StdRng>
where
    I: FlagImageSource,
    R: Rng,
{
    generator: Arc<QuestionGenerator<R>>,
    image_source: Arc<I>,
    config: Arc<QuizConfig>,
}

impl<I, R> IssueFlagQuestionUseCase<I, R>
where
    I: FlagImageSource,
    R: Rng,
{
    pub fn new(
        generator: Arc<QuestionGenerator<R>>,
        image_source: Arc<I>,
        config: Arc<QuizConfig>,
    ) -> Self {
        Self {
            generator,
            image_source,
            config,
        }
    }

    /// `option_count` falls back to the configured default when absent
    pub async fn execute(&self, option_count: Option<i64>) -> QuizResult<IssueFlagQuestionOutput> {
        let requested = option_count.unwrap_or_else(|| self.config.default_option_count_i64());

        // History is updated here even if the image fetch below fails
        let question = self.generator.generate_question(requested)?;

        let image = self.image_source.fetch_image(&question.code).await?;

        tracing::info!(
            code = %question.code,
            options = question.options.len(),
            image_bytes = image.len(),
            "Issued flag question"
        );

        Ok(IssueFlagQuestionOutput {
            code: question.code,
            name: question.name,
            options: question.options,
            image_b64: general_purpose::STANDARD.encode(&image),
        })
    }
}
