use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::database::DocumentStore;
use crate::model::error::ModelError;
use crate::model::{ChatModel, ProviderRegistry};
use crate::score::extract_score;

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(60);
pub const JUDGE_TEMPERATURE: f32 = 0.3;
pub const ANSWER_TEMPERATURE: f32 = 0.6;

#[derive(Debug, Clone, Copy)]
pub struct ExecutorOptions {
    pub provider_timeout: Duration,
    pub judge_temperature: f32,
    pub answer_temperature: f32,
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            judge_temperature: JUDGE_TEMPERATURE,
            answer_temperature: ANSWER_TEMPERATURE,
        }
    }
}

/// Long-lived handles shared by every request.
#[derive(Clone)]
pub struct ExecutorContext {
    pub store: Arc<dyn DocumentStore>,
    pub providers: ProviderRegistry,
    pub options: ExecutorOptions,
}

impl ExecutorContext {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        providers: ProviderRegistry,
        options: ExecutorOptions,
    ) -> Self {
        Self {
            store,
            providers,
            options,
        }
    }

    async fn bounded<F>(&self, model: &dyn ChatModel, call: F) -> Result<String, ModelError>
    where
        F: Future<Output = Result<String, ModelError>>,
    {
        let timeout = self.options.provider_timeout;
        match tokio::time::timeout(timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ModelError::Timeout(
                model.display_name().to_string(),
                timeout.as_secs(),
            )),
        }
    }

    /// Single provider call bounded by the configured timeout.
    pub async fn complete(
        &self,
        model: &dyn ChatModel,
        system_prompt: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, ModelError> {
        self.bounded(model, model.complete(system_prompt, prompt, temperature))
            .await
    }

    /// Persona answer to `question`, bounded like [`Self::complete`].
    pub async fn answer(
        &self,
        model: &dyn ChatModel,
        question: &str,
    ) -> Result<String, ModelError> {
        let temperature = self.options.answer_temperature;
        self.bounded(model, model.answer(question, temperature))
            .await
    }

    /// Asks `model` for a score. Provider failures and replies without a
    /// score both come back as `None`.
    pub async fn score(
        &self,
        model: &dyn ChatModel,
        system_prompt: &str,
        prompt: &str,
    ) -> Option<f64> {
        let reply = match self
            .complete(model, system_prompt, prompt, self.options.judge_temperature)
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    target: "answer_judge::executor",
                    "{} failed to score: {e}",
                    model.display_name()
                );
                return None;
            }
        };

        let score = extract_score(&reply);
        if score.is_none() {
            tracing::warn!(
                target: "answer_judge::executor",
                "{} reply has no valid score: {reply}",
                model.display_name()
            );
        }
        score
    }
}

impl std::fmt::Debug for ExecutorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutorContext")
            .field("providers", &self.providers)
            .field("options", &self.options)
            .finish()
    }
}
