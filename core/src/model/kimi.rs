use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ModelError;
use super::ChatModel;

macro_rules! target {
    () => {
        "answer_judge::models::kimi"
    };
}

pub const KIMI_API_BASE: &str = "https://api.moonshot.cn/v1";
pub const KIMI_DEFAULT_MODEL: &str = "kimi-k2-0711-preview";
pub const KIMI_ANSWER_PERSONA: &str = "你是最常见的小红书用户回答者，请用小红书常见、不长篇大论的方式回答问题。你只需给出最常见的普通人会怎么答，不要写太多。";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KimiConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub answer_persona: String,
}

impl Default for KimiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: KIMI_API_BASE.to_string(),
            model: KIMI_DEFAULT_MODEL.to_string(),
            answer_persona: KIMI_ANSWER_PERSONA.to_string(),
        }
    }
}

/// Moonshot Kimi through its OpenAI compatible chat completion API.
pub struct KimiModel {
    client: Option<Client<OpenAIConfig>>,
    model: String,
    answer_persona: String,
}

impl KimiModel {
    pub fn new(config: KimiConfig, http_client: reqwest::Client) -> Self {
        let client = config.api_key.as_ref().map(|key| {
            let openai_config = OpenAIConfig::new()
                .with_api_key(key.expose_secret())
                .with_api_base(config.base_url.trim_end_matches('/'));
            Client::with_config(openai_config).with_http_client(http_client)
        });

        if client.is_none() {
            tracing::warn!(target: target!(), "Kimi API key is not configured, calls will fail");
        }

        Self {
            client,
            model: config.model,
            answer_persona: config.answer_persona,
        }
    }
}

#[async_trait]
impl ChatModel for KimiModel {
    fn name(&self) -> &str {
        "kimi"
    }

    fn display_name(&self) -> &str {
        "Kimi"
    }

    async fn complete(
        &self,
        system_prompt: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, ModelError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| ModelError::CredentialsError(self.name().to_string()))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .temperature(temperature)
            .build()?;

        tracing::debug!(target: target!(), "Invoking {} with prompt: {prompt}", self.model);
        let response = client.chat().create(request).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ModelError::EmptyReply(self.display_name().to_string()))?;

        tracing::debug!(target: target!(), "Kimi reply: {content}");
        Ok(content)
    }

    async fn answer(&self, question: &str, temperature: f32) -> Result<String, ModelError> {
        self.complete(&self.answer_persona, question, temperature)
            .await
    }
}
