mod types;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ModelError;
use super::ChatModel;
use types::{
    BotSetting, ChatCompletionProRequest, ChatCompletionProResponse, Message, ReplyConstraints,
    SenderType,
};

macro_rules! target {
    () => {
        "answer_judge::models::minimax"
    };
}

pub const MINIMAX_API_BASE: &str = "https://api.minimaxi.com/v1";
pub const MINIMAX_DEFAULT_MODEL: &str = "MiniMax-Text-01";
pub const MINIMAX_ANSWER_PERSONA: &str = "请简洁明了地回答问题，不要长篇大论。你是一个知乎的普通用户，";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    pub api_key: Option<SecretString>,
    pub group_id: Option<String>,
    pub base_url: String,
    pub model: String,
    pub bot_name: String,
    pub user_name: String,
    pub tokens_to_generate: u32,
    pub answer: AnswerPersona,
}

/// Bot and sender used when MiniMax writes a reference answer.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnswerPersona {
    pub bot_name: String,
    pub user_name: String,
    pub content: String,
}

impl Default for AnswerPersona {
    fn default() -> Self {
        Self {
            bot_name: "简洁明了知乎用户".to_string(),
            user_name: "中枢控制".to_string(),
            content: MINIMAX_ANSWER_PERSONA.to_string(),
        }
    }
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            group_id: None,
            base_url: MINIMAX_API_BASE.to_string(),
            model: MINIMAX_DEFAULT_MODEL.to_string(),
            bot_name: "MM智能助理".to_string(),
            user_name: "小明".to_string(),
            tokens_to_generate: 1024,
            answer: AnswerPersona::default(),
        }
    }
}

/// MiniMax `chatcompletion_pro`.
pub struct MinimaxModel {
    config: MinimaxConfig,
    client: reqwest::Client,
}

impl MinimaxModel {
    pub fn new(config: MinimaxConfig, client: reqwest::Client) -> Self {
        if config.api_key.is_none() || config.group_id.is_none() {
            tracing::warn!(target: target!(), "MiniMax API key or group id is not configured, calls will fail");
        }
        Self { config, client }
    }

    fn credentials(&self) -> Result<(&SecretString, &str), ModelError> {
        match (&self.config.api_key, self.config.group_id.as_deref()) {
            (Some(key), Some(group)) if !group.is_empty() => Ok((key, group)),
            _ => Err(ModelError::CredentialsError(self.name().to_string())),
        }
    }
}

#[async_trait]
impl ChatModel for MinimaxModel {
    fn name(&self) -> &str {
        "minimax"
    }

    fn display_name(&self) -> &str {
        "MiniMax"
    }

    async fn complete(
        &self,
        system_prompt: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, ModelError> {
        self.chat(
            &self.config.bot_name,
            &self.config.user_name,
            system_prompt,
            prompt,
            temperature,
        )
        .await
    }

    async fn answer(&self, question: &str, temperature: f32) -> Result<String, ModelError> {
        let persona = &self.config.answer;
        self.chat(
            &persona.bot_name,
            &persona.user_name,
            &persona.content,
            question,
            temperature,
        )
        .await
    }
}

impl MinimaxModel {
    async fn chat(
        &self,
        bot_name: &str,
        user_name: &str,
        system_prompt: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, ModelError> {
        let (api_key, group_id) = self.credentials()?;

        let payload = ChatCompletionProRequest {
            model: &self.config.model,
            tokens_to_generate: self.config.tokens_to_generate,
            temperature,
            reply_constraints: ReplyConstraints {
                sender_type: SenderType::Bot,
                sender_name: bot_name,
            },
            messages: vec![Message {
                sender_type: SenderType::User,
                sender_name: user_name,
                text: prompt,
            }],
            bot_setting: vec![BotSetting {
                bot_name,
                content: system_prompt,
            }],
        };

        let url = format!(
            "{}/text/chatcompletion_pro",
            self.config.base_url.trim_end_matches('/')
        );
        tracing::debug!(target: target!(), "Invoking {} on {url} with prompt: {prompt}", self.config.model);

        let resp = self
            .client
            .post(url)
            .query(&[("GroupId", group_id)])
            .bearer_auth(api_key.expose_secret())
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(target: target!(), "MiniMax error {status}: {body}");
            return Err(ModelError::StatusError {
                provider: self.display_name().to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let response = serde_json::from_str::<ChatCompletionProResponse>(&text).map_err(|e| {
            tracing::error!(target: target!(), "Response deserialize failed. Response: {text}");
            ModelError::SerdeError(e)
        })?;

        if let Some(base_resp) = &response.base_resp {
            if base_resp.status_code != 0 {
                return Err(ModelError::ProviderError {
                    provider: self.display_name().to_string(),
                    message: format!("{} ({})", base_resp.status_msg, base_resp.status_code),
                });
            }
        }

        let reply = response
            .reply
            .filter(|reply| !reply.trim().is_empty())
            .ok_or_else(|| ModelError::EmptyReply(self.display_name().to_string()))?;

        tracing::debug!(target: target!(), "MiniMax reply: {reply}");
        Ok(reply)
    }
}
