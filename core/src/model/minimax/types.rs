use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatCompletionProRequest<'a> {
    pub model: &'a str,
    pub tokens_to_generate: u32,
    pub temperature: f32,
    pub reply_constraints: ReplyConstraints<'a>,
    pub messages: Vec<Message<'a>>,
    pub bot_setting: Vec<BotSetting<'a>>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SenderType {
    User,
    Bot,
}

#[derive(Debug, Serialize)]
pub struct ReplyConstraints<'a> {
    pub sender_type: SenderType,
    pub sender_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub sender_type: SenderType,
    pub sender_name: &'a str,
    pub text: &'a str,
}

/// Persona block; MiniMax takes the system instruction here.
#[derive(Debug, Serialize)]
pub struct BotSetting<'a> {
    pub bot_name: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionProResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub base_resp: Option<BaseResp>,
}

#[derive(Debug, Deserialize)]
pub struct BaseResp {
    pub status_code: i64,
    #[serde(default)]
    pub status_msg: String,
}
