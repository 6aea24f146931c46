//! OpenAI互換 Chat Completions API クライアント
//!
//! 1回の呼び出しにつき user ロールのメッセージ1件を送り、
//! 最初の choice のテキストだけを使う。

use super::types::{CompletionRequest, ModelError};
use super::CompletionModel;
use crate::config::{Config, Credential};
use crate::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    credential: Credential,
}

impl OpenAiClient {
    pub fn new(config: &Config, credential: Credential) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ScreenError::Config(format!("HTTPクライアント初期化エラー: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            credential,
        })
    }

    fn body<'a>(&'a self, request: &'a CompletionRequest) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

impl CompletionModel for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> std::result::Result<String, ModelError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.credential.expose())
            .json(&self.body(request))
            .send()
            .await
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let preview: String = text.chars().take(300).collect();
            return Err(ModelError::Transport(format!("HTTP {}: {}", status, preview)));
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Malformed(format!("レスポンスJSONが不正: {}", e)))?;

        first_choice_text(payload)
    }
}

fn first_choice_text(payload: ChatResponse) -> std::result::Result<String, ModelError> {
    payload
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(ModelError::EmptyResponse)
}
