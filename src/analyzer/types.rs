use thiserror::Error;

/// モデル呼び出しの種類（トークン上限が種類ごとに決まっている）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Extraction,
    Personality,
    Qualification,
    Demands,
}

impl CallKind {
    pub fn max_tokens(&self) -> u32 {
        match self {
            CallKind::Extraction => 1000,
            CallKind::Personality => 150,
            CallKind::Qualification => 150,
            CallKind::Demands => 200,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallKind::Extraction => "フィールド抽出",
            CallKind::Personality => "性格分析",
            CallKind::Qualification => "適合判定",
            CallKind::Demands => "採用条件解析",
        }
    }
}

/// モデルへのリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub kind: CallKind,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    /// 決定的デコード（temperature 0）でリクエストを作る
    pub fn new(kind: CallKind, prompt: String) -> Self {
        Self {
            kind,
            prompt,
            max_tokens: kind.max_tokens(),
            temperature: 0.0,
        }
    }
}

/// 候補者1件分の呼び出し失敗。既定値に置き換えて処理を続ける
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("通信エラー: {0}")]
    Transport(String),

    #[error("応答が空です")]
    EmptyResponse,

    #[error("応答の形式が不正: {0}")]
    Malformed(String),
}

impl From<resume_screen_common::Error> for ModelError {
    fn from(e: resume_screen_common::Error) -> Self {
        ModelError::Malformed(e.to_string())
    }
}
