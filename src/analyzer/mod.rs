//! モデル連携モジュール
//!
//! 履歴書1件につき3回（フィールド抽出・性格分析・適合判定）、
//! 実行全体で1回（採用条件解析）モデルを呼び出す。
//! 呼び出し失敗は ModelError として受け取り、警告を出して既定値で続行する。

mod openai;
mod types;

pub use openai::OpenAiClient;
pub use types::{CallKind, CompletionRequest, ModelError};

use resume_screen_common::{
    build_demands_prompt, build_extraction_prompt, build_personality_prompt,
    build_qualification_prompt, parse_candidate_fields, parse_demand_set, parse_qualification,
    CandidateFields, CandidateRecord, DemandSet, Qualification,
};
use tracing::{debug, warn};

/// 性格分析に失敗したときの値
pub const PERSONALITY_UNAVAILABLE: &str = "Personality analysis unavailable";

/// テキスト補完モデル
///
/// テストではスタブに差し替える
#[allow(async_fn_in_trait)]
pub trait CompletionModel {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ModelError>;
}

pub struct Analyzer<M> {
    model: M,
}

impl<M: CompletionModel> Analyzer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    async fn call(&self, kind: CallKind, prompt: String) -> Result<String, ModelError> {
        debug!("[{}] プロンプト長: {} chars", kind.label(), prompt.len());
        let request = CompletionRequest::new(kind, prompt);
        let response = self.model.complete(&request).await?;
        debug!("[{}] レスポンス長: {} chars", kind.label(), response.len());
        Ok(response)
    }

    pub async fn try_extract_fields(&self, text: &str) -> Result<CandidateFields, ModelError> {
        let response = self.call(CallKind::Extraction, build_extraction_prompt(text)).await?;
        Ok(parse_candidate_fields(&response)?)
    }

    /// 履歴書本文からフィールドを抽出（失敗時は全項目なし）
    pub async fn extract_fields(&self, text: &str) -> CandidateFields {
        self.try_extract_fields(text).await.unwrap_or_else(|e| {
            warn!("{}に失敗、空のフィールドで続行: {}", CallKind::Extraction.label(), e);
            CandidateFields::default()
        })
    }

    pub async fn try_summarize_personality(&self, autobiography: &str) -> Result<String, ModelError> {
        let response = self
            .call(CallKind::Personality, build_personality_prompt(autobiography))
            .await?;
        Ok(response.trim().to_string())
    }

    pub async fn summarize_personality(&self, autobiography: &str) -> String {
        self.try_summarize_personality(autobiography)
            .await
            .unwrap_or_else(|e| {
                warn!("{}に失敗: {}", CallKind::Personality.label(), e);
                PERSONALITY_UNAVAILABLE.to_string()
            })
    }

    pub async fn try_judge_qualification(
        &self,
        candidate: &CandidateFields,
        demands: &DemandSet,
    ) -> Result<Qualification, ModelError> {
        let response = self
            .call(
                CallKind::Qualification,
                build_qualification_prompt(candidate, demands),
            )
            .await?;
        Ok(parse_qualification(&response)?)
    }

    /// 採用条件への適合を判定（失敗時・`yes:` 以外は不適合）
    pub async fn judge_qualification(
        &self,
        candidate: &CandidateFields,
        demands: &DemandSet,
    ) -> Qualification {
        self.try_judge_qualification(candidate, demands)
            .await
            .unwrap_or_else(|e| {
                warn!("{}に失敗、不適合として扱います: {}", CallKind::Qualification.label(), e);
                Qualification::default()
            })
    }

    pub async fn try_parse_demands(&self, free_text: &str) -> Result<DemandSet, ModelError> {
        let response = self.call(CallKind::Demands, build_demands_prompt(free_text)).await?;
        Ok(parse_demand_set(&response)?)
    }

    /// 自然文の採用条件を構造化（失敗時は全カテゴリ空）
    pub async fn parse_demands(&self, free_text: &str) -> DemandSet {
        self.try_parse_demands(free_text).await.unwrap_or_else(|e| {
            warn!("{}に失敗、条件なしで続行: {}", CallKind::Demands.label(), e);
            DemandSet::default()
        })
    }

    /// 履歴書1件を解析してレコードと判定を返す
    pub async fn analyze_resume(
        &self,
        file_name: &str,
        text: &str,
        demands: &DemandSet,
    ) -> (CandidateRecord, Qualification) {
        let fields = self.extract_fields(text).await;

        let autobiography = fields.autobiography.as_deref().unwrap_or("");
        let personality = self.summarize_personality(autobiography).await;

        let qualification = self.judge_qualification(&fields, demands).await;

        let record = CandidateRecord {
            fields,
            file: file_name.to_string(),
            personality,
            matched_keywords: qualification.matched_keywords.clone(),
        };
        (record, qualification)
    }
}
