//! 解析結果の型定義
//!
//! CLIとテストで共有される型:
//! - CandidateFields: 履歴書から抽出したフィールド
//! - CandidateRecord: 1ファイル = 1行の最終出力
//! - DemandSet: オペレーターの採用条件
//! - Qualification: 条件適合判定

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 履歴書から抽出したフィールド
///
/// モデルが返すキーは `Name`, `Email` のようなパスカルケース。
/// 値が文字列以外（配列・数値など）でもテキストに変換して受け取る。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CandidateFields {
    #[serde(deserialize_with = "free_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub education: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub experience: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub skills: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub autobiography: Option<String>,

    /// 上記8項目以外にモデルが返したキー（追加列になる）
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CandidateFields {
    /// 列名で値を取得（追加キーもテキスト化して返す）
    pub fn get(&self, column: &str) -> Option<String> {
        let value = match column {
            "Name" => &self.name,
            "Email" => &self.email,
            "Phone" => &self.phone,
            "Location" => &self.location,
            "Education" => &self.education,
            "Experience" => &self.experience,
            "Skills" => &self.skills,
            "Autobiography" => &self.autobiography,
            other => return self.extra.get(other).cloned().and_then(value_to_text),
        };
        value.clone()
    }
}

/// 候補者1名分の出力レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateRecord {
    #[serde(flatten)]
    pub fields: CandidateFields,

    /// 元ファイル名
    #[serde(rename = "File")]
    pub file: String,

    /// 性格分析（1文）
    #[serde(rename = "Personality")]
    pub personality: String,

    /// 条件に一致したキーワード
    #[serde(rename = "Matched Keywords")]
    pub matched_keywords: String,
}

impl CandidateRecord {
    /// 列名でセル値を取得（値なしはNone）
    pub fn cell(&self, column: &str) -> Option<String> {
        match column {
            "File" => Some(self.file.clone()),
            "Personality" => Some(self.personality.clone()),
            "Matched Keywords" => Some(self.matched_keywords.clone()),
            other => self.fields.get(other),
        }
    }
}

/// 採用条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DemandSet {
    #[serde(deserialize_with = "string_or_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub location: Vec<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub experience: Vec<String>,
    #[serde(deserialize_with = "string_or_list")]
    pub other: Vec<String>,
}

impl DemandSet {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.location.is_empty()
            && self.experience.is_empty()
            && self.other.is_empty()
    }
}

/// 条件適合判定
#[derive(Debug, Clone, PartialEq)]
pub struct Qualification {
    pub qualified: bool,
    pub matched_keywords: String,
}

impl Default for Qualification {
    fn default() -> Self {
        Self {
            qualified: false,
            matched_keywords: crate::parser::NOT_QUALIFIED_KEYWORDS.to_string(),
        }
    }
}

/// JSON値をセル用テキストに変換
fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(value_to_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}

fn free_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let terms = match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::String(s) if s.trim().is_empty() => Vec::new(),
        Value::String(s) => vec![s],
        Value::Array(items) => items.into_iter().filter_map(value_to_text).collect(),
        other => vec![other.to_string()],
    };
    Ok(terms)
}
