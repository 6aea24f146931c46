//! APIレスポンスパーサー
//!
//! モデルの応答テキストからJSONを抽出し、抽出フィールド・採用条件・
//! 適合判定をパースする

use crate::error::{Error, Result};
use crate::types::{CandidateFields, DemandSet, Qualification};
use regex::Regex;

/// 不適合時の一致キーワード
pub const NOT_QUALIFIED_KEYWORDS: &str = "[]";

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Examples
/// ```
/// use resume_screen_common::extract_json;
///
/// let response = "Sure! {\"Name\": \"Jane\"}";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"Name\": \"Jane\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 抽出フィールドをパース
///
/// 途中までしか読めなかった場合もエラーにする（部分的なマージはしない）
pub fn parse_candidate_fields(response: &str) -> Result<CandidateFields> {
    let json_str = extract_json(response)?;
    Ok(serde_json::from_str(json_str.trim())?)
}

/// 採用条件をパース
pub fn parse_demand_set(response: &str) -> Result<DemandSet> {
    let json_str = extract_json(response)?;
    Ok(serde_json::from_str(json_str.trim())?)
}

/// 適合判定をパース
///
/// 書式は `Yes: [kw1, kw2]` または `No: []`。ラベルの大文字小文字は区別しない。
/// `yes:` で始まれば適合とし、残りを一致キーワードとしてそのまま返す。
pub fn parse_qualification(response: &str) -> Result<Qualification> {
    lazy_static::lazy_static! {
        static ref VERDICT: Regex = Regex::new(r"(?is)^(yes|no):(.*)$").unwrap();
    }

    let text = response.trim();
    let caps = VERDICT
        .captures(text)
        .ok_or_else(|| Error::Parse(format!("判定ラベルがありません: {}", preview(text))))?;

    if caps[1].eq_ignore_ascii_case("yes") {
        Ok(Qualification {
            qualified: true,
            matched_keywords: caps[2].trim().to_string(),
        })
    } else {
        Ok(Qualification::default())
    }
}

fn preview(text: &str) -> String {
    text.chars().take(80).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // extract_json テスト
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = r#"Here is the data:
```json
{"Name": "Jane Doe", "Skills": "Go"}
```
Let me know if you need anything else."#;

        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"Name": "Jane Doe", "Skills": "Go"}"#);
    }

    #[test]
    fn test_extract_json_raw() {
        let response = r#"{"Skills": ["Python"], "Location": []}"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, response);
    }

    #[test]
    fn test_extract_json_with_surrounding_text() {
        let response = r#"Result: {"Name": "A", "Meta": {"k": 1}} done."#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"Name": "A", "Meta": {"k": 1}}"#);
    }

    #[test]
    fn test_extract_json_error() {
        let result = extract_json("I could not find any resume content.");
        assert!(result.is_err());
        if let Err(Error::Parse(msg)) = result {
            assert!(msg.contains("JSONが見つかりません"));
        } else {
            panic!("Expected Parse error");
        }
    }

    // =============================================
    // parse_candidate_fields テスト
    // =============================================

    #[test]
    fn test_parse_candidate_fields_exact() {
        let response = r#"{"Name":"Jane Doe","Email":"","Phone":"","Location":"Dublin","Education":"","Experience":"","Skills":"Go","Autobiography":""}"#;
        let fields = parse_candidate_fields(response).unwrap();
        assert_eq!(fields.name.as_deref(), Some("Jane Doe"));
        assert_eq!(fields.location.as_deref(), Some("Dublin"));
        assert_eq!(fields.skills.as_deref(), Some("Go"));
        assert_eq!(fields.email.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_candidate_fields_truncated_is_error() {
        // max_tokens で途中切れした応答
        let response = r#"{"Name": "Jane Doe", "Email": "jane@example.com", "Skills": "Go, Ru"#;
        assert!(matches!(parse_candidate_fields(response), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_candidate_fields_invalid_json_object() {
        let response = r#"{"Name": "Jane Doe", "Skills": ["Go",]}"#;
        assert!(matches!(parse_candidate_fields(response), Err(Error::Json(_))));
        assert!(matches!(parse_demand_set(response), Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_candidate_fields_not_object() {
        assert!(parse_candidate_fields("Sorry, I can't help with that.").is_err());
    }

    // =============================================
    // parse_demand_set テスト
    // =============================================

    #[test]
    fn test_parse_demand_set() {
        let response = "```json\n{\"Skills\": [\"Python\"], \"Location\": [\"Dublin\"], \"Experience\": [\"5 years\"], \"Other\": []}\n```";
        let demands = parse_demand_set(response).unwrap();
        assert_eq!(demands.skills, vec!["Python"]);
        assert_eq!(demands.location, vec!["Dublin"]);
        assert_eq!(demands.experience, vec!["5 years"]);
        assert!(demands.other.is_empty());
    }

    #[test]
    fn test_parse_demand_set_missing_categories() {
        let demands = parse_demand_set(r#"{"Skills": ["Go"]}"#).unwrap();
        assert_eq!(demands.skills, vec!["Go"]);
        assert!(demands.location.is_empty());
    }

    // =============================================
    // parse_qualification テスト
    // =============================================

    #[test]
    fn test_parse_qualification_yes() {
        let q = parse_qualification("Yes: [Go, Dublin]").unwrap();
        assert!(q.qualified);
        assert_eq!(q.matched_keywords, "[Go, Dublin]");
    }

    #[test]
    fn test_parse_qualification_case_insensitive() {
        let q = parse_qualification("  YES:[Python]\n").unwrap();
        assert!(q.qualified);
        assert_eq!(q.matched_keywords, "[Python]");
    }

    #[test]
    fn test_parse_qualification_multiline_keywords() {
        let q = parse_qualification("yes: [Go,\n Kubernetes]").unwrap();
        assert!(q.qualified);
        assert_eq!(q.matched_keywords, "[Go,\n Kubernetes]");
    }

    #[test]
    fn test_parse_qualification_no() {
        let q = parse_qualification("No: [Java]").unwrap();
        assert!(!q.qualified);
        assert_eq!(q.matched_keywords, NOT_QUALIFIED_KEYWORDS);
    }

    #[test]
    fn test_parse_qualification_unlabelled_is_error() {
        assert!(parse_qualification("The candidate says yes: to Go").is_err());
        assert!(parse_qualification("Yes [Go]").is_err());
        assert!(parse_qualification("").is_err());
    }
}
