//! プロンプト生成モジュール
//!
//! モデル呼び出し4種類のプロンプトを組み立てる:
//! - build_extraction_prompt: 履歴書フィールド抽出
//! - build_personality_prompt: 性格分析（1文）
//! - build_demands_prompt: 採用条件の構造化
//! - build_qualification_prompt: 条件適合判定

use crate::types::{CandidateFields, DemandSet};

/// 抽出するフィールド名
pub const EXTRACTION_KEYS: &[&str] = &[
    "Name",
    "Email",
    "Phone",
    "Location",
    "Education",
    "Experience",
    "Skills",
    "Autobiography",
];

/// 採用条件のカテゴリ名
pub const DEMAND_KEYS: &[&str] = &["Skills", "Location", "Experience", "Other"];

/// フィールド抽出プロンプト
pub fn build_extraction_prompt(resume_text: &str) -> String {
    let bullet_list = EXTRACTION_KEYS
        .iter()
        .map(|k| format!("- {}", k))
        .collect::<Vec<_>>()
        .join("\n");
    let keys = EXTRACTION_KEYS.join(", ");

    format!(
        r#"Extract the following information from the resume text:
{bullet_list}

Resume Text:
{resume_text}

Provide the information in JSON format with keys: {keys}."#
    )
}

/// 性格分析プロンプト
pub fn build_personality_prompt(autobiography: &str) -> String {
    format!(
        r#"Analyze the personality traits of the individual based on the following autobiography:
{autobiography}

Provide a concise summary of the personality traits in one sentence."#
    )
}

/// 採用条件の構造化プロンプト
pub fn build_demands_prompt(user_input: &str) -> String {
    let keys = DEMAND_KEYS.join(", ");
    format!(
        r#"Parse the following user input into structured demands for a candidate:
"{user_input}"

Extract the demands into categories: Skills, Location, Experience, and Other.
Provide the result in JSON format with keys: {keys}. Each value must be a list of strings."#
    )
}

/// 条件適合判定プロンプト
pub fn build_qualification_prompt(candidate: &CandidateFields, demands: &DemandSet) -> String {
    let field = |v: &Option<String>| v.as_deref().unwrap_or("").to_string();

    format!(
        r#"Evaluate if the following candidate's information matches the user's demands:

User Demands:
Skills: {demand_skills}
Location: {demand_location}
Experience: {demand_experience}
Other: {demand_other}

Candidate Information:
Skills: {skills}
Location: {location}
Experience: {experience}
Education: {education}
Autobiography: {autobiography}

Respond with "Yes" if the candidate matches the user's demands based on semantic understanding, even if the keywords are not exactly the same.
Consider related terms, synonyms, and broader meanings.
Also, provide a list of keywords or phrases from the candidate's information that semantically match the user's demands.
Format your response as:
"Yes: [matched_keyword1, matched_keyword2, ...]" or "No: []"."#,
        demand_skills = demands.skills.join(", "),
        demand_location = demands.location.join(", "),
        demand_experience = demands.experience.join(", "),
        demand_other = demands.other.join(", "),
        skills = field(&candidate.skills),
        location = field(&candidate.location),
        experience = field(&candidate.experience),
        education = field(&candidate.education),
        autobiography = field(&candidate.autobiography),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_extraction_prompt() {
        let prompt = build_extraction_prompt("Name: Jane Doe, Skills: Go");
        assert!(prompt.contains("Name: Jane Doe, Skills: Go"));
        assert!(prompt.contains("- Autobiography"));
        assert!(prompt.contains(
            "keys: Name, Email, Phone, Location, Education, Experience, Skills, Autobiography."
        ));
    }

    #[test]
    fn test_build_demands_prompt_quotes_input() {
        let prompt = build_demands_prompt("Python in Dublin");
        assert!(prompt.contains("\"Python in Dublin\""));
        assert!(prompt.contains("Skills, Location, Experience, Other"));
    }

    #[test]
    fn test_build_qualification_prompt() {
        let candidate = CandidateFields {
            skills: Some("Go".into()),
            location: Some("Dublin".into()),
            ..Default::default()
        };
        let demands = DemandSet {
            skills: vec!["Go".into(), "Rust".into()],
            location: vec!["Dublin".into()],
            ..Default::default()
        };

        let prompt = build_qualification_prompt(&candidate, &demands);
        assert!(prompt.contains("Skills: Go, Rust"));
        assert!(prompt.contains("Location: Dublin"));
        assert!(prompt.contains("Education: \n"));
        assert!(prompt.contains("\"Yes: [matched_keyword1"));
    }
}
