//! 採用条件の入力モジュール
//!
//! オペレーターに自然文で採用条件を1回だけ尋ね、モデルで構造化する。
//! 空入力でもそのままモデルに渡す（再入力は求めない）。

use crate::analyzer::{Analyzer, CompletionModel};
use crate::error::{Result, ScreenError};
use dialoguer::Input;
use resume_screen_common::DemandSet;
use std::io::{BufRead, IsTerminal};

const EXAMPLE_HINT: &str = "Enter your demands for the candidate (e.g., 'I need someone skilled in Python, based in Dublin, with 5 years of experience.'):";

/// 採用条件の自然文を取得
///
/// `preset` があればそれを使い、なければ対話入力する。
/// 標準入力が端末でなければ（パイプ・リダイレクト）1行だけ読む
pub fn read_demand_text(preset: Option<String>) -> Result<String> {
    if let Some(text) = preset {
        return Ok(normalize(&text));
    }

    println!("{}", EXAMPLE_HINT);
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return read_demand_line(stdin.lock());
    }

    let input: String = Input::new()
        .with_prompt("Your demands")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ScreenError::Input(e.to_string()))?;

    Ok(normalize(&input))
}

/// 1行読んで採用条件とする（入力が尽きていれば空）
pub fn read_demand_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| ScreenError::Input(e.to_string()))?;
    Ok(normalize(&line))
}

/// 採用条件を入力して構造化
pub async fn collect_demands<M: CompletionModel>(
    analyzer: &Analyzer<M>,
    preset: Option<String>,
) -> Result<DemandSet> {
    let text = read_demand_text(preset)?;
    Ok(analyzer.parse_demands(&text).await)
}

/// 採用条件の要約行
pub fn describe(demands: &DemandSet) -> Vec<String> {
    [
        ("Skills", &demands.skills),
        ("Location", &demands.location),
        ("Experience", &demands.experience),
        ("Other", &demands.other),
    ]
    .iter()
    .map(|(label, terms)| {
        let value = if terms.is_empty() {
            "-".to_string()
        } else {
            terms.join(", ")
        };
        format!("{}: {}", label, value)
    })
    .collect()
}

fn normalize(text: &str) -> String {
    text.trim().to_string()
}
