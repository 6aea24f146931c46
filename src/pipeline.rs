//! 一括処理
//!
//! スキャン → 採用条件入力 → 履歴書ごとのモデル解析 → Excel出力 の順に実行する。
//! 蓄積中のレコードと適合行番号はこのモジュールだけが持つ。

use crate::analyzer::{Analyzer, CompletionModel};
use crate::config::UnreadablePolicy;
use crate::demands;
use crate::error::{Result, ScreenError};
use crate::export::{self, ExportSummary};
use crate::logging;
use crate::scanner::{self, DocumentInfo};
use indicatif::{ProgressBar, ProgressStyle};
use resume_screen_common::{row_index_for, CandidateRecord, DemandSet};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub folder: PathBuf,
    pub output: PathBuf,
    /// 指定がなければ対話入力
    pub demands: Option<String>,
    pub unreadable_policy: UnreadablePolicy,
    pub highlight_rgb: u32,
}

/// 解析済みの行
#[derive(Debug, Clone, Default)]
pub struct Processed {
    pub records: Vec<CandidateRecord>,
    /// 適合した候補者の行番号（1始まり、ヘッダーが1行目）
    pub qualified_rows: Vec<u32>,
    /// 読めずに飛ばしたファイル名
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub demands: DemandSet,
    pub processed: Processed,
    pub export: ExportSummary,
}

pub async fn run<M: CompletionModel>(analyzer: &Analyzer<M>, options: &RunOptions) -> Result<RunSummary> {
    // 1. Scan
    println!("[1/4] 履歴書をスキャン中...");
    let documents = scanner::scan_folder(&options.folder)?;
    if documents.is_empty() {
        return Err(ScreenError::NoDocumentsFound(
            options.folder.display().to_string(),
        ));
    }
    println!("✔ {}件の履歴書を検出\n", documents.len());

    // 2. Demands
    println!("[2/4] 採用条件を入力...");
    let demands = demands::collect_demands(analyzer, options.demands.clone()).await?;
    for line in demands::describe(&demands) {
        println!("  {}", line);
    }
    println!();

    // 3. Analyze
    println!("[3/4] AI解析中...");
    let processed =
        process_documents(analyzer, &documents, &demands, options.unreadable_policy).await?;
    println!(
        "✔ 解析完了: {}件 (適合 {}件, スキップ {}件)\n",
        processed.records.len(),
        processed.qualified_rows.len(),
        processed.skipped.len()
    );

    // 4. Export
    println!("[4/4] Excelに保存中...");
    let export = export::export_report(
        &processed.records,
        &processed.qualified_rows,
        &options.output,
        options.highlight_rgb,
    )?;

    Ok(RunSummary {
        demands,
        processed,
        export,
    })
}

/// 履歴書を順番に解析し、行と適合行番号を蓄積する
pub async fn process_documents<M: CompletionModel>(
    analyzer: &Analyzer<M>,
    documents: &[DocumentInfo],
    demands: &DemandSet,
    policy: UnreadablePolicy,
) -> Result<Processed> {
    let mut processed = Processed::default();
    let progress = progress_bar(documents.len() as u64);
    // 解析中のログはバーを避けて出す
    let _tracking = logging::track_progress(&progress);

    for doc in documents {
        progress.set_message(doc.file_name.clone());

        let text = match scanner::read_docx(&doc.path) {
            Ok(text) => text,
            Err(e) if policy == UnreadablePolicy::Skip => {
                warn!("読み込めないためスキップ: {}", e);
                processed.skipped.push(doc.file_name.clone());
                progress.inc(1);
                continue;
            }
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };

        let (record, qualification) = analyzer.analyze_resume(&doc.file_name, &text, demands).await;

        if qualification.qualified {
            let row = row_index_for(processed.records.len());
            info!("適合: {} (行 {})", doc.file_name, row);
            processed.qualified_rows.push(row);
        }
        processed.records.push(record);
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(processed)
}

fn progress_bar(len: u64) -> ProgressBar {
    let progress = ProgressBar::new(len);
    let style = ProgressStyle::with_template("  {bar:30} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress
}
