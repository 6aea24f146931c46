pub mod excel;

use crate::error::Result;
use resume_screen_common::{CandidateRecord, ReportTable};
use std::path::Path;

/// 出力結果
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub rows_written: usize,
    pub rows_highlighted: usize,
}

/// レコードを保存し、適合行をハイライトする
pub fn export_report(
    records: &[CandidateRecord],
    qualified_rows: &[u32],
    output_path: &Path,
    highlight_rgb: u32,
) -> Result<ExportSummary> {
    let table = ReportTable::from_records(records);

    println!("- Excelを生成中...");
    excel::write_report(&table, output_path, highlight_rgb)?;
    println!("✔ Data saved to {}", output_path.display());

    let rows_highlighted = excel::highlight_rows(output_path, &table, qualified_rows, highlight_rgb)?;
    println!("✔ Qualified candidates highlighted in the Excel file. ({}行)", rows_highlighted);

    Ok(ExportSummary {
        rows_written: table.rows.len(),
        rows_highlighted,
    })
}
