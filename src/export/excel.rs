//! Excel出力（CLI版）
//!
//! 1回目の書き込みで表を保存し、保存したファイルを読み直して
//! 適合行を塗りつぶした版で上書きする

use crate::error::{Result, ScreenError};
use calamine::{open_workbook, Data, Reader, Xlsx};
use resume_screen_common::export::excel_core::{generate_table_buffer, unescape_cell_text, SHEET_NAME};
use resume_screen_common::{ReportTable, FIRST_DATA_ROW, HEADER_ROWS};
use std::path::Path;

/// 表をそのまま保存（ハイライトなし）
pub fn write_report(table: &ReportTable, output_path: &Path, highlight_rgb: u32) -> Result<()> {
    save_table(table, output_path, &[], highlight_rgb)
}

/// 保存済みファイルを開き直し、指定行を塗りつぶして上書き
///
/// 書き直す内容は `table`（書き込みに使った表）そのもの。開き直した
/// ファイルはヘッダーと行数が `table` と一致するかの確認だけに使う。
/// 行番号は1始まり（1行目がヘッダー）。範囲外の行番号はエラーにする。
/// 戻り値は塗りつぶした行数
pub fn highlight_rows(
    output_path: &Path,
    table: &ReportTable,
    rows: &[u32],
    highlight_rgb: u32,
) -> Result<usize> {
    let saved = read_report(output_path)?;
    if saved.columns != table.columns || saved.rows.len() != table.rows.len() {
        return Err(ScreenError::ReportMismatch(format!(
            "{} は {}列 {}行、書き込んだ表は {}列 {}行",
            output_path.display(),
            saved.columns.len(),
            saved.rows.len(),
            table.columns.len(),
            table.rows.len()
        )));
    }

    for &row in rows {
        if !table.contains_row(row) {
            return Err(ScreenError::HighlightRowOutOfRange {
                row,
                first: FIRST_DATA_ROW,
                last: HEADER_ROWS + table.rows.len() as u32,
            });
        }
    }

    let mut distinct = rows.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    save_table(table, output_path, &distinct, highlight_rgb)?;
    Ok(distinct.len())
}

/// 保存済みのExcelを表として読み込む
///
/// 文字列セルは `_xHHHH_` エスケープを戻して返す
pub fn read_report(path: &Path) -> Result<ReportTable> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| ScreenError::ExcelGeneration(format!("{} を開けません: {}", path.display(), e)))?;
    let range = workbook
        .worksheet_range(SHEET_NAME)
        .map_err(|e| ScreenError::ExcelGeneration(format!("シート読み込みエラー: {}", e)))?;

    if range.is_empty() {
        return Ok(ReportTable::default());
    }
    if range.start() != Some((0, 0)) {
        return Err(ScreenError::ExcelGeneration(
            "ヘッダー行がA1から始まっていません".into(),
        ));
    }

    let mut rows = range.rows();
    let columns: Vec<String> = rows
        .next()
        .map(|header| header.iter().map(|c| cell_text(c).unwrap_or_default()).collect())
        .unwrap_or_default();

    let rows = rows
        .map(|row| {
            let mut cells: Vec<Option<String>> = row.iter().map(cell_text).collect();
            cells.resize(columns.len(), None);
            cells
        })
        .collect();

    Ok(ReportTable { columns, rows })
}

fn save_table(table: &ReportTable, output_path: &Path, rows: &[u32], highlight_rgb: u32) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let buffer = generate_table_buffer(table, rows, highlight_rgb)
        .map_err(ScreenError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(unescape_cell_text(s).into_owned()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
