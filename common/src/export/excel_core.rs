//! Excel生成（共通ライブラリ）
//!
//! layout.rs の ReportTable を1シートの表として書き出す

use crate::layout::{ReportTable, HEADER_ROWS};
use regex::{Captures, Regex};
use rust_xlsxwriter::*;
use std::borrow::Cow;

/// シート名
pub const SHEET_NAME: &str = "Sheet1";

/// デフォルトのハイライト色（黄色）
pub const DEFAULT_HIGHLIGHT_RGB: u32 = 0xFFFF00;

const COLUMN_WIDTH: f64 = 22.0;

/// 表をExcelバッファに生成
///
/// # Arguments
/// * `table` - 書き出す表
/// * `highlighted_rows` - 塗りつぶす行番号（1始まり、ヘッダーが1行目）
/// * `highlight_rgb` - 塗りつぶし色
pub fn generate_table_buffer(
    table: &ReportTable,
    highlighted_rows: &[u32],
    highlight_rgb: u32,
) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    let highlight_format = Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(highlight_rgb));

    for (col, name) in table.columns.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, COLUMN_WIDTH)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet
            .write_string_with_format(0, col, name, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        // 0始まりのシート行。ヘッダーの直後から
        let sheet_row = HEADER_ROWS + idx as u32;
        let highlighted = highlighted_rows.contains(&(sheet_row + 1));

        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            let result = match (value, highlighted) {
                (Some(v), true) => worksheet.write_string_with_format(sheet_row, col, v, &highlight_format),
                (Some(v), false) => worksheet.write_string(sheet_row, col, v),
                (None, true) => worksheet.write_blank(sheet_row, col, &highlight_format),
                (None, false) => continue,
            };
            result.map_err(|e| format!("セル書き込みエラー: {}", e))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

/// セル文字列の `_xHHHH_` エスケープを戻す
///
/// 書き込み時、制御文字と `_xHHHH_` 形式の文字列そのものはこの形式に
/// エスケープされる（`_` 自体は `_x005F_`）。読み込み側は戻さないので、
/// 読み直した値はここを通す。左から順に1回だけ置換する。
pub fn unescape_cell_text(text: &str) -> Cow<'_, str> {
    lazy_static::lazy_static! {
        static ref ESCAPE: Regex = Regex::new(r"_x([0-9A-Fa-f]{4})_").unwrap();
    }

    ESCAPE.replace_all(text, |caps: &Captures| {
        u32::from_str_radix(&caps[1], 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CandidateRecord;

    fn table(n: usize) -> ReportTable {
        let records: Vec<CandidateRecord> = (0..n)
            .map(|i| CandidateRecord {
                file: format!("cv{}.docx", i),
                personality: "Steady.".into(),
                matched_keywords: "[]".into(),
                ..Default::default()
            })
            .collect();
        ReportTable::from_records(&records)
    }

    #[test]
    fn test_generate_table_buffer() {
        let buffer = generate_table_buffer(&table(3), &[], DEFAULT_HIGHLIGHT_RGB).unwrap();
        // xlsx は zip コンテナ
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_table_buffer_with_highlight() {
        let buffer = generate_table_buffer(&table(2), &[2, 3], DEFAULT_HIGHLIGHT_RGB).unwrap();
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_unescape_cell_text() {
        assert_eq!(unescape_cell_text("line1_x000D_\nline2"), "line1\r\nline2");
        assert_eq!(unescape_cell_text("ctrl_x0008_char"), "ctrl\u{8}char");
        // `_x005F_` は `_` に戻り、続く文字列はそのまま残る
        assert_eq!(
            unescape_cell_text("literal _x005F_x0041_ text"),
            "literal _x0041_ text"
        );
        assert_eq!(unescape_cell_text("plain\ttext 123"), "plain\ttext 123");
        // サロゲートは文字にできないので残す
        assert_eq!(unescape_cell_text("_xD800_"), "_xD800_");
    }

    #[test]
    fn test_generate_empty_table() {
        let buffer = generate_table_buffer(&table(0), &[], DEFAULT_HIGHLIGHT_RGB).unwrap();
        assert!(buffer.starts_with(b"PK"));
    }
}
