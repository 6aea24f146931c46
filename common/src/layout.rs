//! 出力表のレイアウト定義
//!
//! 列順と行番号の対応をここに集約する。書き込みとハイライトの両方が
//! 同じ定義を参照するので、ヘッダー行のずれは起こらない。

use crate::types::CandidateRecord;

/// 宣言済みの列順（モデルが返した追加キーはこの後ろに並ぶ）
pub const COLUMN_ORDER: &[&str] = &[
    "Name",
    "Email",
    "Phone",
    "Location",
    "Education",
    "Experience",
    "Skills",
    "Autobiography",
    "File",
    "Personality",
    "Matched Keywords",
];

/// ヘッダー行の数
pub const HEADER_ROWS: u32 = 1;

/// 最初の候補者の行番号（1始まり、表計算ソフトの表示と同じ）
pub const FIRST_DATA_ROW: u32 = HEADER_ROWS + 1;

/// 候補者の序数（0始まり）から行番号（1始まり）を求める
pub fn row_index_for(ordinal: usize) -> u32 {
    FIRST_DATA_ROW + ordinal as u32
}

/// 書き出し用の表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ReportTable {
    /// レコード列から表を組み立てる
    pub fn from_records(records: &[CandidateRecord]) -> Self {
        let mut columns: Vec<String> = COLUMN_ORDER.iter().map(|c| c.to_string()).collect();

        let mut extra: Vec<&String> = records
            .iter()
            .flat_map(|r| r.fields.extra.keys())
            .filter(|k| !COLUMN_ORDER.contains(&k.as_str()))
            .collect();
        extra.sort();
        extra.dedup();
        columns.extend(extra.into_iter().cloned());

        let rows = records
            .iter()
            .map(|record| columns.iter().map(|c| record.cell(c)).collect())
            .collect();

        Self { columns, rows }
    }

    /// 行番号（1始まり）が候補者行を指しているか
    pub fn contains_row(&self, row: u32) -> bool {
        row >= FIRST_DATA_ROW && ((row - FIRST_DATA_ROW) as usize) < self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
