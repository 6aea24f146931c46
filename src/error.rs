use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーを読み込めません ({path}): {reason}")]
    MissingCredential { path: String, reason: String },

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("履歴書(.docx)が見つかりません: {0}")]
    NoDocumentsFound(String),

    #[error("履歴書の読み込みに失敗 ({path}): {reason}")]
    DocumentRead { path: String, reason: String },

    #[error("入力エラー: {0}")]
    Input(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("ハイライト対象の行 {row} が表の範囲外です（データ行 {first}..={last}）")]
    HighlightRowOutOfRange { row: u32, first: u32, last: u32 },

    #[error("保存済みのExcelが書き込んだ表と一致しません: {0}")]
    ReportMismatch(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScreenError>;
