//! 統合テスト用の共通ヘルパー

#![allow(dead_code)]

use docx_rs::{Docx, Paragraph, Run};
use resume_screen::analyzer::{CompletionModel, CompletionRequest, ModelError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Mutex;

/// リクエストごとに関数で応答を決めるスタブモデル
pub struct StubModel<F> {
    respond: F,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl<F> StubModel<F>
where
    F: Fn(&CompletionRequest) -> Result<String, ModelError>,
{
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl<F> CompletionModel for StubModel<F>
where
    F: Fn(&CompletionRequest) -> Result<String, ModelError>,
{
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ModelError> {
        self.calls.lock().unwrap().push(request.clone());
        (self.respond)(request)
    }
}

/// 段落テキストから docx を作る
pub fn write_docx(path: &Path, paragraphs: &[&str]) {
    let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });
    let file = File::create(path).unwrap();
    docx.build().pack(file).unwrap();
}

/// xlsx 内のシートXMLから指定行（1始まり）の <row> 要素を取り出す
pub fn sheet_row_xml(xlsx: &Path, row: u32) -> Option<String> {
    let file = File::open(xlsx).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut sheet = archive.by_name("xl/worksheets/sheet1.xml").unwrap();
    let mut xml = String::new();
    sheet.read_to_string(&mut xml).unwrap();

    let start = xml.find(&format!("<row r=\"{}\"", row))?;
    let end = xml[start..].find("</row>")? + start;
    Some(xml[start..end].to_string())
}

/// 行内の (セル数, スタイル付きセル数)
///
/// ヘッダー以外でスタイルが付くのはハイライトしたセルだけ
pub fn styled_cells(xlsx: &Path, row: u32) -> (usize, usize) {
    let xml = sheet_row_xml(xlsx, row).unwrap_or_default();
    (xml.matches("<c ").count(), xml.matches(" s=\"").count())
}
