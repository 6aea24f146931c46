//! docx本文の読み込み
//!
//! 段落ごとのテキストを取り出し、改行で連結する。書式情報は捨てる。
//! 表のセル内の段落も本文と同じく1段落1行で並べる。

use crate::error::{Result, ScreenError};
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use std::path::Path;

pub fn read_docx(path: &Path) -> Result<String> {
    let fail = |reason: String| ScreenError::DocumentRead {
        path: path.display().to_string(),
        reason,
    };

    let data = std::fs::read(path).map_err(|e| fail(e.to_string()))?;
    let docx = docx_rs::read_docx(&data).map_err(|e| fail(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => paragraphs.push(paragraph_text(p)),
            DocumentChild::Table(t) => push_table(t, &mut paragraphs),
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&paragraph.children, &mut text);
    text
}

fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            // メールアドレスやURLはリンクの中にある
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, text),
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

/// 表のセル内の段落を行順・セル順に追加
fn push_table(table: &Table, paragraphs: &mut Vec<String>) {
    for row in &table.rows {
        #[allow(irrefutable_let_patterns)]
        let TableChild::TableRow(row) = row else {
            continue;
        };
        for cell in &row.cells {
            #[allow(irrefutable_let_patterns)]
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => paragraphs.push(paragraph_text(p)),
                    TableCellContent::Table(t) => push_table(t, paragraphs),
                    _ => {}
                }
            }
        }
    }
}
