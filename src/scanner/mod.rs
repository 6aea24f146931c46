mod docx;

pub use docx::read_docx;

use crate::error::{Result, ScreenError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const DOCUMENT_EXTENSION: &str = "docx";

/// Wordが開いている間に作るロックファイルの接頭辞
const LOCK_FILE_PREFIX: &str = "~$";

pub fn scan_folder(folder: &Path) -> Result<Vec<DocumentInfo>> {
    if !folder.is_dir() {
        return Err(ScreenError::FolderNotFound(folder.display().to_string()));
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_docx = path
            .extension()
            .map(|ext| is_document_extension(&ext.to_string_lossy()))
            .unwrap_or(false);
        if !is_docx {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if file_name.starts_with(LOCK_FILE_PREFIX) {
            continue;
        }

        documents.push(DocumentInfo {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // ファイル名でソート（出力行の順序を再現可能にする）
    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(documents)
}

fn is_document_extension(ext: &str) -> bool {
    ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION)
}
