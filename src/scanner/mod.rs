//! 入力フォルダの走査
//!
//! 直下（非再帰）の PDF / DOCX のみを対象とし、ファイル名順に並べる。

use crate::error::{CvifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文書の種類（拡張子で判定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// ファイル名の末尾で種類を判定（大文字小文字は区別しない）
    ///
    /// `.pdf` のような拡張子だけの名前も対象にする。
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if name.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Docx => write!(f, "DOCX"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: DocumentKind,
}

pub fn scan_folder(folder: &Path) -> Result<Vec<DocumentInfo>> {
    if !folder.is_dir() {
        return Err(CvifyError::FolderNotFound(folder.display().to_string()));
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        // 一覧取得の失敗はバッチ全体のエラー
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(kind) = DocumentKind::from_path(path) else {
            continue;
        };

        documents.push(DocumentInfo {
            path: path.to_path_buf(),
            file_name: entry.file_name().to_string_lossy().to_string(),
            kind,
        });
    }

    // ファイル名でソート
    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(documents)
}
