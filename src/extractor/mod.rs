//! テキスト抽出モジュール
//!
//! 抽出失敗はエラーとして返さず `ExtractionOutcome::Failed` で表す。
//! 「空の文書」と「抽出できなかった文書」を呼び出し側で区別できるようにする。

pub mod docx;
pub mod pdf;

pub use docx::extract_docx;
pub use pdf::extract_pdf;

use crate::scanner::{DocumentInfo, DocumentKind};
use std::path::Path;

/// 抽出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// 全ページからテキストを取得できた
    Extracted { text: String },
    /// テキストのないページがある（スキャン画像の可能性）
    ImageBased { text: String, blank_pages: usize },
    /// 開けない・解析できない
    Failed { reason: String },
}

impl ExtractionOutcome {
    pub fn text(&self) -> &str {
        match self {
            ExtractionOutcome::Extracted { text } => text,
            ExtractionOutcome::ImageBased { text, .. } => text,
            ExtractionOutcome::Failed { .. } => "",
        }
    }

    /// 目視確認が必要か
    ///
    /// PDFは抽出失敗も画像PDFと同様に扱う。DOCXは常に false。
    pub fn is_image_based(&self, kind: DocumentKind) -> bool {
        match (kind, self) {
            (DocumentKind::Docx, _) => false,
            (DocumentKind::Pdf, ExtractionOutcome::Extracted { .. }) => false,
            (DocumentKind::Pdf, _) => true,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed { .. })
    }
}

/// 1ファイル分の抽出結果
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub file_name: String,
    pub kind: DocumentKind,
    pub outcome: ExtractionOutcome,
}

impl DocumentRecord {
    pub fn text(&self) -> &str {
        self.outcome.text()
    }

    pub fn is_image_based(&self) -> bool {
        self.outcome.is_image_based(self.kind)
    }
}

/// 種類に応じてテキストを抽出
pub fn extract(path: &Path, kind: DocumentKind) -> ExtractionOutcome {
    match kind {
        DocumentKind::Pdf => extract_pdf(path),
        DocumentKind::Docx => extract_docx(path),
    }
}

pub fn extract_document(doc: &DocumentInfo) -> DocumentRecord {
    let outcome = extract(&doc.path, doc.kind);

    if let ExtractionOutcome::Failed { reason } = &outcome {
        log::warn!("{}: テキスト抽出失敗 ({})", doc.file_name, reason);
    } else if let ExtractionOutcome::ImageBased { blank_pages, .. } = &outcome {
        log::debug!("{}: テキストのないページ {} 件", doc.file_name, blank_pages);
    }

    DocumentRecord {
        file_name: doc.file_name.clone(),
        kind: doc.kind,
        outcome,
    }
}
