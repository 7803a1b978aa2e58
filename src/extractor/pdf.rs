//! PDFテキスト抽出
//!
//! lopdf でページごとにテキストを取り出す。
//! テキストが得られないページがあれば画像PDF（スキャン）とみなす。

use super::ExtractionOutcome;
use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

pub fn extract_pdf(path: &Path) -> ExtractionOutcome {
    // 壊れたPDFでパーサがpanicしてもバッチは止めない。
    // panicフックはプロセス全体で共有なので差し替えず、標準エラーへのメッセージは許容する
    match panic::catch_unwind(AssertUnwindSafe(|| extract_pages(path))) {
        Ok(Ok(pages)) => outcome_from_pages(pages),
        Ok(Err(reason)) => ExtractionOutcome::Failed { reason },
        Err(_) => ExtractionOutcome::Failed {
            reason: "PDFパーサが異常終了しました".into(),
        },
    }
}

fn extract_pages(path: &Path) -> Result<Vec<String>, String> {
    let doc = Document::load(path).map_err(|e| format!("PDF読み込みエラー: {}", e))?;

    let mut pages = Vec::new();
    for page_num in doc.get_pages().keys() {
        // 1ページの抽出失敗は空ページ扱い
        let text = doc.extract_text(&[*page_num]).unwrap_or_default();
        pages.push(text);
    }

    Ok(pages)
}

/// ページ単位の抽出結果をまとめる
pub(crate) fn outcome_from_pages(pages: Vec<String>) -> ExtractionOutcome {
    let mut text = String::new();
    let mut blank_pages = 0;

    for page in &pages {
        // lopdf はテキストオブジェクトごとに改行を足すので、空白だけのページも空扱い
        if page.trim().is_empty() {
            blank_pages += 1;
        } else {
            text.push_str(page);
        }
    }

    if pages.is_empty() || blank_pages > 0 {
        ExtractionOutcome::ImageBased { text, blank_pages }
    } else {
        ExtractionOutcome::Extracted { text }
    }
}
