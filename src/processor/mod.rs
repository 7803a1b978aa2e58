//! 一括振り分け処理
//!
//! ## 処理フロー
//! 1. 出力先 `matched/` と `matched/manual_review/` を作成（既存でも可）
//! 2. 入力フォルダ直下の PDF / DOCX をファイル名順に走査
//! 3. テキスト抽出 → 連絡先抽出 → キーワード照合
//! 4. 一致したファイルは `matched/`、画像PDFは `manual_review/` へコピー
//!
//! 抽出の失敗はファイル単位で吸収し、ファイル操作の失敗はバッチ全体を中断する。

use crate::error::Result;
use crate::extractor;
use crate::fields::{self, HeuristicName, NameStrategy};
use crate::matcher::KeywordSet;
use crate::scanner;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MATCHED_DIR: &str = "matched";
pub const REVIEW_DIR: &str = "manual_review";

/// 1ファイル分の結果行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub file_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub match_score: u8,
    pub matched_keywords: Vec<String>,
    pub manual_review: bool,
    pub is_match: bool,
}

impl ResultRow {
    /// 表示・Excel用（カンマ区切り）
    pub fn matched_keywords_joined(&self) -> String {
        self.matched_keywords.join(", ")
    }
}

/// 処理オプション
pub struct ProcessOptions {
    pub name_strategy: Box<dyn NameStrategy>,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            name_strategy: Box::new(HeuristicName),
        }
    }
}

/// バッチ処理結果
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub rows: Vec<ResultRow>,
    pub matched_dir: PathBuf,
    pub review_dir: PathBuf,
}

/// 集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub matched: usize,
    pub manual_review: usize,
}

impl BatchSummary {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        Self {
            total: rows.len(),
            matched: rows.iter().filter(|r| r.is_match).count(),
            manual_review: rows.iter().filter(|r| r.manual_review).count(),
        }
    }
}

/// 一致または要確認の行のみ
pub fn flagged_rows(rows: &[ResultRow]) -> Vec<&ResultRow> {
    rows.iter().filter(|r| r.is_match || r.manual_review).collect()
}

pub fn process_folder(
    source_dir: &Path,
    keywords: &[String],
    options: &ProcessOptions,
) -> Result<BatchOutput> {
    process_folder_with_progress(source_dir, keywords, options, |_| {})
}

/// 1ファイル処理するごとに `on_row` を呼ぶ
pub fn process_folder_with_progress<F>(
    source_dir: &Path,
    keywords: &[String],
    options: &ProcessOptions,
    mut on_row: F,
) -> Result<BatchOutput>
where
    F: FnMut(&ResultRow),
{
    let keyword_set = KeywordSet::new(keywords)?;
    let documents = scanner::scan_folder(source_dir)?;

    let matched_dir = source_dir.join(MATCHED_DIR);
    let review_dir = matched_dir.join(REVIEW_DIR);
    fs::create_dir_all(&review_dir)?;

    log::info!(
        "{}: 対象 {} 件、キーワード {} 件",
        source_dir.display(),
        documents.len(),
        keyword_set.len()
    );

    let mut rows = Vec::with_capacity(documents.len());

    for doc in &documents {
        let record = extractor::extract_document(doc);
        let info = fields::extract_fields(record.text(), options.name_strategy.as_ref());
        let keyword_match = keyword_set.find(record.text());

        let row = ResultRow {
            file_name: record.file_name.clone(),
            name: info.name,
            email: info.email,
            phone: info.phone,
            linkedin: info.linkedin,
            match_score: keyword_match.score,
            is_match: !keyword_match.found.is_empty(),
            matched_keywords: keyword_match.found,
            manual_review: record.is_image_based(),
        };

        if row.is_match {
            fs::copy(&doc.path, matched_dir.join(&doc.file_name))?;
        }
        if row.manual_review {
            fs::copy(&doc.path, review_dir.join(&doc.file_name))?;
        }

        log::debug!(
            "{}: スコア {}% 一致 {:?} 要確認 {}",
            row.file_name,
            row.match_score,
            row.matched_keywords,
            row.manual_review
        );

        on_row(&row);
        rows.push(row);
    }

    let summary = BatchSummary::from_rows(&rows);
    log::info!(
        "処理完了: {} 件中 一致 {} 件、要確認 {} 件",
        summary.total,
        summary.matched,
        summary.manual_review
    );

    Ok(BatchOutput {
        rows,
        matched_dir,
        review_dir,
    })
}
