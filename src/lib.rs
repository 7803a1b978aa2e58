//! cvify - 履歴書キーワード振り分けツール
//!
//! PDF/DOCXからテキストを抽出し、連絡先とキーワード一致率を表にまとめ、
//! 一致したファイルと目視確認が必要なファイルを振り分ける。

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod fields;
pub mod matcher;
pub mod processor;
pub mod scanner;

pub use error::{CvifyError, Result};
pub use processor::{process_folder, BatchOutput, BatchSummary, ProcessOptions, ResultRow};
