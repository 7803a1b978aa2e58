use clap::{Parser, Subcommand, ValueEnum};
use crate::fields::{HeuristicName, NameStrategy, NoName};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvify")]
#[command(about = "履歴書(PDF/DOCX)キーワード振り分け・レポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書フォルダ（またはZIP）を振り分けてレポートを出力
    Run {
        /// 履歴書フォルダまたはZIPファイルのパス
        #[arg(required = true)]
        input: PathBuf,

        /// キーワード（カンマ区切り）。省略時は設定値、未設定なら対話入力
        #[arg(short, long)]
        keywords: Option<String>,

        /// 出力ディレクトリ（デフォルト: 入力フォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (excel/json/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// 氏名抽出方式（省略時は設定値）
        #[arg(long)]
        name_strategy: Option<NameStrategyKind>,

        /// 一致ファイルのZIPを作成しない
        #[arg(long)]
        no_package: bool,

        /// 一致・要確認以外の行も表示
        #[arg(long)]
        all_rows: bool,
    },

    /// 処理対象のファイルを一覧表示
    Scan {
        /// 履歴書フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// デフォルトキーワードを設定（カンマ区切り）
        #[arg(long)]
        set_keywords: Option<String>,

        /// 氏名抽出方式を設定
        #[arg(long)]
        set_name_strategy: Option<NameStrategyKind>,

        /// レポートファイル名（拡張子なし）を設定
        #[arg(long)]
        set_report_name: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Excel,
    Json,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, json, or both", s)),
        }
    }
}

/// 氏名抽出方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStrategyKind {
    /// 先頭付近の短い大文字始まりの行
    #[default]
    Heuristic,
    /// 抽出しない
    Disabled,
}

impl NameStrategyKind {
    pub fn build(&self) -> Box<dyn NameStrategy> {
        match self {
            NameStrategyKind::Heuristic => Box::new(HeuristicName),
            NameStrategyKind::Disabled => Box::new(NoName),
        }
    }
}

impl std::fmt::Display for NameStrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameStrategyKind::Heuristic => write!(f, "heuristic"),
            NameStrategyKind::Disabled => write!(f, "disabled"),
        }
    }
}
