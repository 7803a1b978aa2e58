use clap::Parser;
use cvify_rust::{archive, cli, config, error, export, matcher, processor, scanner};
use cli::{Cli, Commands};
use config::Config;
use dialoguer::Input;
use error::{CvifyError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use processor::{BatchSummary, ProcessOptions, ResultRow};
use std::path::{Path, PathBuf};

const MATCHED_ARCHIVE: &str = "Matched_CVs.zip";

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Run { input, keywords, output, format, name_strategy, no_package, all_rows } => {
            println!("📁 cvify - 履歴書振り分け\n");

            // 1. 入力準備（ZIPなら一時フォルダへ展開）
            println!("[1/4] 入力を準備中...");
            let mut unpacked: Option<tempfile::TempDir> = None;
            let (source_dir, default_output) = if archive::is_zip_path(&input) {
                let temp = tempfile::tempdir()?;
                let count = archive::unpack_zip(&input, temp.path())?;
                println!("✔ ZIPを展開: {}ファイル\n", count);
                let dir = temp.path().to_path_buf();
                unpacked = Some(temp);
                (dir, PathBuf::from("."))
            } else {
                println!("✔ フォルダ: {}\n", input.display());
                (input.clone(), input.clone())
            };

            let keywords = resolve_keywords(keywords.as_deref(), &config)?;
            if keywords.is_empty() {
                println!("⚠ キーワードが空です。全ファイルのスコアは0になります");
            } else {
                println!("  キーワード: {}\n", keywords.join(", "));
            }

            // 2. 抽出・照合・振り分け
            println!("[2/4] 履歴書を解析中...");
            let total = scanner::scan_folder(&source_dir)?.len();
            let options = ProcessOptions {
                name_strategy: name_strategy.unwrap_or(config.name_strategy).build(),
            };
            let progress = new_progress_bar(total as u64);
            let batch = processor::process_folder_with_progress(&source_dir, &keywords, &options, |row| {
                progress.set_message(row.file_name.clone());
                progress.inc(1);
            })?;
            progress.finish_and_clear();
            println!("✔ {}件を処理\n", batch.rows.len());

            if batch.rows.is_empty() {
                println!("⚠ 対象となるPDF/DOCXが見つかりませんでした");
                return Ok(());
            }

            print_rows(&batch.rows, all_rows);
            print_summary(&BatchSummary::from_rows(&batch.rows));

            // 3. レポート出力
            println!("\n[3/4] レポートを出力中...");
            let output_dir = output.unwrap_or(default_output);
            export::export_results(&batch.rows, &keywords, &format, &output_dir, &config.report_name)?;

            // 4. 一致ファイルのZIP
            if config.package_matched && !no_package {
                println!("\n[4/4] 一致ファイルをZIPにまとめ中...");
                let zip_dir = if output_dir.extension().is_some() {
                    output_dir.parent().unwrap_or(Path::new(".")).to_path_buf()
                } else {
                    output_dir.clone()
                };
                let zip_path = zip_dir.join(MATCHED_ARCHIVE);
                let count = archive::pack_directory(&batch.matched_dir, &zip_path)?;
                println!("✔ ZIP出力: {} ({}ファイル)", zip_path.display(), count);
            } else {
                println!("\n[4/4] ZIP作成をスキップ");
                println!("  一致ファイル: {}", batch.matched_dir.display());
            }

            // 展開した一時フォルダはここで削除
            drop(unpacked);
            println!("\n✅ 完了");
        }

        Commands::Scan { folder } => {
            let documents = scanner::scan_folder(&folder)?;
            println!("対象ファイル: {}件", documents.len());
            for doc in &documents {
                println!("  [{}] {}", doc.kind, doc.file_name);
            }
        }

        Commands::Config { set_keywords, set_name_strategy, set_report_name, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(input) = set_keywords {
                config.default_keywords = matcher::parse_keywords(&input);
                changed = true;
            }
            if let Some(kind) = set_name_strategy {
                config.name_strategy = kind;
                changed = true;
            }
            if let Some(name) = set_report_name {
                config.report_name = name;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  キーワード: {}", config.default_keywords.join(", "));
                println!("  レポート名: {}", config.report_name);
                println!("  氏名抽出: {}", config.name_strategy);
                println!("  一致ファイルZIP: {}", if config.package_matched { "作成する" } else { "作成しない" });
            }
        }
    }

    Ok(())
}

/// CLI指定 → 設定値 → 対話入力 の順でキーワードを決める
fn resolve_keywords(arg: Option<&str>, config: &Config) -> Result<Vec<String>> {
    if let Some(input) = arg {
        return Ok(matcher::parse_keywords(input));
    }
    if !config.default_keywords.is_empty() {
        return Ok(config.default_keywords.clone());
    }

    let input: String = Input::new()
        .with_prompt("キーワード（カンマ区切り）")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CvifyError::Prompt(e.to_string()))?;
    Ok(matcher::parse_keywords(&input))
}

fn new_progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {wide_msg}") {
        bar.set_style(style);
    }
    bar
}

fn print_rows(rows: &[ResultRow], all_rows: bool) {
    let shown: Vec<&ResultRow> = if all_rows {
        rows.iter().collect()
    } else {
        processor::flagged_rows(rows)
    };

    if shown.is_empty() {
        println!("  一致・要確認のファイルはありません");
        return;
    }

    println!("📊 結果");
    for row in shown {
        let marker = if row.manual_review { "⚠" } else { " " };
        println!(
            "{} {:<32} {:>3}%  {:<24} {:<28} {}",
            marker,
            row.file_name,
            row.match_score,
            display_or_dash(&row.name),
            display_or_dash(&row.email),
            row.matched_keywords_joined()
        );
    }
}

fn print_summary(summary: &BatchSummary) {
    println!("\n✅ {}/{} 件がキーワードに一致", summary.matched, summary.total);
    if summary.manual_review > 0 {
        println!("⚠ {}件は画像PDFの可能性があり、目視確認が必要です", summary.manual_review);
    }
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}
