pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use crate::processor::ResultRow;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, report_name: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", report_name, extension))
    } else {
        output.with_extension(extension)
    }
}

/// レポートを出力し、書き出したファイルのパスを返す
pub fn export_results(
    rows: &[ResultRow],
    keywords: &[String],
    format: &ExportFormat,
    output: &Path,
    report_name: &str,
) -> Result<Vec<PathBuf>> {
    if output.extension().is_none() {
        std::fs::create_dir_all(output)?;
    }

    let mut written = Vec::new();

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let path = output_path_for_format(output, report_name, "xlsx");
        println!("- Excelを生成中...");
        excel::generate_excel(rows, &path)?;
        println!("✔ Excel出力: {}", path.display());
        written.push(path);
    }

    if matches!(format, ExportFormat::Json | ExportFormat::Both) {
        let path = output_path_for_format(output, report_name, "json");
        println!("- JSONを生成中...");
        json::generate_json(rows, keywords, &path)?;
        println!("✔ JSON出力: {}", path.display());
        written.push(path);
    }

    Ok(written)
}
