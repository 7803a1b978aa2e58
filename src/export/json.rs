use crate::error::Result;
use crate::processor::{BatchSummary, ResultRow};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSONレポート
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    pub generated_at: String,
    pub keywords: Vec<String>,
    pub summary: BatchSummary,
    pub rows: Vec<ResultRow>,
}

impl JsonReport {
    pub fn new(rows: &[ResultRow], keywords: &[String]) -> Self {
        Self {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            keywords: keywords.to_vec(),
            summary: BatchSummary::from_rows(rows),
            rows: rows.to_vec(),
        }
    }
}

pub fn generate_json(rows: &[ResultRow], keywords: &[String], output_path: &Path) -> Result<()> {
    let report = JsonReport::new(rows, keywords);
    let writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
