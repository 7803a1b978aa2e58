//! Excel/JSONレポート出力の統合テスト

use calamine::{open_workbook, Data, Reader, Xlsx};
use cvify_rust::cli::ExportFormat;
use cvify_rust::export::{self, excel, json::JsonReport};
use cvify_rust::{BatchSummary, ResultRow};
use tempfile::tempdir;

fn create_test_row(index: usize, is_match: bool, manual_review: bool) -> ResultRow {
    ResultRow {
        file_name: format!("cv_{}.pdf", index),
        name: format!("Candidate {}", index),
        email: format!("candidate{}@example.com", index),
        phone: "0300 123 4567".to_string(),
        linkedin: format!("https://linkedin.com/in/candidate{}", index),
        match_score: if is_match { 67 } else { 0 },
        matched_keywords: if is_match {
            vec!["Python".to_string(), "SQL".to_string()]
        } else {
            Vec::new()
        },
        manual_review,
        is_match,
    }
}

fn cell(range: &calamine::Range<Data>, row: u32, col: u32) -> String {
    range.get_value((row, col)).map(|c| c.to_string()).unwrap_or_default()
}

#[test]
fn test_excel_contains_all_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("CV_Report.xlsx");

    let rows = vec![
        create_test_row(1, true, false),
        create_test_row(2, false, true),
        create_test_row(3, false, false),
    ];

    let result = excel::generate_excel(&rows, &output_path);
    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());

    let mut workbook: Xlsx<_> = open_workbook(&output_path).expect("Excelを開けない");
    let range = workbook.worksheet_range(excel::SHEET_NAME).expect("シートがない");

    assert_eq!(range.get_size(), (4, excel::HEADERS.len()));
    for (col, header) in excel::HEADERS.iter().enumerate() {
        assert_eq!(cell(&range, 0, col as u32), *header);
    }

    assert_eq!(cell(&range, 1, 0), "cv_1.pdf");
    assert_eq!(cell(&range, 1, 1), "Candidate 1");
    assert_eq!(cell(&range, 1, 2), "candidate1@example.com");
    assert_eq!(range.get_value((1, 5)), Some(&Data::Float(67.0)));
    assert_eq!(cell(&range, 1, 6), "Python, SQL");
    assert_eq!(cell(&range, 1, 7), "No");
    assert_eq!(cell(&range, 1, 8), "Yes");

    assert_eq!(cell(&range, 2, 7), "Yes");
    assert_eq!(cell(&range, 2, 8), "No");
    assert_eq!(cell(&range, 3, 0), "cv_3.pdf");
}

#[test]
fn test_excel_empty_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.xlsx");

    let result = excel::generate_excel(&[], &output_path);
    assert!(result.is_ok(), "空のExcel生成に失敗: {:?}", result.err());
    assert!(output_path.exists());
}

#[test]
fn test_export_both_formats() {
    let dir = tempdir().expect("Failed to create temp dir");
    let rows = vec![create_test_row(1, true, true), create_test_row(2, false, false)];
    let keywords = vec!["Python".to_string(), "SQL".to_string(), "Java".to_string()];

    let written = export::export_results(&rows, &keywords, &ExportFormat::Both, dir.path(), "CV_Report")
        .expect("エクスポートに失敗");

    assert_eq!(
        written,
        vec![dir.path().join("CV_Report.xlsx"), dir.path().join("CV_Report.json")]
    );

    let content = std::fs::read_to_string(dir.path().join("CV_Report.json")).unwrap();
    let report: JsonReport = serde_json::from_str(&content).expect("JSONが読めない");
    assert_eq!(report.rows, rows);
    assert_eq!(report.keywords, keywords);
    assert_eq!(report.summary, BatchSummary { total: 2, matched: 1, manual_review: 1 });
    assert!(!report.generated_at.is_empty());
}

#[test]
fn test_export_creates_missing_output_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("reports").join("today");

    let written = export::export_results(&[], &[], &ExportFormat::Json, &output, "CV_Report").unwrap();
    assert_eq!(written, vec![output.join("CV_Report.json")]);
    assert!(written[0].is_file());
}
