//! Excelレポート生成
//!
//! 全行を1シートに出力し、要確認の行は背景色で強調する。

use crate::error::{CvifyError, Result};
use crate::processor::ResultRow;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::Path;

pub const SHEET_NAME: &str = "CV Report";

pub const HEADERS: [&str; 9] = [
    "Filename",
    "Name",
    "Email",
    "Phone",
    "LinkedIn",
    "Match Score",
    "Matched Keywords",
    "Manual Review",
    "Match",
];

const COLUMN_WIDTHS: [f64; 9] = [32.0, 24.0, 32.0, 18.0, 40.0, 12.0, 36.0, 14.0, 8.0];

/// 要確認行の背景色
const REVIEW_COLOR: u32 = 0x9E8942;

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn generate_excel(rows: &[ResultRow], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    write_sheet(worksheet, rows)
        .map_err(|e| CvifyError::ExcelGeneration(format!("シート書き込みエラー: {}", e)))?;

    workbook
        .save(output_path)
        .map_err(|e| CvifyError::ExcelGeneration(format!("保存エラー: {}", e)))?;

    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, rows: &[ResultRow]) -> std::result::Result<(), XlsxError> {
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin);
    let plain_format = Format::new();
    let review_format = Format::new().set_background_color(Color::RGB(REVIEW_COLOR));

    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (idx, row) in rows.iter().enumerate() {
        let r = (idx + 1) as u32;
        let format = if row.manual_review { &review_format } else { &plain_format };

        let keywords = row.matched_keywords_joined();
        let texts = [
            row.file_name.as_str(),
            row.name.as_str(),
            row.email.as_str(),
            row.phone.as_str(),
            row.linkedin.as_str(),
        ];
        for (col, value) in texts.iter().enumerate() {
            worksheet.write_string_with_format(r, col as u16, *value, format)?;
        }
        worksheet.write_number_with_format(r, 5, row.match_score, format)?;
        worksheet.write_string_with_format(r, 6, &keywords, format)?;
        worksheet.write_string_with_format(r, 7, yes_no(row.manual_review), format)?;
        worksheet.write_string_with_format(r, 8, yes_no(row.is_match), format)?;
    }

    Ok(())
}
