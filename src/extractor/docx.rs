//! DOCXテキスト抽出
//!
//! DOCXはZIPなので word/document.xml を取り出し、
//! 段落（w:p）ごとのテキストを改行で連結する。

use super::ExtractionOutcome;
use regex::{Captures, Regex};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

const DOCUMENT_XML: &str = "word/document.xml";

pub fn extract_docx(path: &Path) -> ExtractionOutcome {
    match read_document_xml(path) {
        Ok(xml) => ExtractionOutcome::Extracted { text: paragraphs_to_text(&xml) },
        Err(reason) => ExtractionOutcome::Failed { reason },
    }
}

fn read_document_xml(path: &Path) -> Result<String, String> {
    let file = File::open(path).map_err(|e| format!("ファイルを開けません: {}", e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| format!("DOCX(ZIP)読み込みエラー: {}", e))?;
    let mut entry = archive
        .by_name(DOCUMENT_XML)
        .map_err(|e| format!("{} がありません: {}", DOCUMENT_XML, e))?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| format!("{} 読み込みエラー: {}", DOCUMENT_XML, e))?;
    Ok(xml)
}

/// document.xml の段落を改行区切りのテキストにする
///
/// テキストボックス（w:txbxContent）内の段落は外側の段落を切らずに
/// 別の行として、外側の段落の直後に並べる。mc:Fallback は mc:Choice と
/// 同じ内容の重複なので読まない。
pub(crate) fn paragraphs_to_text(xml: &str) -> String {
    lazy_static::lazy_static! {
        static ref TOKEN_RE: Regex = Regex::new(concat!(
            r"(?s)(?P<fallback><mc:Fallback(?:\s[^>]*)?>.*?</mc:Fallback>)",
            r"|(?P<empty><w:p(?:\s[^>]*)?/>)",
            r"|(?P<open><w:p(?:\s[^>]*)?>)",
            r"|(?P<close></w:p>)",
            r"|<w:t(?:\s[^>]*)?>(?P<text>.*?)</w:t>",
            r"|(?P<tab><w:tab/>)",
            r"|(?P<brk><w:(?:br|cr)(?:\s[^>]*)?/>)",
        ))
        .unwrap();
    }

    let mut lines: Vec<String> = Vec::new();
    // 開いている段落の lines 上の位置（入れ子はテキストボックス）
    let mut open: Vec<usize> = Vec::new();

    for token in TOKEN_RE.captures_iter(xml) {
        if token.name("fallback").is_some() {
            continue;
        }
        if token.name("empty").is_some() {
            lines.push(String::new());
            continue;
        }
        if token.name("open").is_some() {
            open.push(lines.len());
            lines.push(String::new());
            continue;
        }
        if token.name("close").is_some() {
            open.pop();
            continue;
        }

        // 段落外のランは無視
        let Some(&current) = open.last() else {
            continue;
        };
        let line = &mut lines[current];
        if let Some(t) = token.name("text") {
            line.push_str(&unescape_xml(t.as_str()));
        } else if token.name("tab").is_some() {
            line.push('\t');
        } else if token.name("brk").is_some() {
            line.push('\n');
        }
    }

    lines.join("\n")
}

/// XML実体参照を元の文字に戻す
fn unescape_xml(s: &str) -> String {
    lazy_static::lazy_static! {
        static ref ENTITY_RE: Regex = Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap();
    }

    if !s.contains('&') {
        return s.to_string();
    }

    ENTITY_RE
        .replace_all(s, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ if entity.starts_with("#x") => u32::from_str_radix(&entity[2..], 16)
                    .ok()
                    .and_then(char::from_u32),
                _ if entity.starts_with('#') => entity[1..].parse::<u32>().ok().and_then(char::from_u32),
                _ => None,
            };
            // 不明な実体はそのまま残す
            decoded.map(String::from).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_joined_with_newline() {
        let xml = r#"<w:document><w:body>
            <w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Jane Doe</w:t></w:r></w:p>
            <w:p><w:r><w:t xml:space="preserve">Skills: </w:t></w:r><w:r><w:t>Python</w:t></w:r></w:p>
        </w:body></w:document>"#;
        assert_eq!(paragraphs_to_text(xml), "Jane Doe\nSkills: Python");
    }

    #[test]
    fn test_empty_paragraph_kept() {
        let xml = "<w:body><w:p><w:r><w:t>A</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>B</w:t></w:r></w:p></w:body>";
        assert_eq!(paragraphs_to_text(xml), "A\n\nB");
    }

    #[test]
    fn test_tab_and_break() {
        let xml = r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Name</w:t><w:tab/><w:t>Email</w:t><w:br/><w:t>Next</w:t></w:r></w:p>"#;
        assert_eq!(paragraphs_to_text(xml), "Name\tEmail\nNext");
    }

    #[test]
    fn test_text_box_keeps_outer_paragraph() {
        let xml = concat!(
            "<w:body><w:p><w:r><w:t>Intro</w:t></w:r>",
            "<w:r><w:pict><v:shape><v:textbox><w:txbxContent>",
            "<w:p><w:r><w:t>Boxed</w:t></w:r></w:p>",
            "</w:txbxContent></v:textbox></v:shape></w:pict></w:r>",
            r#"<w:r><w:t xml:space="preserve"> Skills Python</w:t></w:r></w:p>"#,
            "<w:p><w:r><w:t>Tail</w:t></w:r></w:p></w:body>",
        );
        assert_eq!(paragraphs_to_text(xml), "Intro Skills Python\nBoxed\nTail");
    }

    #[test]
    fn test_alternate_content_fallback_skipped() {
        let xml = concat!(
            "<w:p><w:r><w:t>Header</w:t></w:r><w:r><mc:AlternateContent>",
            "<mc:Choice Requires=\"wps\"><w:drawing><wps:txbx><w:txbxContent>",
            "<w:p><w:r><w:t>SQL</w:t></w:r></w:p>",
            "</w:txbxContent></wps:txbx></w:drawing></mc:Choice>",
            "<mc:Fallback><w:pict><v:textbox><w:txbxContent>",
            "<w:p><w:r><w:t>SQL</w:t></w:r></w:p>",
            "</w:txbxContent></v:textbox></w:pict></mc:Fallback>",
            "</mc:AlternateContent></w:r><w:r><w:t>Agile</w:t></w:r></w:p>",
        );
        assert_eq!(paragraphs_to_text(xml), "HeaderAgile\nSQL");
    }

    #[test]
    fn test_unescape_entities() {
        assert_eq!(unescape_xml("R&amp;D &lt;team&gt;"), "R&D <team>");
        assert_eq!(unescape_xml("&quot;x&apos;"), "\"x'");
        assert_eq!(unescape_xml("&#65;&#x42;"), "AB");
        assert_eq!(unescape_xml("&unknown;"), "&unknown;");
        assert_eq!(unescape_xml("plain"), "plain");
    }

    #[test]
    fn test_not_a_zip_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"not a zip").unwrap();

        assert!(matches!(extract_docx(&path), ExtractionOutcome::Failed { .. }));
    }
}
