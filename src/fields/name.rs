//! 氏名抽出ストラテジー
//!
//! 氏名の推定は見出しや肩書きを拾いやすい不安定な処理なので、
//! 差し替え・無効化できるようにトレイトで切り出している。

/// 本文から氏名を推定する
pub trait NameStrategy {
    fn extract_name(&self, text: &str) -> String;
}

/// 先頭から見て最初の「短い・英字のみ・大文字始まり」の行を氏名とみなす
///
/// 既知の制限: "Curriculum Vitae" や "Software Engineer" のような
/// 見出し行が先にあるとそれを返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicName;

/// 氏名抽出を行わない
#[derive(Debug, Clone, Copy, Default)]
pub struct NoName;

const MAX_NAME_WORDS: usize = 4;

impl NameStrategy for HeuristicName {
    fn extract_name(&self, text: &str) -> String {
        text.lines()
            .map(str::trim)
            .find(|line| looks_like_name(line))
            .map(str::to_string)
            .unwrap_or_default()
    }
}

impl NameStrategy for NoName {
    fn extract_name(&self, _text: &str) -> String {
        String::new()
    }
}

fn looks_like_name(line: &str) -> bool {
    let Some(first) = line.chars().next() else {
        return false;
    };

    line.split_whitespace().count() <= MAX_NAME_WORDS
        && line.chars().filter(|&c| c != ' ').all(char::is_alphabetic)
        && first.is_uppercase()
}
