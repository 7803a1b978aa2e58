//! キーワード照合
//!
//! 単語境界つき・大文字小文字無視で照合し、一致率(0-100)を算出する。

use crate::error::{CvifyError, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// 照合結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// 一致したキーワード（入力順）
    pub found: Vec<String>,
    /// 一致率（%）
    pub score: u8,
}

/// カンマ区切りの入力をキーワード列にする（空要素は除去、重複はそのまま）
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// コンパイル済みキーワード集合
///
/// バッチ中は同じキーワードで全ファイルを照合するので、パターンは一度だけ作る。
#[derive(Debug, Clone)]
pub struct KeywordSet {
    entries: Vec<(String, Regex)>,
}

impl KeywordSet {
    pub fn new(keywords: &[String]) -> Result<Self> {
        let entries = keywords
            .iter()
            .map(|kw| {
                let pattern = format!(r"\b{}\b", regex::escape(kw));
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (kw.clone(), re))
                    .map_err(|e| CvifyError::InvalidKeyword(format!("{}: {}", kw, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, text: &str) -> KeywordMatch {
        let found: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(kw, _)| kw.clone())
            .collect();

        let score = match_score(found.len(), self.entries.len());
        KeywordMatch { found, score }
    }
}

/// 一致率 = round(100 * matched / total)、キーワードなしは 0
pub fn match_score(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let matched = matched.min(total);
    // 四捨五入（整数演算）
    ((200 * matched + total) / (2 * total)) as u8
}

pub fn match_keywords(text: &str, keywords: &[String]) -> Result<KeywordMatch> {
    Ok(KeywordSet::new(keywords)?.find(text))
}
