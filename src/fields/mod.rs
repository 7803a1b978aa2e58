//! 連絡先フィールド抽出
//!
//! メール・電話・LinkedIn は正規表現の最初のマッチを採用する。
//! 氏名は `NameStrategy` に委譲する。

pub mod name;

pub use name::{HeuristicName, NameStrategy, NoName};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// 候補者情報（見つからない項目は空文字）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
    // パキスタン形式（+92 / 0092 / 0 始まり、3-3-4桁、区切りは空白かハイフン）
    static ref PHONE_RE: Regex =
        Regex::new(r"(?:(?:\+92|0092|0)[-\s]?)?\d{3}[-\s]?\d{3}[-\s]?\d{4}").unwrap();
    static ref LINKEDIN_RE: Regex =
        Regex::new(r"(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9\-_/]+").unwrap();
}

pub fn extract_fields(text: &str, name_strategy: &dyn NameStrategy) -> CandidateInfo {
    CandidateInfo {
        name: name_strategy.extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        linkedin: extract_linkedin(text),
    }
}

pub fn extract_email(text: &str) -> String {
    first_match(&EMAIL_RE, text)
}

pub fn extract_phone(text: &str) -> String {
    first_match(&PHONE_RE, text)
}

/// スキームがなければ https:// を補う
pub fn extract_linkedin(text: &str) -> String {
    let url = first_match(&LINKEDIN_RE, text);
    if url.is_empty() || url.starts_with("http") {
        url
    } else {
        format!("https://{}", url)
    }
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
