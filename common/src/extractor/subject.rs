//! 現場名・担当者の抽出

use super::keywords::{HONORIFICS, NAME_CHARS, SITE_SUFFIXES, SURNAMES};
use regex::{Match, Regex};
use std::ops::Range;

lazy_static::lazy_static! {
    // 「〇〇ビル」「〇〇現場」など
    static ref SITE_RE: Regex = Regex::new(&format!(
        r"{}+(?:{})",
        NAME_CHARS,
        SITE_SUFFIXES.join("|")
    )).unwrap();
    // 固定の姓、または「〇〇さん」「〇〇氏」
    static ref STAFF_RE: Regex = Regex::new(&format!(
        r"(?:{})|{}+(?:{})",
        SURNAMES.join("|"),
        NAME_CHARS,
        HONORIFICS.join("|")
    )).unwrap();
}

/// 最初の現場名を検索
pub fn find_site(text: &str) -> Option<Match<'_>> {
    SITE_RE.find(text)
}

/// 現場名を抽出
pub fn extract_site(text: &str) -> Option<String> {
    find_site(text).map(|m| m.as_str().to_string())
}

/// 担当者を抽出
///
/// 現場名の範囲は除外して検索する（「山田ビル」の「山田」を担当者にしない）。
/// 複数見つかった場合は出現順に重複を除いて「、」で連結する。
pub fn extract_staff(text: &str, site: Option<Range<usize>>) -> Option<String> {
    let masked;
    let haystack = match site {
        Some(range) => {
            masked = format!("{}\u{3000}{}", &text[..range.start], &text[range.end..]);
            masked.as_str()
        }
        None => text,
    };

    let mut names: Vec<&str> = Vec::new();
    for m in STAFF_RE.find_iter(haystack) {
        if !names.contains(&m.as_str()) {
            names.push(m.as_str());
        }
    }

    if names.is_empty() {
        None
    } else {
        Some(names.join("、"))
    }
}
