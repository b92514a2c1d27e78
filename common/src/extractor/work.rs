//! 本日の業務の抽出
//!
//! 問題点・明日の予定に割り当てた範囲を除いた残りを本日の業務とする。
//! 残りが短すぎる場合は、作業キーワードを含む未割り当ての文を集める。

use super::keywords::{ISSUE_NOUNS, WORK_KEYWORDS};
use super::segment::{split_segments, Claims, Segment};
use regex::Regex;

lazy_static::lazy_static! {
    // 取り残された「問題は」「明日の業務は」などの前置き
    static ref LEADING_ISSUE_PREFIX_RE: Regex = Regex::new(&format!(
        r"^(?:{})は[、,\s]*",
        ISSUE_NOUNS.join("|")
    )).unwrap();
    static ref LEADING_PLAN_PREFIX_RE: Regex = Regex::new(
        r"^明日(?:の業務|の予定|の作業)?(?:は|に関しては)[、,\s]*"
    ).unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// 本日の業務を抽出
///
/// # Arguments
/// * `text` - 原文
/// * `segments` - 原文の分割結果
/// * `claims` - 問題点・明日の予定に割り当て済みの範囲
/// * `min_chars` - 残りのテキストを採用する最小文字数
pub fn extract_todays_work(
    text: &str,
    segments: &[Segment<'_>],
    claims: &Claims,
    min_chars: usize,
) -> Option<String> {
    let remainder = claims.remainder(text);
    let cleaned = split_segments(&remainder)
        .iter()
        .map(|seg| strip_leading_prefixes(seg.text))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("。");
    let cleaned = collapse_whitespace(&cleaned);

    if cleaned.chars().count() >= min_chars {
        return Some(cleaned);
    }

    let matched: Vec<&str> = segments
        .iter()
        .filter(|seg| !claims.overlaps(&seg.range))
        .filter(|seg| seg.contains_any(WORK_KEYWORDS))
        .map(|seg| seg.text)
        .collect();

    if matched.is_empty() {
        None
    } else {
        Some(collapse_whitespace(&matched.join("。")))
    }
}

fn strip_leading_prefixes(segment: &str) -> String {
    let stripped = LEADING_ISSUE_PREFIX_RE.replace(segment, "");
    let stripped = LEADING_PLAN_PREFIX_RE.replace(&stripped, "");
    stripped.trim().to_string()
}

/// 連続する空白を1つの半角スペースにまとめる
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}
