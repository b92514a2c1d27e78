//! 問題点・懸念事項の抽出
//!
//! 1. 「問題点は…」「トラブルは…」などの明示的な表現（先に一致したものを採用）
//! 2. 問題キーワードを含む文をすべて連結
//!
//! 明示表現の節は「明日」の手前で打ち切り、明日の予定に食い込まないようにする。
//! 2 は明日の予定の明示表現より後に実行する。

use super::keywords::{ISSUE_KEYWORDS, ISSUE_NOUNS, TOMORROW_MARKER};
use super::segment::{Claims, Segment};
use super::{cut_before, trim_clause};
use regex::Regex;

lazy_static::lazy_static! {
    static ref ISSUE_PHRASES: Vec<Regex> = ISSUE_NOUNS
        .iter()
        .map(|noun| Regex::new(&format!(r"{}は[、,\s]*(.*)", noun)).unwrap())
        .collect();
    // 節の先頭の否定（「ないが…」も含む）
    static ref LEADING_NEGATION_RE: Regex = Regex::new(
        r"^(?:特に|とくに)?(?:なし|無し|ない|無い|ありません|ございません|なかった|無かった)"
    ).unwrap();
    // 節全体が否定（「特にありません」「なしです」）
    static ref WHOLE_NEGATION_RE: Regex = Regex::new(
        r"^(?:特に|とくに)?(?:なし|無し|ない|無い|ありません|ございません|なかった|無かった)(?:でした|です)?$"
    ).unwrap();
    // 「問題はありません」「異常なし」などの否定表現
    static ref NEGATED_ISSUE_RE: Regex = Regex::new(
        r"(?:問題|トラブル|不具合|異常|エラー|故障|漏れ|異音)(?:は|も|が)?(?:特に|とくに)?(?:なし|無し|ない|無い|ありません|ございません|なかった|無かった)"
    ).unwrap();
}

/// 明示的な表現から問題点を探し、使った範囲を claims に記録する
///
/// 「問題はありません」のような否定の節は範囲だけ記録して探索を続ける。
/// 「問題はないが…」のように否定の後に続きがある節は記録せず、文単位の判定に任せる。
pub fn find_explicit_issue(segments: &[Segment<'_>], claims: &mut Claims) -> Option<String> {
    for pattern in ISSUE_PHRASES.iter() {
        for seg in segments {
            for caps in pattern.captures_iter(seg.text) {
                let (Some(whole), Some(group)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };

                let raw = cut_before(group.as_str(), TOMORROW_MARKER);
                let start = phrase_start(seg.text, whole.start());
                let range = seg.absolute(start..group.start() + raw.len());
                if claims.overlaps(&range) {
                    continue;
                }

                let clause = trim_clause(raw);
                if clause.is_empty() || WHOLE_NEGATION_RE.is_match(clause) {
                    claims.claim(range);
                    continue;
                }
                if LEADING_NEGATION_RE.is_match(clause) {
                    continue;
                }

                claims.claim(range);
                return Some(clause.to_string());
            }
        }
    }

    None
}

/// 問題キーワードを含む未割り当ての文を集める
///
/// キーワードがすべて否定表現の中にある文（「配管に問題はない」）は除く。
pub fn collect_issue_segments(segments: &[Segment<'_>], claims: &mut Claims) -> Option<String> {
    let matched: Vec<&Segment<'_>> = segments
        .iter()
        .filter(|seg| !claims.overlaps(&seg.range))
        .filter(|seg| has_unnegated_keyword(seg.text))
        .collect();

    if matched.is_empty() {
        return None;
    }

    for seg in &matched {
        claims.claim(seg.range.clone());
    }
    Some(
        matched
            .iter()
            .map(|seg| seg.text)
            .collect::<Vec<_>>()
            .join("。"),
    )
}

fn has_unnegated_keyword(text: &str) -> bool {
    let rest = NEGATED_ISSUE_RE.replace_all(text, "");
    ISSUE_KEYWORDS.iter().any(|k| rest.contains(k))
}

/// 表現の始まり（直前の読点の後、なければ文頭）
///
/// 「配管に問題は…」の「配管に」が本日の業務に残らないようにする。
fn phrase_start(text: &str, trigger_start: usize) -> usize {
    text[..trigger_start]
        .rfind(|c: char| matches!(c, '、' | ',' | '，'))
        .map(|i| i + text[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0)
}
