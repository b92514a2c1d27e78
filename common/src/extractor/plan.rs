//! 明日の予定業務の抽出
//!
//! 1. 「明日の業務は…」「明日は…」などの明示的な表現（今日の話の手前で打ち切る）
//! 2. 明日・次回・来週などを含む文、または今日を含まない予定・計画の文
//! 3. 「続き」「継続」だけが語られていれば定型文

use super::keywords::{
    CONTINUATION_MARKERS, PLAN_KEYWORDS, PLAN_TRIGGERS, TODAY_MARKER, TOMORROW_KEYWORDS,
};
use super::segment::{Claims, Segment};
use super::{cut_before, trim_clause};
use crate::types::CONTINUATION_PLAN;
use regex::Regex;

lazy_static::lazy_static! {
    static ref PLAN_PHRASES: Vec<Regex> = PLAN_TRIGGERS
        .iter()
        .map(|trigger| Regex::new(&format!(r"{}[、,\s]*(.+)", trigger)).unwrap())
        .collect();
}

/// 明日・予定の語を含む未割り当ての文を集め、なければ続きの定型文
///
/// 問題点として割り当て済みの範囲は対象にしない。
pub fn collect_plan_segments(
    text: &str,
    segments: &[Segment<'_>],
    claims: &mut Claims,
) -> Option<String> {
    let matched: Vec<&Segment<'_>> = segments
        .iter()
        .filter(|seg| !claims.overlaps(&seg.range))
        .filter(|seg| is_plan_segment(seg))
        .collect();

    if !matched.is_empty() {
        for seg in &matched {
            claims.claim(seg.range.clone());
        }
        return Some(
            matched
                .iter()
                .map(|seg| seg.text)
                .collect::<Vec<_>>()
                .join("。"),
        );
    }

    if CONTINUATION_MARKERS.iter().any(|m| text.contains(m)) {
        return Some(CONTINUATION_PLAN.to_string());
    }

    None
}

/// 明示的な表現から明日の予定を探し、使った範囲を claims に記録する
pub fn find_explicit_plan(segments: &[Segment<'_>], claims: &mut Claims) -> Option<String> {
    for pattern in PLAN_PHRASES.iter() {
        for seg in segments {
            for caps in pattern.captures_iter(seg.text) {
                let (Some(whole), Some(group)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };

                let raw = cut_before(group.as_str(), TODAY_MARKER);
                let range = seg.absolute(whole.start()..group.start() + raw.len());
                if claims.overlaps(&range) {
                    continue;
                }

                let clause = trim_clause(raw);
                if clause.is_empty() {
                    continue;
                }

                claims.claim(range);
                return Some(clause.to_string());
            }
        }
    }

    None
}

fn is_plan_segment(seg: &Segment<'_>) -> bool {
    seg.contains_any(TOMORROW_KEYWORDS)
        || (seg.contains_any(PLAN_KEYWORDS) && !seg.text.contains(TODAY_MARKER))
}
