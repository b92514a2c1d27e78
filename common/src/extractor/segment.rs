//! 文の分割と抽出済み範囲の管理
//!
//! 各セグメントは原文中のバイト範囲を保持し、
//! 項目に割り当てた範囲は Claims に記録して二重割り当てを防ぐ。

use std::ops::Range;

/// 文の区切り文字
pub const DELIMITERS: &[char] = &['。', '．', '.', '\n', '\r'];

/// 区切り文字で分割した1文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// 前後の空白を除いた文
    pub text: &'a str,
    /// 原文中のバイト範囲
    pub range: Range<usize>,
}

impl<'a> Segment<'a> {
    /// いずれかの語を含むか
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.text.contains(k))
    }

    /// セグメント内の範囲を原文の範囲に変換
    pub fn absolute(&self, relative: Range<usize>) -> Range<usize> {
        self.range.start + relative.start..self.range.start + relative.end
    }
}

/// テキストを文に分割
///
/// 区切り文字がなければテキスト全体が1文になる。空の文は含めない。
pub fn split_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if DELIMITERS.contains(&c) {
            push_trimmed(text, start..i, &mut segments);
            start = i + c.len_utf8();
        }
    }
    push_trimmed(text, start..text.len(), &mut segments);

    segments
}

fn push_trimmed<'a>(text: &'a str, range: Range<usize>, out: &mut Vec<Segment<'a>>) {
    let raw = &text[range.clone()];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }

    let start = range.start + (raw.len() - raw.trim_start().len());
    out.push(Segment {
        text: trimmed,
        range: start..start + trimmed.len(),
    });
}

/// 項目に割り当て済みの範囲
#[derive(Debug, Clone, Default)]
pub struct Claims {
    ranges: Vec<Range<usize>>,
}

impl Claims {
    /// 範囲を割り当て済みにする
    pub fn claim(&mut self, range: Range<usize>) {
        if !range.is_empty() {
            self.ranges.push(range);
        }
    }

    /// 割り当て済みの範囲と重なるか
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        self.ranges
            .iter()
            .any(|r| r.start < range.end && range.start < r.end)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// 割り当て済みの範囲を改行に置き換えた残りのテキスト
    pub fn remainder(&self, text: &str) -> String {
        let mut ranges = self.ranges.clone();
        ranges.sort_by_key(|r| r.start);

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for r in ranges {
            if r.start > cursor {
                out.push_str(&text[cursor..r.start]);
            }
            out.push('\n');
            cursor = cursor.max(r.end);
        }
        out.push_str(&text[cursor..]);

        out
    }
}
