//! ルールベースの日報抽出モジュール
//!
//! APIキーがない場合やネットワークに接続できない場合に使う、
//! 決定的なフォールバック抽出。
//!
//! ## 処理フロー
//! 1. 文の分割（。．. 改行）
//! 2. 現場名・担当者の抽出
//! 3. 明示表現の抽出（問題点 → 明日の予定）
//! 4. キーワードを含む文の割り当て（問題点 → 明日の予定 → 継続）
//! 5. 本日の業務の抽出（3・4で使った範囲を除く）

pub mod keywords;
pub mod segment;
pub mod subject;
pub mod issues;
pub mod plan;
pub mod work;

use crate::types::StructuredReport;
use segment::{split_segments, Claims};

/// 本日の業務として採用する残りテキストの最小文字数
pub const DEFAULT_MIN_WORK_CHARS: usize = 10;

/// ルールベース抽出器
#[derive(Debug, Clone)]
pub struct FallbackExtractor {
    min_work_chars: usize,
}

impl Default for FallbackExtractor {
    fn default() -> Self {
        Self {
            min_work_chars: DEFAULT_MIN_WORK_CHARS,
        }
    }
}

impl FallbackExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 本日の業務の最小文字数を変更
    pub fn with_min_work_chars(mut self, min_work_chars: usize) -> Self {
        self.min_work_chars = min_work_chars;
        self
    }

    /// テキストから日報を抽出する
    ///
    /// 失敗しない。見つからない項目は既定値（"未記載" / "特になし"）になる。
    pub fn extract(&self, text: &str) -> StructuredReport {
        let segments = split_segments(text);
        let mut claims = Claims::default();

        let site = subject::find_site(text);
        let staff = subject::extract_staff(text, site.map(|m| m.range()));

        // 明示表現（問題点 → 明日の予定）を先に、キーワードによる文の割り当てを後に行う
        let explicit_issue = issues::find_explicit_issue(&segments, &mut claims);
        let explicit_plan = plan::find_explicit_plan(&segments, &mut claims);
        let issues = explicit_issue
            .or_else(|| issues::collect_issue_segments(&segments, &mut claims));
        let tomorrow_plan = explicit_plan
            .or_else(|| plan::collect_plan_segments(text, &segments, &mut claims));
        let todays_work = work::extract_todays_work(text, &segments, &claims, self.min_work_chars);

        StructuredReport {
            site: site.map(|m| m.as_str().to_string()).unwrap_or_default(),
            staff: staff.unwrap_or_default(),
            todays_work: todays_work.unwrap_or_default(),
            issues: issues.unwrap_or_default(),
            tomorrow_plan: tomorrow_plan.unwrap_or_default(),
        }
        .with_sentinels()
    }
}

/// 既定の設定でテキストから日報を抽出する
pub fn extract_report(text: &str) -> StructuredReport {
    FallbackExtractor::default().extract(text)
}

/// `stop` の手前までを返す
pub(crate) fn cut_before<'a>(clause: &'a str, stop: &str) -> &'a str {
    match clause.find(stop) {
        Some(i) => &clause[..i],
        None => clause,
    }
}

/// 節の前後の空白と読点を除く
pub(crate) fn trim_clause(clause: &str) -> &str {
    clause.trim_matches(|c: char| c.is_whitespace() || matches!(c, '、' | ',' | '，'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CONTINUATION_PLAN, NOT_RECORDED, NO_ISSUES};

    // =============================================
    // 日報全体の抽出テスト
    // =============================================

    #[test]
    fn test_extract_full_report() {
        let report = extract_report(
            "今日は山田ビルで室外機設置しました。配線に問題がありました。明日は室内機を予定しています。",
        );

        assert_eq!(report.site, "山田ビル");
        assert_eq!(report.staff, NOT_RECORDED);
        assert!(report.todays_work.contains("室外機設置"));
        assert!(report.issues.contains("配線に問題"));
        assert!(report.tomorrow_plan.contains("室内機"));
    }

    #[test]
    fn test_extract_sentinels_for_bare_work() {
        let report = extract_report("作業完了");

        assert_eq!(report.site, "未記載");
        assert_eq!(report.staff, "未記載");
        assert_eq!(report.issues, "特になし");
        assert_eq!(report.tomorrow_plan, "未記載");
        assert!(report.todays_work.contains("作業完了"));
    }

    #[test]
    fn test_extract_nothing_recognizable() {
        let report = extract_report("こんにちは");

        assert_eq!(report.site, NOT_RECORDED);
        assert_eq!(report.staff, NOT_RECORDED);
        assert_eq!(report.todays_work, NOT_RECORDED);
        assert_eq!(report.issues, NO_ISSUES);
        assert_eq!(report.tomorrow_plan, NOT_RECORDED);
    }

    #[test]
    fn test_explicit_phrases_not_duplicated_in_work() {
        let report = extract_report(
            "今日は田中さんと鈴木工場でダクト清掃を実施しました。問題点はフィルターの目詰まりです。明日の予定は室外機の点検です。",
        );

        assert_eq!(report.site, "鈴木工場");
        assert_eq!(report.staff, "田中");
        assert_eq!(report.issues, "フィルターの目詰まりです");
        assert_eq!(report.tomorrow_plan, "室外機の点検です");
        assert!(report.todays_work.contains("ダクト清掃"));
        assert!(!report.todays_work.contains(&report.issues));
        assert!(!report.todays_work.contains(&report.tomorrow_plan));
    }

    #[test]
    fn test_issue_and_plan_in_one_sentence() {
        let report = extract_report("問題は配管の漏れで、明日は修理します");

        assert_eq!(report.issues, "配管の漏れで");
        assert_eq!(report.tomorrow_plan, "修理します");
        assert_eq!(report.todays_work, NOT_RECORDED);
    }

    #[test]
    fn test_explicit_plan_with_issue_keyword() {
        let report = extract_report("明日は漏れの修理を予定");

        assert_eq!(report.tomorrow_plan, "漏れの修理を予定");
        assert_eq!(report.issues, NO_ISSUES);
    }

    #[test]
    fn test_negation_followed_by_issue() {
        let report = extract_report("室外機を設置しました。配管に問題はないが室外機から異音がする。");

        assert_eq!(report.issues, "配管に問題はないが室外機から異音がする");
        assert_eq!(report.todays_work, "室外機を設置しました");

        let report = extract_report("室外機を設置しました。問題はないが室外機から異音がする。");
        assert!(report.issues.contains("異音"));

        let report = extract_report("室外機を設置しました。問題ないか心配です。");
        assert_eq!(report.issues, "問題ないか心配です");
        assert!(!report.todays_work.contains("心配"));
    }

    #[test]
    fn test_bare_issue_trigger() {
        let report = extract_report("室外機を設置しました。問題点は");

        assert_eq!(report.issues, NO_ISSUES);
        assert_eq!(report.todays_work, "室外機を設置しました");
    }

    #[test]
    fn test_negated_issue_uses_sentinel() {
        let report = extract_report("エアコンの点検と清掃を実施しました。問題はありませんでした。");

        assert_eq!(report.issues, NO_ISSUES);
        assert_eq!(report.todays_work, "エアコンの点検と清掃を実施しました");
    }

    #[test]
    fn test_continuation_plan() {
        let report = extract_report("配管工事を継続中です");
        assert_eq!(report.tomorrow_plan, CONTINUATION_PLAN);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let text = "渡辺さんと駅前マンションで室内機撤去。ドレンから水漏れ。翌日は新しい室内機を取付";
        assert_eq!(extract_report(text), extract_report(text));
    }

    #[test]
    fn test_min_work_chars_is_configurable() {
        let extractor = FallbackExtractor::new().with_min_work_chars(1);
        let report = extractor.extract("片付け");
        assert_eq!(report.todays_work, "片付け");

        assert_eq!(extract_report("片付け").todays_work, NOT_RECORDED);
    }

    #[test]
    fn test_totality_on_varied_inputs() {
        let inputs = [
            "a",
            "。",
            "明日",
            "問題は",
            "今日は\n\n明日は\n",
            "トラブルは、、、",
            "12345678901234567890",
        ];
        for input in inputs {
            let report = extract_report(input);
            for (label, value) in report.fields() {
                assert!(!value.trim().is_empty(), "{} が空です: {:?}", label, input);
            }
        }
    }

    // =============================================
    // 補助関数テスト
    // =============================================

    #[test]
    fn test_cut_before() {
        assert_eq!(cut_before("配管の漏れ、明日は修理", "明日"), "配管の漏れ、");
        assert_eq!(cut_before("配管の漏れ", "明日"), "配管の漏れ");
    }

    #[test]
    fn test_trim_clause() {
        assert_eq!(trim_clause("、 配管の漏れ, "), "配管の漏れ");
        assert_eq!(trim_clause("、、"), "");
    }
}
