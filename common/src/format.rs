//! 日報のテキスト整形

use crate::types::StructuredReport;

/// 日報をコピー・共有用のテキストに整形
///
/// # Arguments
/// * `report` - 構造化済みの日報
/// * `date` - 表示する日付（例: "2025/01/18"）
pub fn format_report_text(report: &StructuredReport, date: &str) -> String {
    format!(
        "【業務日報】
日付：{date}

工事現場名：{site}
担当者：{staff}

本日の業務：
{todays_work}

問題点・懸念：
{issues}

明日の予定業務：
{tomorrow_plan}",
        date = date,
        site = report.site,
        staff = report.staff,
        todays_work = report.todays_work,
        issues = report.issues,
        tomorrow_plan = report.tomorrow_plan,
    )
}
