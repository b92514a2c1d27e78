//! 業務日報の型定義
//!
//! CLIとAPIクライアントで共有される型:
//! - StructuredReport: 5項目の構造化日報（LLM・ルールベース共通の出力）

use serde::{Deserialize, Deserializer, Serialize};

/// 情報がない項目の既定値（現場名・担当者・本日の業務・明日の予定）
pub const NOT_RECORDED: &str = "未記載";

/// 問題点がない場合の既定値
pub const NO_ISSUES: &str = "特になし";

/// 明日の予定が「続き」「継続」としか語られていない場合の定型文
pub const CONTINUATION_PLAN: &str = "本日の作業の続きを実施予定";

/// 構造化された業務日報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReport {
    /// 工事現場名
    #[serde(default, deserialize_with = "flexible_text")]
    pub site: String,

    /// 担当者名（複数なら「、」区切り）
    #[serde(default, deserialize_with = "flexible_text")]
    pub staff: String,

    /// 本日の業務内容
    #[serde(default, deserialize_with = "flexible_text")]
    pub todays_work: String,

    /// 問題点・懸念事項
    #[serde(default, deserialize_with = "flexible_text")]
    pub issues: String,

    /// 明日の予定業務
    #[serde(default, deserialize_with = "flexible_text")]
    pub tomorrow_plan: String,
}

impl Default for StructuredReport {
    fn default() -> Self {
        Self {
            site: NOT_RECORDED.into(),
            staff: NOT_RECORDED.into(),
            todays_work: NOT_RECORDED.into(),
            issues: NO_ISSUES.into(),
            tomorrow_plan: NOT_RECORDED.into(),
        }
    }
}

impl StructuredReport {
    /// 空欄の項目を既定値で埋める
    pub fn with_sentinels(self) -> Self {
        Self {
            site: or_sentinel(self.site, NOT_RECORDED),
            staff: or_sentinel(self.staff, NOT_RECORDED),
            todays_work: or_sentinel(self.todays_work, NOT_RECORDED),
            issues: or_sentinel(self.issues, NO_ISSUES),
            tomorrow_plan: or_sentinel(self.tomorrow_plan, NOT_RECORDED),
        }
    }

    /// (項目名, 値) の一覧
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("工事現場名", self.site.as_str()),
            ("担当者", self.staff.as_str()),
            ("本日の業務", self.todays_work.as_str()),
            ("問題点・懸念", self.issues.as_str()),
            ("明日の予定業務", self.tomorrow_plan.as_str()),
        ]
    }
}

fn or_sentinel(value: String, sentinel: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        sentinel.to_string()
    } else if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

/// LLM出力の揺れを吸収する（null・配列・数値を文字列へ）
fn flexible_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(value_to_text).unwrap_or_default())
}

fn value_to_text(value: serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Array(items) => items
            .into_iter()
            .map(value_to_text)
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join("、"),
        other => other.to_string(),
    }
}
