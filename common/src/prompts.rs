//! プロンプト生成モジュール
//!
//! LLMに業務日報の構造化を依頼するプロンプト:
//! - HVAC_EQUIPMENT_TERMS / HVAC_WORK_ACTIONS: 空調工事の専門用語
//! - build_report_prompt: 5項目の振り分けルールと記入例を含むプロンプト

use crate::types::{CONTINUATION_PLAN, NOT_RECORDED, NO_ISSUES};

/// 空調設備・部材の専門用語
pub const HVAC_EQUIPMENT_TERMS: &[&str] = &[
    "エアコン",
    "室外機",
    "室内機",
    "ダクト",
    "配管",
    "冷媒",
    "コンプレッサー",
    "ドレンホース",
    "断熱材",
    "電気配線",
    "架台",
    "ブラケット",
];

/// 空調工事の作業区分
pub const HVAC_WORK_ACTIONS: &[&str] = &[
    "取付",
    "撤去",
    "点検",
    "清掃",
    "修理",
    "試運転",
    "配管接続",
    "電気配線",
];

/// 業務日報構造化プロンプト生成
///
/// # Arguments
/// * `text` - 音声認識または手入力のテキスト
///
/// # Returns
/// JSONのみを出力させるプロンプト文字列
pub fn build_report_prompt(text: &str) -> String {
    let equipment = HVAC_EQUIPMENT_TERMS.join("、");
    let actions = HVAC_WORK_ACTIONS.join("、");

    format!(
        r#"以下の音声テキストを空調工事の業務日報として構造化してください。

## 専門用語
空調工事の専門用語（{equipment}等）を正確に認識し、
作業内容（{actions}等）を適切に分類してください。

## 項目ごとのルール
### site（工事現場名）
- 「〇〇ビル」「〇〇現場」「〇〇マンション」「〇〇店舗」「〇〇工場」などの現場名を抜き出す
- 現場名が語られていなければ"{NOT_RECORDED}"

### staff（担当者）
- 人名（「〇〇さん」「〇〇氏」を含む）を抜き出す
- 複数いる場合は「、」で区切る
- 現場名に含まれる人名（例: 山田ビルの「山田」）は担当者にしない
- 担当者が語られていなければ"{NOT_RECORDED}"

### todaysWork（本日の業務）
- 今日実施した作業を簡潔にまとめる
- issues と tomorrowPlan に書いた内容は含めない
- 作業内容が語られていなければ"{NOT_RECORDED}"

### issues（問題点・懸念事項）
- 不具合、故障、漏れ、異音、トラブル、心配事などを抜き出す
- 「問題はありません」のように問題がないと語られた場合も含め、問題点がなければ"{NO_ISSUES}"

### tomorrowPlan（明日の予定業務）
- 明日・次回・翌日に予定している作業を抜き出す
- 今日の作業は含めない
- 「続きを行う」とだけ語られた場合は"{CONTINUATION_PLAN}"
- 予定が語られていなければ"{NOT_RECORDED}"

## 記入例
入力：
今日は山田ビルで田中さんと室外機の設置と配管接続を行いました。ドレンホースから少し水漏れがありました。明日は室内機の取付と試運転を予定しています。

出力：
{{
  "site": "山田ビル",
  "staff": "田中さん",
  "todaysWork": "室外機の設置と配管接続",
  "issues": "ドレンホースから少し水漏れがあった",
  "tomorrowPlan": "室内機の取付と試運転"
}}

## 音声テキスト
{text}

## 出力形式
以下のJSON形式で出力してください：
{{
  "site": "工事現場名",
  "staff": "担当者名",
  "todaysWork": "本日の業務内容",
  "issues": "問題点・懸念事項",
  "tomorrowPlan": "明日の予定業務"
}}

## 注意
- 明確な情報がない項目は"{NOT_RECORDED}"としてください
- 問題点がない場合は"{NO_ISSUES}"としてください
- 必ずJSON形式のみを出力してください。説明文は不要です"#
    )
}
