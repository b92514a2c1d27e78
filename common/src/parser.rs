//! APIレスポンスパーサー
//!
//! LLMの生成テキストから日報のJSONオブジェクトを抽出し、
//! StructuredReportへ変換する

use crate::error::{Error, Result};
use crate::types::StructuredReport;

/// 生成テキストから最初のJSONオブジェクトを抽出
///
/// 前後に説明文や ```json ブロックがあっても、括弧の対応が取れた
/// 最初の `{...}` を返す。文字列リテラル内の括弧とエスケープは無視する。
///
/// # Arguments
/// * `response` - 生成テキスト
///
/// # Returns
/// * `Ok(&str)` - 抽出されたJSON文字列
/// * `Err` - 対応の取れた `{...}` が見つからない場合
///
/// # Examples
/// ```
/// use voice_report_common::extract_json_object;
///
/// let response = "日報です: {\"site\": \"山田ビル\"} 以上";
/// let json = extract_json_object(response).unwrap();
/// assert_eq!(json, "{\"site\": \"山田ビル\"}");
/// ```
pub fn extract_json_object(response: &str) -> Result<&str> {
    let mut search_from = 0;

    while let Some(offset) = response[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_object_end(&response[start..]) {
            return Ok(&response[start..start + end]);
        }
        search_from = start + 1;
    }

    Err(Error::Parse("JSONオブジェクトが見つかりません".into()))
}

/// `{` で始まる文字列の、対応する `}` の直後のバイト位置
fn balanced_object_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// 日報レスポンスをパース
///
/// # Arguments
/// * `response` - LLMの生成テキスト
///
/// # Returns
/// * `Ok(StructuredReport)` - 空欄は既定値で補完済み
/// * `Err` - JSONが見つからないかパース失敗
pub fn parse_report_response(response: &str) -> Result<StructuredReport> {
    let json_str = extract_json_object(response)?;
    let report: StructuredReport = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("日報JSONパースエラー: {}", e)))?;
    Ok(report.with_sentinels())
}
