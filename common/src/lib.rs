//! Voice Report Common Library
//!
//! 空調工事の音声日報を構造化するための共通型とロジック:
//! - StructuredReport: 5項目の業務日報
//! - プロンプト生成とAPIレスポンスのパース
//! - ルールベースのフォールバック抽出

pub mod types;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod extractor;
pub mod format;

pub use types::{StructuredReport, CONTINUATION_PLAN, NOT_RECORDED, NO_ISSUES};
pub use error::{Error, Result};
pub use prompts::{build_report_prompt, HVAC_EQUIPMENT_TERMS, HVAC_WORK_ACTIONS};
pub use parser::{extract_json_object, parse_report_response};
pub use extractor::{extract_report, FallbackExtractor};
pub use format::format_report_text;
