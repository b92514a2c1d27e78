//! 保存済み日報モジュール
//!
//! 生成した日報を保存日時つきでJSONファイルに追記する。

use crate::error::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::warn;
use voice_report_common::StructuredReport;

/// 保存した日報1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedReport {
    /// 保存日時（RFC 3339）
    pub saved_at: String,
    #[serde(flatten)]
    pub report: StructuredReport,
}

impl SavedReport {
    /// 現在時刻で保存する
    pub fn now(report: StructuredReport) -> Self {
        Self {
            saved_at: Utc::now().to_rfc3339(),
            report,
        }
    }
}

/// 日報ファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStore {
    /// バージョン（互換性チェック用）
    version: u32,
    reports: Vec<SavedReport>,
}

impl ReportStore {
    const CURRENT_VERSION: u32 = 1;

    /// 日報ファイルを読み込み
    ///
    /// ファイルがない・壊れている・バージョン不一致の場合は空で返す
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "日報ファイルを開けません");
                return Self::default();
            }
        };

        match serde_json::from_reader::<_, ReportStore>(BufReader::new(file)) {
            Ok(store) if store.version == Self::CURRENT_VERSION => store,
            Ok(store) => {
                warn!(version = store.version, "日報ファイルのバージョン不一致、新規作成します");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "日報ファイルを読み込めません");
                Self::default()
            }
        }
    }

    /// 日報ファイルを保存
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// 日報を追加（保存日時は現在時刻）
    pub fn push(&mut self, report: StructuredReport) -> &SavedReport {
        self.reports.push(SavedReport::now(report));
        &self.reports[self.reports.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// 古い順
    pub fn reports(&self) -> &[SavedReport] {
        &self.reports
    }

    /// 日報ファイルを削除。削除したら true
    pub fn clear(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;
        Ok(true)
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            reports: Vec::new(),
        }
    }
}
