//! 日報の構造化
//!
//! APIキーの内容と送信失敗の分類から、Claude API とルールベース抽出の
//! どちらを使うかを決める。

pub mod claude_api;
pub mod transport;
pub mod types;

pub use claude_api::{ClaudeClient, ClientSettings};
pub use transport::{HttpTransport, Transport, TransportFailure, TransportRequest, TransportResponse};

use crate::config::Config;
use crate::credential::{Credential, CredentialStore};
use crate::error::{Result, VoiceReportError};
use std::fmt;
use tracing::{debug, info, warn};
use voice_report_common::{FallbackExtractor, StructuredReport};

/// 日報をどの経路で作ったか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    /// Claude API
    Llm,
    /// テスト用キーによるルールベース抽出
    TestMode,
    /// 接続できなかったためのルールベース抽出
    ConnectivityFallback,
}

impl ReportSource {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, ReportSource::Llm)
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportSource::Llm => "Claude API",
            ReportSource::TestMode => "テストモード（ルールベース抽出）",
            ReportSource::ConnectivityFallback => "オフライン（ルールベース抽出）",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredOutcome {
    pub report: StructuredReport,
    pub source: ReportSource,
}

/// 構造化の入口
pub struct ReportStructurer<T: Transport> {
    client: ClaudeClient<T>,
    extractor: FallbackExtractor,
}

impl ReportStructurer<HttpTransport> {
    /// 設定ファイルの値で reqwest クライアントを組み立てる
    pub fn from_config(config: &Config) -> Self {
        Self::new(ClaudeClient::new(HttpTransport::new(), ClientSettings::from(config)))
    }
}

impl<T: Transport> ReportStructurer<T> {
    pub fn new(client: ClaudeClient<T>) -> Self {
        Self {
            client,
            extractor: FallbackExtractor::default(),
        }
    }

    pub fn with_extractor(mut self, extractor: FallbackExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub async fn structure_report(
        &self,
        text: &str,
        credential: Option<&Credential>,
    ) -> Result<StructuredReport> {
        self.structure_report_detailed(text, credential)
            .await
            .map(|outcome| outcome.report)
    }

    pub async fn structure_report_detailed(
        &self,
        text: &str,
        credential: Option<&Credential>,
    ) -> Result<StructuredOutcome> {
        let credential = credential.ok_or(VoiceReportError::MissingCredential)?;

        if credential.is_test() {
            debug!("テスト用キーのためルールベース抽出を使用");
            return Ok(self.fallback(text, ReportSource::TestMode));
        }

        match self.client.request(text, credential).await {
            Ok(report) => {
                info!(site = %report.site, "Claude APIで日報を構造化");
                Ok(StructuredOutcome {
                    report,
                    source: ReportSource::Llm,
                })
            }
            Err(VoiceReportError::TransportClassification(reason)) => {
                warn!(%reason, "APIに接続できないためルールベース抽出に切り替え");
                Ok(self.fallback(text, ReportSource::ConnectivityFallback))
            }
            Err(e) => Err(e),
        }
    }

    /// ストアの現在のキーで構造化する
    pub async fn generate(
        &self,
        text: &str,
        store: &dyn CredentialStore,
    ) -> Result<StructuredOutcome> {
        if text.trim().is_empty() {
            return Err(VoiceReportError::EmptyInput);
        }
        let credential = store.get();
        self.structure_report_detailed(text, credential.as_ref()).await
    }

    fn fallback(&self, text: &str, source: ReportSource) -> StructuredOutcome {
        StructuredOutcome {
            report: self.extractor.extract(text),
            source,
        }
    }
}
