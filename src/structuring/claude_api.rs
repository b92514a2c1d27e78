//! Claude API連携モジュール
//!
//! 1回のPOSTで日報を構造化する:
//! - プロンプト生成: voice_report_common::build_report_prompt
//! - レスポンス: content[0].text から最初のJSONオブジェクトを抽出
//!
//! リトライ・ストリーミングは行わない。

use super::transport::{Transport, TransportFailure, TransportRequest, TransportResponse};
use super::types::{Message, MessagesRequest, MessagesResponse};
use crate::config::Config;
use crate::credential::Credential;
use crate::error::{Result, VoiceReportError};
use std::time::Instant;
use tracing::{debug, warn};
use voice_report_common::{build_report_prompt, parse_report_response, StructuredReport};

/// API呼び出しの設定
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub api_version: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ClientSettings {
    fn from(config: &Config) -> Self {
        Self {
            endpoint: config.api_endpoint.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            api_version: config.api_version.clone(),
        }
    }
}

/// Claude Messages API クライアント
pub struct ClaudeClient<T: Transport> {
    transport: T,
    settings: ClientSettings,
}

impl<T: Transport> ClaudeClient<T> {
    pub fn new(transport: T, settings: ClientSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// テキストを日報に構造化する
    ///
    /// 接続できない場合は `TransportClassification` を返す（呼び出し側でフォールバック）。
    pub async fn request(&self, text: &str, credential: &Credential) -> Result<StructuredReport> {
        let request = self.build_request(text, credential)?;
        let start = Instant::now();

        debug!(
            model = %self.settings.model,
            prompt_chars = text.chars().count(),
            "Claude APIに送信中"
        );

        let response = self.transport.post_json(&request).await.map_err(|failure| {
            warn!(error = %failure, "Claude APIへの送信に失敗");
            match failure {
                TransportFailure::Connectivity(msg) => VoiceReportError::TransportClassification(msg),
                TransportFailure::Other(msg) => VoiceReportError::Http(msg),
            }
        })?;

        debug!(
            status = response.status,
            duration_ms = start.elapsed().as_millis() as u64,
            "Claude APIレスポンス受信"
        );

        if !response.is_success() {
            warn!(status = response.status, body = %response.body, "Claude APIエラーレスポンス");
            return Err(classify_status(response));
        }

        parse_messages_body(&response.body)
    }

    fn build_request(&self, text: &str, credential: &Credential) -> Result<TransportRequest> {
        let body = MessagesRequest {
            model: self.settings.model.clone(),
            max_tokens: self.settings.max_tokens,
            messages: vec![Message::user(build_report_prompt(text))],
        };

        Ok(TransportRequest {
            url: self.settings.endpoint.clone(),
            headers: vec![
                ("x-api-key", credential.expose().to_string()),
                ("anthropic-version", self.settings.api_version.clone()),
            ],
            body: serde_json::to_value(&body)?,
        })
    }
}

/// 失敗ステータスをエラーに分類
pub fn classify_status(response: TransportResponse) -> VoiceReportError {
    match response.status {
        401 | 403 => VoiceReportError::InvalidCredential,
        status if status >= 500 => VoiceReportError::Server {
            status,
            body: response.body,
        },
        status => VoiceReportError::Api {
            status,
            body: response.body,
        },
    }
}

/// 成功レスポンスの本文から日報を取り出す
pub fn parse_messages_body(body: &str) -> Result<StructuredReport> {
    let envelope: MessagesResponse = serde_json::from_str(body).map_err(|e| {
        VoiceReportError::MalformedResponse(format!("レスポンスを解析できません: {}", e))
    })?;

    let content = envelope
        .content
        .first()
        .map(|block| block.text.as_str())
        .ok_or_else(|| VoiceReportError::MalformedResponse("生成テキストがありません".into()))?;

    debug!(content_chars = content.chars().count(), "生成テキストを解析");

    parse_report_response(content).map_err(|e| VoiceReportError::MalformedResponse(e.to_string()))
}
