//! HTTP送信の境界
//!
//! 送信失敗はここで分類し、上位は TransportFailure の種類だけを見て
//! フォールバックするかどうかを決める。

use async_trait::async_trait;
use thiserror::Error;

/// 送信するリクエスト
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: serde_json::Value,
}

/// 受信したレスポンス（ステータスに関わらず本文を読む）
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 送信失敗の分類
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// 接続できない（DNS・接続拒否・タイムアウト）
    #[error("接続できません: {0}")]
    Connectivity(String),

    /// その他の送受信エラー
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// JSONをPOSTして1往復だけ待つ
    async fn post_json(
        &self,
        request: &TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportFailure>;
}

/// reqwest による実装（タイムアウト・リトライなし）
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        request: &TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportFailure> {
        let mut builder = self.client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await.map_err(|e| classify_reqwest_error(&e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        Ok(TransportResponse { status, body })
    }
}

/// reqwest のエラーを分類
pub fn classify_reqwest_error(error: &reqwest::Error) -> TransportFailure {
    if error.is_connect() || error.is_timeout() {
        TransportFailure::Connectivity(error.to_string())
    } else {
        TransportFailure::Other(error.to_string())
    }
}
