use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceReportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("テキストを入力してください")]
    EmptyInput,

    #[error("APIキーが設定されていません。`voice-report config --set-api-key YOUR_KEY` で設定してください")]
    MissingCredential,

    #[error("APIキーが無効です。正しいClaude APIキーを確認してください")]
    InvalidCredential,

    #[error("APIサーバーエラーです（{status}）。しばらくしてから再試行してください")]
    Server { status: u16, body: String },

    #[error("APIエラー: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("日報の構造化に失敗しました: {0}")]
    MalformedResponse(String),

    #[error("APIに接続できません: {0}")]
    TransportClassification(String),

    #[error("HTTP通信エラー: {0}")]
    Http(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] voice_report_common::Error),
}

impl VoiceReportError {
    /// 時間をおいて再試行すれば成功しうるエラーか
    pub fn is_retryable(&self) -> bool {
        matches!(self, VoiceReportError::Server { .. })
    }

    /// APIキーの再入力が必要なエラーか
    pub fn requires_new_credential(&self) -> bool {
        matches!(
            self,
            VoiceReportError::MissingCredential | VoiceReportError::InvalidCredential
        )
    }
}

pub type Result<T> = std::result::Result<T, VoiceReportError>;
