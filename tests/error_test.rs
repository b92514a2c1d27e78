//! エラーケーステスト
//!
//! エラーの表示と分類を検証

use voice_report_rust::error::VoiceReportError;

/// VoiceReportErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        VoiceReportError::Config("テスト設定エラー".to_string()),
        VoiceReportError::EmptyInput,
        VoiceReportError::MissingCredential,
        VoiceReportError::InvalidCredential,
        VoiceReportError::Server { status: 500, body: "internal".to_string() },
        VoiceReportError::Api { status: 429, body: "rate limited".to_string() },
        VoiceReportError::MalformedResponse("JSONなし".to_string()),
        VoiceReportError::TransportClassification("connection refused".to_string()),
        VoiceReportError::Http("body decode".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }
}

/// キー未設定のメッセージに設定方法を含める
#[test]
fn test_missing_credential_message() {
    let display = VoiceReportError::MissingCredential.to_string();
    assert!(display.contains("--set-api-key"));
}

/// 再試行・再入力の分類
#[test]
fn test_error_classification() {
    assert!(VoiceReportError::Server { status: 502, body: String::new() }.is_retryable());
    assert!(!VoiceReportError::Api { status: 400, body: String::new() }.is_retryable());
    assert!(!VoiceReportError::InvalidCredential.is_retryable());

    assert!(VoiceReportError::MissingCredential.requires_new_credential());
    assert!(VoiceReportError::InvalidCredential.requires_new_credential());
    assert!(!VoiceReportError::EmptyInput.requires_new_credential());
}

/// 共通ライブラリのエラーはそのまま表示
#[test]
fn test_common_error_transparent() {
    let inner = voice_report_common::Error::Parse("JSONオブジェクトが見つかりません".into());
    let err: VoiceReportError = inner.into();
    assert_eq!(err.to_string(), "Parse error: JSONオブジェクトが見つかりません");
}

/// IOエラーの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: VoiceReportError = io_err.into();
    assert!(matches!(err, VoiceReportError::Io(_)));
}
