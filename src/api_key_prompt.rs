//! APIキー入力プロンプト

use crate::credential::{Credential, CredentialStore};
use crate::error::{Result, VoiceReportError};
use dialoguer::Password;
use std::io::Write;

const KEY_NOTICE: &str = "Claude APIキーを入力してください（オフライン確認用には \"test\"）";

/// ストアにキーがなければ対話的に入力させて保存する
///
/// 空の入力は `MissingCredential`。
pub fn ensure_credential(store: &mut dyn CredentialStore) -> Result<Credential> {
    if let Some(credential) = store.get() {
        return Ok(credential);
    }

    // 標準出力は日報（JSON）専用
    write_notice(&mut std::io::stderr())?;
    let input: String = Password::new()
        .with_prompt("APIキー")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| VoiceReportError::Config(e.to_string()))?;

    store_entered_key(store, &input)
}

fn write_notice(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", KEY_NOTICE)?;
    Ok(())
}

/// 入力されたキーを検証して保存
pub fn store_entered_key(store: &mut dyn CredentialStore, input: &str) -> Result<Credential> {
    let credential = Credential::new(input).ok_or(VoiceReportError::MissingCredential)?;
    store.set(credential.clone())?;
    Ok(credential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::MemoryCredentialStore;

    #[test]
    fn test_store_entered_key_persists() {
        let mut store = MemoryCredentialStore::default();
        let credential = store_entered_key(&mut store, "  sk-ant-api03-xyz  ").unwrap();
        assert_eq!(credential.expose(), "sk-ant-api03-xyz");
        assert_eq!(store.get().unwrap().expose(), "sk-ant-api03-xyz");
    }

    #[test]
    fn test_store_entered_key_blank_is_missing() {
        let mut store = MemoryCredentialStore::default();
        let result = store_entered_key(&mut store, "   ");
        assert!(matches!(result, Err(VoiceReportError::MissingCredential)));
        assert!(store.get().is_none());
    }

    #[test]
    fn test_ensure_credential_uses_stored_key() {
        let mut store = MemoryCredentialStore::with_key("test");
        let credential = ensure_credential(&mut store).unwrap();
        assert!(credential.is_test());
    }

    #[test]
    fn test_write_notice() {
        let mut out = Vec::new();
        write_notice(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("APIキーを入力してください"));
        assert!(text.ends_with('\n'));
    }
}
