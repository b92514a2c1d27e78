//! APIキー（認証情報）の管理
//!
//! 構造化処理は `CredentialStore::get` だけに依存する。
//! 保存先は設定ファイル（CLI）かメモリ（テスト・組み込み）。

use crate::config::Config;
use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

/// テストモードのAPIキー
pub const TEST_CREDENTIAL: &str = "test";

/// テストモードとみなすAPIキーの接頭辞
pub const TEST_CREDENTIAL_PREFIX: &str = "test-";

/// APIキー
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// 空白のみのキーは None
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// ネットワークを使わずルールベース抽出を行うテスト用キーか
    pub fn is_test(&self) -> bool {
        self.0 == TEST_CREDENTIAL || self.0.starts_with(TEST_CREDENTIAL_PREFIX)
    }

    /// 表示用に伏せ字にしたキー
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

/// APIキーの保存先
pub trait CredentialStore {
    /// 未設定なら None
    fn get(&self) -> Option<Credential>;

    /// 上書きして即座に保存する
    fn set(&mut self, credential: Credential) -> Result<()>;
}

/// 設定ファイルに保存するストア
pub struct ConfigCredentialStore {
    config: Config,
    path: PathBuf,
    read_env: bool,
}

impl ConfigCredentialStore {
    /// 既定の設定ファイルを使う
    pub fn open() -> Result<Self> {
        Self::open_at(Config::config_path()?)
    }

    /// 指定した設定ファイルを使う
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let config = Config::load_from(&path)?;
        Ok(Self {
            config,
            path,
            read_env: true,
        })
    }

    /// 環境変数 ANTHROPIC_API_KEY を参照するか
    pub fn read_env(mut self, read_env: bool) -> Self {
        self.read_env = read_env;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 保存済みのキーを削除する
    pub fn clear(&mut self) -> Result<()> {
        self.config.api_key = None;
        self.config.save_to(&self.path)
    }
}

impl CredentialStore for ConfigCredentialStore {
    fn get(&self) -> Option<Credential> {
        let key = if self.read_env {
            self.config.api_key()
        } else {
            self.config.api_key.clone()
        };
        key.and_then(Credential::new)
    }

    fn set(&mut self, credential: Credential) -> Result<()> {
        self.config.api_key = Some(credential.expose().to_string());
        self.config.save_to(&self.path)
    }
}

/// メモリ上のストア
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credential: Option<Credential>,
}

impl MemoryCredentialStore {
    pub fn new(credential: Option<Credential>) -> Self {
        Self { credential }
    }

    pub fn with_key(key: &str) -> Self {
        Self::new(Credential::new(key))
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<Credential> {
        self.credential.clone()
    }

    fn set(&mut self, credential: Credential) -> Result<()> {
        self.credential = Some(credential);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_rejects_blank() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
        assert_eq!(Credential::new(" sk-ant-123 ").unwrap().expose(), "sk-ant-123");
    }

    #[test]
    fn test_credential_is_test() {
        assert!(Credential::new("test").unwrap().is_test());
        assert!(Credential::new("test-offline").unwrap().is_test());
        assert!(!Credential::new("testing").unwrap().is_test());
        assert!(!Credential::new("sk-ant-api03-xxxx").unwrap().is_test());
    }

    #[test]
    fn test_credential_masked() {
        let credential = Credential::new("sk-ant-api03-abcdefgh").unwrap();
        assert_eq!(credential.masked(), "sk-a...efgh");
        assert_eq!(Credential::new("short").unwrap().masked(), "*****");
    }

    #[test]
    fn test_credential_debug_hides_key() {
        let credential = Credential::new("sk-ant-api03-abcdefgh").unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("api03"));
    }

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryCredentialStore::default();
        assert!(store.get().is_none());

        store.set(Credential::new("test").unwrap()).unwrap();
        assert_eq!(store.get().unwrap().expose(), "test");
    }
}
