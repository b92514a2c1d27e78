use crate::error::{Result, VoiceReportError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーを上書きする環境変数
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

const REPORTS_FILE_NAME: &str = "reports.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub api_endpoint: String,
    pub api_version: String,
    /// 保存した日報の置き場所（省略時は設定ファイルと同じフォルダ）
    pub reports_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "claude-3-haiku-20240307".into(),
            max_tokens: 1000,
            api_endpoint: "https://api.anthropic.com/v1/messages".into(),
            api_version: "2023-06-01".into(),
            reports_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VoiceReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("voice-report"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 日報保存ファイルのパス
    pub fn reports_file(&self) -> Result<PathBuf> {
        match &self.reports_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(REPORTS_FILE_NAME)),
        }
    }

    /// 保存済みのAPIキー（環境変数を優先）
    pub fn api_key(&self) -> Option<String> {
        // 環境変数を優先
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }

        self.api_key.clone().filter(|k| !k.trim().is_empty())
    }
}
