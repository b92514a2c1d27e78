use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "voice-report")]
#[command(about = "音声メモ・テキストから空調工事の業務日報を作成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// テキストから日報を作成
    Generate {
        /// 日報にするテキスト（省略時は --file か標準入力）
        text: Option<String>,

        /// テキストファイルから読み込む
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// 出力形式 (text/json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// 作成した日報を保存
        #[arg(long)]
        save: bool,

        /// APIキー未設定でも入力を求めない
        #[arg(long)]
        no_prompt: bool,
    },

    /// 設定の表示・変更
    Config {
        /// APIキーを保存
        #[arg(long)]
        set_api_key: Option<String>,

        /// 保存済みのAPIキーを削除
        #[arg(long, conflicts_with = "set_api_key")]
        clear_api_key: bool,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 保存済みの日報
    Reports {
        /// 出力形式 (text/json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// 保存済みの日報をすべて削除
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::try_parse_from([
            "voice-report",
            "-v",
            "generate",
            "作業完了",
            "--format",
            "json",
            "--save",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Generate { text, file, format, save, no_prompt } => {
                assert_eq!(text.as_deref(), Some("作業完了"));
                assert!(file.is_none());
                assert_eq!(format, OutputFormat::Json);
                assert!(save);
                assert!(!no_prompt);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_config_conflicting_flags() {
        let result = Cli::try_parse_from([
            "voice-report",
            "config",
            "--set-api-key",
            "sk-ant",
            "--clear-api-key",
        ]);
        assert!(result.is_err());
    }
}
