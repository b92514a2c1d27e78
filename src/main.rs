use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use voice_report_common::format_report_text;
use voice_report_rust::{api_key_prompt, cli, config, credential, error, store, structuring};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use credential::{ConfigCredentialStore, Credential, CredentialStore};
use error::{Result, VoiceReportError};
use store::ReportStore;
use structuring::ReportStructurer;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        if e.is_retryable() {
            eprintln!("   しばらくしてから再度お試しください");
        } else if matches!(e, VoiceReportError::InvalidCredential) {
            eprintln!("   `voice-report config --set-api-key YOUR_KEY` でAPIキーを設定してください");
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate { text, file, format, save, no_prompt } => {
            let text = read_input(text, file)?;

            let mut credentials = ConfigCredentialStore::open()?;
            if !no_prompt {
                api_key_prompt::ensure_credential(&mut credentials)?;
            }

            let structurer = ReportStructurer::from_config(credentials.config());

            let spinner = create_spinner("日報を作成中...");
            let outcome = structurer.generate(&text, &credentials).await;
            spinner.finish_and_clear();
            let outcome = outcome?;

            match format {
                OutputFormat::Text => {
                    let date = chrono::Local::now().format("%Y/%m/%d").to_string();
                    println!("{}", format_report_text(&outcome.report, &date));
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&outcome.report)?);
                }
            }

            let mark = if outcome.source.is_fallback() { "⚠" } else { "✔" };
            eprintln!("{} {}で作成しました", mark, outcome.source);

            if save {
                let path = credentials.config().reports_file()?;
                let mut reports = ReportStore::load(&path);
                reports.push(outcome.report);
                reports.save(&path)?;
                eprintln!("✔ 日報を保存: {} ({}件)", path.display(), reports.len());
            }
        }

        Commands::Config { set_api_key, clear_api_key, show } => {
            let mut credentials = ConfigCredentialStore::open()?;

            if let Some(key) = set_api_key {
                let credential = Credential::new(key).ok_or(VoiceReportError::MissingCredential)?;
                credentials.set(credential)?;
                println!("✔ APIキーを保存しました");
            }

            if clear_api_key {
                credentials.clear()?;
                println!("✔ APIキーを削除しました");
            }

            if show {
                show_config(&credentials)?;
            }
        }

        Commands::Reports { format, clear } => {
            let path = Config::load()?.reports_file()?;

            if clear {
                if ReportStore::clear(&path)? {
                    println!("✔ 保存済みの日報を削除しました");
                } else {
                    println!("保存済みの日報はありません");
                }
                return Ok(());
            }

            let reports = ReportStore::load(&path);
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(reports.reports())?);
                }
                OutputFormat::Text => {
                    if reports.is_empty() {
                        println!("保存済みの日報はありません");
                    }
                    for saved in reports.reports() {
                        let date = saved_date(&saved.saved_at);
                        println!("{}\n", format_report_text(&saved.report, &date));
                    }
                }
            }
        }
    }

    Ok(())
}

/// 引数・ファイル・標準入力の順でテキストを取得
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    let raw = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(VoiceReportError::EmptyInput);
    }
    Ok(trimmed.to_string())
}

fn show_config(credentials: &ConfigCredentialStore) -> Result<()> {
    let config = credentials.config();
    println!("設定ファイル: {}", Config::config_path()?.display());
    println!("モデル: {}", config.model);
    println!("エンドポイント: {}", config.api_endpoint);
    println!("APIバージョン: {}", config.api_version);
    println!("最大トークン: {}", config.max_tokens);
    println!("日報保存先: {}", config.reports_file()?.display());
    match credentials.get() {
        Some(credential) if credential.is_test() => {
            println!("APIキー: {} (テストモード)", credential.masked())
        }
        Some(credential) => println!("APIキー: {}", credential.masked()),
        None => println!("APIキー: 未設定"),
    }
    Ok(())
}

/// 保存日時（RFC 3339）を表示用の日付にする
fn saved_date(saved_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(saved_at)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%Y/%m/%d").to_string())
        .unwrap_or_else(|_| saved_at.to_string())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
