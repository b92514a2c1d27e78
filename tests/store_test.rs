//! 日報保存テスト
//!
//! 保存済み日報ファイルの読み書きを検証

use voice_report_common::StructuredReport;
use voice_report_rust::store::ReportStore;
use tempfile::tempdir;

fn sample_report(site: &str) -> StructuredReport {
    StructuredReport {
        site: site.to_string(),
        staff: "田中".to_string(),
        todays_work: "室外機設置".to_string(),
        issues: "特になし".to_string(),
        tomorrow_plan: "室内機取付".to_string(),
    }
}

/// ファイルがなければ空
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ReportStore::load(&dir.path().join("reports.json"));

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

/// 保存と読み込み（親フォルダも作成）
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("reports.json");

    let mut store = ReportStore::load(&path);
    store.push(sample_report("山田ビル"));
    store.push(sample_report("佐藤邸"));
    store.save(&path).expect("保存失敗");

    let loaded = ReportStore::load(&path);
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.reports()[0].report.site, "山田ビル");
    assert_eq!(loaded.reports()[1].report.site, "佐藤邸");
    assert_eq!(loaded.reports()[1].report, sample_report("佐藤邸"));
}

/// ファイル形式（camelCase・日報の項目は平坦化）
#[test]
fn test_saved_file_layout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reports.json");

    let mut store = ReportStore::default();
    store.push(sample_report("山田ビル"));
    store.save(&path).expect("保存失敗");

    let content = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["reports"][0]["site"], "山田ビル");
    assert_eq!(json["reports"][0]["todaysWork"], "室外機設置");
    assert!(json["reports"][0]["savedAt"].is_string());
}

/// 壊れたファイルは空として扱う
#[test]
fn test_load_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reports.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(ReportStore::load(&path).is_empty());
}

/// バージョン不一致は空として扱う
#[test]
fn test_load_version_mismatch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reports.json");
    std::fs::write(&path, r#"{"version": 99, "reports": []}"#).unwrap();

    assert!(ReportStore::load(&path).is_empty());
}

/// 削除
#[test]
fn test_clear() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reports.json");

    assert!(!ReportStore::clear(&path).unwrap());

    let mut store = ReportStore::default();
    store.push(sample_report("山田ビル"));
    store.save(&path).unwrap();

    assert!(ReportStore::clear(&path).unwrap());
    assert!(!path.exists());
    assert!(ReportStore::load(&path).is_empty());
}
