//! 設定ファイルの読み書きテスト

use pdf_ai_common::DEFAULT_PROMPT;
use pdf_ai_rust::config::Config;
use pdf_ai_rust::error::PdfAiError;
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.default_prompt, DEFAULT_PROMPT);
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pdf-ai").join("config.json");

    let mut config = Config::default();
    config.set_server_url("https://analyse.example.org".into()).unwrap();
    config.set_default_prompt("Extraire les dates".into()).unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.server_url, "https://analyse.example.org");
    assert_eq!(loaded.default_prompt, "Extraire les dates");
}

/// 古い設定ファイル（項目不足）でも読める
#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"server_url": "http://192.168.1.10:5000"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.server_url, "http://192.168.1.10:5000");
    assert_eq!(config.completion_delay_ms, 1000);
}

#[test]
fn test_broken_file_is_json_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ server_url: ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, PdfAiError::JsonParse(_)));
}
