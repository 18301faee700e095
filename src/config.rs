use crate::error::{PdfAiError, Result};
use pdf_ai_common::config::DEFAULT_COMPLETION_DELAY_MS;
use pdf_ai_common::{ControllerConfig, DEFAULT_PROMPT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// サーバーURLを上書きする環境変数
pub const SERVER_URL_ENV: &str = "PDF_AI_SERVER_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub default_prompt: String,
    pub completion_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
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
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PdfAiError::Config("répertoire personnel introuvable".into()))?;
        Ok(home.join(".config").join("pdf-ai").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            server_url: "http://localhost:5000".into(),
            default_prompt: DEFAULT_PROMPT.into(),
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
        }
    }

    /// 環境変数を優先してサーバーURLを返す
    pub fn server_url(&self) -> String {
        self.resolve_server_url(std::env::var(SERVER_URL_ENV).ok().as_deref())
    }

    pub fn resolve_server_url(&self, env_value: Option<&str>) -> String {
        match env_value.map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => self.server_url.clone(),
        }
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        ControllerConfig::with_base_url(url.as_str()).validate()?;
        self.server_url = url;
        Ok(())
    }

    pub fn set_default_prompt(&mut self, prompt: String) -> Result<()> {
        if prompt.trim().is_empty() {
            return Err(PdfAiError::Config("le prompt par défaut est vide".into()));
        }
        self.default_prompt = prompt;
        Ok(())
    }

    /// コントローラ用の設定（優先順: 引数 > 環境変数 > 設定ファイル）
    pub fn controller_config(&self, server_override: Option<&str>) -> Result<ControllerConfig> {
        let base_url = match server_override {
            Some(url) => url.to_string(),
            None => self.server_url(),
        };
        let config = ControllerConfig {
            base_url,
            completion_delay_ms: self.completion_delay_ms,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }
}
