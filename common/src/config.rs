//! コントローラ設定

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::endpoints::Endpoints;
use crate::error::{Error, Result};

/// 完了表示から結果表示までの待ち時間の既定値
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 1000;
/// 通知の自動消去までの既定値
pub const DEFAULT_ALERT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// サーバーのベースURL（空なら同一オリジン）
    pub base_url: String,
    pub completion_delay_ms: u64,
    pub alert_timeout_ms: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
            alert_timeout_ms: DEFAULT_ALERT_TIMEOUT_MS,
        }
    }
}

impl ControllerConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// JSON文字列から読み込み（欠けた項目は既定値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ControllerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if !base.is_empty()
            && !base.starts_with("http://")
            && !base.starts_with("https://")
            && !base.starts_with('/')
        {
            return Err(Error::Config(format!(
                "base_url doit commencer par http://, https:// ou /: {}",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.base_url.trim())
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_millis(self.alert_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.completion_delay(), Duration::from_secs(1));
        assert_eq!(config.alert_timeout(), Duration::from_secs(5));
        assert_eq!(config.endpoints().upload(), "/upload");
    }

    #[test]
    fn test_from_json_partial() {
        let config = ControllerConfig::from_json(r#"{"completion_delay_ms": 0}"#)
            .expect("読込失敗");
        assert_eq!(config.completion_delay_ms, 0);
        assert_eq!(config.alert_timeout_ms, DEFAULT_ALERT_TIMEOUT_MS);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ControllerConfig::from_json(r#"{"base_url": "ftp://srv"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let config = ControllerConfig::with_base_url("http://localhost:5000");
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoints().process(), "http://localhost:5000/process");
    }
}
