//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// ジョブ単位のエラーはすべてここに集約される。
/// ページ単位のAI解析失敗はエラーではなく `AiResult` として表示される。
#[derive(Error, Debug)]
pub enum Error {
    /// クライアント側の入力チェックエラー（ファイル未選択・拡張子不正・プロンプト未入力）
    #[error("{0}")]
    Validation(String),

    /// 通信エラー（リクエスト拒否・ボディ読込失敗）
    #[error("{0}")]
    Transport(String),

    /// サーバーレスポンスが想定外の形式
    #[error("Réponse invalide du serveur: {0}")]
    MalformedResponse(String),

    /// サーバーが失敗を返した（非2xx または success: false）
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 通知に表示するメッセージ
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_server_is_message_only() {
        let error = Error::Server {
            status: 400,
            message: "PDF et Excel requis".to_string(),
        };
        assert_eq!(error.to_string(), "PDF et Excel requis");
    }

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation("Veuillez saisir un prompt d'analyse.".to_string());
        assert_eq!(error.user_message(), "Veuillez saisir un prompt d'analyse.");
    }

    #[test]
    fn test_error_display_malformed() {
        let error = Error::MalformedResponse("pdf_path manquant".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Réponse invalide"));
        assert!(display.contains("pdf_path"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("base_url invalide".to_string());
        assert_eq!(format!("{}", error), "Config error: base_url invalide");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
