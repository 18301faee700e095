//! サーバーレスポンスパーサー
//!
//! `/upload` と `/process` のレスポンスを判定し、
//! 成功/失敗のタグ付き結果に変換する

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{PageResult, ProcessResult, UploadedPaths};

/// アップロード失敗時の既定メッセージ
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Erreur lors de l'upload";

/// 処理失敗時の既定メッセージ
pub const PROCESS_FALLBACK_MESSAGE: &str = "Erreur lors du traitement";

/// トランスポートが返すHTTP応答（ステータスとボディ文字列のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx かどうか
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `/upload` の判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success(UploadedPaths),
    Failure { status: u16, message: String },
}

/// `/process` の判定結果
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    Success(ProcessResult),
    Failure { status: u16, message: String },
}

impl UploadOutcome {
    pub fn into_result(self) -> Result<UploadedPaths> {
        match self {
            UploadOutcome::Success(paths) => Ok(paths),
            UploadOutcome::Failure { status, message } => Err(Error::Server { status, message }),
        }
    }
}

impl ProcessOutcome {
    pub fn into_result(self) -> Result<ProcessResult> {
        match self {
            ProcessOutcome::Success(result) => Ok(result),
            ProcessOutcome::Failure { status, message } => Err(Error::Server { status, message }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UploadResponse {
    success: Option<bool>,
    pdf_path: Option<String>,
    excel_path: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProcessResponse {
    success: Option<bool>,
    output_excel: Option<String>,
    results: Option<Vec<PageResult>>,
    error: Option<String>,
}

/// 失敗判定の共通部分
///
/// 非2xx、または `success: false` のとき失敗メッセージを返す。
/// サーバーが `error` を返さない（または空の）場合は既定メッセージ。
fn failure_message(
    reply: &HttpReply,
    success: Option<bool>,
    error: Option<String>,
    fallback: &str,
) -> Option<String> {
    if reply.is_success() && success != Some(false) {
        return None;
    }
    Some(
        error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string()),
    )
}

fn required(value: Option<String>, key: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::MalformedResponse(format!("champ `{}` manquant", key)))
}

/// `/upload` レスポンスをパース
///
/// # Returns
/// * `Ok(UploadOutcome::Success)` - 2xx かつ両パスあり（`success` 省略も成功扱い）
/// * `Ok(UploadOutcome::Failure)` - 非2xx または `success: false`
/// * `Err` - 2xx なのにJSONでない、またはパスが欠けている
pub fn parse_upload_response(reply: &HttpReply) -> Result<UploadOutcome> {
    let response: UploadResponse = match serde_json::from_str(&reply.body) {
        Ok(response) => response,
        Err(_) if !reply.is_success() => {
            return Ok(UploadOutcome::Failure {
                status: reply.status,
                message: UPLOAD_FALLBACK_MESSAGE.to_string(),
            })
        }
        Err(e) => return Err(Error::MalformedResponse(e.to_string())),
    };

    if let Some(message) =
        failure_message(reply, response.success, response.error, UPLOAD_FALLBACK_MESSAGE)
    {
        return Ok(UploadOutcome::Failure {
            status: reply.status,
            message,
        });
    }

    Ok(UploadOutcome::Success(UploadedPaths {
        document_path: required(response.pdf_path, "pdf_path")?,
        spreadsheet_path: required(response.excel_path, "excel_path")?,
    }))
}

/// `/process` レスポンスをパース
///
/// 判定ルールは `parse_upload_response` と同じ。
/// `results` が省略された場合は空のページ列として扱う。
pub fn parse_process_response(reply: &HttpReply) -> Result<ProcessOutcome> {
    let response: ProcessResponse = match serde_json::from_str(&reply.body) {
        Ok(response) => response,
        Err(_) if !reply.is_success() => {
            return Ok(ProcessOutcome::Failure {
                status: reply.status,
                message: PROCESS_FALLBACK_MESSAGE.to_string(),
            })
        }
        Err(e) => return Err(Error::MalformedResponse(e.to_string())),
    };

    if let Some(message) =
        failure_message(reply, response.success, response.error, PROCESS_FALLBACK_MESSAGE)
    {
        return Ok(ProcessOutcome::Failure {
            status: reply.status,
            message,
        });
    }

    Ok(ProcessOutcome::Success(ProcessResult {
        output_spreadsheet_path: required(response.output_excel, "output_excel")?,
        results: response.results.unwrap_or_default(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // /upload
    // =============================================

    #[test]
    fn test_upload_success_with_flag() {
        let reply = HttpReply::new(
            200,
            r#"{"success": true, "pdf_path": "uploads/a.pdf", "excel_path": "uploads/b.xlsx"}"#,
        );
        let outcome = parse_upload_response(&reply).expect("パース失敗");
        assert_eq!(
            outcome,
            UploadOutcome::Success(UploadedPaths {
                document_path: "uploads/a.pdf".to_string(),
                spreadsheet_path: "uploads/b.xlsx".to_string(),
            })
        );
    }

    #[test]
    fn test_upload_success_without_flag() {
        // サーバーは成功時に success を省略し message を返す
        let reply = HttpReply::new(
            200,
            r#"{"message": "Fichiers uploadés avec succès", "pdf_path": "uploads/a.pdf", "excel_path": "uploads/b.xlsx"}"#,
        );
        let outcome = parse_upload_response(&reply).expect("パース失敗");
        assert!(matches!(outcome, UploadOutcome::Success(_)));
    }

    #[test]
    fn test_upload_http_error_uses_server_message() {
        let reply = HttpReply::new(400, r#"{"error": "PDF et Excel requis"}"#);
        let outcome = parse_upload_response(&reply).expect("パース失敗");
        assert_eq!(
            outcome,
            UploadOutcome::Failure {
                status: 400,
                message: "PDF et Excel requis".to_string(),
            }
        );
    }

    #[test]
    fn test_upload_success_false_without_error_uses_fallback() {
        let reply = HttpReply::new(200, r#"{"success": false}"#);
        let outcome = parse_upload_response(&reply).expect("パース失敗");
        assert_eq!(
            outcome,
            UploadOutcome::Failure {
                status: 200,
                message: UPLOAD_FALLBACK_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn test_upload_html_error_page_uses_fallback() {
        let reply = HttpReply::new(413, "<html>Request Entity Too Large</html>");
        let outcome = parse_upload_response(&reply).expect("パース失敗");
        assert!(matches!(
            outcome,
            UploadOutcome::Failure { status: 413, ref message } if message == UPLOAD_FALLBACK_MESSAGE
        ));
    }

    #[test]
    fn test_upload_success_missing_path_is_malformed() {
        let reply = HttpReply::new(200, r#"{"pdf_path": "uploads/a.pdf"}"#);
        let err = parse_upload_response(&reply).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
        assert!(err.to_string().contains("excel_path"));
    }

    #[test]
    fn test_upload_success_not_json_is_malformed() {
        let reply = HttpReply::new(200, "OK");
        assert!(matches!(
            parse_upload_response(&reply),
            Err(Error::MalformedResponse(_))
        ));
    }

    // =============================================
    // /process
    // =============================================

    #[test]
    fn test_process_success_keeps_order() {
        let reply = HttpReply::new(
            200,
            r#"{
                "message": "Traitement terminé avec succès",
                "output_excel": "output/resultat_traite.xlsx",
                "results": [
                    {"page": 1, "image_path": "images/p1.png", "ai_result": {"success": true, "content": {}}},
                    {"page": 2, "image_path": "images/p2.png", "ai_result": {"success": false, "error": "quota"}}
                ]
            }"#,
        );
        let result = parse_process_response(&reply)
            .expect("パース失敗")
            .into_result()
            .expect("失敗判定");
        assert_eq!(result.output_spreadsheet_path, "output/resultat_traite.xlsx");
        let pages: Vec<u32> = result.results.iter().map(|p| p.page_number).collect();
        assert_eq!(pages, vec![1, 2]);
        assert!(result.results[1].ai_result.is_failure());
    }

    #[test]
    fn test_process_server_error() {
        let reply = HttpReply::new(500, r#"{"error": "Chemins des fichiers manquants"}"#);
        let err = parse_process_response(&reply)
            .expect("パース失敗")
            .into_result()
            .unwrap_err();
        assert!(matches!(err, Error::Server { status: 500, .. }));
        assert_eq!(err.to_string(), "Chemins des fichiers manquants");
    }

    #[test]
    fn test_process_blank_error_uses_fallback() {
        let reply = HttpReply::new(500, r#"{"error": ""}"#);
        let outcome = parse_process_response(&reply).expect("パース失敗");
        assert_eq!(
            outcome,
            ProcessOutcome::Failure {
                status: 500,
                message: PROCESS_FALLBACK_MESSAGE.to_string(),
            }
        );
    }

    #[test]
    fn test_process_missing_results_is_empty() {
        let reply = HttpReply::new(200, r#"{"success": true, "output_excel": "output/r.xlsx"}"#);
        let result = parse_process_response(&reply)
            .expect("パース失敗")
            .into_result()
            .expect("失敗判定");
        assert!(result.results.is_empty());
    }
}
