//! reqwestによるサーバー通信

use async_trait::async_trait;
use pdf_ai_common::{
    classify_dropped, Error as CommonError, FileHandle, FileSlot, HttpReply, ProcessRequest, Transport,
};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::{Path, PathBuf};

use crate::error::{PdfAiError, Result};

/// ローカルファイル（パスから名前とMIMEを引く）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub path: PathBuf,
}

impl LocalFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PdfAiError::FileNotFound(path.display().to_string()));
        }
        Ok(Self { path: path.to_path_buf() })
    }

    /// ドロップ扱いで入る枠（どちらにも該当しなければ None）
    pub fn drop_slot(&self) -> Option<FileSlot> {
        classify_dropped(&self.name(), &self.mime_type())
    }
}

impl FileHandle for LocalFile {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    fn mime_type(&self) -> String {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => "application/pdf",
            "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "xls" => "application/vnd.ms-excel",
            _ => "application/octet-stream",
        }
        .to_string()
    }
}

fn transport_error(err: reqwest::Error) -> CommonError {
    CommonError::Transport(err.to_string())
}

async fn file_part(file: &LocalFile) -> pdf_ai_common::Result<Part> {
    let bytes = tokio::fs::read(&file.path).await?;
    Part::bytes(bytes)
        .file_name(file.name())
        .mime_str(&file.mime_type())
        .map_err(transport_error)
}

async fn into_reply(response: reqwest::Response) -> pdf_ai_common::Result<HttpReply> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;
    tracing::debug!(status, bytes = body.len(), "server reply");
    Ok(HttpReply::new(status, body))
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成ファイルを取得して保存し、書き込んだバイト数を返す
    pub async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PdfAiError::Download {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(dest, &bytes).await?;
        Ok(bytes.len() as u64)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    type File = LocalFile;

    async fn upload(
        &self,
        url: &str,
        document: &LocalFile,
        spreadsheet: &LocalFile,
    ) -> pdf_ai_common::Result<HttpReply> {
        let form = Form::new()
            .part(FileSlot::Document.form_field(), file_part(document).await?)
            .part(FileSlot::Spreadsheet.form_field(), file_part(spreadsheet).await?);

        tracing::info!(url, document = %document.name(), spreadsheet = %spreadsheet.name(), "upload");
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        into_reply(response).await
    }

    async fn process(&self, url: &str, request: &ProcessRequest) -> pdf_ai_common::Result<HttpReply> {
        tracing::info!(url, pdf_path = %request.pdf_path, "process");
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        into_reply(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        let file = LocalFile { path: PathBuf::from("/tmp/Rapport.PDF") };
        assert_eq!(file.name(), "Rapport.PDF");
        assert_eq!(file.mime_type(), "application/pdf");

        let file = LocalFile { path: PathBuf::from("ancien.xls") };
        assert_eq!(file.mime_type(), "application/vnd.ms-excel");
    }

    #[test]
    fn test_drop_slot() {
        let pdf = LocalFile { path: PathBuf::from("scan/Facture.PDF") };
        assert_eq!(pdf.drop_slot(), Some(FileSlot::Document));
        let csv = LocalFile { path: PathBuf::from("export.csv") };
        assert_eq!(csv.drop_slot(), None);
    }

    #[test]
    fn test_open_missing_file() {
        let err = LocalFile::open("/nonexistent/pdf-ai/facture.pdf").unwrap_err();
        assert!(matches!(err, PdfAiError::FileNotFound(_)));
    }
}
