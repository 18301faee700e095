//! HTTP通信の結合テスト
//!
//! モックサーバーに対して upload → process → download を実際に流す

use mockito::Matcher;
use pdf_ai_common::{ControllerConfig, FileSlot, JobReport, UiEvents, UploadController};
use pdf_ai_rust::terminal::TerminalView;
use pdf_ai_rust::transport::{HttpTransport, LocalFile};
use serde_json::json;
use tempfile::tempdir;

const UPLOAD_OK: &str =
    r#"{"success": true, "pdf_path": "uploads/facture.pdf", "excel_path": "uploads/modele.xlsx"}"#;

const PROCESS_OK: &str = r#"{
    "success": true,
    "output_excel": "outputs/resultat_20240101.xlsx",
    "results": [
        {"page": 1, "image_path": "images/facture_page_1.png",
         "ai_result": {"success": true, "content": {"type_document": "Facture", "date": "01/01/2024", "montant": "120,00"}}},
        {"page": 2, "image_path": "images/facture_page_2.png",
         "ai_result": {"success": false, "error": "image illisible"}}
    ]
}"#;

fn write_inputs(dir: &std::path::Path) -> (LocalFile, LocalFile) {
    let pdf = dir.join("facture.pdf");
    let excel = dir.join("modele.xlsx");
    std::fs::write(&pdf, "%PDF-1.4 test").unwrap();
    std::fs::write(&excel, "feuille").unwrap();
    (LocalFile::open(&pdf).unwrap(), LocalFile::open(&excel).unwrap())
}

fn controller(base_url: &str) -> UploadController<HttpTransport, TerminalView> {
    let config = ControllerConfig {
        base_url: base_url.to_string(),
        completion_delay_ms: 0,
        ..Default::default()
    };
    UploadController::new(HttpTransport::new(), TerminalView::new(), config)
}

#[tokio::test]
async fn test_full_job_against_server() {
    let mut server = mockito::Server::new_async().await;
    let upload = server
        .mock("POST", "/upload")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="pdf_file"; filename="facture.pdf""#.into()),
            Matcher::Regex(r#"name="excel_file"; filename="modele.xlsx""#.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(UPLOAD_OK)
        .create_async()
        .await;
    let process = server
        .mock("POST", "/process")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "pdf_path": "uploads/facture.pdf",
            "excel_path": "uploads/modele.xlsx",
            "prompt": "Extraire le montant"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PROCESS_OK)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let (pdf, excel) = write_inputs(dir.path());
    let controller = controller(&server.url());
    assert!(controller.on_file_chosen(FileSlot::Document, pdf));
    assert!(controller.on_file_chosen(FileSlot::Spreadsheet, excel));
    controller.on_prompt_changed("Extraire le montant");

    let report = controller.on_submit().await;
    assert_eq!(report, JobReport::Completed { pages: 2 });
    upload.assert_async().await;
    process.assert_async().await;

    let cards = controller.view().cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].badge.text(), "Succès");
    assert_eq!(cards[1].error.as_deref(), Some("image illisible"));
    assert_eq!(
        cards[0].image_url,
        format!("{}/images/facture_page_1.png", server.url())
    );
}

#[tokio::test]
async fn test_upload_error_stops_before_process() {
    let mut server = mockito::Server::new_async().await;
    let upload = server
        .mock("POST", "/upload")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": false, "error": "Type de fichier non autorisé"}"#)
        .create_async()
        .await;
    let process = server.mock("POST", "/process").expect(0).create_async().await;

    let dir = tempdir().unwrap();
    let (pdf, excel) = write_inputs(dir.path());
    let controller = controller(&server.url());
    controller.on_file_chosen(FileSlot::Document, pdf);
    controller.on_file_chosen(FileSlot::Spreadsheet, excel);
    controller.on_prompt_changed("Analyse");

    let report = controller.on_submit().await;
    assert_eq!(report, JobReport::Failed("Type de fichier non autorisé".into()));
    upload.assert_async().await;
    process.assert_async().await;
    assert!(controller.session().result.is_none());
}

#[tokio::test]
async fn test_html_error_page_uses_fallback_message() {
    let mut server = mockito::Server::new_async().await;
    let _upload = server
        .mock("POST", "/upload")
        .with_status(500)
        .with_body("<html>Internal Server Error</html>")
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let (pdf, excel) = write_inputs(dir.path());
    let controller = controller(&server.url());
    controller.on_file_chosen(FileSlot::Document, pdf);
    controller.on_file_chosen(FileSlot::Spreadsheet, excel);
    controller.on_prompt_changed("Analyse");

    let report = controller.on_submit().await;
    assert_eq!(report, JobReport::Failed("Erreur lors de l'upload".into()));
}

#[tokio::test]
async fn test_download_saves_generated_file() {
    let mut server = mockito::Server::new_async().await;
    let _download = server
        .mock("GET", "/download/resultat_20240101.xlsx")
        .with_status(200)
        .with_body("xlsx-bytes")
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let dest = dir.path().join("sortie").join("resultat.xlsx");
    let url = format!("{}/download/resultat_20240101.xlsx", server.url());

    let written = HttpTransport::new().download(&url, &dest).await.unwrap();
    assert_eq!(written, 10);
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "xlsx-bytes");
}

#[tokio::test]
async fn test_download_missing_file_is_error() {
    let mut server = mockito::Server::new_async().await;
    let _download = server
        .mock("GET", "/download/absent.xlsx")
        .with_status(404)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let url = format!("{}/download/absent.xlsx", server.url());
    let err = HttpTransport::new()
        .download(&url, &dir.path().join("absent.xlsx"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        pdf_ai_rust::error::PdfAiError::Download { status: 404, .. }
    ));
}
