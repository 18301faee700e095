use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfAiError {
    #[error("Erreur de configuration: {0}")]
    Config(String),

    #[error("Fichier introuvable: {0}")]
    FileNotFound(String),

    #[error("Fichier non pris en charge pour {slot}: {name}")]
    UnsupportedFile { slot: String, name: String },

    #[error("Échec du traitement: {0}")]
    JobFailed(String),

    #[error("Échec du téléchargement ({status}): {url}")]
    Download { status: u16, url: String },

    #[error("Erreur HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Erreur JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erreur d'E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] pdf_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, PdfAiError>;
