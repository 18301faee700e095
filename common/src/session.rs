//! 1セッション分のクライアント状態
//!
//! 選択中のファイルとプロンプト、直近ジョブのアップロード先と結果を保持する。
//! 保持するのは常に最新ジョブの結果だけ。

use crate::error::{Error, Result};
use crate::types::{ProcessResult, UploadedPaths};
use crate::validation::{FileHandle, FileSlot};

pub const MISSING_FILES_MESSAGE: &str = "Veuillez sélectionner un fichier PDF et un fichier Excel.";
pub const EMPTY_PROMPT_MESSAGE: &str = "Veuillez saisir un prompt d'analyse.";

/// 送信ボタンの状態遷移
///
/// Idle → Uploading → Processing → Rendering → Idle（成功）
/// Idle → Uploading|Processing → Idle（失敗）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobPhase {
    #[default]
    Idle,
    Uploading,
    Processing,
    Rendering,
}

impl JobPhase {
    pub fn is_busy(&self) -> bool {
        *self != JobPhase::Idle
    }
}

/// 選択状態
#[derive(Debug, Clone)]
pub struct SelectionState<F> {
    pub document_file: Option<F>,
    pub spreadsheet_file: Option<F>,
    pub prompt_text: String,
}

impl<F> Default for SelectionState<F> {
    fn default() -> Self {
        Self {
            document_file: None,
            spreadsheet_file: None,
            prompt_text: String::new(),
        }
    }
}

/// 送信前チェックを通った1ジョブ分の入力
#[derive(Debug, Clone)]
pub struct JobInput<F> {
    pub document: F,
    pub spreadsheet: F,
    pub prompt: String,
}

impl<F: FileHandle> SelectionState<F> {
    pub fn slot(&self, slot: FileSlot) -> Option<&F> {
        match slot {
            FileSlot::Document => self.document_file.as_ref(),
            FileSlot::Spreadsheet => self.spreadsheet_file.as_ref(),
        }
    }

    /// 枠を上書き（Noneでクリア）
    pub fn set(&mut self, slot: FileSlot, file: Option<F>) {
        match slot {
            FileSlot::Document => self.document_file = file,
            FileSlot::Spreadsheet => self.spreadsheet_file = file,
        }
    }

    /// 送信前チェック
    ///
    /// 両方のファイルと空白以外のプロンプトが必要。
    /// プロンプトは入力されたまま（trimせず）送る。
    pub fn job_input(&self) -> Result<JobInput<F>> {
        let (Some(document), Some(spreadsheet)) = (&self.document_file, &self.spreadsheet_file)
        else {
            return Err(Error::Validation(MISSING_FILES_MESSAGE.to_string()));
        };

        if self.prompt_text.trim().is_empty() {
            return Err(Error::Validation(EMPTY_PROMPT_MESSAGE.to_string()));
        }

        Ok(JobInput {
            document: document.clone(),
            spreadsheet: spreadsheet.clone(),
            prompt: self.prompt_text.clone(),
        })
    }
}

/// コントローラが所有するセッション
#[derive(Debug, Clone)]
pub struct Session<F> {
    pub selection: SelectionState<F>,
    pub uploaded: Option<UploadedPaths>,
    pub result: Option<ProcessResult>,
    pub phase: JobPhase,
}

impl<F> Default for Session<F> {
    fn default() -> Self {
        Self {
            selection: SelectionState::default(),
            uploaded: None,
            result: None,
            phase: JobPhase::Idle,
        }
    }
}

impl<F> Session<F> {
    /// ダウンロード可能な出力パス
    pub fn artifact_path(&self) -> Option<&str> {
        self.result
            .as_ref()
            .map(|r| r.output_spreadsheet_path.as_str())
            .filter(|p| !p.is_empty())
    }
}
