//! アップロードコントローラ
//!
//! UIイベント（ドロップ・ファイル選択・送信・ダウンロード）を受け取り、
//! `/upload` → `/process` の2段階ジョブを進めて結果をViewへ渡す。
//!
//! - Transport: HTTP通信（ブラウザは fetch、CLIは reqwest）
//! - View: 画面への反映（通知・進捗・結果カード・ダウンロード）
//!
//! 単一スレッド前提。セッションは `RefCell` で持ち、`.await` をまたいで借用しない。

use async_trait::async_trait;
use std::cell::{Ref, RefCell};
use std::time::Duration;

use crate::card::{build_cards, ResultCard};
use crate::config::ControllerConfig;
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::notice::Notice;
use crate::parser::{parse_process_response, parse_upload_response, HttpReply};
use crate::progress::{
    PROCESS_DONE, PROCESS_DONE_TEXT, UPLOAD_DONE, UPLOAD_DONE_TEXT, UPLOAD_STARTED,
    UPLOAD_STARTED_TEXT,
};
use crate::session::{JobInput, JobPhase, Session};
use crate::types::{ProcessRequest, ProcessResult};
use crate::validation::{classify_dropped, validate_choice, FileHandle, FileSlot};

/// ジョブ失敗時の通知タイトル
pub const JOB_ERROR_TITLE: &str = "Erreur lors du traitement";

/// ダウンロード対象なし
pub const NOTHING_TO_DOWNLOAD_MESSAGE: &str = "Aucun fichier à télécharger.";

/// HTTP通信
#[async_trait(?Send)]
pub trait Transport {
    type File: FileHandle;

    /// multipart（`pdf_file`, `excel_file`）で送信
    async fn upload(
        &self,
        url: &str,
        document: &Self::File,
        spreadsheet: &Self::File,
    ) -> Result<HttpReply>;

    /// JSONで送信
    async fn process(&self, url: &str, request: &ProcessRequest) -> Result<HttpReply>;
}

/// コントローラが操作する画面
#[async_trait(?Send)]
pub trait View {
    fn notify(&self, notice: Notice);

    /// 枠の表示を更新（Noneなら入力をクリア）
    fn set_slot(&self, slot: FileSlot, file_name: Option<String>);

    /// trueで送信ボタンを無効化して処理中表示、falseで元に戻す
    fn set_submit_busy(&self, busy: bool);

    fn show_progress(&self);

    fn hide_progress(&self);

    fn update_progress(&self, percent: u8, status: Option<&str>);

    /// 結果一覧を差し替えて表示・スクロール
    fn show_results(&self, cards: Vec<ResultCard>);

    /// 新しいブラウザコンテキストでURLを開く
    fn open_download(&self, url: &str);

    /// イベントループを止めずに待つ
    async fn wait(&self, duration: Duration);
}

/// 送信の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobReport {
    /// 入力チェックで中止（通信なし）
    Rejected(String),
    /// 処理中のため無視
    Ignored,
    Completed { pages: usize },
    Failed(String),
}

/// UIイベントの受け口
#[async_trait(?Send)]
pub trait UiEvents<F> {
    /// ドロップされたファイルを振り分け、埋まった枠を返す
    fn on_files_dropped(&self, files: Vec<F>) -> Vec<FileSlot>;

    /// ピッカーでの選択。拡張子不正なら枠をクリアして false
    fn on_file_chosen(&self, slot: FileSlot, file: F) -> bool;

    fn on_prompt_changed(&self, text: &str);

    async fn on_submit(&self) -> JobReport;

    /// 開いたURLを返す（対象なしなら None）
    fn on_download_requested(&self) -> Option<String>;
}

pub struct UploadController<T: Transport, V: View> {
    transport: T,
    view: V,
    config: ControllerConfig,
    endpoints: Endpoints,
    session: RefCell<Session<T::File>>,
}

impl<T: Transport, V: View> UploadController<T, V> {
    pub fn new(transport: T, view: V, config: ControllerConfig) -> Self {
        let endpoints = config.endpoints();
        Self {
            transport,
            view,
            config,
            endpoints,
            session: RefCell::new(Session::default()),
        }
    }

    pub fn session(&self) -> Ref<'_, Session<T::File>> {
        self.session.borrow()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn phase(&self) -> JobPhase {
        self.session.borrow().phase
    }

    fn set_phase(&self, phase: JobPhase) {
        log::debug!("job phase: {:?} -> {:?}", self.session.borrow().phase, phase);
        self.session.borrow_mut().phase = phase;
    }

    fn fill_slot(&self, slot: FileSlot, file: Option<T::File>) {
        let name = file.as_ref().map(FileHandle::name);
        self.session.borrow_mut().selection.set(slot, file);
        self.view.set_slot(slot, name);
    }

    /// アップロード → 処理。失敗したらその場で中断
    async fn run_job(&self, input: &JobInput<T::File>) -> Result<ProcessResult> {
        self.set_phase(JobPhase::Uploading);
        self.view.update_progress(UPLOAD_STARTED, Some(UPLOAD_STARTED_TEXT));

        let reply = self
            .transport
            .upload(&self.endpoints.upload(), &input.document, &input.spreadsheet)
            .await?;
        let paths = parse_upload_response(&reply)?.into_result()?;
        log::info!(
            "uploaded: {} / {}",
            paths.document_path,
            paths.spreadsheet_path
        );
        self.session.borrow_mut().uploaded = Some(paths.clone());

        self.set_phase(JobPhase::Processing);
        self.view.update_progress(UPLOAD_DONE, Some(UPLOAD_DONE_TEXT));

        let request = ProcessRequest::new(&paths, &input.prompt);
        let reply = self
            .transport
            .process(&self.endpoints.process(), &request)
            .await?;
        let result = parse_process_response(&reply)?.into_result()?;
        log::info!(
            "processed: {} page(s), output {}",
            result.results.len(),
            result.output_spreadsheet_path
        );

        self.session.borrow_mut().result = Some(result.clone());
        Ok(result)
    }

    fn finish(&self) {
        self.view.hide_progress();
        self.view.set_submit_busy(false);
        self.set_phase(JobPhase::Idle);
    }
}

#[async_trait(?Send)]
impl<T: Transport, V: View> UiEvents<T::File> for UploadController<T, V> {
    fn on_files_dropped(&self, files: Vec<T::File>) -> Vec<FileSlot> {
        let mut filled = Vec::new();
        for file in files {
            let name = file.name();
            match classify_dropped(&name, &file.mime_type()) {
                Some(slot) => {
                    self.fill_slot(slot, Some(file));
                    if !filled.contains(&slot) {
                        filled.push(slot);
                    }
                }
                None => log::debug!("dropped file ignored: {}", name),
            }
        }
        filled
    }

    fn on_file_chosen(&self, slot: FileSlot, file: T::File) -> bool {
        let name = file.name();
        match validate_choice(slot, &name) {
            Ok(()) => {
                self.fill_slot(slot, Some(file));
                true
            }
            Err(message) => {
                log::debug!("rejected {} for {:?}", name, slot);
                self.fill_slot(slot, None);
                self.view.notify(Notice::error(message));
                false
            }
        }
    }

    fn on_prompt_changed(&self, text: &str) {
        self.session.borrow_mut().selection.prompt_text = text.to_string();
    }

    async fn on_submit(&self) -> JobReport {
        if self.phase().is_busy() {
            log::debug!("submit ignored while {:?}", self.phase());
            return JobReport::Ignored;
        }

        let checked = self.session.borrow().selection.job_input();
        let input = match checked {
            Ok(input) => input,
            Err(e) => {
                let message = e.user_message();
                self.view.notify(Notice::error(message.clone()));
                return JobReport::Rejected(message);
            }
        };

        self.view.set_submit_busy(true);
        self.view.show_progress();

        match self.run_job(&input).await {
            Ok(result) => {
                self.set_phase(JobPhase::Rendering);
                self.view.update_progress(PROCESS_DONE, Some(PROCESS_DONE_TEXT));
                self.view.wait(self.config.completion_delay()).await;

                let cards = build_cards(&result.results, &self.endpoints);
                let pages = cards.len();
                self.view.hide_progress();
                self.view.show_results(cards);
                self.view.set_submit_busy(false);
                self.set_phase(JobPhase::Idle);
                JobReport::Completed { pages }
            }
            Err(e) => {
                let message = e.user_message();
                log::warn!("job failed: {}", message);
                self.view
                    .notify(Notice::error(message.clone()).with_title(JOB_ERROR_TITLE));
                self.finish();
                JobReport::Failed(message)
            }
        }
    }

    fn on_download_requested(&self) -> Option<String> {
        let url = self
            .session
            .borrow()
            .artifact_path()
            .map(|path| self.endpoints.download(path));

        match url {
            Some(url) => {
                self.view.open_download(&url);
                Some(url)
            }
            None => {
                self.view.notify(Notice::error(NOTHING_TO_DOWNLOAD_MESSAGE));
                None
            }
        }
    }
}
