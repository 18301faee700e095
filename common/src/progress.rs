//! 進捗表示のモデル

/// アップロード開始時
pub const UPLOAD_STARTED: u8 = 10;
/// アップロード完了・AI処理開始時
pub const UPLOAD_DONE: u8 = 30;
/// 処理完了時
pub const PROCESS_DONE: u8 = 100;

pub const UPLOAD_STARTED_TEXT: &str = "Upload des fichiers...";
pub const UPLOAD_DONE_TEXT: &str = "Conversion PDF en images...";
pub const PROCESS_DONE_TEXT: &str = "Traitement terminé!";

/// 進捗バーの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    pub visible: bool,
    pub percent: u8,
    pub status: String,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            visible: false,
            percent: 0,
            status: "Traitement en cours...".to_string(),
        }
    }
}

impl ProgressState {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// 割合を更新（100で頭打ち）。テキストが渡された時だけ状態行を置き換える
    pub fn update(&mut self, percent: u8, status: Option<&str>) {
        self.percent = percent.min(100);
        if let Some(text) = status {
            self.status = text.to_string();
        }
    }

    /// `width: N%` 形式
    pub fn width_style(&self) -> String {
        format!("width: {}%", self.percent)
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}
