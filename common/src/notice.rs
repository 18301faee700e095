//! 通知バナーのモデル
//!
//! 新しい通知ほど上に積まれる。自動消去のタイマーはUI側が持ち、
//! ここではIDによる削除だけを提供する。

/// 通知レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertLevel {
    /// Bootstrapのalertクラス名（errorはdanger）
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertLevel::Info => "alert-info",
            AlertLevel::Success => "alert-success",
            AlertLevel::Warning => "alert-warning",
            AlertLevel::Error => "alert-danger",
        }
    }
}

/// 表示要求（IDはスタックが振る）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: AlertLevel,
    pub title: Option<String>,
    pub message: String,
}

impl Notice {
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            title: None,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Warning, message)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// タイトルと本文を1行に
    pub fn text(&self) -> String {
        match &self.title {
            Some(title) => format!("{}: {}", title, self.message),
            None => self.message.clone(),
        }
    }
}

/// 表示中の通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub notice: Notice,
}

/// 通知スタック
#[derive(Debug, Clone, Default)]
pub struct AlertStack {
    next_id: u64,
    alerts: Vec<Alert>,
}

impl AlertStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// 先頭に追加してIDを返す
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.alerts.insert(0, Alert { id, notice });
        id
    }

    /// 手動で閉じた後にタイマーが来ても何もしない
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
