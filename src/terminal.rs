//! 端末への表示（進捗バー・通知・結果カード）

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use pdf_ai_common::{AlertLevel, FileSlot, Notice, ResultCard, View};
use std::cell::RefCell;
use std::fmt::Write as _;
use std::time::Duration;

fn level_icon(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Info => "ℹ",
        AlertLevel::Success => "✔",
        AlertLevel::Warning => "⚠",
        AlertLevel::Error => "✖",
    }
}

/// 結果カードを端末向けテキストに整形
pub fn format_card(card: &ResultCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "── {} [{}]", card.title(), card.badge.text());
    let _ = writeln!(out, "   image: {}", card.image_url);
    for row in &card.rows {
        let marker = if row.detected { " " } else { "-" };
        let _ = writeln!(out, "  {}{}: {}", marker, row.field.label(), row.value);
    }
    if !card.missing_required.is_empty() {
        let labels: Vec<&str> = card.missing_required.iter().map(|f| f.label()).collect();
        let _ = writeln!(out, "   Champs requis manquants : {}", labels.join(", "));
    }
    if let Some(text) = &card.raw_text {
        for line in text.lines() {
            let _ = writeln!(out, "   | {}", line);
        }
    }
    if let Some(error) = &card.error {
        let _ = writeln!(out, "   Erreur: {}", error);
    }
    out
}

pub struct TerminalView {
    bar: ProgressBar,
    cards: RefCell<Vec<ResultCard>>,
    download_url: RefCell<Option<String>>,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            cards: RefCell::new(Vec::new()),
            download_url: RefCell::new(None),
        }
    }

    /// 最後に表示した結果カード
    pub fn cards(&self) -> Vec<ResultCard> {
        self.cards.borrow().clone()
    }

    /// 最後に開いたダウンロードURL
    pub fn download_url(&self) -> Option<String> {
        self.download_url.borrow().clone()
    }

    fn print(&self, line: &str) {
        self.bar.suspend(|| eprintln!("{}", line));
    }
}

#[async_trait(?Send)]
impl View for TerminalView {
    fn notify(&self, notice: Notice) {
        self.print(&format!("{} {}", level_icon(notice.level), notice.text()));
    }

    fn set_slot(&self, slot: FileSlot, file_name: Option<String>) {
        match file_name {
            Some(name) => self.print(&format!("✔ {}: {}", slot.label(), name)),
            None => tracing::debug!(%slot, "slot cleared"),
        }
    }

    fn set_submit_busy(&self, busy: bool) {
        tracing::debug!(busy, "submit state");
    }

    fn show_progress(&self) {
        let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        self.bar.set_style(style);
        self.bar.set_length(100);
        self.bar.set_position(0);
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
    }

    fn hide_progress(&self) {
        self.bar.finish_and_clear();
        self.bar.set_draw_target(ProgressDrawTarget::hidden());
    }

    fn update_progress(&self, percent: u8, status: Option<&str>) {
        self.bar.set_position(u64::from(percent.min(100)));
        if let Some(status) = status {
            self.bar.set_message(status.to_string());
        }
    }

    fn show_results(&self, cards: Vec<ResultCard>) {
        println!("\nRésultats ({} pages)", cards.len());
        for card in &cards {
            print!("{}", format_card(card));
        }
        *self.cards.borrow_mut() = cards;
    }

    fn open_download(&self, url: &str) {
        println!("⬇ {}", url);
        *self.download_url.borrow_mut() = Some(url.to_string());
    }

    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
