//! コントローラから見た画面（Leptosシグナルへの書き込み）

use std::time::Duration;

use async_trait::async_trait;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pdf_ai_common::{AlertStack, FileSlot, Notice, ProgressState, ResultCard, View};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};

/// 結果エリアのID
pub const RESULTS_CONTAINER_ID: &str = "resultsContainer";

/// ファイル入力のID
pub fn input_id(slot: FileSlot) -> &'static str {
    match slot {
        FileSlot::Document => "pdfFile",
        FileSlot::Spreadsheet => "excelFile",
    }
}

#[derive(Clone, Copy)]
pub struct SignalView {
    pub document_name: WriteSignal<Option<String>>,
    pub spreadsheet_name: WriteSignal<Option<String>>,
    pub busy: WriteSignal<bool>,
    pub progress: WriteSignal<ProgressState>,
    pub alerts: WriteSignal<AlertStack>,
    pub cards: WriteSignal<Vec<ResultCard>>,
    pub results_visible: WriteSignal<bool>,
    pub alert_timeout: Duration,
}

/// gloo タイマー用のミリ秒（u32 に収まらない分は切り詰め）
pub fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

fn scroll_to_results() {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(RESULTS_CONTAINER_ID))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn clear_input(slot: FileSlot) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id(slot)))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value("");
    }
}

#[async_trait(?Send)]
impl View for SignalView {
    fn notify(&self, notice: Notice) {
        let mut id = 0;
        self.alerts.update(|stack| id = stack.push(notice));

        // 5秒後に自動で閉じる（手動で閉じ済みなら何もしない）
        let alerts = self.alerts;
        let timeout = timeout_millis(self.alert_timeout);
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            alerts.try_update(|stack| stack.dismiss(id));
        });
    }

    fn set_slot(&self, slot: FileSlot, file_name: Option<String>) {
        if file_name.is_none() {
            clear_input(slot);
        }
        match slot {
            FileSlot::Document => self.document_name.set(file_name),
            FileSlot::Spreadsheet => self.spreadsheet_name.set(file_name),
        }
    }

    fn set_submit_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn show_progress(&self) {
        self.progress.update(|p| p.show());
    }

    fn hide_progress(&self) {
        self.progress.update(|p| p.hide());
    }

    fn update_progress(&self, percent: u8, status: Option<&str>) {
        self.progress.update(|p| p.update(percent, status));
    }

    fn show_results(&self, cards: Vec<ResultCard>) {
        self.cards.set(cards);
        self.results_visible.set(true);
        request_animation_frame(scroll_to_results);
    }

    fn open_download(&self, url: &str) {
        let opened = web_sys::window().and_then(|w| w.open_with_url_and_target(url, "_blank").ok());
        if opened.flatten().is_none() {
            log::warn!("popup blocked: {}", url);
        }
    }

    async fn wait(&self, duration: Duration) {
        TimeoutFuture::new(timeout_millis(duration)).await;
    }
}
