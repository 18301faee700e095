//! メインアプリケーションコンポーネント

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use pdf_ai_common::{
    AlertStack, ControllerConfig, FileSlot, ProgressState, ResultCard, UiEvents, UploadController,
};

use crate::api::{BrowserFile, FetchTransport};
use crate::components::{
    action_buttons::ActionButtons, alerts::Alerts, header::Header, progress_bar::ProgressBar,
    prompt_panel::PromptPanel, result_list::ResultList, upload_area::UploadArea,
};
use crate::view::SignalView;

type Controller = UploadController<FetchTransport, SignalView>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 画面状態
    let (document_name, set_document_name) = signal(None::<String>);
    let (spreadsheet_name, set_spreadsheet_name) = signal(None::<String>);
    let (prompt, set_prompt) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (progress, set_progress) = signal(ProgressState::default());
    let (alerts, set_alerts) = signal(AlertStack::new());
    let (cards, set_cards) = signal(Vec::<ResultCard>::new());
    let (results_visible, set_results_visible) = signal(false);

    let config = ControllerConfig::default();
    let view = SignalView {
        document_name: set_document_name,
        spreadsheet_name: set_spreadsheet_name,
        busy: set_busy,
        progress: set_progress,
        alerts: set_alerts,
        cards: set_cards,
        results_visible: set_results_visible,
        alert_timeout: config.alert_timeout(),
    };

    // コントローラはこのコンポーネントが所有する
    let controller: StoredValue<Rc<Controller>, LocalStorage> =
        StoredValue::new_local(Rc::new(UploadController::new(FetchTransport, view, config)));

    let on_files_dropped = move |files: Vec<BrowserFile>| {
        controller.with_value(|c| {
            c.on_files_dropped(files);
        });
    };

    let on_file_chosen = move |slot: FileSlot, file: BrowserFile| {
        controller.with_value(|c| {
            c.on_file_chosen(slot, file);
        });
    };

    let on_prompt_changed = move |text: String| {
        controller.with_value(|c| c.on_prompt_changed(&text));
        set_prompt.set(text);
    };

    let on_submit = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            let report = controller.on_submit().await;
            log::debug!("submit finished: {:?}", report);
        });
    };

    let on_download = move |_| {
        controller.with_value(|c| {
            c.on_download_requested();
        });
    };

    let on_dismiss = move |id: u64| {
        set_alerts.update(|stack| {
            stack.dismiss(id);
        });
    };

    view! {
        <div class="container main-container">
            <Alerts alerts=alerts on_dismiss=on_dismiss />

            <Header />

            <UploadArea
                document_name=document_name
                spreadsheet_name=spreadsheet_name
                on_files_dropped=on_files_dropped
                on_file_chosen=on_file_chosen
            />

            <PromptPanel prompt=prompt on_prompt_changed=on_prompt_changed />

            <Show when=move || progress.get().visible>
                <ProgressBar progress=progress />
            </Show>

            <ActionButtons
                busy=busy
                has_artifact=Signal::derive(move || results_visible.get())
                on_submit=on_submit
                on_download=on_download
            />

            <ResultList cards=cards visible=results_visible />
        </div>
    }
}
