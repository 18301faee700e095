//! アップロードエリアコンポーネント
//!
//! ドロップ領域と、PDF/Excelそれぞれのファイル入力

use leptos::prelude::*;
use pdf_ai_common::FileSlot;
use web_sys::{DragEvent, FileList, HtmlInputElement};

use crate::api::BrowserFile;
use crate::view::input_id;

fn to_files(list: FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile)
        .collect()
}

#[component]
pub fn UploadArea<FD, FC>(
    document_name: ReadSignal<Option<String>>,
    spreadsheet_name: ReadSignal<Option<String>>,
    on_files_dropped: FD,
    on_file_chosen: FC,
) -> impl IntoView
where
    FD: Fn(Vec<BrowserFile>) + 'static + Clone + Send,
    FC: Fn(FileSlot, BrowserFile) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files_dropped(to_files(files));
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    view! {
        <div
            id="uploadArea"
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <div class="upload-icon">"📄"</div>
            <p>"Glissez-déposez votre PDF et votre fichier Excel ici"</p>
            <p class="text-muted">"ou sélectionnez-les ci-dessous"</p>
        </div>

        <div class="row file-inputs">
            <FileInput slot=FileSlot::Document selected=document_name on_file_chosen=on_file_chosen.clone() />
            <FileInput slot=FileSlot::Spreadsheet selected=spreadsheet_name on_file_chosen=on_file_chosen />
        </div>
    }
}

#[component]
fn FileInput<FC>(
    slot: FileSlot,
    selected: ReadSignal<Option<String>>,
    on_file_chosen: FC,
) -> impl IntoView
where
    FC: Fn(FileSlot, BrowserFile) + 'static + Clone + Send,
{
    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_chosen(slot, BrowserFile(file));
        }
    };

    view! {
        <div class="col-md-6 form-group">
            <label for=input_id(slot) class="form-label fw-bold">{slot.label()}</label>
            <input
                type="file"
                class="form-control"
                id=input_id(slot)
                accept=slot.accept_attribute()
                on:change=on_change
            />
            <small class="text-muted">
                {move || selected.get().unwrap_or_else(|| "Aucun fichier sélectionné".to_string())}
            </small>
        </div>
    }
}
